use algebra_expression_rs::{evaluate_expression, SymbolValues};
use log::debug;

fn main() {
    pretty_env_logger::init();

    let context = SymbolValues::from([("x".to_string(), 2.0), ("angle".to_string(), 0.5)]);

    for expr in [
        "2 + 3 * 4",
        "(2 + 3) * 4",
        "10 - 3 - 2",
        "-3 + 4",
        "3 - -4",
        "8 log x",
        "sin(angle) ^ 2 + cos(angle) ^ 2",
        "sqrt(-1)",
        "1 / (x - 2)",
        "y + 1",
        "(1 + 2",
    ] {
        debug!("evaluating {expr}");
        match evaluate_expression(expr, &context) {
            Ok(result) => println!("{expr} = {result}"),
            Err(err) => println!("{expr}: {err}"),
        }
    }
}
