use algebra_expression_rs::{parse_expression, SymbolValues};

fn main() {
    pretty_env_logger::init();

    let expression = "sqrt(x ^ 2 + y ^ 2)";
    let tree = parse_expression(expression).expect("Failed to parse");
    println!("Parsed as: {}", tree);
    println!("Requires: {:?}", tree.required_variables());

    for (x, y) in [(3.0, 4.0), (5.0, 12.0), (8.0, 15.0)] {
        let context = SymbolValues::from([("x".to_string(), x), ("y".to_string(), y)]);
        match tree.calculate(&context) {
            Ok(result) => println!("x = {}, y = {}: {}", x, y, result),
            Err(err) => println!("Error: {}", err),
        }
    }
}
