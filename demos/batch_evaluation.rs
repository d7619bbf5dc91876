use algebra_expression_rs::{Evaluator, SymbolValues};

fn main() {
    pretty_env_logger::init();

    let contexts: Vec<SymbolValues> = (0..8)
        .map(|i| {
            SymbolValues::from([
                ("price".to_string(), 100.0 + i as f64),
                ("volume".to_string(), (i % 3) as f64),
            ])
        })
        .collect();

    let expression = "price / volume";

    let mut evaluator = Evaluator::new(16);
    let results = evaluator.evaluate_batch(expression, &contexts).unwrap();
    for (i, result) in results.iter().enumerate() {
        println!("Result {}: {:?}", i, result);
    }
}
