use algebra_expression_rs::{
    evaluate_expression, parse_expression, BuildError, ConversionError, Error, EvalError,
    ParseError, SymbolValues,
};

fn calculate(expr: &str) -> Result<f64, Error> {
    evaluate_expression(expr, &SymbolValues::new())
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_operator_precedence() {
    assert_eq!(calculate("2 + 3 * 4"), Ok(14.0));
    assert_eq!(calculate("(2 + 3) * 4"), Ok(20.0));
    assert_eq!(calculate("2 * 3 ^ 2"), Ok(18.0));
    assert_eq!(calculate("8 / 2 * 4"), Ok(16.0));
}

#[test]
fn test_left_associativity() {
    assert_eq!(calculate("10 - 3 - 2"), Ok(5.0));
    assert_eq!(calculate("64 / 4 / 2"), Ok(8.0));
    assert_eq!(calculate("2 ^ 3 ^ 2"), Ok(64.0));
}

#[test]
fn test_unary_minus_disambiguation() {
    assert_eq!(calculate("-3 + 4"), Ok(1.0));
    assert_eq!(calculate("3 - -4"), Ok(7.0));
    assert_eq!(calculate("3-4"), Ok(-1.0));
    assert_eq!(calculate("2 * (-3)"), Ok(-6.0));
    assert_eq!(calculate("- -4"), Ok(4.0));
    assert_eq!(calculate("-sqrt(4)"), Ok(-2.0));
}

#[test]
fn test_unary_minus_binds_tighter_than_power() {
    assert_eq!(calculate("-2 ^ 2"), Ok(4.0));
    assert_eq!(calculate("-(2 ^ 2)"), Ok(-4.0));
}

#[test]
fn test_variable_extraction() {
    let tree = parse_expression("x + y * x").unwrap();
    assert_eq!(tree.required_variables(), vec!["x", "y"]);

    let tree = parse_expression("sqrt(b) - a log b").unwrap();
    assert_eq!(tree.required_variables(), vec!["b", "a"]);

    assert!(parse_expression("1 + 2").unwrap().required_variables().is_empty());
}

#[test]
fn test_missing_variable() {
    assert_eq!(
        calculate("x"),
        Err(Error::Eval(EvalError::SymbolNotFound("x".to_string())))
    );
}

#[test]
fn test_variables_are_supplied_at_evaluation() {
    let tree = parse_expression("rate * hours - fee").unwrap();
    let values = SymbolValues::from([
        ("rate".to_string(), 12.5),
        ("hours".to_string(), 8.0),
        ("fee".to_string(), 20.0),
    ]);
    assert_eq!(tree.calculate(&values), Ok(80.0));
}

#[test]
fn test_unmatched_parentheses() {
    assert_eq!(
        parse_expression("(1 + 2"),
        Err(ParseError::Conversion(ConversionError::UnclosedOpenParen))
    );
    assert_eq!(
        parse_expression("1 + 2)"),
        Err(ParseError::Conversion(ConversionError::UnmatchedCloseParen))
    );
}

#[test]
fn test_function_application() {
    assert_eq!(calculate("sqrt(16)"), Ok(4.0));
    assert_eq!(
        calculate("sqrt(-1)"),
        Err(Error::Eval(EvalError::NegativeSquareRoot(-1.0)))
    );
    assert_close(calculate("sin(0)").unwrap(), 0.0);
    assert_close(calculate("cos(0)").unwrap(), 1.0);
    assert_close(calculate("tan(1)").unwrap(), 1f64.tan());
    assert_close(calculate("8 log 2").unwrap(), 3.0);
    assert_close(calculate("2 * sin(0.5) * cos(0.5)").unwrap(), 1f64.sin());
}

#[test]
fn test_division_and_logarithm_domain() {
    assert_eq!(
        calculate("1 / 0"),
        Err(Error::Eval(EvalError::DivisionByZero { dividend: 1.0 }))
    );
    assert_eq!(
        calculate("1 / (2 - 2)"),
        Err(Error::Eval(EvalError::DivisionByZero { dividend: 1.0 }))
    );
    assert_eq!(
        calculate("0 log 2"),
        Err(Error::Eval(EvalError::LogarithmDomain {
            argument: 0.0,
            base: 2.0
        }))
    );
    assert_eq!(
        calculate("8 log 1"),
        Err(Error::Eval(EvalError::LogarithmDomain {
            argument: 8.0,
            base: 1.0
        }))
    );
}

#[test]
fn test_build_errors() {
    assert_eq!(
        parse_expression("2 x"),
        Err(ParseError::Build(BuildError::InvalidStackLength(2)))
    );
    assert!(matches!(
        parse_expression("* 2"),
        Err(ParseError::Build(BuildError::MissingLeftOperand { .. }))
    ));
    assert!(matches!(
        parse_expression("sqrt"),
        Err(ParseError::Build(BuildError::MissingOperand { .. }))
    ));
}

#[test]
fn test_deep_nesting_is_rejected() {
    let deep = format!("{}1", "-".repeat(20_000));
    assert!(matches!(
        parse_expression(&deep),
        Err(ParseError::Build(BuildError::TooDeep(_)))
    ));

    let sum = vec!["1"; 5_000].join(" + ");
    assert!(matches!(
        parse_expression(&sum),
        Err(ParseError::Build(BuildError::TooDeep(_)))
    ));
}

#[test]
fn test_moderate_nesting_is_evaluated() {
    let negations = format!("{}1", "-".repeat(1_000));
    assert_eq!(calculate(&negations), Ok(1.0));

    // Parentheses do not add tree levels.
    let parens = format!("{}7{}", "(".repeat(20_000), ")".repeat(20_000));
    assert_eq!(calculate(&parens), Ok(7.0));

    let tree = parse_expression(&negations).unwrap();
    assert_eq!(parse_expression(&tree.render()), Ok(tree));
}

#[test]
fn test_idempotent_rendering() {
    let tree = parse_expression("x+2*-y^sqrt(z)").unwrap();
    assert_eq!(tree.render(), tree.render());
    assert_eq!(tree.render(), "(x + (2 * (-y ^ sqrt(z))))");
}

#[test]
fn test_render_ignores_source_spacing() {
    let compact = parse_expression("(a+b)*c").unwrap();
    let spaced = parse_expression("  ( a +  b ) *  c ").unwrap();
    assert_eq!(compact, spaced);
    assert_eq!(compact.render(), "((a + b) * c)");
}

#[test]
fn test_failed_parse_can_be_retried() {
    assert!(parse_expression("(x").is_err());
    assert!(parse_expression("(x").is_err());
    assert!(parse_expression("(x)").is_ok());
}

#[test]
fn test_tree_shared_across_threads() {
    let tree = parse_expression("x * 2 + 1").unwrap();
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let tree = &tree;
                scope.spawn(move || {
                    let values = SymbolValues::from([("x".to_string(), i as f64)]);
                    tree.calculate(&values)
                })
            })
            .collect();
        for (i, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.join().unwrap(), Ok(i as f64 * 2.0 + 1.0));
        }
    });
}

#[test]
fn test_agrees_with_meval() {
    for expr in [
        "2 + 3 * 4",
        "(2 + 3) * 4",
        "10 - 3 - 2",
        "-3 + 4",
        "(10 + 20) * 3 / (4 - 1) + 5",
        "sqrt(16) + sin(0.5) * cos(0.25)",
        "tan(1) / 7",
        "1.5 * (2.25 - 0.75)",
    ] {
        let ours = calculate(expr).unwrap();
        let theirs = meval::eval_str(expr).unwrap();
        assert!(
            (ours - theirs).abs() < 1e-9,
            "{expr}: {ours} != {theirs}"
        );
    }
}
