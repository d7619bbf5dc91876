//! Line-oriented prompt: reads an expression, asks for each variable it
//! needs, and prints the result.

use crate::ast::{Evaluator, Expression, SymbolValues};
use log::debug;
use std::io::{self, BufRead, Write};

enum Values {
    Complete(SymbolValues),
    Rejected,
    EndOfInput,
}

/// Runs the prompt until `input` is exhausted.
pub fn run<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<()> {
    let mut evaluator = Evaluator::default();

    while let Some(line) = prompt(input, output, "Input expression:")? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let tree = match evaluator.parse_expression(line) {
            Ok(tree) => tree,
            Err(err) => {
                writeln!(output, "Error during parsing: {}", err)?;
                continue;
            }
        };
        writeln!(output, "Parsed as: {}", tree)?;

        let values = match read_values(&tree, input, output)? {
            Values::Complete(values) => values,
            Values::Rejected => continue,
            Values::EndOfInput => break,
        };

        match tree.calculate(&values) {
            Ok(result) => writeln!(output, "Evaluation result: {}", result)?,
            Err(err) => writeln!(output, "Evaluation error: {}", err)?,
        }
    }

    Ok(())
}

fn read_values<R: BufRead, W: Write>(
    tree: &Expression,
    input: &mut R,
    output: &mut W,
) -> io::Result<Values> {
    let mut values = SymbolValues::new();
    let symbols = tree.required_variables();
    if !symbols.is_empty() {
        writeln!(output, "Values required for evaluation...")?;
    }

    for symbol in symbols {
        let Some(line) = prompt(input, output, &format!("{} =", symbol))? else {
            return Ok(Values::EndOfInput);
        };
        let text = line.trim();
        match text.parse::<f64>() {
            Ok(value) if value.is_finite() => {
                debug!("{} = {}", symbol, value);
                values.insert(symbol, value);
            }
            _ => {
                writeln!(output, "invalid float: {}", text)?;
                return Ok(Values::Rejected);
            }
        }
    }

    Ok(Values::Complete(values))
}

/// Prints `text` and reads one line. `None` at end of input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    text: &str,
) -> io::Result<Option<String>> {
    write!(output, "{} ", text)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}
