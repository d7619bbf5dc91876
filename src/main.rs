use algebra_expression_rs::shell;
use std::io;

fn main() -> io::Result<()> {
    pretty_env_logger::init();

    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();
    shell::run(&mut input, &mut output)
}
