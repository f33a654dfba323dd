use std::process::ExitCode;

use clap::Parser;
use equate::{EquationCompiler, NumericConvention};
use tracing_subscriber::fmt;

/// equate evaluates arithmetic and boolean formulas, e.g.
/// `equate "if(a > b; a; b) * 2" --var a=3 --var b=4`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The formula to evaluate. Function arguments are separated by `;`.
    expression: String,

    /// Assigns a variable before evaluation, as `NAME=VALUE`. May be
    /// repeated.
    #[arg(long = "var", value_name = "NAME=VALUE", value_parser = parse_binding)]
    vars: Vec<(String, f64)>,

    /// Decimal separator for numeric literals in the formula.
    #[arg(long, default_value_t = '.', requires = "group")]
    decimal: char,

    /// Group separator for numeric literals in the formula.
    #[arg(long, default_value_t = ',', requires = "decimal")]
    group: char,

    /// Prints the compiled tree, fully parenthesized, before the result.
    #[arg(short, long)]
    tree: bool,

    /// Logs compilation steps to stderr.
    #[arg(short, long)]
    verbose: bool,
}

/// Splits a `NAME=VALUE` command-line binding.
fn parse_binding(binding: &str) -> Result<(String, f64), String> {
    let (name, value) = binding.split_once('=')
                               .ok_or_else(|| format!("expected NAME=VALUE, got '{binding}'"))?;
    let value = value.trim()
                     .parse::<f64>()
                     .map_err(|e| format!("invalid value for '{name}': {e}"))?;
    Ok((name.trim().to_string(), value))
}

fn main() -> ExitCode {
    let args = Args::parse();

    if args.verbose {
        fmt().with_max_level(tracing::Level::TRACE)
             .with_writer(std::io::stderr)
             .init();
    }

    let convention = match NumericConvention::new(args.decimal, args.group) {
        Ok(convention) => convention,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        },
    };

    let mut compiler = EquationCompiler::builder().expression(args.expression)
                                                  .convention(convention)
                                                  .build();
    for (name, value) in &args.vars {
        compiler.set_variable(name, *value);
    }

    if let Err(e) = compiler.compile() {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    if args.tree && let Some(tree) = compiler.tree() {
        println!("{tree}");
    }

    match compiler.calculate() {
        Ok(value) => {
            println!("{value}");
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}
