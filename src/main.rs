use std::fs;

use clap::Parser;
use formulary::{
    calculator::{Calculator, Variable},
    error::ExpressionError,
    variant::{TypeSafeVariantOperations, Variant},
};
use tracing_subscriber::EnvFilter;

/// formulary evaluates expressions such as `Max(a, 2) * 3` from the command
/// line.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells formulary to read the expression from a file.
    #[arg(short, long)]
    file: bool,

    /// Defines a variable as NAME=VALUE. Values are read as integers,
    /// decimals, booleans, or else strings.
    #[arg(short, long = "var", value_name = "NAME=VALUE", value_parser = parse_definition)]
    vars: Vec<(String, Variant)>,

    /// Only allows lossless numeric conversions between operand types.
    #[arg(short, long)]
    strict: bool,

    /// Prints the compiled instruction list before the result.
    #[arg(short, long)]
    tokens: bool,

    contents: String,
}

fn main() {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
                             .with_writer(std::io::stderr)
                             .init();

    let args = Args::parse();

    let source = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents.clone()
    };

    match run(&args, &source) {
        Ok(value) => println!("{value}"),
        Err(e) => {
            eprintln!("{}: {e}", e.code());
            std::process::exit(1);
        },
    }
}

fn run(args: &Args, source: &str) -> Result<Variant, ExpressionError> {
    let mut calculator = Calculator::new();
    if args.strict {
        calculator.set_variant_operations(TypeSafeVariantOperations);
    }

    for (name, value) in &args.vars {
        calculator.default_variables_mut()
                  .add(Variable::new(name.as_str(), value.clone()));
    }

    calculator.set_expression(source)?;

    if args.tokens {
        for token in calculator.result_tokens() {
            println!("{token}");
        }
    }

    Ok(calculator.evaluate()?)
}

fn parse_definition(s: &str) -> Result<(String, Variant), String> {
    let Some((name, value)) = s.split_once('=') else {
        return Err(format!("invalid variable \"{s}\": expected NAME=VALUE"));
    };
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("invalid variable \"{s}\": the name is empty"));
    }
    Ok((name.to_string(), parse_value(value.trim())))
}

fn parse_value(text: &str) -> Variant {
    if let Ok(value) = text.parse::<i32>() {
        return Variant::Integer(value);
    }
    if let Ok(value) = text.parse::<i64>() {
        return Variant::Long(value);
    }
    if let Ok(value) = text.parse::<f64>() {
        return Variant::Double(value);
    }
    if let Ok(value) = text.parse::<bool>() {
        return Variant::Boolean(value);
    }
    Variant::from(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn definitions_need_a_name_and_an_equals_sign() {
        assert_eq!(parse_definition("x=5").unwrap(), ("x".to_string(), Variant::Integer(5)));
        assert_eq!(parse_definition(" rate = 0.5 ").unwrap(), ("rate".to_string(), Variant::Double(0.5)));
        assert_eq!(parse_definition("s=").unwrap(), ("s".to_string(), Variant::from("")));
        assert!(parse_definition("x").is_err());
        assert!(parse_definition("=1").is_err());
    }

    #[test]
    fn a_bare_name_is_rejected_on_the_command_line() {
        assert!(Args::try_parse_from(["formulary", "--var", "x", "x + 1"]).is_err());

        let args = Args::try_parse_from(["formulary", "-v", "x=2", "x + 1"]).unwrap();
        assert_eq!(run(&args, &args.contents).unwrap(), Variant::Integer(3));
    }
}
