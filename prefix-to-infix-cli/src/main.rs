use anyhow::{bail, Context, Result};
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use log::{debug, info};
use prefix_to_infix::interpreter::lexer::tokenize;
use prefix_to_infix::interpreter::parser::{Parser as ExpressionParser, DEFAULT_MAX_DEPTH};
use std::io;

/// Rewrites an expression like `add(mul(2,3),4)` in infix notation
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    /// The expression to rewrite. A single line is read from standard input when omitted
    expression: Option<String>,

    /// How deeply function calls may nest
    #[clap(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Print the parsed expression tree to standard error
    #[clap(long)]
    tree: bool,

    /// Print the tokens of the expression to standard error
    #[clap(long)]
    tokens: bool,

    #[clap(flatten)]
    verbose: Verbosity,
}

fn main() -> Result<()> {
    let args = Arguments::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let expression = match args.expression {
        Some(expression) => expression,
        None => read_expression()?,
    };
    debug!("expression {:?}", expression);

    if args.tokens {
        for token in tokenize(&expression) {
            eprintln!("{}", token);
        }
    }

    let mut parser = ExpressionParser::with_max_depth(&expression, args.max_depth);
    let tree = parser
        .parse()
        .with_context(|| format!("could not rewrite {:?}", expression))?;
    info!("parsed {} nodes", tree.node_count());

    if args.tree {
        eprint!("{}", tree);
    }

    println!("{}", tree.to_infix());
    Ok(())
}

/// Reads one line from standard input, without its line ending.
fn read_expression() -> Result<String> {
    let mut line = String::new();
    let read = io::stdin()
        .read_line(&mut line)
        .context("No input or read error")?;
    if read == 0 {
        bail!("No input or read error");
    }

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}
