use clap::{Args, Parser, Subcommand};
use miette::{IntoDiagnostic, WrapErr};
use scalc::{evaluate, evaluate_strict, repl, Lexer};
use std::fs;
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Read and evaluate expressions line by line until `quit`.
    Repl(ReplArgs),
    /// Evaluate a single expression.
    Eval {
        #[arg(allow_hyphen_values = true)]
        expression: String,
        /// Fail when input remains after the expression.
        #[arg(long)]
        strict: bool,
    },
    /// Print the tokens of a file.
    Tokenize { filename: PathBuf },
}

#[derive(Args, Debug)]
struct ReplArgs {
    #[arg(long, default_value = repl::DEFAULT_PROMPT)]
    prompt: String,
    /// Fail when input remains after the expression.
    #[arg(long)]
    strict: bool,
    /// Render a full diagnostic for every error on stderr.
    #[arg(long)]
    diagnostics: bool,
}

impl From<ReplArgs> for repl::Options {
    fn from(args: ReplArgs) -> Self {
        Self {
            prompt: args.prompt,
            strict: args.strict,
            diagnostics: args.diagnostics,
        }
    }
}

fn run_repl(options: &repl::Options) -> miette::Result<()> {
    repl::run(io::stdin().lock(), &mut io::stdout(), options)
        .into_diagnostic()
        .wrap_err("reading from stdin failed")
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        None => run_repl(&repl::Options::default())?,
        Some(Commands::Repl(args)) => run_repl(&repl::Options::from(args))?,
        Some(Commands::Eval { expression, strict }) => {
            let result = if strict {
                evaluate_strict(&expression)
            } else {
                evaluate(&expression)
            };
            let value = result
                .map_err(|err| miette::Report::new(err).with_source_code(expression.clone()))?;
            println!("{value}");
        }
        Some(Commands::Tokenize { filename }) => {
            let file_contents = fs::read_to_string(&filename)
                .into_diagnostic()
                .wrap_err_with(|| format!("reading '{}' failed", filename.display()))?;

            for token in Lexer::new(&file_contents) {
                match token {
                    Ok(token) => println!("{token}"),
                    Err(err) => {
                        return Err(miette::Report::new(err).with_source_code(file_contents.clone()))
                    }
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repl_options(args: &[&str]) -> repl::Options {
        match Cli::parse_from(args).command {
            Some(Commands::Repl(args)) => args.into(),
            other => panic!("expected the repl subcommand, got {other:?}"),
        }
    }

    #[test]
    fn test_repl_defaults() {
        assert_eq!(repl_options(&["scalc", "repl"]), repl::Options::default());
    }

    #[test]
    fn test_repl_flags() {
        let options = repl_options(&["scalc", "repl", "--prompt", "calc> ", "--strict"]);
        assert_eq!(options.prompt, "calc> ");
        assert!(options.strict);
        assert!(!options.diagnostics);
    }
}
