use std::io::{self, BufRead, Write};

use crate::{evaluate, evaluate_strict};

pub const DEFAULT_PROMPT: &str = "> ";

#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    pub prompt: String,
    /// Reject input left over after the expression instead of ignoring it.
    pub strict: bool,
    /// Also render the full miette report of every error on stderr.
    pub diagnostics: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            strict: false,
            diagnostics: false,
        }
    }
}

/// Reads one expression per line until `quit` or end of input, printing
/// `Result: <value>` or `Error: <message>` for each.
pub fn run<R, W>(input: R, output: &mut W, options: &Options) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut lines = input.lines();

    loop {
        write!(output, "{}", options.prompt)?;
        output.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed.eq_ignore_ascii_case("quit") {
            break;
        }

        // Positions in diagnostics count from the line as typed.
        let result = if options.strict {
            evaluate_strict(&line)
        } else {
            evaluate(&line)
        };

        match result {
            Ok(value) => writeln!(output, "Result: {value}")?,
            Err(err) => {
                writeln!(output, "Error: {err}")?;
                if options.diagnostics {
                    let report = miette::Report::new(err).with_source_code(line.clone());
                    eprintln!("{report:?}");
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(input: &str, options: &Options) -> String {
        let mut output = Vec::new();
        run(input.as_bytes(), &mut output, options).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_results_and_errors() {
        let output = session("2*3\n5/0\nNOT 0\n", &Options::default());
        assert_eq!(
            output,
            "> Result: 6.0\n> Error: division by zero\n> Result: true\n> "
        );
    }

    #[test]
    fn test_quit_is_case_insensitive() {
        let output = session("  QuIt  \n2*3\n", &Options::default());
        assert_eq!(output, "> ");
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let output = session("\n   \n10%3\n", &Options::default());
        assert_eq!(output, "> > > Result: 1.0\n> ");
    }

    #[test]
    fn test_custom_prompt() {
        let options = Options {
            prompt: "calc> ".to_string(),
            ..Options::default()
        };
        let output = session("10/4\nquit\n", &options);
        assert_eq!(output, "calc> Result: 2.5\ncalc> ");
    }

    #[test]
    fn test_strict_mode() {
        let output = session("2+3\n", &Options::default());
        assert_eq!(output, "> Result: 2.0\n> ");

        let options = Options {
            strict: true,
            ..Options::default()
        };
        let output = session("2+3\n", &options);
        assert_eq!(
            output,
            "> Error: unexpected PLUS after the end of the expression\n> "
        );
    }

    #[test]
    fn test_columns_count_leading_whitespace() {
        let output = session("   2 * !\n", &Options::default());
        assert_eq!(
            output,
            "> Error: unexpected character ! at line 1, column 8\n> "
        );
    }

    #[test]
    fn test_scanning_error_message() {
        let output = session("1 = 2\n", &Options::default());
        assert_eq!(
            output,
            "> Error: unexpected character = at line 1, column 3\n> "
        );
    }
}
