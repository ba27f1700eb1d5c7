use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(about = "A lexical scanner for arithmetic expressions")]
pub struct Options {
    #[command(subcommand)]
    pub operation: Operation,
    /// Increase logging verbosity (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Subcommand)]
pub enum Operation {
    /// Print the token stream of a file
    Tokens { file: String },
    /// Check a file for lexical errors
    Check { file: String },
}

impl Operation {
    /// The input file, where `-` stands for standard input.
    pub fn file(&self) -> &str {
        match self {
            Operation::Tokens { file } | Operation::Check { file } => file,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tokens_operation() {
        let options = Options::try_parse_from(["arith-scan", "tokens", "input.txt"]).unwrap();

        assert_eq!(options.verbose, 0);
        assert!(matches!(options.operation, Operation::Tokens { .. }));
        assert_eq!(options.operation.file(), "input.txt");
    }

    #[test]
    fn counts_verbosity_flags() {
        let options = Options::try_parse_from(["arith-scan", "-vv", "check", "-"]).unwrap();

        assert_eq!(options.verbose, 2);
        assert!(matches!(options.operation, Operation::Check { .. }));
        assert_eq!(options.operation.file(), "-");
    }

    #[test]
    fn requires_an_operation() {
        assert!(Options::try_parse_from(["arith-scan"]).is_err());
    }
}
