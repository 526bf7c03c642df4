use clap::Parser;
use std::path::PathBuf;
use thiserror::Error;

use crate::dictionary::DEFAULT_DICTIONARY_PATH;
use crate::filter::{ValidationError, WordFilter, parse_constraints};

/// Finds dictionary words that can be formed from a set of letters
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Letters to build words from (positional form)
    #[arg(value_name = "LETTERS")]
    pub letters: Option<String>,

    /// Letters to build words from (flag form)
    #[arg(short = 'w', long = "word", value_name = "LETTERS")]
    pub word: Option<String>,

    /// Only report words of exactly this length
    #[arg(short = 'l', long = "length", value_name = "N")]
    pub length: Option<usize>,

    /// Path to a newline-delimited CP1251 word list
    #[arg(short = 'i', long = "input", value_name = "PATH", default_value = DEFAULT_DICTIONARY_PATH)]
    pub dictionary_path: PathBuf,

    /// Positional constraints, each <letter>=<1-based position> (e.g. п=1)
    #[arg(value_name = "LETTER=POS")]
    pub constraints: Vec<String>,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

#[derive(Debug, Error)]
pub enum UsageError {
    #[error("letters were supplied both positionally and via -w/--word; pass exactly one")]
    LettersGivenTwice,
    #[error("no letters supplied; pass them positionally or via -w/--word")]
    LettersMissing,
    #[error(transparent)]
    Constraint(#[from] ValidationError),
}

/// Everything one run needs after argument resolution.
#[derive(Debug)]
pub struct Request {
    pub letters: String,
    pub dictionary_path: PathBuf,
    pub filter: WordFilter,
}

impl Cli {
    /// Resolves the two letters sources and classifies free arguments:
    /// anything containing `=` is a constraint token, anything else is a
    /// letters candidate. clap cannot tell the two apart, so the first
    /// positional may actually hold a constraint when -w is used.
    pub fn into_request(self) -> Result<Request, UsageError> {
        let from_flag = self.word.is_some();
        let mut letters = self.word;
        let mut tokens: Vec<String> = Vec::new();
        for arg in self.letters.into_iter().chain(self.constraints) {
            if arg.contains('=') {
                tokens.push(arg);
            } else if from_flag {
                return Err(UsageError::LettersGivenTwice);
            } else if letters.is_some() {
                // A second bare argument can only be a constraint attempt;
                // let the parser report it by name
                tokens.push(arg);
            } else {
                letters = Some(arg);
            }
        }
        let letters = letters.ok_or(UsageError::LettersMissing)?;
        let positions = parse_constraints(&tokens)?;
        Ok(Request {
            letters,
            dictionary_path: self.dictionary_path,
            filter: WordFilter::new(self.length, positions),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).expect("arguments should parse")
    }

    #[test]
    fn test_positional_letters_with_constraints() {
        let cli = parse(&["slovolov", "окст", "к=1", "-l", "4"]);
        let request = cli.into_request().unwrap();
        assert_eq!(request.letters, "окст");
        assert_eq!(request.filter.length, Some(4));
        assert_eq!(request.filter.positions.get(&'к'), Some(&1));
    }

    #[test]
    fn test_flag_letters_with_constraints() {
        // The constraint lands in the positional slot; resolution must
        // reclassify it by shape
        let cli = parse(&["slovolov", "-w", "окст", "к=1", "т=4"]);
        let request = cli.into_request().unwrap();
        assert_eq!(request.letters, "окст");
        assert_eq!(request.filter.positions.get(&'к'), Some(&1));
        assert_eq!(request.filter.positions.get(&'т'), Some(&4));
    }

    #[test]
    fn test_both_letters_sources_is_usage_error() {
        let cli = parse(&["slovolov", "-w", "окст", "абвг"]);
        assert!(matches!(
            cli.into_request(),
            Err(UsageError::LettersGivenTwice)
        ));
    }

    #[test]
    fn test_missing_letters_is_usage_error() {
        let cli = parse(&["slovolov"]);
        assert!(matches!(cli.into_request(), Err(UsageError::LettersMissing)));
    }

    #[test]
    fn test_stray_bare_argument_is_reported_as_bad_constraint() {
        let cli = parse(&["slovolov", "окст", "мусор"]);
        match cli.into_request() {
            Err(UsageError::Constraint(e)) => assert_eq!(e.token, "мусор"),
            other => panic!("expected constraint error, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_constraint_aborts_resolution() {
        let cli = parse(&["slovolov", "окст", "ab=3"]);
        match cli.into_request() {
            Err(UsageError::Constraint(e)) => assert_eq!(e.token, "ab=3"),
            other => panic!("expected constraint error, got {other:?}"),
        }
    }

    #[test]
    fn test_default_dictionary_path() {
        let cli = parse(&["slovolov", "окст"]);
        assert_eq!(
            cli.dictionary_path,
            PathBuf::from(DEFAULT_DICTIONARY_PATH)
        );
    }

    #[test]
    fn test_custom_dictionary_path() {
        let cli = parse(&["slovolov", "окст", "-i", "custom.txt"]);
        let request = cli.into_request().unwrap();
        assert_eq!(request.dictionary_path, PathBuf::from("custom.txt"));
    }
}
