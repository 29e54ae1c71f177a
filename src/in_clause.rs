//! IN-clause generation.
//!
//! Turns a pasted column of values into `IN (...)`, optionally chunked for
//! Oracle's 1000-item IN-list cap:
//!
//! ```text
//! IN ('v1', ..., 'v1000')
//! OR column IN ('v1001', ...)
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::QstmtError;
use crate::parser::split_lines;

/// Oracle rejects IN-lists longer than this.
pub const ORACLE_IN_CLAUSE_LIMIT: usize = 1000;

/// Column name used on continuation lines of a split IN-clause.
pub const SPLIT_COLUMN: &str = "column";

/// Joiner between rendered values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Separator {
    #[default]
    Comma,
    Pipe,
}

impl Separator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Separator::Comma => ", ",
            Separator::Pipe => " | ",
        }
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Separator::Comma => write!(f, "comma"),
            Separator::Pipe => write!(f, "pipe"),
        }
    }
}

impl FromStr for Separator {
    type Err = QstmtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "comma" | "," => Ok(Separator::Comma),
            "pipe" | "|" => Ok(Separator::Pipe),
            _ => Err(QstmtError::invalid("separator", s, "comma, pipe")),
        }
    }
}

/// Rendering options for [`generate_in_clause`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InClauseOptions {
    /// Wrap each value in single quotes. Embedded quotes are not escaped.
    pub add_quotes: bool,
    pub separator: Separator,
    /// Split into chunks of [`ORACLE_IN_CLAUSE_LIMIT`] joined with `OR column IN`.
    pub oracle_split: bool,
}

impl Default for InClauseOptions {
    fn default() -> Self {
        Self {
            add_quotes: true,
            separator: Separator::Comma,
            oracle_split: false,
        }
    }
}

/// Parse pasted text into trimmed, non-empty values, one per line.
pub fn parse_input_values(input: &str) -> Vec<String> {
    split_lines(input)
}

/// Generate an IN clause from the given values.
///
/// An empty list renders as `IN ()`; callers decide whether that is an error.
pub fn generate_in_clause<S: AsRef<str>>(values: &[S], options: &InClauseOptions) -> String {
    let sep = options.separator.as_str();

    let formatted: Vec<String> = values
        .iter()
        .map(|v| {
            let v = v.as_ref();
            if options.add_quotes {
                format!("'{}'", v)
            } else {
                v.to_string()
            }
        })
        .collect();

    if options.oracle_split && formatted.len() > ORACLE_IN_CLAUSE_LIMIT {
        return formatted
            .chunks(ORACLE_IN_CLAUSE_LIMIT)
            .enumerate()
            .map(|(i, chunk)| {
                if i == 0 {
                    format!("IN ({})", chunk.join(sep))
                } else {
                    format!("OR {} IN ({})", SPLIT_COLUMN, chunk.join(sep))
                }
            })
            .collect::<Vec<_>>()
            .join("\n");
    }

    format!("IN ({})", formatted.join(sep))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(add_quotes: bool, separator: Separator, oracle_split: bool) -> InClauseOptions {
        InClauseOptions {
            add_quotes,
            separator,
            oracle_split,
        }
    }

    #[test]
    fn test_quoted_comma() {
        let values = parse_input_values("a\nb\r\nc");
        assert_eq!(
            generate_in_clause(&values, &InClauseOptions::default()),
            "IN ('a', 'b', 'c')"
        );
    }

    #[test]
    fn test_unquoted_pipe() {
        let values = ["1", "2", "3"];
        assert_eq!(
            generate_in_clause(&values, &opts(false, Separator::Pipe, false)),
            "IN (1 | 2 | 3)"
        );
    }

    #[test]
    fn test_no_escaping_of_quotes() {
        let values = ["O'Brien"];
        assert_eq!(
            generate_in_clause(&values, &InClauseOptions::default()),
            "IN ('O'Brien')"
        );
    }

    #[test]
    fn test_empty_values() {
        let values: Vec<String> = Vec::new();
        assert_eq!(generate_in_clause(&values, &InClauseOptions::default()), "IN ()");
    }

    #[test]
    fn test_oracle_split_at_limit_stays_single() {
        let values: Vec<String> = (0..ORACLE_IN_CLAUSE_LIMIT).map(|i| i.to_string()).collect();
        let sql = generate_in_clause(&values, &opts(false, Separator::Comma, true));
        assert_eq!(sql.lines().count(), 1);
        assert!(sql.starts_with("IN (0, 1, "));
    }

    #[test]
    fn test_oracle_split_three_chunks() {
        let values: Vec<String> = (0..2001).map(|i| i.to_string()).collect();
        let sql = generate_in_clause(&values, &opts(false, Separator::Comma, true));
        let lines: Vec<&str> = sql.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("IN (0, "));
        assert!(lines[1].starts_with("OR column IN (1000, "));
        assert_eq!(lines[2], "OR column IN (2000)");
    }

    #[test]
    fn test_split_disabled_ignores_limit() {
        let values: Vec<String> = (0..1500).map(|i| i.to_string()).collect();
        let sql = generate_in_clause(&values, &opts(false, Separator::Comma, false));
        assert_eq!(sql.lines().count(), 1);
    }

    #[test]
    fn test_separator_from_str() {
        assert_eq!("PIPE".parse::<Separator>().unwrap(), Separator::Pipe);
        assert_eq!(",".parse::<Separator>().unwrap(), Separator::Comma);
        assert!("semicolon".parse::<Separator>().is_err());
    }
}
