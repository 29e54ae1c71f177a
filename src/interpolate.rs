//! Placeholder interpolation.
//!
//! Replaces bind placeholders in a logged or copied SQL string with literal
//! values so the statement can be run by hand.
//!
//! | Style     | Token        | Matching                          |
//! |-----------|--------------|-----------------------------------|
//! | Question  | `?`          | left to right, one param per `?`  |
//! | SqlServer | `@p0`, `@p1` | by index, highest index first     |
//! | Oracle    | `:1`, `:2`   | by index, highest index first     |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::QstmtError;
use crate::parser::split_lines;

/// How placeholders appear in the SQL text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaceholderStyle {
    /// JDBC `?`
    #[default]
    Question,
    /// `@p0`, `@p1`, ...
    SqlServer,
    /// `:1`, `:2`, ...
    Oracle,
}

impl PlaceholderStyle {
    /// Token for the zero-based parameter `index`, or `None` for positional `?`.
    pub fn token(&self, index: usize) -> Option<String> {
        match self {
            PlaceholderStyle::Question => None,
            PlaceholderStyle::SqlServer => Some(format!("@p{}", index)),
            PlaceholderStyle::Oracle => Some(format!(":{}", index + 1)),
        }
    }
}

impl fmt::Display for PlaceholderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaceholderStyle::Question => write!(f, "question"),
            PlaceholderStyle::SqlServer => write!(f, "sqlserver"),
            PlaceholderStyle::Oracle => write!(f, "oracle"),
        }
    }
}

impl FromStr for PlaceholderStyle {
    type Err = QstmtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "question" | "jdbc" | "?" => Ok(PlaceholderStyle::Question),
            "sqlserver" | "mssql" | "@p" => Ok(PlaceholderStyle::SqlServer),
            "oracle" | ":" => Ok(PlaceholderStyle::Oracle),
            _ => Err(QstmtError::invalid(
                "placeholder style",
                s,
                "question, sqlserver, oracle",
            )),
        }
    }
}

/// Parse parameters, one per line.
pub fn parse_parameters(input: &str) -> Vec<String> {
    split_lines(input)
}

/// Substitute parameter values for placeholders in `sql`.
///
/// Placeholder and parameter counts need not agree: unmatched placeholders
/// stay in place and surplus parameters are ignored.
pub fn interpolate_query<S: AsRef<str>>(
    sql: &str,
    params: &[S],
    style: PlaceholderStyle,
    add_quotes: bool,
) -> String {
    let wrap = |val: &str| {
        if add_quotes {
            format!("'{}'", val)
        } else {
            val.to_string()
        }
    };

    match style {
        PlaceholderStyle::Question => replace_question_marks(sql, params, wrap),
        PlaceholderStyle::SqlServer | PlaceholderStyle::Oracle => {
            replace_indexed(sql, params, style, wrap)
        }
    }
}

/// Single left-to-right pass; each `?` takes the next unused parameter.
fn replace_question_marks<S: AsRef<str>>(
    sql: &str,
    params: &[S],
    wrap: impl Fn(&str) -> String,
) -> String {
    let mut remaining = params.iter();
    let mut result = String::with_capacity(sql.len());

    for c in sql.chars() {
        if c == '?' {
            match remaining.next() {
                Some(p) => result.push_str(&wrap(p.as_ref())),
                None => result.push('?'),
            }
        } else {
            result.push(c);
        }
    }

    result
}

/// Whole-token literal replacement, highest index first so `:1` never
/// matches inside `:10`.
fn replace_indexed<S: AsRef<str>>(
    sql: &str,
    params: &[S],
    style: PlaceholderStyle,
    wrap: impl Fn(&str) -> String,
) -> String {
    let mut result = sql.to_string();

    for (i, param) in params.iter().enumerate().rev() {
        if let Some(token) = style.token(i) {
            result = result.replace(&token, &wrap(param.as_ref()));
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_marks() {
        let sql = interpolate_query(
            "SELECT * FROM t WHERE a=? AND b=?",
            &["1", "x"],
            PlaceholderStyle::Question,
            true,
        );
        assert_eq!(sql, "SELECT * FROM t WHERE a='1' AND b='x'");
    }

    #[test]
    fn test_question_marks_exhausted() {
        let sql = interpolate_query("a=? b=? c=?", &["1"], PlaceholderStyle::Question, false);
        assert_eq!(sql, "a=1 b=? c=?");
    }

    #[test]
    fn test_question_mark_inside_value_is_not_rescanned() {
        let sql = interpolate_query("a=? b=?", &["?", "2"], PlaceholderStyle::Question, false);
        assert_eq!(sql, "a=? b=2");
    }

    #[test]
    fn test_surplus_params_ignored() {
        let sql = interpolate_query("a=?", &["1", "2", "3"], PlaceholderStyle::Question, false);
        assert_eq!(sql, "a=1");
    }

    #[test]
    fn test_sqlserver_indexed() {
        let sql = interpolate_query(
            "UPDATE t SET a=@p0 WHERE id=@p1 OR parent=@p1",
            &["x", "7"],
            PlaceholderStyle::SqlServer,
            false,
        );
        assert_eq!(sql, "UPDATE t SET a=x WHERE id=7 OR parent=7");
    }

    #[test]
    fn test_oracle_descending_order() {
        let params: Vec<String> = (1..=11).map(|i| format!("v{}", i)).collect();
        let sql = interpolate_query("a=:1 j=:10 k=:11", &params, PlaceholderStyle::Oracle, true);
        assert_eq!(sql, "a='v1' j='v10' k='v11'");
    }

    #[test]
    fn test_empty_params_leave_sql_unchanged() {
        let params: Vec<String> = Vec::new();
        for style in [
            PlaceholderStyle::Question,
            PlaceholderStyle::SqlServer,
            PlaceholderStyle::Oracle,
        ] {
            assert_eq!(interpolate_query("a=? b=@p0 c=:1", &params, style, true), "a=? b=@p0 c=:1");
        }
    }

    #[test]
    fn test_dollar_in_value_is_literal() {
        let sql = interpolate_query("a=@p0", &["$&$1"], PlaceholderStyle::SqlServer, false);
        assert_eq!(sql, "a=$&$1");
    }

    #[test]
    fn test_style_tokens() {
        assert_eq!(PlaceholderStyle::SqlServer.token(0).as_deref(), Some("@p0"));
        assert_eq!(PlaceholderStyle::Oracle.token(0).as_deref(), Some(":1"));
        assert_eq!(PlaceholderStyle::Question.token(0), None);
    }

    #[test]
    fn test_parse_parameters() {
        assert_eq!(parse_parameters("1\r\n\r\n  x y \n"), vec!["1", "x y"]);
    }
}
