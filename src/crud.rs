//! CRUD statement templates.
//!
//! Generates editable boilerplate for one table. Each template puts one
//! column per line so the output can be pasted and trimmed by hand.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::QstmtError;
use crate::parser::split_words;

/// Substituted when the table name is blank.
pub const TABLE_PLACEHOLDER: &str = "[TABLE_NAME]";

const INDENT: &str = "    ";
const COLUMN_JOIN: &str = ",\n    ";

/// Statement to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryType {
    #[default]
    Select,
    Insert,
    Update,
    Delete,
}

impl QueryType {
    pub const ALL: [QueryType; 4] = [
        QueryType::Select,
        QueryType::Insert,
        QueryType::Update,
        QueryType::Delete,
    ];
}

impl fmt::Display for QueryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryType::Select => write!(f, "SELECT"),
            QueryType::Insert => write!(f, "INSERT"),
            QueryType::Update => write!(f, "UPDATE"),
            QueryType::Delete => write!(f, "DELETE"),
        }
    }
}

impl FromStr for QueryType {
    type Err = QstmtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "SELECT" => Ok(QueryType::Select),
            "INSERT" => Ok(QueryType::Insert),
            "UPDATE" => Ok(QueryType::Update),
            "DELETE" => Ok(QueryType::Delete),
            _ => Err(QstmtError::invalid(
                "query type",
                s,
                "SELECT, INSERT, UPDATE, DELETE",
            )),
        }
    }
}

/// Bind-variable prefix style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamStyle {
    /// `@name`
    #[default]
    SqlServer,
    /// `:name`
    Oracle,
}

impl ParamStyle {
    pub fn prefix(&self) -> char {
        match self {
            ParamStyle::SqlServer => '@',
            ParamStyle::Oracle => ':',
        }
    }
}

impl fmt::Display for ParamStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamStyle::SqlServer => write!(f, "sqlserver"),
            ParamStyle::Oracle => write!(f, "oracle"),
        }
    }
}

impl FromStr for ParamStyle {
    type Err = QstmtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sqlserver" | "mssql" | "@" => Ok(ParamStyle::SqlServer),
            "oracle" | ":" => Ok(ParamStyle::Oracle),
            _ => Err(QstmtError::invalid("parameter style", s, "sqlserver, oracle")),
        }
    }
}

/// Parse column input into column names. Duplicates are kept.
pub fn parse_columns(input: &str) -> Vec<String> {
    split_words(input)
}

/// Generate a CRUD statement for `table_name`.
pub fn generate_crud<S: AsRef<str>>(
    table_name: &str,
    columns: &[S],
    query_type: QueryType,
    param_style: ParamStyle,
) -> String {
    let table = match table_name.trim() {
        "" => TABLE_PLACEHOLDER,
        t => t,
    };
    let columns: Vec<&str> = columns.iter().map(|c| c.as_ref()).collect();
    let prefix = param_style.prefix();

    match query_type {
        QueryType::Select => to_select_sql(table, &columns),
        QueryType::Insert => to_insert_sql(table, &columns, prefix),
        QueryType::Update => to_update_sql(table, &columns, prefix),
        QueryType::Delete => to_delete_sql(table),
    }
}

fn to_select_sql(table: &str, columns: &[&str]) -> String {
    format!(
        "SELECT\n{INDENT}{}\nFROM {table}\nWHERE 1=1",
        columns.join(COLUMN_JOIN)
    )
}

fn to_insert_sql(table: &str, columns: &[&str], prefix: char) -> String {
    let params: Vec<String> = columns.iter().map(|c| format!("{prefix}{c}")).collect();
    format!(
        "INSERT INTO {table} (\n{INDENT}{}\n) VALUES (\n{INDENT}{}\n)",
        columns.join(COLUMN_JOIN),
        params.join(COLUMN_JOIN)
    )
}

fn to_update_sql(table: &str, columns: &[&str], prefix: char) -> String {
    let set_clauses: Vec<String> = columns
        .iter()
        .map(|c| format!("{INDENT}{c} = {prefix}{c}"))
        .collect();
    format!(
        "UPDATE {table}\nSET\n{}\nWHERE [condition]",
        set_clauses.join(",\n")
    )
}

fn to_delete_sql(table: &str) -> String {
    format!("DELETE FROM {table}\nWHERE [condition]")
}
