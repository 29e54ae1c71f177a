//! Identifier case mapping between snake_case and PascalCase, with optional
//! C# property output.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::QstmtError;
use crate::parser::split_words;

/// Which way to convert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CaseDirection {
    /// `user_id` => `UserId`
    #[default]
    ToPascal,
    /// `UserId` => `user_id`
    ToSnake,
}

impl CaseDirection {
    pub fn apply(&self, name: &str) -> String {
        match self {
            CaseDirection::ToPascal => snake_to_pascal(name),
            CaseDirection::ToSnake => pascal_to_snake(name),
        }
    }
}

impl fmt::Display for CaseDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseDirection::ToPascal => write!(f, "to-pascal"),
            CaseDirection::ToSnake => write!(f, "to-snake"),
        }
    }
}

impl FromStr for CaseDirection {
    type Err = QstmtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "to-pascal" | "pascal" => Ok(CaseDirection::ToPascal),
            "to-snake" | "snake" => Ok(CaseDirection::ToSnake),
            _ => Err(QstmtError::invalid("case direction", s, "to-pascal, to-snake")),
        }
    }
}

/// C# types offered for property generation.
///
/// Advisory only: [`generate_property`] accepts any type name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataType {
    #[default]
    String,
    Int,
    Long,
    Decimal,
    Double,
    Bool,
    DateTime,
    Guid,
    Object,
}

impl DataType {
    pub const ALL: [DataType; 9] = [
        DataType::String,
        DataType::Int,
        DataType::Long,
        DataType::Decimal,
        DataType::Double,
        DataType::Bool,
        DataType::DateTime,
        DataType::Guid,
        DataType::Object,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::String => "string",
            DataType::Int => "int",
            DataType::Long => "long",
            DataType::Decimal => "decimal",
            DataType::Double => "double",
            DataType::Bool => "bool",
            DataType::DateTime => "DateTime",
            DataType::Guid => "Guid",
            DataType::Object => "object",
        }
    }

    /// Look up a type by its exact C# spelling.
    pub fn lookup(name: &str) -> Option<DataType> {
        Self::ALL.into_iter().find(|t| t.as_str() == name)
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options for [`map_names`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MapperOptions {
    pub direction: CaseDirection,
    /// Wrap each converted name in a property of this type.
    pub property: Option<String>,
}

/// Parse input into variable names.
pub fn parse_names(input: &str) -> Vec<String> {
    split_words(input)
}

/// Convert snake_case to PascalCase.
///
/// Empty segments are dropped, so leading, trailing and doubled underscores
/// disappear: `user_id` => `UserId`, `CREATED_AT` => `CreatedAt`.
pub fn snake_to_pascal(snake: &str) -> String {
    snake
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    let mut out: String = first.to_uppercase().collect();
                    out.push_str(&chars.as_str().to_lowercase());
                    out
                }
                None => String::new(),
            }
        })
        .collect()
}

/// Convert PascalCase to snake_case.
///
/// Every ASCII capital gets an underscore, so acronyms split per letter:
/// `UserId` => `user_id`, `ID` => `i_d`.
pub fn pascal_to_snake(pascal: &str) -> String {
    let mut marked = String::with_capacity(pascal.len() + 4);
    for c in pascal.chars() {
        if c.is_ascii_uppercase() {
            marked.push('_');
        }
        marked.push(c);
    }
    marked
        .strip_prefix('_')
        .unwrap_or(&marked)
        .to_lowercase()
}

/// Generate a C# auto-property declaration.
pub fn generate_property(name: &str, data_type: &str) -> String {
    format!("public {} {} {{ get; set; }}", data_type, name)
}

/// Convert every name, optionally as properties, one result per line.
pub fn map_names<S: AsRef<str>>(names: &[S], options: &MapperOptions) -> String {
    names
        .iter()
        .map(|name| {
            let converted = options.direction.apply(name.as_ref());
            match &options.property {
                Some(data_type) => generate_property(&converted, data_type),
                None => converted,
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
