//! # qstmt — quick statements for hand-written SQL
//!
//! Four small, independent text transformations:
//!
//! | Tool          | Input                  | Output                             |
//! |---------------|------------------------|------------------------------------|
//! | `in_clause`   | one value per line     | `IN ('a', 'b')`, Oracle-chunked    |
//! | `crud`        | table + column list    | SELECT / INSERT / UPDATE / DELETE  |
//! | `mapper`      | identifier list        | `user_id` <=> `UserId`, C# props   |
//! | `interpolate` | SQL + parameter values | SQL with `?`, `@pN`, `:N` replaced |
//!
//! Every tool is a `parse_*` function that normalises pasted text followed by
//! a pure transformation. Nothing here performs I/O except [`config`].
//!
//! ## Quick Example
//!
//! ```
//! use qstmt::prelude::*;
//!
//! let values = parse_input_values("a\nb\n");
//! assert_eq!(generate_in_clause(&values, &InClauseOptions::default()), "IN ('a', 'b')");
//!
//! let sql = interpolate_query("id = ?", &["42"], PlaceholderStyle::Question, false);
//! assert_eq!(sql, "id = 42");
//! ```

pub mod config;
pub mod crud;
pub mod error;
pub mod in_clause;
pub mod interpolate;
pub mod mapper;
pub mod parser;

pub mod prelude {
    pub use crate::config::Config;
    pub use crate::crud::{ParamStyle, QueryType, generate_crud, parse_columns};
    pub use crate::error::*;
    pub use crate::in_clause::{InClauseOptions, Separator, generate_in_clause, parse_input_values};
    pub use crate::interpolate::{PlaceholderStyle, interpolate_query, parse_parameters};
    pub use crate::mapper::{
        CaseDirection, DataType, MapperOptions, generate_property, map_names, parse_names,
        pascal_to_snake, snake_to_pascal,
    };
}
