//! qstmt — quick statements CLI
//!
//! # Usage
//!
//! ```bash
//! # IN clause from a file of ids, split for Oracle
//! qstmt in -i ids.txt --no-quotes --oracle-split
//!
//! # INSERT template
//! qstmt crud -t users "id, name, email" --type insert --style oracle
//!
//! # snake_case => C# properties
//! qstmt case "user_id created_at" --property DateTime
//!
//! # Inline logged parameters
//! qstmt interp "SELECT * FROM t WHERE a=? AND b=?" -p 1 -p x
//! ```

use std::io::{IsTerminal, Read};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use qstmt::config::MapperConfig;
use qstmt::prelude::*;
use serde::Serialize;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "qstmt")]
#[command(version)]
#[command(about = "Quick statements for hand-written SQL", long_about = None)]
#[command(after_help = "EXAMPLES:
    qstmt in -i ids.txt --oracle-split
    qstmt crud -t users 'id name email' --type update
    qstmt case 'UserId CreatedAt' --to-snake
    qstmt interp 'WHERE id = :1' --style oracle -p 42")]
struct Cli {
    /// Config file (defaults to ./qstmt.toml, then the user config dir)
    #[arg(long, global = true, env = "QSTMT_CONFIG")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Build an IN clause from one value per line
    In {
        /// Values, one per line (reads stdin when omitted)
        values: Option<String>,

        /// Read values from a file
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Wrap values in single quotes
        #[arg(long, overrides_with = "no_quotes")]
        quotes: bool,

        /// Use values verbatim
        #[arg(long, overrides_with = "quotes")]
        no_quotes: bool,

        /// Value separator: comma or pipe
        #[arg(short, long)]
        separator: Option<Separator>,

        /// Shorthand for --separator pipe
        #[arg(long, conflicts_with = "separator")]
        pipe: bool,

        /// Split into chunks of 1000 joined with OR
        #[arg(long, overrides_with = "no_oracle_split")]
        oracle_split: bool,

        /// Keep a single IN list even if the config enables splitting
        #[arg(long, overrides_with = "oracle_split")]
        no_oracle_split: bool,
    },
    /// Generate a SELECT/INSERT/UPDATE/DELETE template
    Crud {
        /// Column names separated by whitespace or commas
        columns: Option<String>,

        /// Read columns from a file
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Table name
        #[arg(short, long, default_value = "")]
        table: String,

        /// Statement type
        #[arg(short = 'q', long = "type")]
        query_type: Option<QueryType>,

        /// Bind prefix: sqlserver (@) or oracle (:)
        #[arg(short, long)]
        style: Option<ParamStyle>,
    },
    /// Convert identifiers between snake_case and PascalCase
    Case {
        /// Names separated by whitespace or commas
        names: Option<String>,

        /// Read names from a file
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// snake_case => PascalCase
        #[arg(long, overrides_with = "to_snake")]
        to_pascal: bool,

        /// PascalCase => snake_case
        #[arg(long, overrides_with = "to_pascal")]
        to_snake: bool,

        /// Emit C# properties, optionally with a data type
        #[arg(short, long, num_args = 0..=1)]
        property: Option<Option<String>>,

        /// Emit bare names even if the config asks for properties
        #[arg(long, conflicts_with = "property")]
        no_property: bool,
    },
    /// Replace ?, @pN or :N placeholders with parameter values
    Interp {
        /// SQL text (reads stdin when omitted)
        sql: Option<String>,

        /// Read SQL from a file
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Parameter value, in placeholder order (repeatable)
        #[arg(short, long)]
        param: Vec<String>,

        /// Read parameters from a file, one per line
        #[arg(long, conflicts_with = "param")]
        params_file: Option<PathBuf>,

        /// Placeholder style: question, sqlserver or oracle
        #[arg(short, long)]
        style: Option<PlaceholderStyle>,

        /// Wrap values in single quotes
        #[arg(long, overrides_with = "no_quotes")]
        quotes: bool,

        /// Use values verbatim
        #[arg(long, overrides_with = "quotes")]
        no_quotes: bool,
    },
    /// List the data types offered for property generation
    Types,
}

/// One tool run, as printed.
#[derive(Serialize)]
struct Rendered {
    tool: &'static str,
    count: usize,
    output: String,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "qstmt=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    debug!(?config, "effective config");

    let rendered = match &cli.command {
        Commands::In {
            values,
            input,
            quotes,
            no_quotes,
            separator,
            pipe,
            oracle_split,
            no_oracle_split,
        } => {
            let text = read_input(values.as_deref(), input.as_deref())?;
            let values = require_values(parse_input_values(&text), "No valid data found")?;

            let options = InClauseOptions {
                add_quotes: flag(*quotes, *no_quotes, config.in_clause.add_quotes),
                separator: pick_separator(*separator, *pipe, config.in_clause.separator),
                oracle_split: flag(*oracle_split, *no_oracle_split, config.in_clause.oracle_split),
            };
            debug!(?options, "in clause options");

            info!("Converted {} items", values.len());
            Rendered {
                tool: "in",
                count: values.len(),
                output: generate_in_clause(&values, &options),
            }
        }
        Commands::Crud {
            columns,
            input,
            table,
            query_type,
            style,
        } => {
            let text = read_input(columns.as_deref(), input.as_deref())?;
            let columns = require_values(parse_columns(&text), "No valid column names found")?;
            let query_type = query_type.unwrap_or(config.crud.query_type);
            let style = style.unwrap_or(config.crud.param_style);

            info!("Generated {} query", query_type);
            Rendered {
                tool: "crud",
                count: columns.len(),
                output: generate_crud(table, &columns, query_type, style),
            }
        }
        Commands::Case {
            names,
            input,
            to_pascal,
            to_snake,
            property,
            no_property,
        } => {
            let text = read_input(names.as_deref(), input.as_deref())?;
            let names = require_values(parse_names(&text), "No valid variable names found")?;

            let options = case_options(
                *to_pascal,
                *to_snake,
                property.as_ref(),
                *no_property,
                &config.mapper,
            );
            if let Some(data_type) = &options.property {
                if DataType::lookup(data_type).is_none() {
                    warn!("'{}' is not one of the listed data types", data_type);
                }
            }

            info!("Converted {} names", names.len());
            Rendered {
                tool: "case",
                count: names.len(),
                output: map_names(&names, &options),
            }
        }
        Commands::Interp {
            sql,
            input,
            param,
            params_file,
            style,
            quotes,
            no_quotes,
        } => {
            let sql = read_input(sql.as_deref(), input.as_deref())?;
            if sql.trim().is_empty() {
                return Err(QstmtError::EmptyInput("Please enter SQL query").into());
            }

            let params = match params_file {
                Some(path) => parse_parameters(&read_file(path)?),
                None => parse_parameters(&param.join("\n")),
            };
            let style = style.unwrap_or(config.interpolate.placeholder);
            let add_quotes = flag(*quotes, *no_quotes, config.interpolate.add_quotes);

            info!("Replaced {} parameters", params.len());
            Rendered {
                tool: "interp",
                count: params.len(),
                output: interpolate_query(&sql, &params, style, add_quotes),
            }
        }
        Commands::Types => {
            show_types(&config.mapper.data_type);
            return Ok(());
        }
    };

    print_rendered(&rendered, &cli.format)
}

/// Resolve a `--x` / `--no-x` pair against the configured default.
fn flag(yes: bool, no: bool, default: bool) -> bool {
    match (yes, no) {
        (true, _) => true,
        (_, true) => false,
        _ => default,
    }
}

fn pick_separator(separator: Option<Separator>, pipe: bool, default: Separator) -> Separator {
    match (separator, pipe) {
        (Some(sep), _) => sep,
        (None, true) => Separator::Pipe,
        (None, false) => default,
    }
}

/// Apply `case` flags on top of the `[mapper]` config.
///
/// `--property` without a type falls back to the configured data type.
fn case_options(
    to_pascal: bool,
    to_snake: bool,
    property: Option<&Option<String>>,
    no_property: bool,
    config: &MapperConfig,
) -> MapperOptions {
    let mut options = config.options();
    if to_pascal {
        options.direction = CaseDirection::ToPascal;
    } else if to_snake {
        options.direction = CaseDirection::ToSnake;
    }
    match property {
        Some(Some(data_type)) => options.property = Some(data_type.clone()),
        Some(None) => options.property = Some(config.data_type.clone()),
        None if no_property => options.property = None,
        None => {}
    }
    options
}

fn read_file(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Inline text, else a file, else piped stdin.
fn read_input(text: Option<&str>, file: Option<&Path>) -> anyhow::Result<String> {
    if let Some(text) = text {
        return Ok(text.to_string());
    }
    if let Some(path) = file {
        return read_file(path);
    }

    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Err(QstmtError::EmptyInput("Please enter data (argument, --input or stdin)").into());
    }
    let mut buf = String::new();
    stdin
        .read_to_string(&mut buf)
        .context("Failed to read stdin")?;
    Ok(buf)
}

fn print_rendered(rendered: &Rendered, format: &OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(rendered)?);
        }
        OutputFormat::Text => {
            if std::io::stdout().is_terminal() {
                eprintln!("{}", "Generated SQL:".green().bold());
            }
            println!("{}", rendered.output);
        }
    }
    Ok(())
}

fn show_types(default: &str) {
    println!("{}", "Property data types".cyan().bold());
    println!("{}", "─".repeat(24).dimmed());
    for data_type in DataType::ALL {
        let name = data_type.as_str();
        if name == default {
            println!("  {} {}", name.yellow(), "(default)".dimmed());
        } else {
            println!("  {}", name.white());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapper_config(property: bool) -> MapperConfig {
        MapperConfig {
            direction: CaseDirection::ToSnake,
            property,
            data_type: "long".to_string(),
        }
    }

    #[test]
    fn test_flag_precedence() {
        assert!(flag(true, false, false));
        assert!(!flag(false, true, true));
        assert!(flag(false, false, true));
        assert!(!flag(false, false, false));
    }

    #[test]
    fn test_property_without_type_uses_config_type() {
        let bare = None;
        let options = case_options(false, false, Some(&bare), false, &mapper_config(false));
        assert_eq!(options.property.as_deref(), Some("long"));
        assert_eq!(options.direction, CaseDirection::ToSnake);
    }

    #[test]
    fn test_property_with_type_wins() {
        let typed = Some("Guid".to_string());
        let options = case_options(true, false, Some(&typed), false, &mapper_config(true));
        assert_eq!(options.property.as_deref(), Some("Guid"));
        assert_eq!(options.direction, CaseDirection::ToPascal);
    }

    #[test]
    fn test_no_property_overrides_config() {
        let options = case_options(false, true, None, true, &mapper_config(true));
        assert_eq!(options.property, None);

        let options = case_options(false, false, None, false, &mapper_config(true));
        assert_eq!(options.property.as_deref(), Some("long"));
    }

    #[test]
    fn test_pick_separator() {
        assert_eq!(pick_separator(None, true, Separator::Comma), Separator::Pipe);
        assert_eq!(pick_separator(Some(Separator::Comma), false, Separator::Pipe), Separator::Comma);
        assert_eq!(pick_separator(None, false, Separator::Pipe), Separator::Pipe);
    }

    #[test]
    fn test_in_flags_parse() {
        let cli = Cli::try_parse_from(["qstmt", "in", "a", "--pipe", "--oracle-split", "--no-oracle-split"]).unwrap();
        match cli.command {
            Commands::In {
                pipe,
                oracle_split,
                no_oracle_split,
                ..
            } => {
                assert!(pipe);
                assert!(!flag(oracle_split, no_oracle_split, true));
            }
            _ => panic!("expected the in subcommand"),
        }

        assert!(Cli::try_parse_from(["qstmt", "in", "a", "--pipe", "--separator", "comma"]).is_err());
    }

    #[test]
    fn test_case_property_parses_without_value() {
        let cli = Cli::try_parse_from(["qstmt", "case", "user_id", "--property"]).unwrap();
        match cli.command {
            Commands::Case { property, .. } => assert_eq!(property, Some(None)),
            _ => panic!("expected the case subcommand"),
        }
    }
}
