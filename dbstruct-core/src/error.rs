use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for dbstruct operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Boxed error coming from a driver or other collaborator.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to connect to {database} database")]
    #[diagnostic(
        code(dbstruct::connection),
        help("check the dsn, e.g. root:123456@(127.0.0.1:3306)/test")
    )]
    Connection {
        database: String,
        #[source]
        source: BoxError,
    },

    #[error("query failed while {context}")]
    #[diagnostic(code(dbstruct::query))]
    Query {
        context: String,
        #[source]
        source: BoxError,
    },

    #[error("unknown column type '{native}'{}", location(.table, .column))]
    #[diagnostic(
        code(dbstruct::unknown_type),
        help("the column type has no mapping; generation stops rather than guessing")
    )]
    UnknownType {
        native: String,
        table: Option<String>,
        column: Option<String>,
    },

    #[error("failed to access '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(dbstruct::config))]
    Config { message: String },

    #[error("failed to parse configuration")]
    #[diagnostic(code(dbstruct::config_parse))]
    ConfigParse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },
}

fn location(table: &Option<String>, column: &Option<String>) -> String {
    match (table, column) {
        (Some(table), Some(column)) => format!(" in column '{}.{}'", table, column),
        (Some(table), None) => format!(" in table '{}'", table),
        _ => String::new(),
    }
}

impl Error {
    /// Create a connection error for the given database kind.
    pub fn connection(database: impl Into<String>, source: impl Into<BoxError>) -> Box<Self> {
        Box::new(Error::Connection {
            database: database.into(),
            source: source.into(),
        })
    }

    /// Create a query error with a short description of what was running.
    pub fn query(context: impl Into<String>, source: impl Into<BoxError>) -> Box<Self> {
        Box::new(Error::Query {
            context: context.into(),
            source: source.into(),
        })
    }

    /// Create an unknown type error without location.
    pub fn unknown_type(native: impl Into<String>) -> Box<Self> {
        Box::new(Error::UnknownType {
            native: native.into(),
            table: None,
            column: None,
        })
    }

    /// Create an io error for a path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.into(),
            source,
        })
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Box<Self> {
        Box::new(Error::Config {
            message: message.into(),
        })
    }

    /// Create a parse error from a toml error with source context
    pub fn config_parse(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::ConfigParse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }

    /// Attach the table and column an unknown type was found in.
    pub fn at_column(self: Box<Self>, table: &str, column: &str) -> Box<Self> {
        match *self {
            Error::UnknownType { native, .. } => Box::new(Error::UnknownType {
                native,
                table: Some(table.to_string()),
                column: Some(column.to_string()),
            }),
            other => Box::new(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_type_message() {
        let err = Error::unknown_type("geometry");
        assert_eq!(err.to_string(), "unknown column type 'geometry'");

        let err = err.at_column("shop", "location");
        assert_eq!(
            err.to_string(),
            "unknown column type 'geometry' in column 'shop.location'"
        );
    }

    #[test]
    fn test_at_column_keeps_other_errors() {
        let err = Error::config("missing database dsn").at_column("t", "c");
        assert_eq!(err.to_string(), "missing database dsn");
    }

    #[test]
    fn test_query_error_source() {
        let io = std::io::Error::other("broken pipe");
        let err = Error::query("listing tables", io);
        assert_eq!(err.to_string(), "query failed while listing tables");
        assert!(std::error::Error::source(&*err).is_some());
    }
}
