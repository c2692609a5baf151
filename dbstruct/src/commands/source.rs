use std::path::{Path, PathBuf};

use clap::Args;
use dbstruct_core::{CONFIG_FILE, DatabaseType, Filter, Options, Result};
use dbstruct_schema::{MySqlSource, dsn};

/// Flags selecting the database and its tables.
#[derive(Args, Debug)]
pub struct SourceArgs {
    /// Database type
    #[arg(short = 'd', long = "db-type", value_name = "TYPE")]
    pub db_type: Option<DatabaseType>,

    /// Connection string, e.g. root:123456@(127.0.0.1:3306)/test
    #[arg(short = 'c', long, env = "DBSTRUCT_DSN", hide_env_values = true)]
    pub dsn: Option<String>,

    /// Table filter as PREFIX,PATTERN with a SQL LIKE pattern (repeatable)
    #[arg(short = 'f', long = "filter", value_name = "PREFIX,PATTERN")]
    pub filters: Vec<Filter>,

    /// Table name to skip (repeatable)
    #[arg(short = 'e', long, value_name = "TABLE")]
    pub exclude: Vec<String>,

    /// Path to the configuration file (defaults to ./dbstruct.toml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the effective options and debug logs
    #[arg(long)]
    pub verbose: bool,
}

impl SourceArgs {
    /// Load the configuration file and apply the flags given on top of it.
    pub fn options(&self) -> Result<Options> {
        let mut options = match &self.config {
            Some(path) => Options::from_file(path)?,
            None if Path::new(CONFIG_FILE).is_file() => Options::from_file(CONFIG_FILE)?,
            None => Options::default(),
        };

        if let Some(database) = self.db_type {
            options.database = database;
        }
        if let Some(dsn) = &self.dsn {
            options.dsn = dsn.clone();
        }
        if !self.filters.is_empty() {
            options.filters = self.filters.clone();
        }
        if !self.exclude.is_empty() {
            options.exclude = self.exclude.clone();
        }
        options.verbose |= self.verbose;

        Ok(options)
    }
}

/// Open the schema source the options point at.
pub fn connect(options: &Options) -> Result<MySqlSource> {
    match options.database {
        DatabaseType::Mysql => MySqlSource::connect(&options.dsn),
    }
}

/// Options as pretty JSON with the password masked.
pub fn options_json(options: &Options) -> serde_json::Result<String> {
    let shown = Options {
        dsn: dsn::redact(&options.dsn),
        ..options.clone()
    };
    serde_json::to_string_pretty(&shown)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_json_masks_password() {
        let options = Options {
            dsn: "root:123456@(127.0.0.1:3306)/test".to_string(),
            ..Options::default()
        };
        let json = options_json(&options).unwrap();

        assert!(json.contains("\"dsn\": \"root:***@(127.0.0.1:3306)/test\""));
        assert!(json.contains("\"package\": \"model\""));
        assert!(!json.contains("123456"));
    }
}
