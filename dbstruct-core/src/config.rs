//! Loading [`Options`] from a `dbstruct.toml` file.

use std::path::Path;

use crate::{Error, Options, Result};

/// Default configuration file name looked up in the working directory.
pub const CONFIG_FILE: &str = "dbstruct.toml";

impl Options {
    /// Parse options from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse options from TOML content with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config_parse(e, content, filename))
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use tempfile::TempDir;

    use super::*;
    use crate::{Filter, OrmStyle};

    #[test]
    fn test_parse_full() {
        let opts = Options::from_str_with_filename(
            r#"
            database = "mysql"
            dsn = "root:123456@(127.0.0.1:3306)/test"
            exclude = ["app_log"]
            orm_style = "sea-orm"
            serde_tag = false
            single_file = false
            model_dir = "src"
            package = "entity"
            html_file = "schema.html"

            [[filters]]
            prefix = "app_"
            pattern = "app_%"

            [[filters]]
            pattern = "sys_%"
            "#,
            CONFIG_FILE,
        )
        .unwrap();

        assert_eq!(opts.dsn, "root:123456@(127.0.0.1:3306)/test");
        assert_eq!(opts.exclude, vec!["app_log".to_string()]);
        assert_eq!(opts.orm_style, OrmStyle::SeaOrm);
        assert!(opts.orm_tag);
        assert!(!opts.serde_tag);
        assert!(!opts.single_file);
        assert_eq!(opts.model_dir, Some(PathBuf::from("src")));
        assert_eq!(opts.package, "entity");
        assert_eq!(opts.html_file, Some(PathBuf::from("schema.html")));
        assert_eq!(
            opts.filters,
            vec![Filter::new("app_", "app_%"), Filter::new("", "sys_%")]
        );
    }

    #[test]
    fn test_parse_empty_uses_defaults() {
        let opts = Options::from_str_with_filename("", CONFIG_FILE).unwrap();
        assert_eq!(opts, Options::default());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = Options::from_str_with_filename("dns = \"oops\"", CONFIG_FILE).unwrap_err();
        assert!(matches!(*err, Error::ConfigParse { .. }));
    }

    #[test]
    fn test_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE);
        std::fs::write(&path, "dsn = \"mysql://root@localhost/shop\"\n").unwrap();

        let opts = Options::from_file(&path).unwrap();
        assert_eq!(opts.dsn, "mysql://root@localhost/shop");
    }

    #[test]
    fn test_from_missing_file() {
        let err = Options::from_file("/nonexistent/dbstruct.toml").unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
