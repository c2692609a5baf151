//! Connection string handling.
//!
//! Accepts `mysql://` URLs and the driver style
//! `user:password@tcp(host:port)/dbname?params`.

use std::str::FromStr;

use dbstruct_core::{Error, Result};
use sqlx::mysql::MySqlConnectOptions;
use tracing::debug;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3306;

/// Parts of a driver style DSN.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dsn {
    pub user: Option<String>,
    pub password: Option<String>,
    pub host: String,
    pub port: u16,
    pub database: String,
}

impl Dsn {
    /// Parse `[user[:password]@][tcp](host:port)/dbname[?params]`.
    ///
    /// Parameters are dropped. The password may itself contain `@`, `:` or
    /// `/`; the last `@` and the last `/` delimit it.
    pub fn parse(dsn: &str) -> Result<Self> {
        let dsn = dsn.trim();
        let (dsn, params) = match dsn.split_once('?') {
            Some((dsn, params)) => (dsn, Some(params)),
            None => (dsn, None),
        };
        if let Some(params) = params {
            debug!(params, "ignoring driver parameters in dsn");
        }

        let (rest, database) = dsn
            .rsplit_once('/')
            .ok_or_else(|| invalid(dsn, "missing '/' before the database name"))?;

        let (credentials, address) = match rest.rsplit_once('@') {
            Some((credentials, address)) => (Some(credentials), address),
            None => (None, rest),
        };

        let (user, password) = match credentials {
            Some(credentials) => match credentials.split_once(':') {
                Some((user, password)) => (Some(user.to_string()), Some(password.to_string())),
                None => (Some(credentials.to_string()), None),
            },
            None => (None, None),
        };

        let (host, port) = parse_address(address).ok_or_else(|| {
            invalid(
                dsn,
                "expected an address like tcp(host:port) or (host:port)",
            )
        })?;

        Ok(Self {
            user: user.filter(|u| !u.is_empty()),
            password,
            host,
            port,
            database: database.to_string(),
        })
    }

    /// Driver options for this DSN.
    pub fn connect_options(&self) -> MySqlConnectOptions {
        let mut options = MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .database(&self.database);
        if let Some(user) = &self.user {
            options = options.username(user);
        }
        if let Some(password) = &self.password {
            options = options.password(password);
        }
        options
    }
}

/// Driver options for either DSN form.
pub fn connect_options(dsn: &str) -> Result<MySqlConnectOptions> {
    let trimmed = dsn.trim();
    if trimmed.starts_with("mysql://") || trimmed.starts_with("mariadb://") {
        return MySqlConnectOptions::from_str(trimmed)
            .map_err(|e| invalid(trimmed, &e.to_string()));
    }
    Dsn::parse(trimmed).map(|dsn| dsn.connect_options())
}

fn parse_address(address: &str) -> Option<(String, u16)> {
    let inner = if address.is_empty() {
        ""
    } else {
        address
            .strip_prefix("tcp")
            .unwrap_or(address)
            .strip_prefix('(')?
            .strip_suffix(')')?
    };
    if inner.is_empty() {
        return Some((DEFAULT_HOST.to_string(), DEFAULT_PORT));
    }

    let (host, port) = match inner.rsplit_once(':') {
        Some((host, port)) if !host.ends_with(':') => (host, port.parse().ok()?),
        _ => (inner, DEFAULT_PORT),
    };
    let host = host.trim_start_matches('[').trim_end_matches(']');
    let host = if host.is_empty() { DEFAULT_HOST } else { host };
    Some((host.to_string(), port))
}

fn invalid(dsn: &str, reason: &str) -> Box<Error> {
    Error::config(format!("invalid dsn '{}': {}", redact(dsn), reason))
}

/// Hide the password part of a DSN for display.
pub fn redact(dsn: &str) -> String {
    let (scheme, rest) = match dsn.split_once("://") {
        Some((scheme, rest)) => (Some(scheme), rest),
        None => (None, dsn),
    };
    let redacted = match rest.rsplit_once('@') {
        Some((credentials, tail)) => match credentials.split_once(':') {
            Some((user, _)) => format!("{}:***@{}", user, tail),
            None => rest.to_string(),
        },
        None => rest.to_string(),
    };
    match scheme {
        Some(scheme) => format!("{}://{}", scheme, redacted),
        None => redacted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dsn(user: Option<&str>, password: Option<&str>, host: &str, port: u16, db: &str) -> Dsn {
        Dsn {
            user: user.map(str::to_string),
            password: password.map(str::to_string),
            host: host.to_string(),
            port,
            database: db.to_string(),
        }
    }

    #[test]
    fn test_driver_style_tcp() {
        assert_eq!(
            Dsn::parse("root:123456@tcp(127.0.0.1:3306)/test?charset=utf8mb4&parseTime=true")
                .unwrap(),
            dsn(Some("root"), Some("123456"), "127.0.0.1", 3306, "test")
        );
    }

    #[test]
    fn test_driver_style_bare_parens() {
        assert_eq!(
            Dsn::parse("root:123456@(db.local:3307)/test").unwrap(),
            dsn(Some("root"), Some("123456"), "db.local", 3307, "test")
        );
    }

    #[test]
    fn test_default_address() {
        assert_eq!(
            Dsn::parse("root@/test").unwrap(),
            dsn(Some("root"), None, "127.0.0.1", 3306, "test")
        );
        assert_eq!(
            Dsn::parse("/test").unwrap(),
            dsn(None, None, "127.0.0.1", 3306, "test")
        );
        assert_eq!(
            Dsn::parse("root@tcp(db)/test").unwrap(),
            dsn(Some("root"), None, "db", 3306, "test")
        );
    }

    #[test]
    fn test_password_keeps_separators() {
        assert_eq!(
            Dsn::parse("app:p@ss/w:rd@tcp(localhost:3306)/shop").unwrap(),
            dsn(Some("app"), Some("p@ss/w:rd"), "localhost", 3306, "shop")
        );
    }

    #[test]
    fn test_bad_port_rejected() {
        assert!(Dsn::parse("root@tcp(db:mysql)/test").is_err());
    }

    #[test]
    fn test_missing_database() {
        assert!(Dsn::parse("root:pw@tcp(localhost:3306)").is_err());
    }

    #[test]
    fn test_unix_socket_rejected() {
        let err = Dsn::parse("root:pw@unix(/tmp/mysql.sock)/test").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid dsn 'root:***@unix(/tmp/mysql.sock)/test': expected an address like tcp(host:port) or (host:port)"
        );
    }

    #[test]
    fn test_connect_options_from_driver_style() {
        let options = connect_options("root:123456@tcp(db.local:3307)/shop").unwrap();
        assert_eq!(options.get_host(), "db.local");
        assert_eq!(options.get_port(), 3307);
        assert_eq!(options.get_username(), "root");
        assert_eq!(options.get_database(), Some("shop"));
    }

    #[test]
    fn test_connect_options_from_url() {
        let options = connect_options("mysql://app:pw@db:3308/shop").unwrap();
        assert_eq!(options.get_host(), "db");
        assert_eq!(options.get_port(), 3308);
        assert_eq!(options.get_username(), "app");
        assert_eq!(options.get_database(), Some("shop"));
    }

    #[test]
    fn test_redact() {
        assert_eq!(
            redact("root:secret@tcp(127.0.0.1:3306)/test"),
            "root:***@tcp(127.0.0.1:3306)/test"
        );
        assert_eq!(
            redact("mysql://root:secret@db/test"),
            "mysql://root:***@db/test"
        );
        assert_eq!(redact("root@/test"), "root@/test");
    }
}
