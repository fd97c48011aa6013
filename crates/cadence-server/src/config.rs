use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::cli::ServeCommand;

/// Config file read from the working directory unless `CADENCE_CONFIG` points elsewhere.
pub const CONFIG_FILE: &str = "cadence.toml";

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub dbfile: String,
    pub web_dir: String,
    /// Maximum number of tasks returned by a listing
    pub search_limit: u32,
    pub max_connections: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 7540,
            dbfile: "scheduler.db".to_string(),
            web_dir: "./web".to_string(),
            search_limit: 50,
            max_connections: 5,
        }
    }
}

impl Config {
    /// Defaults, then the TOML file, then `TODO_*` environment variables.
    pub fn new() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }

    pub fn figment() -> Figment {
        let path = std::env::var("CADENCE_CONFIG").unwrap_or_else(|_| CONFIG_FILE.to_string());
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed("TODO_"))
    }

    /// Command line flags win over every other source.
    pub fn apply_overrides(&mut self, command: &ServeCommand) {
        if let Some(port) = command.port {
            self.port = port;
        }
        if let Some(db) = &command.db {
            self.dbfile = db.clone();
        }
        if let Some(web_dir) = &command.web_dir {
            self.web_dir = web_dir.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_defaults() {
        Jail::expect_with(|_jail| {
            let config = Config::new()?;
            assert_eq!(config, Config::default());
            assert_eq!(config.port, 7540);
            assert_eq!(config.dbfile, "scheduler.db");
            Ok(())
        });
    }

    #[test]
    fn test_file_then_env() {
        Jail::expect_with(|jail| {
            jail.create_file(
                CONFIG_FILE,
                r#"
                port = 8080
                dbfile = "from-file.db"
                search_limit = 10
                "#,
            )?;
            jail.set_env("TODO_DBFILE", "from-env.db");

            let config = Config::new()?;
            assert_eq!(config.port, 8080);
            assert_eq!(config.dbfile, "from-env.db");
            assert_eq!(config.search_limit, 10);
            assert_eq!(config.web_dir, "./web");
            Ok(())
        });
    }

    #[test]
    fn test_custom_config_path() {
        Jail::expect_with(|jail| {
            jail.create_file("other.toml", "port = 9000")?;
            jail.set_env("CADENCE_CONFIG", "other.toml");
            assert_eq!(Config::new()?.port, 9000);
            Ok(())
        });
    }

    #[test]
    fn test_invalid_port_is_an_error() {
        Jail::expect_with(|jail| {
            jail.set_env("TODO_PORT", "not-a-port");
            assert!(Config::new().is_err());
            Ok(())
        });
    }

    #[test]
    fn test_cli_overrides() {
        let mut config = Config::default();
        config.apply_overrides(&ServeCommand {
            port: Some(1234),
            db: None,
            web_dir: Some("public".to_string()),
        });
        assert_eq!(config.port, 1234);
        assert_eq!(config.dbfile, "scheduler.db");
        assert_eq!(config.web_dir, "public");
    }
}
