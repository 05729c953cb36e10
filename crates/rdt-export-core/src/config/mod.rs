use anyhow::Result;
use chrono_tz::Tz;
use config::Config;
use serde::Deserialize;

use crate::constants::{
    DEFAULT_EXPORT_FILENAME, DEFAULT_EXPORT_SHEET, DEFAULT_EXPORT_TIMEZONE,
    EXCEL_SHEET_NAME_ILLEGAL, EXCEL_SHEET_NAME_MAX_LEN,
};
use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub db: DbConfig,
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub export: ExportConfig,
}

#[derive(Clone, Deserialize)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: String,
    pub connections: u8,
}

impl std::fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DbConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("database", &self.database)
            .field("connections", &self.connections)
            .finish()
    }
}

impl DbConfig {
    /// ## Summary
    /// Builds a `mysql://` connection URL with percent-encoded credentials.
    ///
    /// ## Errors
    /// Returns `CoreError::ConfigError` if the host or credentials cannot be
    /// represented in a URL.
    pub fn url(&self) -> CoreResult<String> {
        let invalid = |what: &str| CoreError::ConfigError(format!("invalid database {what}"));

        let mut url = url::Url::parse("mysql://localhost")
            .map_err(|e| CoreError::ConfigError(e.to_string()))?;
        url.set_host(Some(&self.host))
            .map_err(|e| CoreError::ConfigError(format!("invalid database host: {e}")))?;
        url.set_port(Some(self.port)).map_err(|()| invalid("port"))?;
        url.set_username(&self.username)
            .map_err(|()| invalid("username"))?;
        url.set_password(Some(&self.password))
            .map_err(|()| invalid("password"))?;
        url.set_path(&format!("/{}", self.database));

        Ok(url.into())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// ## Summary
    /// Returns the bind address as `host:port`.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    /// IANA name of the zone stored UTC timestamps are shown in.
    pub timezone: String,
    /// Download file name without the `.xlsx` extension.
    pub filename: String,
    pub sheet: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            timezone: DEFAULT_EXPORT_TIMEZONE.to_string(),
            filename: DEFAULT_EXPORT_FILENAME.to_string(),
            sheet: DEFAULT_EXPORT_SHEET.to_string(),
        }
    }
}

impl ExportConfig {
    /// ## Summary
    /// Resolves the configured timezone name.
    ///
    /// ## Errors
    /// Returns `CoreError::ConfigError` for names unknown to the tz database.
    pub fn tz(&self) -> CoreResult<Tz> {
        self.timezone
            .parse::<Tz>()
            .map_err(|e| CoreError::ConfigError(format!("unknown timezone {}: {e}", self.timezone)))
    }

    /// ## Summary
    /// Returns the download file name including the extension.
    #[must_use]
    pub fn attachment_name(&self) -> String {
        format!("{}.xlsx", self.filename)
    }

    fn validate(&self) -> CoreResult<()> {
        self.tz()?;

        if self.filename.trim().is_empty() {
            return Err(CoreError::ConfigError(
                "export.filename must not be empty".to_string(),
            ));
        }
        if self.filename.contains(['/', '\\', '"']) {
            return Err(CoreError::ConfigError(format!(
                "export.filename contains a path or quote character: {}",
                self.filename
            )));
        }

        if self.sheet.trim().is_empty() || self.sheet.chars().count() > EXCEL_SHEET_NAME_MAX_LEN {
            return Err(CoreError::ConfigError(format!(
                "export.sheet must be 1..={EXCEL_SHEET_NAME_MAX_LEN} characters"
            )));
        }
        if let Some(bad) = EXCEL_SHEET_NAME_ILLEGAL
            .iter()
            .find(|c| self.sheet.contains(**c))
        {
            return Err(CoreError::ConfigError(format!(
                "export.sheet contains illegal character {bad:?}"
            )));
        }

        Ok(())
    }
}

impl Settings {
    /// ## Summary
    /// Loads configuration from environment variables (after `.env` has been
    /// applied) and an optional `config.toml`.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails,
    /// which includes any unset `DB_*` connection parameter.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// ## Summary
    /// Same as [`Self::load`], reading variables from `vars` instead of the
    /// process environment when given.
    ///
    /// Values stay strings until deserialized, so credentials such as `0123`
    /// keep their leading zeros. A variable set to an empty string is kept
    /// as an empty value.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load_from(vars: Option<config::Map<String, String>>) -> Result<Self> {
        Ok(Config::builder()
            .set_default("db.port", 3306)?
            .set_default("db.connections", 4)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000)?
            .set_default("logging.level", "info")?
            .set_default("export.timezone", DEFAULT_EXPORT_TIMEZONE)?
            .set_default("export.filename", DEFAULT_EXPORT_FILENAME)?
            .set_default("export.sheet", DEFAULT_EXPORT_SHEET)?
            // Environment
            .add_source(
                config::Environment::default()
                    .source(vars)
                    .convert_case(config::Case::Snake)
                    .separator("_"),
            )
            // TOML file
            .add_source(config::File::with_name("config.toml").required(false))
            .build()?
            .try_deserialize::<Settings>()?)
    }

    /// ## Summary
    /// Checks values that deserialize fine but cannot be served with.
    ///
    /// `db.password` must be set but may be empty, for accounts without one.
    ///
    /// ## Errors
    /// Returns `CoreError::ConfigError` naming the first offending key.
    pub fn validate(&self) -> CoreResult<()> {
        for (key, value) in [
            ("db.host", &self.db.host),
            ("db.username", &self.db.username),
            ("db.database", &self.db.database),
        ] {
            if value.trim().is_empty() {
                return Err(CoreError::ConfigError(format!("{key} must not be empty")));
            }
        }

        if self.db.connections == 0 {
            return Err(CoreError::ConfigError(
                "db.connections must be at least 1".to_string(),
            ));
        }

        self.export.validate()
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file, then
/// validates it.
///
/// ## Errors
/// Returns an error if loading, deserializing or validating the configuration
/// fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;
    settings.validate()?;

    tracing::debug!(settings = ?settings, "Settings validated");

    Ok(settings)
}

#[cfg(test)]
mod tests;
