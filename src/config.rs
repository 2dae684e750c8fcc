//! Configuration loading from TOML files.
//!
//! All data lives under `~/.quittance/`:
//! - `~/.quittance/config.toml` - main configuration
//! - `~/.quittance/quittance.db` - receipts and reminders database

use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};

use crate::domain::calendar::Trimestre;
use crate::domain::irl::IrlTable;
use crate::error::{ConfigError, Result};

/// Returns the quittance home directory (`~/.quittance/`).
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".quittance")
}

/// Returns the default config file path (`~/.quittance/config.toml`).
pub fn default_config() -> PathBuf {
    home_dir().join("config.toml")
}

/// Returns the default database path (`~/.quittance/quittance.db`).
pub fn default_database() -> PathBuf {
    home_dir().join("quittance.db")
}

/// Ensures the quittance home directory exists.
pub fn ensure_home_dir() -> std::io::Result<()> {
    std::fs::create_dir_all(home_dir())
}

#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    /// Default landlord identity used when the CLI flags are omitted.
    pub bailleur: Option<BailleurConfig>,

    /// SMTP settings; required only by `quittance envoyer`.
    pub smtp: Option<SmtpConfig>,

    #[serde(default)]
    pub irl: IrlConfig,
}

#[derive(Debug, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database().to_string_lossy().into_owned(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl LoggingConfig {
    /// Initialize the tracing subscriber with this logging configuration.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        match self.format.as_str() {
            "json" => {
                fmt().json().with_env_filter(filter).init();
            }
            _ => {
                fmt().with_env_filter(filter).init();
            }
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
            format: "pretty".into(),
        }
    }
}

/// Default landlord identity for receipts and letters.
#[derive(Debug, Clone, Deserialize)]
pub struct BailleurConfig {
    pub nom: String,
    pub adresse: String,
    /// Place of issue printed on receipts ("Fait à ..."), defaults to the
    /// city part being left to the caller.
    pub lieu: Option<String>,
}

/// SMTP transport settings. The password comes from the environment, never
/// from the config file.
#[derive(Debug, Clone, Deserialize)]
pub struct SmtpConfig {
    pub host: String,
    #[serde(default = "default_smtp_port")]
    pub port: u16,
    pub utilisateur: String,
    /// Name of the environment variable holding the SMTP password.
    #[serde(default = "default_password_env")]
    pub mot_de_passe_env: String,
    /// From address, e.g. "Jean Dupont <jean@exemple.fr>".
    pub expediteur: String,
}

fn default_smtp_port() -> u16 {
    587
}

fn default_password_env() -> String {
    "QUITTANCE_SMTP_PASSWORD".to_string()
}

/// IRL table overrides.
#[derive(Debug, Deserialize, Default)]
pub struct IrlConfig {
    /// Optional TOML file of published values merged over the built-in table.
    pub fichier: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct FichierIrl {
    #[serde(default)]
    indice: Vec<EntreeIrl>,
}

#[derive(Debug, Deserialize)]
struct EntreeIrl {
    annee: i32,
    trimestre: Trimestre,
    valeur: Decimal,
}

impl Config {
    /// Load and validate a config file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let config: Config = toml::from_str(&content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load the config at `path` when given, otherwise the default path,
    /// falling back to defaults when no file exists yet.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let defaut = default_config();
                if defaut.exists() {
                    Self::load(defaut)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn validate(&self) -> Result<()> {
        if self.database.url.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "database.url",
                reason: "must not be empty".into(),
            }
            .into());
        }
        if self.logging.level.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "logging.level",
                reason: "must not be empty".into(),
            }
            .into());
        }
        if let Some(smtp) = &self.smtp {
            if smtp.host.is_empty() {
                return Err(ConfigError::MissingField { field: "smtp.host" }.into());
            }
            if smtp.expediteur.is_empty() {
                return Err(ConfigError::MissingField {
                    field: "smtp.expediteur",
                }
                .into());
            }
        }
        if let Some(bailleur) = &self.bailleur {
            if bailleur.nom.is_empty() {
                return Err(ConfigError::MissingField {
                    field: "bailleur.nom",
                }
                .into());
            }
        }
        Ok(())
    }

    /// The IRL table: built-in publications, overlaid with the entries of
    /// the configured `[irl] fichier` when present.
    pub fn table_irl(&self) -> Result<IrlTable> {
        let mut table = IrlTable::default();
        if let Some(fichier) = &self.irl.fichier {
            let content = std::fs::read_to_string(fichier).map_err(ConfigError::ReadFile)?;
            let fichier: FichierIrl = toml::from_str(&content).map_err(ConfigError::Parse)?;
            for entree in fichier.indice {
                table.inserer(entree.annee, entree.trimestre, entree.valeur);
            }
        }
        Ok(table)
    }
}
