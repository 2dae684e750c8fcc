//! Application layer - services and wiring.

mod envoi;
mod revision;

pub use envoi::{DemandeEnvoi, ReponseEnvoi, ServiceEnvoi};
pub use revision::{prochaine_echeance, ServiceRevision};

use std::sync::Arc;

use crate::adapter::outbound::smtp::SmtpCourrier;
use crate::adapter::outbound::sqlite::{
    create_pool, run_migrations, DbPool, SqliteQuittanceStore, SqliteRappelStore,
};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::port::outbound::{Courrier, QuittanceStore, RappelStore};

/// Builds the concrete adapters out of the configuration.
///
/// Pool creation and migrations happen lazily, the first time a command
/// actually touches the database.
pub struct App {
    config: Config,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn pool(&self) -> Result<DbPool> {
        crate::config::ensure_home_dir()?;
        let pool = create_pool(&self.config.database.url)?;
        run_migrations(&pool)?;
        Ok(pool)
    }

    pub fn rappel_store(&self) -> Result<Arc<dyn RappelStore>> {
        Ok(Arc::new(SqliteRappelStore::new(self.pool()?)))
    }

    pub fn quittance_store(&self) -> Result<Arc<dyn QuittanceStore>> {
        Ok(Arc::new(SqliteQuittanceStore::new(self.pool()?)))
    }

    pub fn courrier(&self) -> Result<Arc<dyn Courrier>> {
        let smtp = self
            .config
            .smtp
            .as_ref()
            .ok_or_else(|| Error::Mail("no [smtp] section in the configuration".to_string()))?;
        Ok(Arc::new(SmtpCourrier::from_config(smtp)?))
    }
}
