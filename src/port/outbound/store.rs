//! Persistence ports for receipts and reminders.

use async_trait::async_trait;

use crate::domain::{Quittance, QuittanceId, Rappel, RappelId};
use crate::error::Result;

/// Store for revision reminders.
///
/// `cancel` is a soft delete: the reminder's status flips to `Annule` and
/// the row stays queryable.
#[async_trait]
pub trait RappelStore: Send + Sync {
    async fn save(&self, rappel: &Rappel) -> Result<()>;

    async fn get(&self, id: &RappelId) -> Result<Option<Rappel>>;

    /// List reminders, most recent due date first. Cancelled reminders are
    /// skipped unless `inclure_annules` is set.
    async fn list(&self, inclure_annules: bool) -> Result<Vec<Rappel>>;

    /// Soft-cancel a reminder. Returns false when the id is unknown.
    async fn cancel(&self, id: &RappelId) -> Result<bool>;
}

/// Store for issued receipts.
#[async_trait]
pub trait QuittanceStore: Send + Sync {
    async fn save(&self, quittance: &Quittance) -> Result<()>;

    /// Flip a receipt to `Envoyee`. Returns false when the id is unknown.
    async fn mark_sent(&self, id: &QuittanceId) -> Result<bool>;

    async fn list(&self) -> Result<Vec<Quittance>>;
}
