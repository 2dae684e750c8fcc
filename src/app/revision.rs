//! Revision service: calculation plus reminder scheduling.

use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use tracing::info;

use crate::domain::irl::IrlTable;
use crate::domain::revision::{reviser, ReferenceBail, Revision};
use crate::domain::Rappel;
use crate::error::Result;
use crate::port::outbound::RappelStore;

/// The next anniversary of the reference date strictly after `aujourd_hui`,
/// which is when the rent can be revised again.
pub fn prochaine_echeance(
    reference: ReferenceBail,
    aujourd_hui: NaiveDate,
) -> Result<NaiveDate> {
    let depart = reference.date_de_depart()?;
    let mut annee = aujourd_hui.year();
    // Reference dates are always the first of a month, so the anniversary
    // exists in every year.
    let mut echeance = depart.with_year(annee).unwrap_or(depart);
    if echeance <= aujourd_hui {
        annee += 1;
        echeance = depart.with_year(annee).unwrap_or(depart);
    }
    Ok(echeance)
}

/// Runs revisions against the configured IRL table and persists reminders.
pub struct ServiceRevision {
    table: IrlTable,
    rappels: Arc<dyn RappelStore>,
}

impl ServiceRevision {
    pub fn new(table: IrlTable, rappels: Arc<dyn RappelStore>) -> Self {
        Self { table, rappels }
    }

    pub fn calculer(
        &self,
        loyer: Decimal,
        reference: ReferenceBail,
        aujourd_hui: NaiveDate,
    ) -> Result<Revision> {
        Ok(reviser(loyer, reference, &self.table, aujourd_hui)?)
    }

    /// Schedule a reminder for the next revision date, carrying the full
    /// revision result as its payload.
    pub async fn planifier_rappel(
        &self,
        revision: &Revision,
        reference: ReferenceBail,
        aujourd_hui: NaiveDate,
    ) -> Result<Rappel> {
        let echeance = prochaine_echeance(reference, aujourd_hui)?;
        let rappel = Rappel::planifier(echeance, serde_json::to_value(revision)?);
        self.rappels.save(&rappel).await?;
        info!(id = %rappel.id, echeance = %echeance, "reminder scheduled");
        Ok(rappel)
    }
}
