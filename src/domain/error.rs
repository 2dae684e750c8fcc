//! Domain-level error types.

use chrono::NaiveDate;
use thiserror::Error;

use super::calendar::Trimestre;

/// Errors produced by the rent calculations.
///
/// A missing index value is a normal outcome of the revision calculator
/// (the IRL for the requested quarter may simply not be published), so these
/// are reported to the caller rather than treated as fatal.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("no published IRL index for {trimestre} {annee}")]
    IndiceIntrouvable { annee: i32, trimestre: Trimestre },

    #[error("invalid occupancy interval: exit {sortie} precedes entry {entree}")]
    PeriodeInvalide { entree: NaiveDate, sortie: NaiveDate },

    #[error("occupancy must stay within one calendar month: {entree} to {sortie}")]
    PeriodeSurPlusieursMois { entree: NaiveDate, sortie: NaiveDate },

    #[error("invalid amount: {reason}")]
    MontantInvalide { reason: String },

    #[error("invalid date: year {annee}, month {mois}")]
    DateInvalide { annee: i32, mois: u32 },
}
