//! Partial-month (prorata) rent.
//!
//! When a tenant enters or leaves mid-month, rent and charges are due for
//! the occupied days only, at a daily rate of the monthly amount divided by
//! the calendar length of that month.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::calendar::jours_dans_le_mois;
use super::error::DomainError;
use super::montant::arrondir;

/// The occupancy being billed: an entry date (occupied until month end), an
/// exit date (occupied from month start), or a full interval inside one month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Occupation {
    Entree(NaiveDate),
    Sortie(NaiveDate),
    Periode { entree: NaiveDate, sortie: NaiveDate },
}

impl Occupation {
    /// The date whose calendar month sets the daily rate.
    fn date_de_reference(&self) -> NaiveDate {
        match *self {
            Occupation::Entree(date) | Occupation::Sortie(date) => date,
            Occupation::Periode { entree, .. } => entree,
        }
    }

    /// Occupied days inside the reference month.
    fn jours_occupes(&self, jours_dans_mois: u32) -> Result<u32, DomainError> {
        match *self {
            Occupation::Entree(date) => Ok(jours_dans_mois - date.day() + 1),
            Occupation::Sortie(date) => Ok(date.day()),
            Occupation::Periode { entree, sortie } => {
                if sortie < entree {
                    return Err(DomainError::PeriodeInvalide { entree, sortie });
                }
                if sortie.year() != entree.year() || sortie.month() != entree.month() {
                    return Err(DomainError::PeriodeSurPlusieursMois { entree, sortie });
                }
                Ok((sortie - entree).num_days() as u32 + 1)
            }
        }
    }
}

/// Result of a prorata calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prorata {
    pub jours_occupes: u32,
    pub jours_dans_mois: u32,
    pub loyer: Decimal,
    pub charges: Decimal,
    pub total: Decimal,
}

/// Compute the prorated rent and charges for an occupancy.
///
/// Rent and charges are prorated separately, each rounded to centimes, then
/// summed.
pub fn calculer(
    loyer_mensuel: Decimal,
    charges_mensuelles: Decimal,
    occupation: Occupation,
) -> Result<Prorata, DomainError> {
    if loyer_mensuel < Decimal::ZERO || charges_mensuelles < Decimal::ZERO {
        return Err(DomainError::MontantInvalide {
            reason: "monthly amounts must not be negative".to_string(),
        });
    }

    let reference = occupation.date_de_reference();
    let jours_dans_mois = jours_dans_le_mois(reference.year(), reference.month()).ok_or(
        DomainError::DateInvalide {
            annee: reference.year(),
            mois: reference.month(),
        },
    )?;
    let jours_occupes = occupation.jours_occupes(jours_dans_mois)?;

    let jours = Decimal::from(jours_occupes);
    let mois = Decimal::from(jours_dans_mois);
    let loyer = arrondir(loyer_mensuel * jours / mois);
    let charges = arrondir(charges_mensuelles * jours / mois);

    Ok(Prorata {
        jours_occupes,
        jours_dans_mois,
        loyer,
        charges,
        total: loyer + charges,
    })
}
