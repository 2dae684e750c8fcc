//! French-locale calendar utilities.
//!
//! Month names, quarter derivation and day counting are needed by every
//! calculator and by the receipt renderer, so they live here once instead of
//! being re-derived per call site.

use std::fmt;

use chrono::{Datelike, NaiveDate};

/// French month names, index 0 = janvier.
pub const MOIS: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

/// Name of a month (1-12) in French.
pub fn nom_du_mois(mois: u32) -> Option<&'static str> {
    if (1..=12).contains(&mois) {
        Some(MOIS[(mois - 1) as usize])
    } else {
        None
    }
}

/// Number of days in a calendar month, leap-year aware.
pub fn jours_dans_le_mois(annee: i32, mois: u32) -> Option<u32> {
    let debut = NaiveDate::from_ymd_opt(annee, mois, 1)?;
    let fin = if mois == 12 {
        NaiveDate::from_ymd_opt(annee + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(annee, mois + 1, 1)?
    };
    Some((fin - debut).num_days() as u32)
}

/// Long-form French date, e.g. "15 mars 2025".
pub fn date_longue(date: NaiveDate) -> String {
    format!(
        "{} {} {}",
        date.day(),
        nom_du_mois(date.month()).unwrap_or(""),
        date.year()
    )
}

/// Whole calendar months elapsed between two dates, ignoring day-of-month.
pub fn mois_ecoules(depuis: NaiveDate, jusque: NaiveDate) -> i32 {
    (jusque.year() - depuis.year()) * 12 + (jusque.month() as i32 - depuis.month() as i32)
}

/// IRL publication quarter.
///
/// Serialized as its number (1-4) in config files and JSON payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Trimestre {
    T1,
    T2,
    T3,
    T4,
}

impl Trimestre {
    /// Quarter covering the given month (1-3 is T1, 4-6 is T2, ...).
    pub fn depuis_mois(mois: u32) -> Option<Self> {
        match mois {
            1..=3 => Some(Trimestre::T1),
            4..=6 => Some(Trimestre::T2),
            7..=9 => Some(Trimestre::T3),
            10..=12 => Some(Trimestre::T4),
            _ => None,
        }
    }

    /// Quarter number, 1-4.
    pub fn numero(self) -> u8 {
        match self {
            Trimestre::T1 => 1,
            Trimestre::T2 => 2,
            Trimestre::T3 => 3,
            Trimestre::T4 => 4,
        }
    }

    /// First month of the quarter (1, 4, 7 or 10).
    pub fn premier_mois(self) -> u32 {
        (self.numero() as u32 - 1) * 3 + 1
    }
}

impl TryFrom<u8> for Trimestre {
    type Error = String;

    fn try_from(valeur: u8) -> Result<Self, Self::Error> {
        match valeur {
            1 => Ok(Trimestre::T1),
            2 => Ok(Trimestre::T2),
            3 => Ok(Trimestre::T3),
            4 => Ok(Trimestre::T4),
            autre => Err(format!("quarter must be 1-4, got {autre}")),
        }
    }
}

impl From<Trimestre> for u8 {
    fn from(trimestre: Trimestre) -> Self {
        trimestre.numero()
    }
}

impl fmt::Display for Trimestre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trimestre::T1 => write!(f, "1er trimestre"),
            Trimestre::T2 => write!(f, "2e trimestre"),
            Trimestre::T3 => write!(f, "3e trimestre"),
            Trimestre::T4 => write!(f, "4e trimestre"),
        }
    }
}
