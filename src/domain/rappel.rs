//! Revision reminders.
//!
//! A reminder stores the date a rent can next be revised, together with the
//! revision result it was computed from, as an opaque JSON payload.
//! Cancelling is a soft delete: the row stays with status `Annule`.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Reminder identifier - newtype for type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RappelId(Uuid);

impl RappelId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for RappelId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RappelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for RappelId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

/// Reminder lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatutRappel {
    Planifie,
    Envoye,
    Annule,
}

impl StatutRappel {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatutRappel::Planifie => "planifie",
            StatutRappel::Envoye => "envoye",
            StatutRappel::Annule => "annule",
        }
    }

    pub fn parse(texte: &str) -> Option<Self> {
        match texte {
            "planifie" => Some(StatutRappel::Planifie),
            "envoye" => Some(StatutRappel::Envoye),
            "annule" => Some(StatutRappel::Annule),
            _ => None,
        }
    }
}

/// A scheduled revision reminder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rappel {
    pub id: RappelId,
    pub echeance: NaiveDate,
    pub donnees: serde_json::Value,
    pub statut: StatutRappel,
    pub cree_le: DateTime<Utc>,
}

impl Rappel {
    /// Schedule a new reminder for the given due date.
    pub fn planifier(echeance: NaiveDate, donnees: serde_json::Value) -> Self {
        Self {
            id: RappelId::new(),
            echeance,
            donnees,
            statut: StatutRappel::Planifie,
            cree_le: Utc::now(),
        }
    }

    /// Soft-cancel the reminder.
    pub fn annuler(&mut self) {
        self.statut = StatutRappel::Annule;
    }

    pub fn est_actif(&self) -> bool {
        self.statut == StatutRappel::Planifie
    }
}
