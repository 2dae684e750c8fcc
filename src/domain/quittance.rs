//! The rent receipt model.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::calendar::nom_du_mois;
use super::montant::arrondir;

/// Receipt identifier - newtype for type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuittanceId(Uuid);

impl QuittanceId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for QuittanceId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for QuittanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for QuittanceId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

/// A party to the lease: name and postal address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partie {
    pub nom: String,
    pub adresse: String,
}

/// The month a receipt covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Periode {
    pub mois: u32,
    pub annee: i32,
}

impl Periode {
    /// French label, e.g. "mars 2025".
    pub fn label(&self) -> String {
        format!("{} {}", nom_du_mois(self.mois).unwrap_or("?"), self.annee)
    }
}

/// Lifecycle of a receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatutQuittance {
    EnAttente,
    Envoyee,
}

impl StatutQuittance {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatutQuittance::EnAttente => "en_attente",
            StatutQuittance::Envoyee => "envoyee",
        }
    }

    pub fn parse(texte: &str) -> Option<Self> {
        match texte {
            "en_attente" => Some(StatutQuittance::EnAttente),
            "envoyee" => Some(StatutQuittance::Envoyee),
            _ => None,
        }
    }
}

/// A rent receipt, ready to be rendered or emailed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quittance {
    pub id: QuittanceId,
    pub bailleur: Partie,
    pub locataire: String,
    pub adresse_location: String,
    pub periode: Periode,
    pub loyer: Decimal,
    pub charges: Decimal,
    pub lieu: String,
    pub date_emission: NaiveDate,
    pub statut: StatutQuittance,
}

impl Quittance {
    /// Rent plus charges, rounded to centimes.
    pub fn total(&self) -> Decimal {
        arrondir(self.loyer) + arrondir(self.charges)
    }
}
