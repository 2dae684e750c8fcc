//! Database row types for Diesel.

use diesel::prelude::*;

use super::schema::{quittances, rappels};

/// Database row for a receipt. Amounts are text-encoded decimals, dates are
/// RFC 3339 text.
#[derive(Queryable, Selectable, Insertable, Debug, Clone)]
#[diesel(table_name = quittances)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct QuittanceRow {
    pub id: String,
    pub bailleur_nom: String,
    pub bailleur_adresse: String,
    pub locataire: String,
    pub adresse_location: String,
    pub periode_mois: i32,
    pub periode_annee: i32,
    pub loyer: String,
    pub charges: String,
    pub lieu: String,
    pub date_emission: String,
    pub statut: String,
}

/// Database row for a reminder.
#[derive(Queryable, Selectable, Insertable, Debug, Clone)]
#[diesel(table_name = rappels)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct RappelRow {
    pub id: String,
    pub echeance: String,
    pub donnees: String,
    pub statut: String,
    pub cree_le: String,
}
