//! SQLite-backed stores for receipts and reminders.

use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;
use rust_decimal::Decimal;
use uuid::Uuid;

use super::model::{QuittanceRow, RappelRow};
use super::schema::{quittances, rappels};
use super::DbPool;
use crate::domain::{
    Partie, Periode, Quittance, QuittanceId, Rappel, RappelId, StatutQuittance, StatutRappel,
};
use crate::error::{Error, Result};
use crate::port::outbound::{QuittanceStore, RappelStore};

/// SQLite-backed reminder store.
pub struct SqliteRappelStore {
    pool: DbPool,
}

impl SqliteRappelStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn to_row(rappel: &Rappel) -> Result<RappelRow> {
        Ok(RappelRow {
            id: rappel.id.to_string(),
            echeance: rappel.echeance.to_string(),
            donnees: serde_json::to_string(&rappel.donnees)?,
            statut: rappel.statut.as_str().to_string(),
            cree_le: rappel.cree_le.to_rfc3339(),
        })
    }

    fn from_row(row: RappelRow) -> Result<Rappel> {
        let id = Uuid::parse_str(&row.id).map_err(|e| Error::Parse(e.to_string()))?;
        let echeance =
            NaiveDate::from_str(&row.echeance).map_err(|e| Error::Parse(e.to_string()))?;
        let donnees = serde_json::from_str(&row.donnees)?;
        let statut = StatutRappel::parse(&row.statut)
            .ok_or_else(|| Error::Parse(format!("unknown reminder status '{}'", row.statut)))?;
        let cree_le: DateTime<Utc> = DateTime::parse_from_rfc3339(&row.cree_le)
            .map_err(|e| Error::Parse(e.to_string()))?
            .with_timezone(&Utc);

        Ok(Rappel {
            id: RappelId::from(id),
            echeance,
            donnees,
            statut,
            cree_le,
        })
    }
}

#[async_trait]
impl RappelStore for SqliteRappelStore {
    async fn save(&self, rappel: &Rappel) -> Result<()> {
        let row = Self::to_row(rappel)?;
        let mut conn = self
            .pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))?;

        diesel::replace_into(rappels::table)
            .values(&row)
            .execute(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(())
    }

    async fn get(&self, id: &RappelId) -> Result<Option<Rappel>> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))?;

        let row: Option<RappelRow> = rappels::table
            .find(id.to_string())
            .first(&mut conn)
            .optional()
            .map_err(|e| Error::Database(e.to_string()))?;

        row.map(Self::from_row).transpose()
    }

    async fn list(&self, inclure_annules: bool) -> Result<Vec<Rappel>> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))?;

        let requete = rappels::table.order(rappels::echeance.desc());
        let rows: Vec<RappelRow> = if inclure_annules {
            requete
                .load(&mut conn)
                .map_err(|e| Error::Database(e.to_string()))?
        } else {
            requete
                .filter(rappels::statut.ne(StatutRappel::Annule.as_str()))
                .load(&mut conn)
                .map_err(|e| Error::Database(e.to_string()))?
        };

        rows.into_iter().map(Self::from_row).collect()
    }

    async fn cancel(&self, id: &RappelId) -> Result<bool> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))?;

        let modifie = diesel::update(rappels::table.find(id.to_string()))
            .set(rappels::statut.eq(StatutRappel::Annule.as_str()))
            .execute(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(modifie > 0)
    }
}

/// SQLite-backed receipt store.
pub struct SqliteQuittanceStore {
    pool: DbPool,
}

impl SqliteQuittanceStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn to_row(quittance: &Quittance) -> QuittanceRow {
        QuittanceRow {
            id: quittance.id.to_string(),
            bailleur_nom: quittance.bailleur.nom.clone(),
            bailleur_adresse: quittance.bailleur.adresse.clone(),
            locataire: quittance.locataire.clone(),
            adresse_location: quittance.adresse_location.clone(),
            periode_mois: quittance.periode.mois as i32,
            periode_annee: quittance.periode.annee,
            loyer: quittance.loyer.to_string(),
            charges: quittance.charges.to_string(),
            lieu: quittance.lieu.clone(),
            date_emission: quittance.date_emission.to_string(),
            statut: quittance.statut.as_str().to_string(),
        }
    }

    fn from_row(row: QuittanceRow) -> Result<Quittance> {
        let id = Uuid::parse_str(&row.id).map_err(|e| Error::Parse(e.to_string()))?;
        let loyer = Decimal::from_str(&row.loyer).map_err(|e| Error::Parse(e.to_string()))?;
        let charges = Decimal::from_str(&row.charges).map_err(|e| Error::Parse(e.to_string()))?;
        let date_emission =
            NaiveDate::from_str(&row.date_emission).map_err(|e| Error::Parse(e.to_string()))?;
        let statut = StatutQuittance::parse(&row.statut)
            .ok_or_else(|| Error::Parse(format!("unknown receipt status '{}'", row.statut)))?;

        Ok(Quittance {
            id: QuittanceId::from(id),
            bailleur: Partie {
                nom: row.bailleur_nom,
                adresse: row.bailleur_adresse,
            },
            locataire: row.locataire,
            adresse_location: row.adresse_location,
            periode: Periode {
                mois: row.periode_mois as u32,
                annee: row.periode_annee,
            },
            loyer,
            charges,
            lieu: row.lieu,
            date_emission,
            statut,
        })
    }
}

#[async_trait]
impl QuittanceStore for SqliteQuittanceStore {
    async fn save(&self, quittance: &Quittance) -> Result<()> {
        let row = Self::to_row(quittance);
        let mut conn = self
            .pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))?;

        diesel::replace_into(quittances::table)
            .values(&row)
            .execute(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(())
    }

    async fn mark_sent(&self, id: &QuittanceId) -> Result<bool> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))?;

        let modifie = diesel::update(quittances::table.find(id.to_string()))
            .set(quittances::statut.eq(StatutQuittance::Envoyee.as_str()))
            .execute(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(modifie > 0)
    }

    async fn list(&self) -> Result<Vec<Quittance>> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))?;

        let rows: Vec<QuittanceRow> = quittances::table
            .order((quittances::periode_annee.desc(), quittances::periode_mois.desc()))
            .load(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        rows.into_iter().map(Self::from_row).collect()
    }
}
