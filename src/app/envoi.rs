//! The receipt-sending entry point.
//!
//! Accepts a JSON payload of landlord/tenant/period/amount fields, renders
//! the PDF, emails it and records the receipt. Failures come back as an
//! error string in the response; nothing is retried.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::adapter::outbound::pdf::rendre_quittance;
use crate::domain::{DomainError, Partie, Periode, Quittance, QuittanceId, StatutQuittance};
use crate::error::Result;
use crate::port::outbound::{Courriel, Courrier, PieceJointe, QuittanceStore};

/// JSON payload accepted by `quittance envoyer`.
#[derive(Debug, Clone, Deserialize)]
pub struct DemandeEnvoi {
    pub bailleur_nom: String,
    pub bailleur_adresse: String,
    pub locataire_nom: String,
    pub locataire_courriel: String,
    pub adresse_location: String,
    pub mois: u32,
    pub annee: i32,
    pub loyer: Decimal,
    pub charges: Decimal,
    /// Place of issue; defaults to the landlord's city being left blank.
    #[serde(default)]
    pub lieu: Option<String>,
    /// Issue date; defaults to today.
    #[serde(default)]
    pub date_emission: Option<NaiveDate>,
}

/// Outcome reported to the caller.
#[derive(Debug, Clone, Serialize)]
pub struct ReponseEnvoi {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quittance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Renders, emails and records receipts.
pub struct ServiceEnvoi {
    courrier: Arc<dyn Courrier>,
    quittances: Arc<dyn QuittanceStore>,
}

impl ServiceEnvoi {
    pub fn new(courrier: Arc<dyn Courrier>, quittances: Arc<dyn QuittanceStore>) -> Self {
        Self {
            courrier,
            quittances,
        }
    }

    /// Process a send request. Errors become a `ReponseEnvoi` with
    /// `success: false`; the caller decides whether to re-attempt.
    pub async fn envoyer(&self, demande: DemandeEnvoi) -> ReponseEnvoi {
        match self.executer(demande).await {
            Ok(id) => ReponseEnvoi {
                success: true,
                quittance_id: Some(id.to_string()),
                error: None,
            },
            Err(e) => {
                warn!(error = %e, "receipt send failed");
                ReponseEnvoi {
                    success: false,
                    quittance_id: None,
                    error: Some(e.to_string()),
                }
            }
        }
    }

    async fn executer(&self, demande: DemandeEnvoi) -> Result<QuittanceId> {
        if !(1..=12).contains(&demande.mois) {
            return Err(DomainError::DateInvalide {
                annee: demande.annee,
                mois: demande.mois,
            }
            .into());
        }

        let quittance = Quittance {
            id: QuittanceId::new(),
            bailleur: Partie {
                nom: demande.bailleur_nom,
                adresse: demande.bailleur_adresse,
            },
            locataire: demande.locataire_nom,
            adresse_location: demande.adresse_location,
            periode: Periode {
                mois: demande.mois,
                annee: demande.annee,
            },
            loyer: demande.loyer,
            charges: demande.charges,
            lieu: demande.lieu.unwrap_or_default(),
            date_emission: demande
                .date_emission
                .unwrap_or_else(|| Utc::now().date_naive()),
            statut: StatutQuittance::EnAttente,
        };

        let pdf = rendre_quittance(&quittance)?;
        self.quittances.save(&quittance).await?;

        let periode = quittance.periode.label();
        let courriel = Courriel {
            destinataire: demande.locataire_courriel,
            sujet: format!("Votre quittance de loyer - {periode}"),
            corps: format!(
                "Bonjour {locataire},\n\nVeuillez trouver ci-joint votre quittance de loyer \
                 pour le mois de {periode}.\n\nCordialement,\n{bailleur}",
                locataire = quittance.locataire,
                bailleur = quittance.bailleur.nom,
            ),
            piece_jointe: Some(PieceJointe::pdf(
                format!("quittance-{}-{}.pdf", quittance.periode.annee, quittance.periode.mois),
                pdf,
            )),
        };

        self.courrier.send(courriel).await?;
        self.quittances.mark_sent(&quittance.id).await?;
        info!(id = %quittance.id, periode = %periode, "receipt sent");

        Ok(quittance.id)
    }
}
