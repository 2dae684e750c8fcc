//! `quittance quittance generer` and `quittance quittance envoyer` handlers.

use chrono::Utc;
use serde_json::json;

use super::command::{EnvoyerArgs, GenererArgs};
use super::output;
use crate::adapter::outbound::pdf::rendre_quittance;
use crate::app::{App, DemandeEnvoi, ServiceEnvoi};
use crate::domain::{Partie, Periode, Quittance, QuittanceId, StatutQuittance};
use crate::error::{Error, Result};

pub fn generer(args: GenererArgs, app: &App) -> Result<()> {
    let config_bailleur = app.config().bailleur.as_ref();

    let nom = args
        .bailleur
        .or_else(|| config_bailleur.map(|b| b.nom.clone()))
        .ok_or_else(|| {
            Error::Parse("no landlord: pass --bailleur or set [bailleur] in the config".to_string())
        })?;
    let adresse = args
        .bailleur_adresse
        .or_else(|| config_bailleur.map(|b| b.adresse.clone()))
        .unwrap_or_default();
    let lieu = args
        .lieu
        .or_else(|| config_bailleur.and_then(|b| b.lieu.clone()))
        .unwrap_or_default();

    let quittance = Quittance {
        id: QuittanceId::new(),
        bailleur: Partie { nom, adresse },
        locataire: args.locataire,
        adresse_location: args.adresse,
        periode: Periode {
            mois: args.mois,
            annee: args.annee,
        },
        loyer: args.loyer,
        charges: args.charges,
        lieu,
        date_emission: args.date.unwrap_or_else(|| Utc::now().date_naive()),
        statut: StatutQuittance::EnAttente,
    };

    let octets = rendre_quittance(&quittance)?;
    std::fs::write(&args.sortie, &octets)?;

    if output::is_json() {
        output::resultat(
            "quittance",
            json!({
                "fichier": args.sortie.display().to_string(),
                "octets": octets.len(),
                "periode": quittance.periode.label(),
            }),
        );
    } else {
        output::success(&format!(
            "quittance {} écrite dans {}",
            quittance.periode.label(),
            args.sortie.display()
        ));
    }

    Ok(())
}

pub async fn envoyer(args: EnvoyerArgs, app: &App) -> Result<()> {
    let payload = std::fs::read_to_string(&args.payload)?;
    let demande: DemandeEnvoi = serde_json::from_str(&payload)?;

    let service = ServiceEnvoi::new(app.courrier()?, app.quittance_store()?);
    let reponse = service.envoyer(demande).await;

    if output::is_json() {
        output::resultat("envoi", serde_json::to_value(&reponse)?);
    } else if reponse.success {
        output::success(&format!(
            "quittance {} envoyée",
            reponse.quittance_id.as_deref().unwrap_or("?")
        ));
    }

    if let Some(erreur) = reponse.error {
        output::error(&erreur);
        std::process::exit(1);
    }

    Ok(())
}
