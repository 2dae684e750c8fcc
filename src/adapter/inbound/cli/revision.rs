//! `quittance revision` handler.

use chrono::Utc;

use super::command::RevisionArgs;
use super::output;
use crate::app::{App, ServiceRevision};
use crate::domain::calendar::{date_longue, Trimestre};
use crate::domain::montant::format_eur;
use crate::domain::revision::{reviser, CourrierRevision, ReferenceBail};
use crate::error::{Error, Result};

pub async fn executer(args: RevisionArgs, app: &App) -> Result<()> {
    let table = app.config().table_irl()?;

    let reference = match (args.trimestre, args.mois) {
        (Some(trimestre), _) => ReferenceBail::Trimestre {
            annee: args.annee,
            trimestre: Trimestre::try_from(trimestre).map_err(Error::Parse)?,
        },
        (None, Some(mois)) => ReferenceBail::Signature {
            annee: args.annee,
            mois,
        },
        (None, None) => {
            return Err(Error::Parse(
                "either --trimestre or --mois is required".to_string(),
            ))
        }
    };

    let aujourd_hui = Utc::now().date_naive();
    let revision = reviser(args.loyer, reference, &table, aujourd_hui)?;

    if output::is_json() {
        output::resultat("revision", serde_json::to_value(&revision)?);
    } else {
        output::section("Révision du loyer");
        output::field(
            "Indice référence",
            format!(
                "{} {} : {}",
                revision.trimestre, revision.annee_reference, revision.indice_reference
            ),
        );
        output::field(
            "Indice récent",
            format!(
                "{} {} : {}",
                revision.trimestre, revision.annee_recente, revision.indice_recent
            ),
        );
        output::field("Loyer actuel", format_eur(args.loyer));
        output::field("Nouveau loyer", format_eur(revision.nouveau_loyer));
        output::field("Gain mensuel", format_eur(revision.gain_mensuel));
        output::field("Gain annuel", format_eur(revision.gain_annuel));

        match revision.delai.avertissement() {
            Some(avertissement) => output::warning(avertissement),
            None => output::success("révision applicable dès maintenant"),
        }
    }

    if let Some(chemin) = &args.lettre {
        let bailleur = app.config().bailleur.as_ref();
        let lettre = CourrierRevision {
            bailleur: bailleur.map(|b| b.nom.as_str()).unwrap_or(""),
            adresse_bailleur: bailleur.map(|b| b.adresse.as_str()).unwrap_or(""),
            locataire: args.locataire.as_deref().unwrap_or(""),
            adresse_location: args.adresse.as_deref().unwrap_or(""),
            loyer_actuel: args.loyer,
            revision: &revision,
            date: aujourd_hui,
        }
        .rediger();
        std::fs::write(chemin, lettre)?;
        output::success(&format!("lettre écrite dans {}", chemin.display()));
    }

    if args.rappel {
        let service = ServiceRevision::new(table, app.rappel_store()?);
        let rappel = service
            .planifier_rappel(&revision, reference, aujourd_hui)
            .await?;
        output::success(&format!(
            "rappel {} planifié pour le {}",
            rappel.id,
            date_longue(rappel.echeance)
        ));
    }

    Ok(())
}
