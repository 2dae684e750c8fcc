//! `quittance rappel` handlers.

use tabled::{Table, Tabled};
use uuid::Uuid;

use super::output;
use crate::app::App;
use crate::domain::RappelId;
use crate::error::Result;

#[derive(Tabled)]
struct LigneRappel {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Échéance")]
    echeance: String,
    #[tabled(rename = "Statut")]
    statut: String,
    #[tabled(rename = "Créé le")]
    cree_le: String,
}

pub async fn lister(tous: bool, app: &App) -> Result<()> {
    let store = app.rappel_store()?;
    let rappels = store.list(tous).await?;

    if output::is_json() {
        output::resultat("rappels", serde_json::to_value(&rappels)?);
        return Ok(());
    }

    if rappels.is_empty() {
        output::success("aucun rappel");
        return Ok(());
    }

    let lignes: Vec<LigneRappel> = rappels
        .iter()
        .map(|rappel| LigneRappel {
            id: rappel.id.to_string(),
            echeance: rappel.echeance.to_string(),
            statut: rappel.statut.as_str().to_string(),
            cree_le: rappel.cree_le.format("%Y-%m-%d").to_string(),
        })
        .collect();

    println!("{}", Table::new(lignes));
    Ok(())
}

pub async fn annuler(id: Uuid, app: &App) -> Result<()> {
    let store = app.rappel_store()?;
    let id = RappelId::from(id);

    if store.cancel(&id).await? {
        output::success(&format!("rappel {id} annulé"));
    } else {
        output::error(&format!("aucun rappel avec l'id {id}"));
        std::process::exit(1);
    }
    Ok(())
}
