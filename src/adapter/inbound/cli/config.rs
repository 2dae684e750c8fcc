//! `quittance config valider` handler.

use super::output;
use crate::app::App;
use crate::error::Result;

pub fn valider(app: &App) -> Result<()> {
    // Loading already validated the file; report what the commands will use.
    let config = app.config();

    output::success("configuration valide");
    output::field("Base de données", &config.database.url);
    output::field(
        "Bailleur",
        config
            .bailleur
            .as_ref()
            .map(|b| b.nom.as_str())
            .unwrap_or("(non configuré)"),
    );
    output::field(
        "SMTP",
        config
            .smtp
            .as_ref()
            .map(|s| s.host.as_str())
            .unwrap_or("(non configuré)"),
    );
    output::field("Indices IRL", config.table_irl()?.len());

    Ok(())
}
