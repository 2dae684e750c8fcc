//! `quittance prorata` handler.

use rust_decimal::Decimal;

use super::command::ProrataArgs;
use super::output;
use crate::domain::montant::format_eur;
use crate::domain::prorata::{calculer, Occupation};
use crate::error::{Error, Result};

pub fn executer(args: ProrataArgs) -> Result<()> {
    let occupation = match (args.entree, args.sortie) {
        (Some(entree), Some(sortie)) => Occupation::Periode { entree, sortie },
        (Some(entree), None) => Occupation::Entree(entree),
        (None, Some(sortie)) => Occupation::Sortie(sortie),
        (None, None) => {
            return Err(Error::Parse(
                "either --entree or --sortie is required".to_string(),
            ))
        }
    };

    let prorata = calculer(args.loyer, args.charges, occupation)?;

    if output::is_json() {
        output::resultat("prorata", serde_json::to_value(&prorata)?);
        return Ok(());
    }

    output::section("Loyer au prorata");
    output::field(
        "Jours occupés",
        format!("{} / {}", prorata.jours_occupes, prorata.jours_dans_mois),
    );
    if output::verbosity() > 0 {
        let taux = (args.loyer + args.charges) / Decimal::from(prorata.jours_dans_mois);
        output::field("Taux journalier", format_eur(taux));
    }
    output::field("Loyer", format_eur(prorata.loyer));
    output::field("Charges", format_eur(prorata.charges));
    output::field("Total", format_eur(prorata.total));

    Ok(())
}
