//! IRL rent revision.
//!
//! A residential rent can be revised once a year by the ratio between the
//! most recent IRL value and the value of the lease's reference quarter.
//! The right to revise lapses: past 12 months the increase is overdue, and
//! past 24 months the back-payments are likely lost.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::calendar::{self, Trimestre};
use super::error::DomainError;
use super::irl::IrlTable;
use super::montant::{arrondir, format_eur};

/// The lease's reference period, either an explicit IRL quarter or the
/// signature month the quarter is derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReferenceBail {
    Trimestre { annee: i32, trimestre: Trimestre },
    Signature { annee: i32, mois: u32 },
}

impl ReferenceBail {
    /// The (year, quarter) pair to look up in the IRL table.
    pub fn trimestre(&self) -> Result<(i32, Trimestre), DomainError> {
        match *self {
            ReferenceBail::Trimestre { annee, trimestre } => Ok((annee, trimestre)),
            ReferenceBail::Signature { annee, mois } => {
                let trimestre = Trimestre::depuis_mois(mois)
                    .ok_or(DomainError::DateInvalide { annee, mois })?;
                Ok((annee, trimestre))
            }
        }
    }

    /// Start date the timing policy counts from: the signature month, or the
    /// first month of an explicit quarter.
    pub fn date_de_depart(&self) -> Result<NaiveDate, DomainError> {
        let (annee, mois) = match *self {
            ReferenceBail::Trimestre { annee, trimestre } => (annee, trimestre.premier_mois()),
            ReferenceBail::Signature { annee, mois } => (annee, mois),
        };
        NaiveDate::from_ymd_opt(annee, mois, 1).ok_or(DomainError::DateInvalide { annee, mois })
    }
}

/// Where the revision stands relative to the one-year legal window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DelaiRevision {
    /// The anniversary has just passed; revision can be applied now.
    Applicable,
    /// Less than 12 months since the reference date.
    PasEncoreApplicable,
    /// 13 to 24 months: still possible, but the increase is overdue.
    EnRetard,
    /// More than 24 months: back-payments are likely lost.
    ProbablementPerdue,
}

impl DelaiRevision {
    /// Classify an elapsed duration in whole months.
    pub fn depuis_mois(mois_ecoules: i32) -> Self {
        if mois_ecoules < 12 {
            DelaiRevision::PasEncoreApplicable
        } else if mois_ecoules == 12 {
            DelaiRevision::Applicable
        } else if mois_ecoules <= 24 {
            DelaiRevision::EnRetard
        } else {
            DelaiRevision::ProbablementPerdue
        }
    }

    /// User-facing warning, if any.
    pub fn avertissement(&self) -> Option<&'static str> {
        match self {
            DelaiRevision::Applicable => None,
            DelaiRevision::PasEncoreApplicable => {
                Some("révision pas encore applicable : moins de 12 mois depuis la référence")
            }
            DelaiRevision::EnRetard => {
                Some("révision encore possible mais en retard (entre 13 et 24 mois)")
            }
            DelaiRevision::ProbablementPerdue => {
                Some("révision probablement perdue : plus de 24 mois depuis la référence")
            }
        }
    }
}

/// Result of a rent revision calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Revision {
    pub nouveau_loyer: Decimal,
    pub gain_mensuel: Decimal,
    pub gain_annuel: Decimal,
    pub indice_reference: Decimal,
    pub indice_recent: Decimal,
    pub annee_reference: i32,
    pub annee_recente: i32,
    pub trimestre: Trimestre,
    pub delai: DelaiRevision,
}

/// Compute the revised rent.
///
/// `nouveau_loyer = loyer * indice_recent / indice_reference`, rounded to
/// centimes. The timing flag is computed against `aujourd_hui`, which the
/// caller supplies so the function stays pure.
pub fn reviser(
    loyer: Decimal,
    reference: ReferenceBail,
    table: &IrlTable,
    aujourd_hui: NaiveDate,
) -> Result<Revision, DomainError> {
    if loyer <= Decimal::ZERO {
        return Err(DomainError::MontantInvalide {
            reason: format!("rent must be positive, got {loyer}"),
        });
    }

    let (annee_reference, trimestre) = reference.trimestre()?;
    let indice_reference =
        table
            .indice(annee_reference, trimestre)
            .ok_or(DomainError::IndiceIntrouvable {
                annee: annee_reference,
                trimestre,
            })?;

    let (annee_recente, indice_recent) =
        table
            .indice_recent(trimestre)
            .ok_or(DomainError::IndiceIntrouvable {
                annee: table.annee_la_plus_recente().unwrap_or(annee_reference),
                trimestre,
            })?;

    let nouveau_loyer = arrondir(loyer * indice_recent / indice_reference);
    let gain_mensuel = nouveau_loyer - arrondir(loyer);
    let gain_annuel = arrondir(gain_mensuel * Decimal::from(12));

    let depart = reference.date_de_depart()?;
    let delai = DelaiRevision::depuis_mois(calendar::mois_ecoules(depart, aujourd_hui));

    Ok(Revision {
        nouveau_loyer,
        gain_mensuel,
        gain_annuel,
        indice_reference,
        indice_recent,
        annee_reference,
        annee_recente,
        trimestre,
        delai,
    })
}

/// Context for rendering the formal revision letter.
#[derive(Debug, Clone)]
pub struct CourrierRevision<'a> {
    pub bailleur: &'a str,
    pub adresse_bailleur: &'a str,
    pub locataire: &'a str,
    pub adresse_location: &'a str,
    pub loyer_actuel: Decimal,
    pub revision: &'a Revision,
    pub date: NaiveDate,
}

impl CourrierRevision<'_> {
    /// Render the letter body, ready for postal mail.
    pub fn rediger(&self) -> String {
        let r = self.revision;
        format!(
            "{bailleur}\n{adresse_bailleur}\n\nÀ l'attention de {locataire}\n{adresse_location}\n\n\
             Objet : révision annuelle du loyer (indice de référence des loyers)\n\n\
             Le {date},\n\n\
             Madame, Monsieur,\n\n\
             Conformément à la clause de révision prévue au bail, le loyer est révisé selon \
             l'évolution de l'indice de référence des loyers publié par l'INSEE.\n\n\
             Indice de référence ({trimestre} {annee_reference}) : {indice_reference}\n\
             Indice le plus récent ({trimestre} {annee_recente}) : {indice_recent}\n\n\
             Le loyer mensuel hors charges, actuellement de {loyer_actuel}, est porté à \
             {nouveau_loyer}, soit une augmentation de {gain_mensuel} par mois à compter du \
             prochain terme.\n\n\
             Je vous prie d'agréer, Madame, Monsieur, l'expression de mes salutations \
             distinguées.\n\n\
             {bailleur}",
            bailleur = self.bailleur,
            adresse_bailleur = self.adresse_bailleur,
            locataire = self.locataire,
            adresse_location = self.adresse_location,
            date = calendar::date_longue(self.date),
            trimestre = r.trimestre,
            annee_reference = r.annee_reference,
            indice_reference = r.indice_reference,
            annee_recente = r.annee_recente,
            indice_recent = r.indice_recent,
            loyer_actuel = format_eur(self.loyer_actuel),
            nouveau_loyer = format_eur(r.nouveau_loyer),
            gain_mensuel = format_eur(r.gain_mensuel),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn table_scenario() -> IrlTable {
        IrlTable::from_entrees([
            (2015, Trimestre::T3, dec!(125.50)),
            (2025, Trimestre::T3, dec!(145.80)),
        ])
    }

    fn jour(annee: i32, mois: u32, jour: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(annee, mois, jour).unwrap()
    }

    #[test]
    fn revision_ratio_des_indices() {
        let table = table_scenario();
        let reference = ReferenceBail::Trimestre {
            annee: 2015,
            trimestre: Trimestre::T3,
        };

        let revision = reviser(dec!(800), reference, &table, jour(2025, 11, 1)).unwrap();

        // 800 * 145.80 / 125.50
        assert_eq!(revision.nouveau_loyer, dec!(929.40));
        assert_eq!(revision.gain_mensuel, dec!(129.40));
        assert_eq!(revision.gain_annuel, dec!(1552.80));
        assert_eq!(revision.indice_reference, dec!(125.50));
        assert_eq!(revision.indice_recent, dec!(145.80));
        assert_eq!(revision.annee_recente, 2025);
    }

    #[test]
    fn revision_aller_retour_reciproque() {
        let table = IrlTable::from_entrees([
            (2020, Trimestre::T1, dec!(125.50)),
            (2024, Trimestre::T1, dec!(145.80)),
        ]);
        let aller = reviser(
            dec!(800),
            ReferenceBail::Trimestre {
                annee: 2020,
                trimestre: Trimestre::T1,
            },
            &table,
            jour(2024, 6, 1),
        )
        .unwrap();

        let inverse = IrlTable::from_entrees([
            (2020, Trimestre::T1, dec!(145.80)),
            (2024, Trimestre::T1, dec!(125.50)),
        ]);
        let retour = reviser(
            aller.nouveau_loyer,
            ReferenceBail::Trimestre {
                annee: 2020,
                trimestre: Trimestre::T1,
            },
            &inverse,
            jour(2024, 6, 1),
        )
        .unwrap();

        // Round trip under reciprocal indices recovers the rent to the centime.
        assert!((retour.nouveau_loyer - dec!(800)).abs() <= dec!(0.01));
    }

    #[test]
    fn reference_par_mois_de_signature() {
        let table = table_scenario();
        let reference = ReferenceBail::Signature {
            annee: 2015,
            mois: 8,
        };

        let revision = reviser(dec!(800), reference, &table, jour(2025, 11, 1)).unwrap();
        assert_eq!(revision.trimestre, Trimestre::T3);
        assert_eq!(revision.nouveau_loyer, dec!(929.40));
    }

    #[test]
    fn indice_manquant_reporte_sans_paniquer() {
        let table = table_scenario();
        let reference = ReferenceBail::Trimestre {
            annee: 1990,
            trimestre: Trimestre::T3,
        };

        let erreur = reviser(dec!(800), reference, &table, jour(2025, 11, 1)).unwrap_err();
        assert_eq!(
            erreur,
            DomainError::IndiceIntrouvable {
                annee: 1990,
                trimestre: Trimestre::T3,
            }
        );
    }

    #[test]
    fn loyer_negatif_refuse() {
        let table = table_scenario();
        let reference = ReferenceBail::Trimestre {
            annee: 2015,
            trimestre: Trimestre::T3,
        };
        assert!(matches!(
            reviser(dec!(-10), reference, &table, jour(2025, 11, 1)),
            Err(DomainError::MontantInvalide { .. })
        ));
    }

    #[test]
    fn mois_de_signature_invalide() {
        let reference = ReferenceBail::Signature {
            annee: 2020,
            mois: 13,
        };
        assert!(matches!(
            reference.trimestre(),
            Err(DomainError::DateInvalide { .. })
        ));
    }

    #[test]
    fn politique_de_delai() {
        assert_eq!(
            DelaiRevision::depuis_mois(8),
            DelaiRevision::PasEncoreApplicable
        );
        assert_eq!(DelaiRevision::depuis_mois(12), DelaiRevision::Applicable);
        assert_eq!(DelaiRevision::depuis_mois(20), DelaiRevision::EnRetard);
        assert_eq!(DelaiRevision::depuis_mois(24), DelaiRevision::EnRetard);
        assert_eq!(
            DelaiRevision::depuis_mois(30),
            DelaiRevision::ProbablementPerdue
        );
    }

    #[test]
    fn delai_calcule_depuis_la_reference() {
        let table = IrlTable::from_entrees([
            (2024, Trimestre::T1, dec!(143.46)),
            (2025, Trimestre::T1, dec!(146.00)),
        ]);
        let reference = ReferenceBail::Trimestre {
            annee: 2024,
            trimestre: Trimestre::T1,
        };

        // 8 months after January 2024.
        let tot = reviser(dec!(700), reference, &table, jour(2024, 9, 15)).unwrap();
        assert_eq!(tot.delai, DelaiRevision::PasEncoreApplicable);

        // 20 months after.
        let tard = reviser(dec!(700), reference, &table, jour(2025, 9, 15)).unwrap();
        assert_eq!(tard.delai, DelaiRevision::EnRetard);
    }

    #[test]
    fn lettre_contient_les_deux_indices() {
        let table = table_scenario();
        let revision = reviser(
            dec!(800),
            ReferenceBail::Trimestre {
                annee: 2015,
                trimestre: Trimestre::T3,
            },
            &table,
            jour(2025, 11, 1),
        )
        .unwrap();

        let lettre = CourrierRevision {
            bailleur: "Jean Dupont",
            adresse_bailleur: "1 rue de la Paix, 75002 Paris",
            locataire: "Marie Martin",
            adresse_location: "12 avenue des Lilas, 69003 Lyon",
            loyer_actuel: dec!(800),
            revision: &revision,
            date: jour(2025, 11, 1),
        }
        .rediger();

        assert!(lettre.contains("125.50"));
        assert!(lettre.contains("145.80"));
        assert!(lettre.contains("929,40 €"));
        assert!(lettre.contains("3e trimestre 2015"));
        assert!(lettre.contains("1 novembre 2025"));
    }
}
