//! French spelling of monetary amounts.
//!
//! The legal attestation on a rent receipt spells the amount out in words
//! ("neuf cents euros"). French numerals are irregular: 70-79 build on
//! soixante, 80-99 on quatre-vingt, "et un" replaces the hyphen after tens
//! up to soixante, and "vingts"/"cents" take a plural s only when nothing
//! follows them. "mille" is invariant; "million" and "milliard" are nouns
//! and keep their plural regardless of what follows.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use super::montant::arrondir;

const UNITES: [&str; 17] = [
    "zéro", "un", "deux", "trois", "quatre", "cinq", "six", "sept", "huit", "neuf", "dix", "onze",
    "douze", "treize", "quatorze", "quinze", "seize",
];

const DIZAINES: [&str; 5] = ["vingt", "trente", "quarante", "cinquante", "soixante"];

/// 0-99. `suivi` is true when another numeral word follows, which drops the
/// plural s of a bare "quatre-vingts".
fn moins_de_cent(n: u64, suivi: bool) -> String {
    debug_assert!(n < 100);
    match n {
        0..=16 => UNITES[n as usize].to_string(),
        17..=19 => format!("dix-{}", UNITES[(n - 10) as usize]),
        20..=69 => {
            let dizaine = DIZAINES[(n / 10 - 2) as usize];
            match n % 10 {
                0 => dizaine.to_string(),
                1 => format!("{dizaine} et un"),
                unite => format!("{dizaine}-{}", UNITES[unite as usize]),
            }
        }
        70..=79 => {
            if n == 71 {
                "soixante et onze".to_string()
            } else {
                format!("soixante-{}", moins_de_cent(n - 60, suivi))
            }
        }
        80 => {
            if suivi {
                "quatre-vingt".to_string()
            } else {
                "quatre-vingts".to_string()
            }
        }
        _ => format!("quatre-vingt-{}", moins_de_cent(n - 80, suivi)),
    }
}

/// 0-999, with the same trailing-s rule for "cents".
fn moins_de_mille(n: u64, suivi: bool) -> String {
    debug_assert!(n < 1000);
    let centaines = n / 100;
    let reste = n % 100;

    if centaines == 0 {
        return moins_de_cent(reste, suivi);
    }

    let cent = if centaines == 1 {
        "cent".to_string()
    } else {
        format!("{} cent", moins_de_cent(centaines, true))
    };

    if reste == 0 {
        if centaines > 1 && !suivi {
            format!("{cent}s")
        } else {
            cent
        }
    } else {
        format!("{cent} {}", moins_de_cent(reste, suivi))
    }
}

/// Largest spellable number; anything past it saturates.
const PLAFOND: u64 = 999_999_999_999;

/// Spell a cardinal number in French, up to 999 999 999 999.
pub fn nombre_en_lettres(n: u64) -> String {
    if n == 0 {
        return "zéro".to_string();
    }
    let n = n.min(PLAFOND);

    let milliards = n / 1_000_000_000;
    let millions = (n % 1_000_000_000) / 1_000_000;
    let milliers = (n % 1_000_000) / 1000;
    let unites = n % 1000;

    let mut morceaux = Vec::new();

    if milliards > 0 {
        let pluriel = if milliards > 1 { "s" } else { "" };
        morceaux.push(format!(
            "{} milliard{pluriel}",
            moins_de_mille(milliards, false)
        ));
    }

    if millions > 0 {
        let pluriel = if millions > 1 { "s" } else { "" };
        morceaux.push(format!(
            "{} million{pluriel}",
            moins_de_mille(millions, false)
        ));
    }

    if milliers > 0 {
        // "mille" is invariant and never takes "un" in front.
        if milliers == 1 {
            morceaux.push("mille".to_string());
        } else {
            morceaux.push(format!("{} mille", moins_de_mille(milliers, true)));
        }
    }

    if unites > 0 {
        morceaux.push(moins_de_mille(unites, false));
    }

    morceaux.join(" ")
}

/// Spell a monetary amount in French, down to centimes.
///
/// Negative amounts are treated as zero, matching the receipt generator's
/// handling of malformed input.
pub fn montant_en_lettres(montant: Decimal) -> String {
    let montant = if montant.is_sign_negative() {
        Decimal::ZERO
    } else {
        montant
    };
    let montant = arrondir(montant);

    let euros = montant.trunc().to_u64().unwrap_or(0);
    let centimes = (montant.fract() * Decimal::ONE_HUNDRED)
        .to_u64()
        .unwrap_or(0);

    let pluriel_euros = if euros >= 2 { "s" } else { "" };
    let mut texte = format!("{} euro{pluriel_euros}", nombre_en_lettres(euros));

    if centimes > 0 {
        let pluriel_centimes = if centimes >= 2 { "s" } else { "" };
        texte.push_str(&format!(
            " et {} centime{pluriel_centimes}",
            nombre_en_lettres(centimes)
        ));
    }

    texte
}
