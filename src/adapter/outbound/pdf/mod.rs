//! Receipt PDF rendering.
//!
//! Produces a fixed-layout single-page A4 document following the usual
//! French legal receipt template: landlord and tenant blocks, the rental
//! address, the attestation sentence with the amount spelled out in words,
//! the rent/charges breakdown and the place and date of issue.

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference};

use crate::domain::calendar::date_longue;
use crate::domain::lettres::montant_en_lettres;
use crate::domain::montant::format_eur;
use crate::domain::Quittance;
use crate::error::{Error, Result};

const LARGEUR: f32 = 210.0;
const MARGE: f32 = 20.0;
const INTERLIGNE: f32 = 6.0;
// Helvetica at 10pt fits roughly this many characters between the margins.
const LARGEUR_LIGNE: usize = 88;

/// Render a receipt as a PDF byte buffer the caller saves as `.pdf` or
/// attaches to an email.
pub fn rendre_quittance(quittance: &Quittance) -> Result<Vec<u8>> {
    let (doc, page, calque) =
        PdfDocument::new("Quittance de loyer", Mm(LARGEUR), Mm(297.0), "Page 1");
    let police = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| Error::Pdf(e.to_string()))?;
    let police_grasse = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| Error::Pdf(e.to_string()))?;

    let calque = doc.get_page(page).get_layer(calque);
    let mut curseur = Curseur {
        calque,
        y: 270.0,
    };

    curseur.titre("QUITTANCE DE LOYER", &police_grasse);
    curseur.ligne(
        &format!("Mois de {}", quittance.periode.label()),
        &police,
    );
    curseur.sauter(2.0);

    curseur.ligne("BAILLEUR", &police_grasse);
    curseur.ligne(&quittance.bailleur.nom, &police);
    curseur.ligne(&quittance.bailleur.adresse, &police);
    curseur.sauter(1.0);

    curseur.ligne("LOCATAIRE", &police_grasse);
    curseur.ligne(&quittance.locataire, &police);
    curseur.sauter(1.0);

    curseur.ligne("ADRESSE DE LA LOCATION", &police_grasse);
    curseur.ligne(&quittance.adresse_location, &police);
    curseur.sauter(2.0);

    let attestation = format!(
        "Je soussigné(e) {bailleur}, bailleur, déclare avoir reçu de {locataire} la somme de \
         {total} ({lettres}), au titre du paiement du loyer et des charges pour la période de \
         location du mois de {periode}, et lui en donne quittance, sous réserve de tous mes \
         droits.",
        bailleur = quittance.bailleur.nom,
        locataire = quittance.locataire,
        total = format_eur(quittance.total()),
        lettres = montant_en_lettres(quittance.total()),
        periode = quittance.periode.label(),
    );
    curseur.paragraphe(&attestation, &police);
    curseur.sauter(2.0);

    curseur.ligne("DÉTAIL DU RÈGLEMENT", &police_grasse);
    curseur.ligne(
        &format!("Loyer : {}", format_eur(quittance.loyer)),
        &police,
    );
    curseur.ligne(
        &format!("Charges : {}", format_eur(quittance.charges)),
        &police,
    );
    curseur.ligne(
        &format!("Total : {}", format_eur(quittance.total())),
        &police_grasse,
    );
    curseur.sauter(2.0);

    curseur.ligne(
        &format!(
            "Fait à {}, le {}",
            quittance.lieu,
            date_longue(quittance.date_emission)
        ),
        &police,
    );
    curseur.sauter(3.0);

    curseur.paragraphe(
        "Cette quittance annule tous les reçus qui auraient pu être établis précédemment en cas \
         de paiement partiel du montant du présent terme. Elle est à conserver pendant trois ans \
         par le locataire (article 7-1 de la loi n° 89-462 du 6 juillet 1989).",
        &police,
    );

    doc.save_to_bytes().map_err(|e| Error::Pdf(e.to_string()))
}

struct Curseur {
    calque: PdfLayerReference,
    y: f32,
}

impl Curseur {
    fn titre(&mut self, texte: &str, police: &IndirectFontRef) {
        self.calque
            .use_text(texte, 16.0, Mm(MARGE), Mm(self.y), police);
        self.y -= INTERLIGNE * 2.0;
    }

    fn ligne(&mut self, texte: &str, police: &IndirectFontRef) {
        self.calque
            .use_text(texte, 10.0, Mm(MARGE), Mm(self.y), police);
        self.y -= INTERLIGNE;
    }

    fn paragraphe(&mut self, texte: &str, police: &IndirectFontRef) {
        for ligne in decouper(texte, LARGEUR_LIGNE) {
            self.ligne(&ligne, police);
        }
    }

    fn sauter(&mut self, lignes: f32) {
        self.y -= INTERLIGNE * lignes;
    }
}

/// Greedy word wrap.
fn decouper(texte: &str, largeur: usize) -> Vec<String> {
    let mut lignes = Vec::new();
    let mut courante = String::new();

    for mot in texte.split_whitespace() {
        if !courante.is_empty() && courante.chars().count() + 1 + mot.chars().count() > largeur {
            lignes.push(std::mem::take(&mut courante));
        }
        if !courante.is_empty() {
            courante.push(' ');
        }
        courante.push_str(mot);
    }
    if !courante.is_empty() {
        lignes.push(courante);
    }
    lignes
}
