//! Email port.

use async_trait::async_trait;

use crate::error::Result;

/// A binary attachment, typically the rendered receipt PDF.
#[derive(Debug, Clone)]
pub struct PieceJointe {
    pub nom: String,
    pub contenu: Vec<u8>,
    pub type_mime: String,
}

impl PieceJointe {
    pub fn pdf(nom: impl Into<String>, contenu: Vec<u8>) -> Self {
        Self {
            nom: nom.into(),
            contenu,
            type_mime: "application/pdf".to_string(),
        }
    }
}

/// An outgoing email.
#[derive(Debug, Clone)]
pub struct Courriel {
    pub destinataire: String,
    pub sujet: String,
    pub corps: String,
    pub piece_jointe: Option<PieceJointe>,
}

/// Sends email. Failures surface as an error the caller reports once; there
/// is no automatic retry.
#[async_trait]
pub trait Courrier: Send + Sync {
    async fn send(&self, courriel: Courriel) -> Result<()>;
}
