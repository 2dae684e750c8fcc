//! SMTP email adapter using lettre.

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::{Attachment, Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::debug;

use crate::config::SmtpConfig;
use crate::error::{Error, Result};
use crate::port::outbound::{Courriel, Courrier};

/// SMTP-backed mailer. The password is read from the environment variable
/// named in the config, never stored in the config file itself.
pub struct SmtpCourrier {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    expediteur: Mailbox,
}

impl SmtpCourrier {
    pub fn from_config(config: &SmtpConfig) -> Result<Self> {
        let mot_de_passe = std::env::var(&config.mot_de_passe_env).map_err(|_| {
            Error::Mail(format!(
                "environment variable {} is not set",
                config.mot_de_passe_env
            ))
        })?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)
            .map_err(|e| Error::Mail(e.to_string()))?
            .port(config.port)
            .credentials(Credentials::new(
                config.utilisateur.clone(),
                mot_de_passe,
            ))
            .build();

        let expediteur: Mailbox = config
            .expediteur
            .parse()
            .map_err(|e| Error::Mail(format!("invalid from address: {e}")))?;

        Ok(Self {
            transport,
            expediteur,
        })
    }
}

#[async_trait]
impl Courrier for SmtpCourrier {
    async fn send(&self, courriel: Courriel) -> Result<()> {
        let destinataire: Mailbox = courriel
            .destinataire
            .parse()
            .map_err(|e| Error::Mail(format!("invalid recipient address: {e}")))?;

        let builder = Message::builder()
            .from(self.expediteur.clone())
            .to(destinataire)
            .subject(courriel.sujet.clone());

        let message = match courriel.piece_jointe {
            Some(piece) => {
                let type_mime = ContentType::parse(&piece.type_mime)
                    .map_err(|e| Error::Mail(e.to_string()))?;
                builder.multipart(
                    MultiPart::mixed()
                        .singlepart(SinglePart::plain(courriel.corps))
                        .singlepart(Attachment::new(piece.nom).body(piece.contenu, type_mime)),
                )
            }
            None => builder.body(courriel.corps),
        }
        .map_err(|e| Error::Mail(e.to_string()))?;

        debug!(sujet = %courriel.sujet, "sending email");
        self.transport
            .send(message)
            .await
            .map_err(|e| Error::Mail(e.to_string()))?;

        Ok(())
    }
}
