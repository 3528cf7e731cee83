use std::sync::Arc;

use async_trait::async_trait;
use derive_more::Display;
use serde::Serialize;

/// Wire shape of one outbound email, matching the provider's send endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<String>,

    pub subject: String,
    pub html: String,
}

#[derive(Debug, Display)]
pub enum MailerError {
    #[display("Email API credential is not configured")]
    MissingCredential,

    #[display("Email request failed: {_0}")]
    Transport(String),

    #[display("Email provider returned {status}: {message}")]
    Provider { status: u16, message: String },
}

/// Seam between the submission pipeline and the transactional email provider.
/// Each call is a single delivery attempt; no layer above retries.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Whether the backing provider has the credential it needs to send.
    fn ready(&self) -> bool;

    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailerError>;
}

#[async_trait]
impl<M: Mailer + ?Sized> Mailer for Arc<M> {
    fn ready(&self) -> bool {
        (**self).ready()
    }

    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailerError> {
        (**self).send(email).await
    }
}
