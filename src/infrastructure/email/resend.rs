use std::time::Duration;

use async_trait::async_trait;

use super::mailer::{Mailer, MailerError, OutgoingEmail};

const RESEND_API_URL: &str = "https://api.resend.com/emails";
const SEND_TIMEOUT: Duration = Duration::from_secs(10);

/// Resend-backed [`Mailer`].
///
/// The API key is optional at construction so the service can boot without
/// one; the pipeline gates on [`Mailer::ready`] before attempting a send and
/// maps the absence to its misconfiguration path.
pub struct ResendMailer {
    client: reqwest::Client,
    api_key: Option<String>,
    api_url: String,
}

impl ResendMailer {
    pub fn new(api_key: Option<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(SEND_TIMEOUT)
            .build()
            .expect("Failed to build HTTP client for the email provider");

        ResendMailer {
            client,
            api_key,
            api_url: RESEND_API_URL.to_string(),
        }
    }
}

#[async_trait]
impl Mailer for ResendMailer {
    fn ready(&self) -> bool {
        self.api_key
            .as_deref()
            .is_some_and(|key| !key.trim().is_empty())
    }

    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailerError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(MailerError::MissingCredential)?;

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(api_key)
            .json(email)
            .send()
            .await
            .map_err(|e| MailerError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());

        Err(MailerError::Provider {
            status: status.as_u16(),
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ready_requires_a_non_blank_key() {
        assert!(ResendMailer::new(Some("re_123".to_string())).ready());
        assert!(!ResendMailer::new(Some("   ".to_string())).ready());
        assert!(!ResendMailer::new(None).ready());
    }

    #[actix_rt::test]
    async fn send_without_credential_fails_fast() {
        let mailer = ResendMailer::new(None);
        let email = OutgoingEmail {
            from: "Studio <onboarding@resend.dev>".to_string(),
            to: "owner@studio.example".to_string(),
            reply_to: None,
            subject: "subject".to_string(),
            html: "<p>body</p>".to_string(),
        };

        let err = mailer.send(&email).await.unwrap_err();
        assert!(matches!(err, MailerError::MissingCredential));
    }
}
