use crate::{
    email::{
        mailer::{Mailer, OutgoingEmail},
        templates,
    },
    entities::{
        contact::{ContactForm, Locale, ValidatedSubmission},
        email::{DispatchOutcome, EmailDispatch, EmailKind},
    },
    errors::ContactError,
    limiter::rate_limiter::RateLimiterStore,
};

/// Delivery endpoints for the two outbound emails. `notification_to` is the
/// owner's inbox; while it is absent the pipeline refuses to send and answers
/// with its misconfiguration path.
#[derive(Debug, Clone)]
pub struct DeliverySettings {
    pub notification_to: Option<String>,
    pub from_address: String,
}

/// What the HTTP layer needs to build the success response.
#[derive(Debug)]
pub struct SubmissionAccepted {
    pub message: &'static str,
    pub remaining: u32,
}

/// The submission pipeline controller.
///
/// Runs each request through a strictly linear sequence: rate-limit check,
/// JSON parsing, schema validation, configuration gate, sanitization,
/// template rendering, lead send, thank-you send. Every failure
/// short-circuits except a failed thank-you, which is logged and swallowed
/// because the lead was already captured.
pub struct ContactHandler<M>
where
    M: Mailer,
{
    pub mailer: M,
    pub limiter: RateLimiterStore,
    pub delivery: DeliverySettings,
}

impl<M> ContactHandler<M>
where
    M: Mailer,
{
    pub fn new(mailer: M, limiter: RateLimiterStore, delivery: DeliverySettings) -> Self {
        ContactHandler {
            mailer,
            limiter,
            delivery,
        }
    }

    pub async fn handle_submission(
        &self,
        body: &[u8],
        client_ip: &str,
    ) -> Result<SubmissionAccepted, ContactError> {
        if !self.limiter.admit(client_ip) {
            tracing::warn!(client_ip, "submission rejected by rate limiter");
            return Err(ContactError::RateLimited);
        }

        let form: ContactForm =
            serde_json::from_slice(body).map_err(|_| ContactError::MalformedRequest)?;

        let submission = ValidatedSubmission::try_from(form)?;
        let locale = submission.locale;

        let notification_to = self.check_configuration(locale)?;

        let sanitized = submission.sanitize();
        let lead = templates::lead_notification(&sanitized);
        let thanks = templates::thank_you(&sanitized);

        // Reply-to points at the submitter so the owner can answer directly.
        let lead_email = OutgoingEmail {
            from: self.delivery.from_address.clone(),
            to: notification_to,
            reply_to: Some(sanitized.email.clone()),
            subject: lead.subject,
            html: lead.html,
        };

        let dispatched = self.dispatch(EmailKind::LeadNotification, &lead_email).await;
        if dispatched.failed() {
            return Err(ContactError::LeadDelivery(locale));
        }

        let thank_you_email = OutgoingEmail {
            from: self.delivery.from_address.clone(),
            to: sanitized.email.clone(),
            reply_to: None,
            subject: thanks.subject,
            html: thanks.html,
        };

        // Best effort: the lead is already in the owner's inbox, a lost
        // confirmation does not change the submitter's outcome.
        self.dispatch(EmailKind::ThankYou, &thank_you_email).await;

        Ok(SubmissionAccepted {
            message: locale.success_message(),
            remaining: self.limiter.remaining(client_ip),
        })
    }

    fn check_configuration(&self, locale: Locale) -> Result<String, ContactError> {
        if !self.mailer.ready() {
            tracing::error!("email API credential missing, cannot dispatch");
            return Err(ContactError::Configuration(locale));
        }

        match self.delivery.notification_to.as_deref() {
            Some(to) if !to.trim().is_empty() => Ok(to.to_string()),
            _ => {
                tracing::error!("lead notification address missing, cannot dispatch");
                Err(ContactError::Configuration(locale))
            }
        }
    }

    async fn dispatch(&self, kind: EmailKind, email: &OutgoingEmail) -> EmailDispatch {
        match self.mailer.send(email).await {
            Ok(()) => EmailDispatch {
                kind,
                outcome: DispatchOutcome::Sent,
            },
            Err(e) => {
                match kind {
                    EmailKind::LeadNotification => {
                        tracing::error!(error = %e, to = %email.to, "lead notification send failed")
                    }
                    EmailKind::ThankYou => {
                        tracing::warn!(error = %e, to = %email.to, "thank-you send failed, submission still accepted")
                    }
                }

                EmailDispatch {
                    kind,
                    outcome: DispatchOutcome::Failed(e.to_string()),
                }
            }
        }
    }
}
