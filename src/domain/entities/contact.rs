use std::borrow::Cow;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::errors::ContactError;
use crate::utils::sanitize::sanitize_for_html;

/// Site locales. The wire value is a free-form string so anything the frontend
/// sends that we do not recognize falls back to Italian instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    It,
    En,
}

impl Locale {
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            Some("en") => Locale::En,
            _ => Locale::It,
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            Locale::It => "Messaggio inviato con successo! Ti risponderemo al più presto.",
            Locale::En => "Message sent successfully! We will get back to you shortly.",
        }
    }

    pub fn error_message(self) -> &'static str {
        match self {
            Locale::It => {
                "Si è verificato un errore durante l'invio del messaggio. Riprova più tardi."
            }
            Locale::En => "An error occurred while sending your message. Please try again later.",
        }
    }

    pub fn default_company(self) -> &'static str {
        match self {
            Locale::It => "Non specificata",
            Locale::En => "Not specified",
        }
    }
}

/// Raw, untrusted contact-form body as posted by the frontend.
///
/// The consent checkbox travels as `privacy` and must be literally `true`;
/// a missing field deserializes to `false` and fails validation closed.
#[derive(Debug, Deserialize, Validate)]
pub struct ContactForm {
    #[validate(length(min = 2, max = 100, message = "Name must be between 2 and 100 characters"))]
    pub name: String,

    #[validate(email(message = "A valid email address is required"))]
    pub email: String,

    pub company: Option<String>,

    #[validate(length(
        min = 10,
        max = 1000,
        message = "Message must be between 10 and 1000 characters"
    ))]
    pub message: String,

    #[serde(default)]
    #[validate(custom(function = consent_given))]
    pub privacy: bool,

    pub locale: Option<String>,
}

fn consent_given(privacy: &bool) -> Result<(), ValidationError> {
    if *privacy {
        Ok(())
    } else {
        let mut err = ValidationError::new("consent");
        err.message = Some(Cow::Borrowed("Privacy consent is required"));
        Err(err)
    }
}

/// A submission that passed schema validation. Immutable once built and owned
/// by a single pipeline invocation; nothing is persisted or shared.
#[derive(Debug, Clone, Serialize)]
pub struct ValidatedSubmission {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
    pub locale: Locale,
    pub submitted_at: DateTime<Utc>,
}

impl TryFrom<ContactForm> for ValidatedSubmission {
    type Error = ContactError;

    fn try_from(form: ContactForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let locale = Locale::from_tag(form.locale.as_deref());
        let company = form
            .company
            .filter(|company| !company.trim().is_empty())
            .unwrap_or_else(|| locale.default_company().to_string());

        Ok(ValidatedSubmission {
            name: form.name,
            email: form.email,
            company,
            message: form.message,
            locale,
            submitted_at: Utc::now(),
        })
    }
}

impl ValidatedSubmission {
    /// Escapes the displayed fields for HTML interpolation. The email address
    /// is carried through raw: it is a delivery address and a reply-to value,
    /// never body text.
    pub fn sanitize(&self) -> SanitizedSubmission {
        SanitizedSubmission {
            name: sanitize_for_html(&self.name),
            email: self.email.clone(),
            company: sanitize_for_html(&self.company),
            message: sanitize_for_html(&self.message),
            locale: self.locale,
            submitted_at: self.submitted_at,
        }
    }
}

/// Same shape as [`ValidatedSubmission`] with HTML-escaped display fields.
/// Only ever handed to the template builder.
#[derive(Debug, Clone)]
pub struct SanitizedSubmission {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
    pub locale: Locale,
    pub submitted_at: DateTime<Utc>,
}
