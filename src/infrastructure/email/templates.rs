use crate::entities::contact::{Locale, SanitizedSubmission};
use crate::entities::email::EmailContent;

/// Renders the owner-facing lead notification. Fixed Italian copy regardless
/// of the submitter's locale; the owner reads Italian. All interpolated
/// display fields arrive pre-escaped, the email address is raw by contract.
pub fn lead_notification(submission: &SanitizedSubmission) -> EmailContent {
    let subject = format!("Nuovo contatto dal sito: {}", submission.name);
    let submitted = submission.submitted_at.format("%d/%m/%Y %H:%M UTC");

    let html = format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto; color: #111827;">
  <h2>Nuova richiesta di contatto</h2>
  <table style="width: 100%; border-collapse: collapse;">
    <tr><td style="padding: 6px 0; color: #6b7280; width: 110px;">Nome</td><td style="padding: 6px 0;">{name}</td></tr>
    <tr><td style="padding: 6px 0; color: #6b7280;">Email</td><td style="padding: 6px 0;"><a href="mailto:{email}">{email}</a></td></tr>
    <tr><td style="padding: 6px 0; color: #6b7280;">Azienda</td><td style="padding: 6px 0;">{company}</td></tr>
    <tr><td style="padding: 6px 0; color: #6b7280;">Ricevuto</td><td style="padding: 6px 0;">{submitted}</td></tr>
  </table>
  <h3>Messaggio</h3>
  <p style="white-space: pre-line; background: #f9fafb; padding: 16px; border-radius: 8px;">{message}</p>
  <p style="color: #6b7280; font-size: 12px;">Rispondi direttamente a questa email per contattare il mittente.</p>
</div>"#,
        name = submission.name,
        email = submission.email,
        company = submission.company,
        submitted = submitted,
        message = submission.message,
    );

    EmailContent { subject, html }
}

/// Renders the submitter-facing thank-you note. Two fixed translations keyed
/// by locale; only the (escaped) name is interpolated.
pub fn thank_you(submission: &SanitizedSubmission) -> EmailContent {
    let (subject, greeting, body, signoff) = match submission.locale {
        Locale::It => (
            "Grazie per averci contattato",
            format!("Ciao {},", submission.name),
            "abbiamo ricevuto il tuo messaggio e ti risponderemo al più presto, \
             di solito entro un giorno lavorativo.",
            "Il team",
        ),
        Locale::En => (
            "Thanks for getting in touch",
            format!("Hi {},", submission.name),
            "we have received your message and will get back to you as soon as \
             possible, usually within one business day.",
            "The team",
        ),
    };

    let html = format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto; color: #111827;">
  <h2>{subject}</h2>
  <p>{greeting}</p>
  <p>{body}</p>
  <p style="margin-top: 24px;">{signoff}</p>
</div>"#,
    );

    EmailContent {
        subject: subject.to_string(),
        html,
    }
}
