pub mod mailer;
pub mod resend;
pub mod templates;
