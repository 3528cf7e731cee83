use async_trait::async_trait;
use mockall::mock;
use mockall::Sequence;
use serde_json::json;

use contact_backend::email::mailer::{Mailer, MailerError, OutgoingEmail};
use contact_backend::errors::ContactError;
use contact_backend::limiter::rate_limiter::RateLimiterStore;
use contact_backend::use_cases::contact::{ContactHandler, DeliverySettings};

mock! {
    pub TestMailer {}

    #[async_trait]
    impl Mailer for TestMailer {
        fn ready(&self) -> bool;
        async fn send(&self, email: &OutgoingEmail) -> Result<(), MailerError>;
    }
}

const OWNER: &str = "owner@studio.example";
const SUBMITTER: &str = "mario@example.com";

fn delivery() -> DeliverySettings {
    DeliverySettings {
        notification_to: Some(OWNER.to_string()),
        from_address: "AI Studio <onboarding@resend.dev>".to_string(),
    }
}

fn handler(mailer: MockTestMailer) -> ContactHandler<MockTestMailer> {
    ContactHandler::new(mailer, RateLimiterStore::new(), delivery())
}

fn valid_body() -> Vec<u8> {
    serde_json::to_vec(&json!({
        "name": "Mario Rossi",
        "email": SUBMITTER,
        "company": "Rossi & Co.",
        "message": "Vorrei informazioni sui vostri servizi.",
        "privacy": true,
        "locale": "it",
    }))
    .unwrap()
}

#[actix_rt::test]
async fn valid_submission_sends_lead_then_thank_you() {
    let mut mailer = MockTestMailer::new();
    let mut seq = Sequence::new();

    mailer.expect_ready().return_const(true);
    mailer
        .expect_send()
        .times(1)
        .in_sequence(&mut seq)
        .withf(|email| {
            email.to == OWNER
                && email.reply_to.as_deref() == Some(SUBMITTER)
                && email.subject.contains("Mario Rossi")
        })
        .returning(|_| Ok(()));
    mailer
        .expect_send()
        .times(1)
        .in_sequence(&mut seq)
        .withf(|email| email.to == SUBMITTER && email.reply_to.is_none())
        .returning(|_| Ok(()));

    let accepted = handler(mailer)
        .handle_submission(&valid_body(), "203.0.113.7")
        .await
        .unwrap();

    assert_eq!(accepted.remaining, 2);
    assert!(accepted.message.contains("successo"));
}

#[actix_rt::test]
async fn lead_failure_aborts_before_the_thank_you() {
    let mut mailer = MockTestMailer::new();

    mailer.expect_ready().return_const(true);
    // Exactly one send attempt: the thank-you path must never run.
    mailer.expect_send().times(1).returning(|_| {
        Err(MailerError::Provider {
            status: 500,
            message: "boom".to_string(),
        })
    });

    let err = handler(mailer)
        .handle_submission(&valid_body(), "203.0.113.7")
        .await
        .unwrap_err();

    assert!(matches!(err, ContactError::LeadDelivery(_)));
}

#[actix_rt::test]
async fn thank_you_failure_is_swallowed() {
    let mut mailer = MockTestMailer::new();
    let mut seq = Sequence::new();

    mailer.expect_ready().return_const(true);
    mailer
        .expect_send()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(()));
    mailer
        .expect_send()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Err(MailerError::Transport("timeout".to_string())));

    let accepted = handler(mailer)
        .handle_submission(&valid_body(), "203.0.113.7")
        .await
        .unwrap();

    assert!(accepted.message.contains("successo"));
}

#[actix_rt::test]
async fn unready_mailer_is_a_configuration_error() {
    let mut mailer = MockTestMailer::new();

    mailer.expect_ready().return_const(false);
    mailer.expect_send().times(0);

    let err = handler(mailer)
        .handle_submission(&valid_body(), "203.0.113.7")
        .await
        .unwrap_err();

    assert!(matches!(err, ContactError::Configuration(_)));
}

#[actix_rt::test]
async fn missing_notification_address_is_a_configuration_error() {
    let mut mailer = MockTestMailer::new();
    mailer.expect_ready().return_const(true);
    mailer.expect_send().times(0);

    let handler = ContactHandler::new(
        mailer,
        RateLimiterStore::new(),
        DeliverySettings {
            notification_to: None,
            from_address: "AI Studio <onboarding@resend.dev>".to_string(),
        },
    );

    let err = handler
        .handle_submission(&valid_body(), "203.0.113.7")
        .await
        .unwrap_err();

    assert!(matches!(err, ContactError::Configuration(_)));
}

#[actix_rt::test]
async fn malformed_body_is_rejected_before_validation() {
    let mut mailer = MockTestMailer::new();
    mailer.expect_send().times(0);

    let err = handler(mailer)
        .handle_submission(b"not json at all", "203.0.113.7")
        .await
        .unwrap_err();

    assert!(matches!(err, ContactError::MalformedRequest));
}

#[actix_rt::test]
async fn fourth_submission_in_the_window_is_rate_limited() {
    let mut mailer = MockTestMailer::new();

    mailer.expect_ready().return_const(true);
    mailer.expect_send().times(6).returning(|_| Ok(()));

    let handler = handler(mailer);

    for _ in 0..3 {
        handler
            .handle_submission(&valid_body(), "203.0.113.7")
            .await
            .unwrap();
    }

    let err = handler
        .handle_submission(&valid_body(), "203.0.113.7")
        .await
        .unwrap_err();
    assert!(matches!(err, ContactError::RateLimited));
}

#[actix_rt::test]
async fn english_locale_selects_the_english_success_message() {
    let mut mailer = MockTestMailer::new();
    mailer.expect_ready().return_const(true);
    mailer.expect_send().times(2).returning(|_| Ok(()));

    let body = serde_json::to_vec(&json!({
        "name": "Jane Doe",
        "email": "jane@example.com",
        "message": "I would like to know more.",
        "privacy": true,
        "locale": "en",
    }))
    .unwrap();

    let accepted = handler(mailer)
        .handle_submission(&body, "198.51.100.4")
        .await
        .unwrap();

    assert!(accepted.message.contains("successfully"));
}
