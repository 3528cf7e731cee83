use std::sync::Arc;

mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;
pub mod background_task;

pub use domain::{entities, use_cases};
pub use interfaces::{handlers, routes};
pub use infrastructure::{email, limiter, utils};

use email::mailer::Mailer;
use email::resend::ResendMailer;
use limiter::rate_limiter::RateLimiterStore;
use use_cases::contact::{ContactHandler, DeliverySettings};

pub type AppMailer = Arc<dyn Mailer>;

pub struct AppState {
    pub contact_handler: ContactHandler<AppMailer>,
}

impl AppState {
    pub fn new(config: &settings::AppConfig) -> Self {
        let mailer: AppMailer = Arc::new(ResendMailer::new(config.resend_api_key.clone()));
        Self::with_mailer(mailer, config)
    }

    /// Wires the pipeline around an arbitrary [`Mailer`]; tests inject their
    /// mock through here.
    pub fn with_mailer(mailer: AppMailer, config: &settings::AppConfig) -> Self {
        let delivery = DeliverySettings {
            notification_to: config.contact_email.clone(),
            from_address: config.email_from.clone(),
        };

        AppState {
            contact_handler: ContactHandler::new(mailer, RateLimiterStore::new(), delivery),
        }
    }
}
