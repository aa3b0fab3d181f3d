//! Delivery backends for the site's forms.
//!
//! A form never talks to a third party directly: it is handed an `Rc<dyn Relay<_>>`
//! built once from [`SiteConfig`]. When the identifiers a relay needs are missing
//! the site falls back to [`SimulatedRelay`], which always succeeds after a short pause.

pub mod emailjs;
pub mod mailing_list;

use std::rc::Rc;

use async_trait::async_trait;
use thiserror::Error;

use crate::config::SiteConfig;
use crate::forms::fields::{ContactForm, NewsletterForm};

pub use emailjs::EmailJsRelay;
pub use mailing_list::MailingListRelay;

pub const SIMULATED_DELAY_MS: u32 = 900;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("network error: {0}")]
    Network(String),
    #[error("relay rejected the request with status {status}: {body}")]
    Rejected { status: u16, body: String },
    #[error("could not encode the request: {0}")]
    Payload(String),
}

impl From<gloo_net::Error> for RelayError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => RelayError::Payload(e.to_string()),
            other => RelayError::Network(other.to_string()),
        }
    }
}

#[async_trait(?Send)]
pub trait Relay<P> {
    /// Hands the payload over exactly once. No retries.
    async fn deliver(&self, payload: &P) -> Result<(), RelayError>;

    /// True for the local stand-in used when nothing is configured.
    fn is_simulated(&self) -> bool {
        false
    }
}

/// Local stand-in: waits, then reports success without any network effect.
#[derive(Clone, Copy, Debug)]
pub struct SimulatedRelay {
    pub delay_ms: u32,
}

impl Default for SimulatedRelay {
    fn default() -> Self {
        Self { delay_ms: SIMULATED_DELAY_MS }
    }
}

#[async_trait(?Send)]
impl<P: 'static> Relay<P> for SimulatedRelay {
    async fn deliver(&self, _payload: &P) -> Result<(), RelayError> {
        log::info!("No relay configured, simulating delivery");
        if self.delay_ms > 0 {
            gloo_timers::future::TimeoutFuture::new(self.delay_ms).await;
        }
        Ok(())
    }

    fn is_simulated(&self) -> bool {
        true
    }
}

pub fn contact_relay(config: &SiteConfig) -> Rc<dyn Relay<ContactForm>> {
    match &config.emailjs {
        Some(emailjs) => Rc::new(EmailJsRelay::new(emailjs.clone(), config.company.clone())),
        None => Rc::new(SimulatedRelay::default()),
    }
}

pub fn newsletter_relay(config: &SiteConfig) -> Rc<dyn Relay<NewsletterForm>> {
    match &config.mailing_list {
        Some(list) => Rc::new(MailingListRelay::new(list.clone())),
        None => Rc::new(SimulatedRelay::default()),
    }
}
