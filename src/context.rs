use std::rc::Rc;

use crate::config::SiteConfig;
use crate::forms::fields::{ContactForm, NewsletterForm};
use crate::relay::{self, Relay};

/// Configuration plus the relays built from it, shared with every page.
#[derive(Clone)]
pub struct AppContext {
    pub config: Rc<SiteConfig>,
    pub contact_relay: Rc<dyn Relay<ContactForm>>,
    pub newsletter_relay: Rc<dyn Relay<NewsletterForm>>,
}

impl AppContext {
    pub fn new(config: SiteConfig) -> Self {
        Self {
            contact_relay: relay::contact_relay(&config),
            newsletter_relay: relay::newsletter_relay(&config),
            config: Rc::new(config),
        }
    }
}

impl PartialEq for AppContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.config, &other.config)
            && Rc::ptr_eq(&self.contact_relay, &other.contact_relay)
            && Rc::ptr_eq(&self.newsletter_relay, &other.newsletter_relay)
    }
}
