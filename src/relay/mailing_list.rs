use async_trait::async_trait;
use gloo_net::http::Request;
use web_sys::RequestMode;

use super::{Relay, RelayError};
use crate::config::MailingListConfig;
use crate::forms::fields::NewsletterForm;

pub struct MailingListRelay {
    config: MailingListConfig,
}

impl MailingListRelay {
    pub fn new(config: MailingListConfig) -> Self {
        Self { config }
    }

    /// `EMAIL` first, then the identifiers the list endpoint expects.
    pub fn form_body(&self, email: &str) -> String {
        let mut pairs: Vec<(&str, &str)> = vec![
            ("EMAIL", email),
            ("u", self.config.user_id.as_str()),
            ("id", self.config.audience_id.as_str()),
        ];
        pairs.extend(self.config.extra_fields.iter().map(|(k, v)| (k.as_str(), v.as_str())));

        pairs
            .into_iter()
            .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

#[async_trait(?Send)]
impl Relay<NewsletterForm> for MailingListRelay {
    // The list provider does not send CORS headers, so the response is opaque:
    // finishing the request is all we can observe and it counts as success.
    async fn deliver(&self, form: &NewsletterForm) -> Result<(), RelayError> {
        Request::post(&self.config.action)
            .mode(RequestMode::NoCors)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(self.form_body(form.address()))
            .send()
            .await?;
        log::info!("Newsletter subscription posted to {}", self.config.action);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_is_form_encoded_with_list_identifiers() {
        let config = MailingListConfig::parse(
            "https://mngdev.us21.list-manage.com/subscribe/post?u=abc&id=list9&f_id=007",
            None,
        )
        .expect("valid endpoint");
        let relay = MailingListRelay::new(config);

        assert_eq!(
            relay.form_body("jo+news@example.fr"),
            "EMAIL=jo%2Bnews%40example.fr&u=abc&id=list9&f_id=007"
        );
    }
}
