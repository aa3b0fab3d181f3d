use url::Url;

pub const DEFAULT_COMPANY_NAME: &str = "Najib G";
pub const DEFAULT_CONTACT_EMAIL: &str = "mngdevpro@gmail.com";
pub const DEFAULT_CONTACT_PHONE: &str = "+33 6 58 47 83 08";
const LOGO_PATH: &str = "/logo-mngdev.png";

/// Everything the site reads from its build environment, resolved once in `main`.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub company: CompanyInfo,
    pub emailjs: Option<EmailJsConfig>,
    pub mailing_list: Option<MailingListConfig>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CompanyInfo {
    pub name: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub logo_url: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EmailJsConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: Option<String>,
}

/// Mailchimp-style subscribe endpoint split into the action URL and the
/// identifiers it expects next to the email address.
#[derive(Clone, Debug, PartialEq)]
pub struct MailingListConfig {
    pub action: String,
    pub user_id: String,
    pub audience_id: String,
    pub extra_fields: Vec<(String, String)>,
}

impl MailingListConfig {
    pub fn parse(endpoint: &str, audience_override: Option<String>) -> Option<Self> {
        let mut url = Url::parse(endpoint).ok()?;

        let mut user_id = None;
        let mut audience_id = audience_override;
        let mut extra_fields = Vec::new();
        for (key, value) in url.query_pairs() {
            match key.as_ref() {
                "u" => user_id = Some(value.into_owned()),
                "id" => {
                    if audience_id.is_none() {
                        audience_id = Some(value.into_owned());
                    }
                }
                _ => extra_fields.push((key.into_owned(), value.into_owned())),
            }
        }

        url.set_query(None);
        Some(Self {
            action: url.to_string(),
            user_id: user_id.filter(|u| !u.is_empty())?,
            audience_id: audience_id.filter(|id| !id.is_empty())?,
            extra_fields,
        })
    }
}

impl SiteConfig {
    /// Values baked in at build time (`trunk build` forwards the environment).
    pub fn from_build_env() -> Self {
        let origin = web_sys::window().and_then(|w| w.location().origin().ok());
        Self::from_lookup(build_env, origin.as_deref())
    }

    pub fn from_lookup<L>(lookup: L, origin: Option<&str>) -> Self
    where
        L: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let company = CompanyInfo {
            name: get("COMPANY_NAME").unwrap_or_else(|| DEFAULT_COMPANY_NAME.to_string()),
            contact_email: get("CONTACT_EMAIL").unwrap_or_else(|| DEFAULT_CONTACT_EMAIL.to_string()),
            contact_phone: get("CONTACT_PHONE").unwrap_or_else(|| DEFAULT_CONTACT_PHONE.to_string()),
            logo_url: get("LOGO_URL")
                .unwrap_or_else(|| format!("{}{}", origin.unwrap_or(""), LOGO_PATH)),
        };

        // Service and template ids decide between the relay and the local simulation
        let emailjs = match (get("EMAILJS_SERVICE_ID"), get("EMAILJS_TEMPLATE_ID")) {
            (Some(service_id), Some(template_id)) => Some(EmailJsConfig {
                service_id,
                template_id,
                public_key: get("EMAILJS_PUBLIC_KEY").or_else(|| get("EMAILJS_USER_ID")),
            }),
            _ => None,
        };

        let mailing_list = get("MAILCHIMP_SUBSCRIBE_URL").and_then(|endpoint| {
            let parsed = MailingListConfig::parse(&endpoint, get("MAILCHIMP_AUDIENCE_ID"));
            if parsed.is_none() {
                log::warn!("Ignoring mailing list endpoint without u/id identifiers: {}", endpoint);
            }
            parsed
        });

        Self { company, emailjs, mailing_list }
    }
}

fn build_env(key: &str) -> Option<String> {
    let value = match key {
        "EMAILJS_SERVICE_ID" => option_env!("EMAILJS_SERVICE_ID"),
        "EMAILJS_TEMPLATE_ID" => option_env!("EMAILJS_TEMPLATE_ID"),
        "EMAILJS_PUBLIC_KEY" => option_env!("EMAILJS_PUBLIC_KEY"),
        "EMAILJS_USER_ID" => option_env!("EMAILJS_USER_ID"),
        "MAILCHIMP_SUBSCRIBE_URL" => option_env!("MAILCHIMP_SUBSCRIBE_URL"),
        "MAILCHIMP_AUDIENCE_ID" => option_env!("MAILCHIMP_AUDIENCE_ID"),
        "COMPANY_NAME" => option_env!("COMPANY_NAME"),
        "CONTACT_EMAIL" => option_env!("CONTACT_EMAIL"),
        "CONTACT_PHONE" => option_env!("CONTACT_PHONE"),
        "LOGO_URL" => option_env!("LOGO_URL"),
        _ => None,
    };
    value.map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults_and_no_relays() {
        let config = SiteConfig::from_lookup(lookup(&[]), Some("https://mngdev.fr"));
        assert_eq!(config.company.name, DEFAULT_COMPANY_NAME);
        assert_eq!(config.company.contact_email, DEFAULT_CONTACT_EMAIL);
        assert_eq!(config.company.contact_phone, DEFAULT_CONTACT_PHONE);
        assert_eq!(config.company.logo_url, "https://mngdev.fr/logo-mngdev.png");
        assert!(config.emailjs.is_none());
        assert!(config.mailing_list.is_none());
    }

    #[test]
    fn emailjs_needs_service_and_template() {
        let only_service = SiteConfig::from_lookup(lookup(&[("EMAILJS_SERVICE_ID", "svc")]), None);
        assert!(only_service.emailjs.is_none());

        let blank_template = SiteConfig::from_lookup(
            lookup(&[("EMAILJS_SERVICE_ID", "svc"), ("EMAILJS_TEMPLATE_ID", "  ")]),
            None,
        );
        assert!(blank_template.emailjs.is_none());

        let configured = SiteConfig::from_lookup(
            lookup(&[
                ("EMAILJS_SERVICE_ID", "svc"),
                ("EMAILJS_TEMPLATE_ID", "tpl"),
                ("EMAILJS_USER_ID", "legacy-key"),
            ]),
            None,
        );
        assert_eq!(
            configured.emailjs,
            Some(EmailJsConfig {
                service_id: "svc".into(),
                template_id: "tpl".into(),
                public_key: Some("legacy-key".into()),
            })
        );
    }

    #[test]
    fn mailing_list_identifiers_come_from_query() {
        let parsed = MailingListConfig::parse(
            "https://mngdev.us21.list-manage.com/subscribe/post?u=abc123&id=list9&f_id=00aa",
            None,
        )
        .expect("valid endpoint");
        assert_eq!(parsed.action, "https://mngdev.us21.list-manage.com/subscribe/post");
        assert_eq!(parsed.user_id, "abc123");
        assert_eq!(parsed.audience_id, "list9");
        assert_eq!(parsed.extra_fields, vec![("f_id".to_string(), "00aa".to_string())]);
    }

    #[test]
    fn audience_override_wins_and_missing_user_rejects() {
        let parsed = MailingListConfig::parse(
            "https://x.list-manage.com/subscribe/post?u=abc&id=old",
            Some("new".into()),
        )
        .expect("valid endpoint");
        assert_eq!(parsed.audience_id, "new");

        assert!(MailingListConfig::parse("https://x.list-manage.com/subscribe/post?id=old", None).is_none());
        assert!(MailingListConfig::parse("not a url", None).is_none());
    }
}
