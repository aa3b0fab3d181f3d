use async_trait::async_trait;
use chrono::{DateTime, Datelike, SecondsFormat, Utc};
use gloo_net::http::Request;
use serde::Serialize;

use super::{Relay, RelayError};
use crate::config::{CompanyInfo, EmailJsConfig};
use crate::forms::fields::ContactForm;

const SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_id: Option<&'a str>,
    template_params: TemplateParams,
}

/// Variables available to the EmailJS HTML template.
#[derive(Serialize, Debug, PartialEq)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub phone: String,
    pub project_type: String,
    pub budget: String,
    pub timeline: String,
    pub message: String,
    pub company_name: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub logo_url: String,
    pub project_link: String,
    pub created_at: String,
    pub year: i32,
}

impl TemplateParams {
    pub fn new(form: &ContactForm, company: &CompanyInfo, now: DateTime<Utc>) -> Self {
        Self {
            from_name: form.name.clone(),
            from_email: form.email.clone(),
            phone: form.phone.clone(),
            project_type: form.project_type.clone(),
            budget: form.budget.clone(),
            timeline: form.timeline.clone(),
            message: form.message.clone(),
            company_name: company.name.clone(),
            contact_email: company.contact_email.clone(),
            contact_phone: company.contact_phone.clone(),
            logo_url: company.logo_url.clone(),
            project_link: String::new(),
            created_at: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            year: now.year(),
        }
    }
}

pub struct EmailJsRelay {
    config: EmailJsConfig,
    company: CompanyInfo,
}

impl EmailJsRelay {
    pub fn new(config: EmailJsConfig, company: CompanyInfo) -> Self {
        Self { config, company }
    }
}

#[async_trait(?Send)]
impl Relay<ContactForm> for EmailJsRelay {
    async fn deliver(&self, form: &ContactForm) -> Result<(), RelayError> {
        let body = SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: self.config.public_key.as_deref(),
            template_params: TemplateParams::new(form, &self.company, Utc::now()),
        };

        let response = Request::post(SEND_URL).json(&body)?.send().await?;
        if response.ok() {
            log::info!("Contact message accepted by EmailJS");
            Ok(())
        } else {
            Err(RelayError::Rejected {
                status: response.status(),
                body: response.text().await.unwrap_or_default(),
            })
        }
    }
}
