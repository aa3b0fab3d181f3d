use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::context::AppContext;
use crate::forms::fields::NewsletterField;
use crate::forms::flow::SubmissionStatus;
use crate::forms::presenter::{present, Labels, NEWSLETTER_LABELS, NEWSLETTER_STATUS_RESET_MS};
use crate::hooks::use_submission;

#[derive(Properties, PartialEq)]
pub struct NewsletterSignupProps {
    pub context: AppContext,
}

#[function_component(NewsletterSignup)]
pub fn newsletter_signup(props: &NewsletterSignupProps) -> Html {
    let relay = props.context.newsletter_relay.clone();
    let simulated = relay.is_simulated();
    let handle = use_submission(relay, false, NEWSLETTER_STATUS_RESET_MS);
    let flow = &*handle.flow;

    let labels = if simulated {
        Labels { sent: "Merci, inscription enregistrée localement.", ..NEWSLETTER_LABELS }
    } else {
        NEWSLETTER_LABELS
    };
    let view = present(flow.status, flow.error.as_deref(), &labels);

    let oninput = {
        let on_edit = handle.on_edit.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_edit.emit((NewsletterField::Email, input.value()));
        })
    };

    html! {
        <form class="newsletter" onsubmit={handle.on_submit.clone()} aria-label="Formulaire newsletter">
            <label for="footer-newsletter" class="newsletter-label">{"Newsletter"}</label>
            <div class="newsletter-row">
                <input
                    id="footer-newsletter"
                    type="email"
                    class="input-neon"
                    placeholder="votre@email.tld"
                    value={flow.form.email.clone()}
                    {oninput}
                    disabled={flow.is_sending()}
                    aria-invalid={if flow.status == SubmissionStatus::Error { "true" } else { "false" }}
                    aria-describedby="footer-newsletter-status"
                />
                <button type="submit" class="btn-neon" disabled={view.disabled} aria-label="S'inscrire à la newsletter">
                    {view.button_label}
                </button>
            </div>
            <p id="footer-newsletter-status" role="status" aria-live="polite" class="newsletter-status">
                {
                    match &view.message {
                        Some((tone, text)) => html! { <span class={tone.class()}>{text}</span> },
                        None => html! {},
                    }
                }
            </p>
        </form>
    }
}
