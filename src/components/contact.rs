use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::notification::SuccessModal;
use crate::context::AppContext;
use crate::forms::fields::ContactField;
use crate::forms::presenter::{present, CONTACT_LABELS, CONTACT_STATUS_RESET_MS};
use crate::hooks::use_submission;

#[derive(Properties, PartialEq)]
pub struct ContactSectionProps {
    pub context: AppContext,
}

#[function_component(ContactSection)]
pub fn contact_section(props: &ContactSectionProps) -> Html {
    let ctx = &props.context;
    let handle = use_submission(
        ctx.contact_relay.clone(),
        true,
        CONTACT_STATUS_RESET_MS,
    );
    let flow = &*handle.flow;
    let view = present(flow.status, flow.error.as_deref(), &CONTACT_LABELS);
    let locked = flow.is_sending();
    let simulated = ctx.contact_relay.is_simulated();

    let on_field = |field: ContactField| {
        let on_edit = handle.on_edit.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_edit.emit((field, input.value()));
        })
    };
    let on_message = {
        let on_edit = handle.on_edit.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            on_edit.emit((ContactField::Message, area.value()));
        })
    };

    html! {
        <>
            <section id="contact" class="contact-section">
                <style>
                    {r#"
                        .contact-section { padding: 5rem 0; }
                        .contact-inner { max-width: 48rem; margin: 0 auto; padding: 0 1.5rem; }
                        .contact-inner h2 { color: var(--photon-magenta); font-size: 1.5rem; }
                        .contact-intro { margin-top: 0.5rem; font-size: 0.875rem; color: #d1d5db; }
                        .contact-form { margin-top: 1.5rem; display: grid; gap: 1rem; }
                        .contact-pair { display: grid; gap: 1rem; grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr)); }
                        .contact-actions { display: flex; flex-wrap: wrap; align-items: center; gap: 1rem; }
                        .contact-status { height: 1.5rem; margin-top: 0.25rem; font-size: 0.875rem; }
                        .status-success { color: #4ade80; }
                        .status-error { color: #fb7185; }
                        .relay-hint { margin-top: 0.5rem; font-size: 0.75rem; color: #fde047; }
                    "#}
                </style>
                <div class="contact-inner">
                    <h2 class="neon-text">{"Contact & Devis"}</h2>
                    <p class="contact-intro">
                        {"Discutons de votre projet digital et obtenez un devis gratuit."}<br />
                        {"Sites vitrines, e-commerce, paiement en ligne, gestion clients et animations sur-mesure."}
                    </p>

                    <form class="contact-form" onsubmit={handle.on_submit.clone()} aria-label="Formulaire de contact">
                        <label class="sr-only" for="contact-name">{"Nom"}</label>
                        <input id="contact-name" class="input-neon" placeholder="Nom" required=true
                            value={flow.form.name.clone()} oninput={on_field(ContactField::Name)} disabled={locked} />

                        <label class="sr-only" for="contact-email">{"Email"}</label>
                        <input id="contact-email" type="email" class="input-neon" placeholder="Email" required=true
                            value={flow.form.email.clone()} oninput={on_field(ContactField::Email)} disabled={locked} />

                        <label class="sr-only" for="contact-phone">{"Téléphone (optionnel)"}</label>
                        <input id="contact-phone" type="tel" class="input-neon" placeholder="Téléphone (optionnel)"
                            value={flow.form.phone.clone()} oninput={on_field(ContactField::Phone)} disabled={locked} />

                        <div class="contact-pair">
                            <input id="contact-project-type" class="input-neon" placeholder="Type de projet (ex. e-commerce, vitrine)"
                                value={flow.form.project_type.clone()} oninput={on_field(ContactField::ProjectType)} disabled={locked} />
                            <input id="contact-budget" class="input-neon" placeholder="Budget (optionnel)"
                                value={flow.form.budget.clone()} oninput={on_field(ContactField::Budget)} disabled={locked} />
                        </div>

                        <label class="sr-only" for="contact-timeline">{"Délai estimé (optionnel)"}</label>
                        <input id="contact-timeline" class="input-neon" placeholder="Délai estimé (optionnel)"
                            value={flow.form.timeline.clone()} oninput={on_field(ContactField::Timeline)} disabled={locked} />

                        <label class="sr-only" for="contact-message">{"Message"}</label>
                        <textarea id="contact-message" class="input-neon" rows="6" required=true
                            placeholder="Décrivez votre projet, vos besoins et vos objectifs"
                            value={flow.form.message.clone()} oninput={on_message} disabled={locked} />

                        <div class="contact-actions">
                            <button type="submit" class="btn-neon" disabled={view.disabled} aria-live="polite">
                                {view.button_label}
                            </button>
                            <span class="pill-accent">{"Front-end"}</span>
                            <span class="pill-accent">{"Rust / Yew / WebAssembly"}</span>
                            <span class="pill-accent">{"E-commerce & Stripe"}</span>
                        </div>

                        <div aria-live="polite" class="contact-status">
                            {
                                if let Some((tone, text)) = &view.message {
                                    html! { <span class={tone.class()}>{text}</span> }
                                } else {
                                    html! {}
                                }
                            }
                        </div>

                        if simulated {
                            <p class="relay-hint">
                                {"Info : EmailJS non configuré, le formulaire simule l'envoi en local. \
                                  Définissez EMAILJS_SERVICE_ID et EMAILJS_TEMPLATE_ID au moment du build."}
                            </p>
                        }
                    </form>
                </div>
            </section>

            <SuccessModal
                visible={flow.modal_visible}
                company={ctx.config.company.clone()}
                on_close={handle.on_dismiss.clone()}
            />
        </>
    }
}
