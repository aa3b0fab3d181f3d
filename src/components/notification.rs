use yew::prelude::*;

use crate::config::CompanyInfo;

#[derive(Properties, PartialEq)]
pub struct SuccessModalProps {
    pub visible: bool,
    pub company: CompanyInfo,
    pub on_close: Callback<()>,
}

/// Confirmation shown over the page after a contact message went out.
#[function_component(SuccessModal)]
pub fn success_modal(props: &SuccessModalProps) -> Html {
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_close.emit(());
        })
    };

    let company = &props.company;

    html! {
        <div role="status" aria-live="polite" class={classes!("modal-root", props.visible.then(|| "open"))}>
            <style>
                {r#"
                    .modal-root {
                        position: fixed;
                        inset: 0;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        z-index: 50;
                        pointer-events: none;
                    }
                    .modal-root.open { pointer-events: auto; }
                    .modal-overlay {
                        position: absolute;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.6);
                        opacity: 0;
                        transition: opacity 0.3s ease;
                    }
                    .modal-panel {
                        position: relative;
                        width: 100%;
                        max-width: 32rem;
                        margin: 0 1rem;
                        background: #0f0f10;
                        border: 1px solid rgba(255, 51, 204, 0.08);
                        border-radius: 12px;
                        padding: 1.5rem;
                        opacity: 0;
                        transform: translateY(1.5rem) scale(0.95);
                        transition: all 0.3s ease;
                    }
                    .modal-root.open .modal-overlay { opacity: 1; }
                    .modal-root.open .modal-panel { opacity: 1; transform: none; }
                    .modal-header { display: flex; align-items: flex-start; gap: 1rem; }
                    .modal-header img { width: 3rem; height: 3rem; border-radius: 6px; }
                    .modal-header h3 { color: var(--photon-magenta); margin: 0; }
                    .modal-close { margin-left: auto; background: none; border: none; color: #9ca3af; cursor: pointer; }
                    .modal-close:hover { color: #fff; }
                    .modal-footnote { margin-top: 1rem; font-size: 0.75rem; color: #9ca3af; }
                "#}
            </style>
            <div class="modal-overlay" onclick={close.clone()}></div>
            <div class="modal-panel">
                <div class="modal-header">
                    <img src={company.logo_url.clone()} alt={format!("{} logo", company.name)} />
                    <div>
                        <h3>{"Message envoyé"}</h3>
                        <p>
                            {"Merci,"}<br />
                            {"Nous avons bien reçu votre message et nous vous répondrons dans les plus brefs délais."}
                        </p>
                    </div>
                    <button class="modal-close" onclick={close} aria-label="Fermer la notification">
                        {"✕"}
                    </button>
                </div>
                <div class="modal-footnote">
                    {format!(
                        "Si vous n'obtenez pas de réponse sous 48h, vérifiez vos spams ou réessayez via {}.",
                        company.contact_email
                    )}
                </div>
            </div>
        </div>
    }
}
