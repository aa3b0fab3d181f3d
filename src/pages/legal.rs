use yew::prelude::*;

use crate::config::{CompanyInfo, DEFAULT_CONTACT_EMAIL, DEFAULT_CONTACT_PHONE};
use crate::context::AppContext;

const PUBLISHER: &str = "MNGDEV PRO";
const DIRECTOR: &str = "GUERCHAOUI Mohammed Najib";
const SIREN: &str = "SIRET / SIREN : 000 000 000 00000";
const LAST_UPDATED: &str = "28 novembre 2025";

const LEGAL_STYLE: &str = r#"
.legal-content {
    max-width: 56rem;
    margin: 0 auto;
    padding: 9rem 1.5rem 3rem;
    color: #e5e7eb;
}
.legal-content h1 { font-size: 2.25rem; margin-bottom: 1.5rem; }
.legal-content section { margin-bottom: 1.5rem; }
.legal-content h2 { color: var(--neon-cyan); font-size: 1.5rem; margin-bottom: 0.5rem; }
.legal-content p { color: #d1d5db; line-height: 1.6; }
.legal-content a { color: var(--neon-cyan); }
.legal-updated { margin-top: 2rem; font-size: 0.875rem; color: #9ca3af; }
"#;

// Contact details come from the build config when the app context is there
#[hook]
fn use_contact() -> (String, String) {
    match use_context::<AppContext>() {
        Some(ctx) => {
            let CompanyInfo { contact_email, contact_phone, .. } = ctx.config.company.clone();
            (contact_email, contact_phone)
        }
        None => (DEFAULT_CONTACT_EMAIL.to_string(), DEFAULT_CONTACT_PHONE.to_string()),
    }
}

#[function_component(MentionsLegales)]
pub fn mentions_legales() -> Html {
    let (email, phone) = use_contact();
    let mailto = format!("mailto:{}", email);

    html! {
        <main class="legal-content">
            <style>{LEGAL_STYLE}</style>
            <h1 class="neon-text">{"Mentions légales"}</h1>

            <section>
                <h2>{"Éditeur du site"}</h2>
                <p>{format!("Le site est édité par {} - {}.", PUBLISHER, SIREN)}</p>
                <p>
                    {"Siège social : Adresse complète de la société"}<br />
                    {format!("Responsable de la publication : {}", DIRECTOR)}<br />
                    {"Contact : "}<a href={mailto.clone()}>{&email}</a>{format!(" - {}", phone)}
                </p>
            </section>

            <section>
                <h2>{"Hébergement"}</h2>
                <p>{"Hébergeur : Nom de l'hébergeur, adresse de l'hébergeur."}</p>
            </section>

            <section>
                <h2>{"Propriété intellectuelle"}</h2>
                <p>
                    {format!("L'ensemble du contenu de ce site (textes, images, logos, code) est la propriété \
                              exclusive de {} ou de ses partenaires. Toute reproduction sans autorisation \
                              écrite préalable est interdite.", PUBLISHER)}
                </p>
            </section>

            <section>
                <h2>{"Responsabilité"}</h2>
                <p>
                    {format!("Les informations publiées sur ce site le sont à titre informatif. {} ne peut \
                              garantir leur exactitude, leur complétude ou leur actualité.", PUBLISHER)}
                </p>
            </section>

            <section>
                <h2>{"Données personnelles (RGPD)"}</h2>
                <p>
                    {"Les données saisies dans les formulaires (nom, email, téléphone, message) servent \
                      uniquement à répondre à vos demandes. Vous disposez d'un droit d'accès, de rectification, \
                      d'effacement, de limitation, d'opposition et de portabilité. Pour l'exercer : "}
                    <a href={mailto}>{&email}</a>{"."}
                </p>
            </section>

            <p class="legal-updated">{"Date de publication : 01 janvier 2025"}</p>
        </main>
    }
}

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    let (email, _) = use_contact();

    html! {
        <main class="legal-content">
            <style>{LEGAL_STYLE}</style>
            <h1 class="neon-text">{"Politique de confidentialité"}</h1>

            <section>
                <p>
                    {"Nous nous engageons à protéger vos données personnelles. Les informations collectées \
                      servent uniquement à répondre à vos demandes et à améliorer nos services."}
                </p>
            </section>

            <section>
                <h2>{"Collecte des données"}</h2>
                <p>
                    {"Le formulaire de contact transmet votre message par email via EmailJS ; l'inscription \
                      à la newsletter est transmise à notre outil d'emailing. Ce site ne stocke rien lui-même."}
                </p>
            </section>

            <section>
                <h2>{"Partage des données"}</h2>
                <p>{"Vos données ne sont partagées avec des tiers que si la loi l'exige ou pour fournir le service demandé."}</p>
            </section>

            <section>
                <h2>{"Droits RGPD"}</h2>
                <p>
                    {"Accès, rectification, effacement, limitation, opposition et portabilité : contactez-nous à "}
                    <a href={format!("mailto:{}", email)}>{&email}</a>{"."}
                </p>
            </section>

            <p class="legal-updated">{format!("Dernière mise à jour : {}", LAST_UPDATED)}</p>
        </main>
    }
}

#[function_component(Cookies)]
pub fn cookies() -> Html {
    html! {
        <main class="legal-content">
            <style>{LEGAL_STYLE}</style>
            <h1 class="neon-text">{"Cookies"}</h1>

            <section>
                <p>
                    {"Notre site peut utiliser des cookies et autres traceurs pour améliorer la navigation \
                      et analyser la fréquentation."}
                </p>
            </section>

            <section>
                <h2>{"Gestion des cookies"}</h2>
                <p>{"Vous pouvez configurer votre navigateur pour accepter ou refuser les cookies."}</p>
            </section>

            <section>
                <h2>{"Types de cookies"}</h2>
                <p>
                    {"Nécessaires au fonctionnement du site, analytiques pour suivre le trafic, ou marketing \
                      pour personnaliser les contenus."}
                </p>
            </section>

            <p class="legal-updated">{format!("Dernière mise à jour : {}", LAST_UPDATED)}</p>
        </main>
    }
}
