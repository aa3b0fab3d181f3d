use yew::prelude::*;

const OFFER: [(&str, &str); 4] = [
    ("Délai", "2–4 semaines (selon contenus)"),
    ("Révisions", "Jusqu'à 3 cycles de retours"),
    ("Livrables", "Livraison clé en main"),
    ("Options", "Formulaire, analytics, CMS headless"),
];

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id="about" class="about">
            <style>
                {r#"
                    .about { padding: 4rem 1.5rem; max-width: 72rem; margin: 0 auto; }
                    .about-grid { display: grid; gap: 2rem; grid-template-columns: repeat(auto-fit, minmax(20rem, 1fr)); }
                    .about p { color: #d1d5db; line-height: 1.6; }
                    .offer-card { border: 1px solid rgba(0, 255, 255, 0.15); border-radius: 12px; padding: 1.5rem; }
                    .offer-card dl { display: grid; grid-template-columns: auto 1fr; gap: 0.5rem 1rem; margin: 0; }
                    .offer-card dt { color: var(--photon-magenta); }
                    .offer-card dd { margin: 0; color: #e5e7eb; }
                "#}
            </style>
            <h2 class="neon-text">{"À propos"}</h2>
            <div class="about-grid">
                <div>
                    <p>
                        {"Je conçois des sites modernes pour les indépendants et les petites entreprises : \
                          une vitrine claire, un parcours de contact simple et, si besoin, une boutique en ligne."}
                    </p>
                    <p>
                        {"Chaque projet suit le même déroulé : cadrage, maquettes, développement, \
                          puis mise en ligne accompagnée."}
                    </p>
                </div>
                <div class="offer-card">
                    <span class="pill-accent">{"Populaire"}</span>
                    <dl>
                        {
                            OFFER.iter().map(|(term, detail)| html! {
                                <>
                                    <dt>{*term}</dt>
                                    <dd>{*detail}</dd>
                                </>
                            }).collect::<Html>()
                        }
                    </dl>
                    <a href="/#contact" class="btn-neon">{"Démarrer un projet"}</a>
                </div>
            </div>
        </section>
    }
}
