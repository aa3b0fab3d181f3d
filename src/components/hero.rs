use yew::prelude::*;

const HIGHLIGHTS: [&str; 12] = [
    "Responsive",
    "E-commerce intégré",
    "Gestion clients",
    "Paiements sécurisés",
    "SEO & performance",
    "Intégrations API",
    "CMS (headless possible)",
    "Analytics & suivi",
    "Sécurité & sauvegarde",
    "Déploiement CI/CD",
    "Maintenance & support",
    "Rapide & clé en main",
];

const PHASES: [&str; 5] = [
    "Phase 1 : Kick-off, maquettes & architecture",
    "Phase 2 : Développement des pages principales",
    "Phase 3 : Intégration e-commerce, formulaires & API",
    "Phase 4 : Tests, optimisation, déploiement",
    "Cycle 2 : Corrections visuelles et optimisation UX",
];

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section id="hero" class="hero">
            <style>
                {r#"
                    .hero { padding: 10rem 1.5rem 4rem; max-width: 72rem; margin: 0 auto; }
                    .hero h1 { font-size: 3rem; line-height: 1.1; }
                    .hero-lead { margin-top: 1rem; color: #d1d5db; max-width: 40rem; }
                    .hero-cta { margin-top: 2rem; display: flex; gap: 1rem; flex-wrap: wrap; }
                    .hero-highlights { margin-top: 2rem; display: flex; flex-wrap: wrap; gap: 0.5rem; padding: 0; list-style: none; }
                    .hero-timeline { margin-top: 2.5rem; border-left: 2px solid var(--photon-magenta); padding-left: 1rem; }
                    .hero-timeline li { margin: 0.5rem 0; color: #9ca3af; font-size: 0.875rem; }
                "#}
            </style>
            <h1 class="neon-text">{"Votre site web, conçu pour convertir"}</h1>
            <p class="hero-lead">
                {"Développeur web freelance : sites vitrines et boutiques en ligne sur-mesure, \
                  rapides, sécurisés et faciles à faire évoluer."}
            </p>
            <div class="hero-cta">
                <a href="/#contact" class="btn-neon">{"Demander un devis"}</a>
                <a href="/#features" class="btn-ghost-neon">{"Voir les services"}</a>
            </div>
            <ul class="hero-highlights">
                { HIGHLIGHTS.iter().map(|h| html! { <li class="pill-accent">{*h}</li> }).collect::<Html>() }
            </ul>
            <div class="hero-timeline">
                <h3>{"Temps"}</h3>
                <ol>
                    { PHASES.iter().map(|p| html! { <li>{*p}</li> }).collect::<Html>() }
                </ol>
            </div>
        </section>
    }
}
