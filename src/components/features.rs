use yew::prelude::*;

pub struct Service {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const SERVICES: [Service; 7] = [
    Service {
        id: "f-design",
        title: "Design responsive",
        description: "Interface adaptée au mobile, à la tablette et au desktop, avec animations interactives.",
    },
    Service {
        id: "f-performance",
        title: "Performance optimisée",
        description: "Sites rapides et légers, chargement optimisé et bonnes pratiques web.",
    },
    Service {
        id: "f-ecommerce",
        title: "E-commerce & Paiement",
        description: "Intégration Stripe pour des paiements sécurisés et le suivi des commandes.",
    },
    Service {
        id: "f-database",
        title: "Gestion clients",
        description: "Base de données sécurisée pour suivre vos clients et vos contacts.",
    },
    Service {
        id: "f-interactions",
        title: "Animations & micro-interactions",
        description: "Transitions et effets qui rendent le site vivant et engageant.",
    },
    Service {
        id: "f-secu",
        title: "Sécurité",
        description: "Protection des données et bonnes pratiques pour vos utilisateurs.",
    },
    Service {
        id: "f-mail",
        title: "Notifications & Emails",
        description: "Formulaires de contact reliés à EmailJS et notifications automatiques.",
    },
];

pub fn badge(index: usize) -> &'static str {
    if index == 0 { "Top" } else { "Pro" }
}

#[function_component(Features)]
pub fn features() -> Html {
    html! {
        <section id="features" aria-labelledby="features-title" class="features">
            <style>
                {r#"
                    .features { padding: 4rem 0; }
                    .features-inner { max-width: 72rem; margin: 0 auto; padding: 0 1.5rem; }
                    .features-grid { display: grid; gap: 1.5rem; grid-template-columns: repeat(auto-fill, minmax(18rem, 1fr)); }
                    .card-cyber { padding: 1.25rem; border-radius: 8px; border: 1px solid rgba(255, 51, 204, 0.08); }
                    .card-head { display: flex; justify-content: space-between; gap: 0.75rem; }
                    .card-cyber p { margin-top: 0.25rem; font-size: 0.875rem; color: #d1d5db; }
                "#}
            </style>
            <div class="features-inner">
                <h2 id="features-title" class="neon-text">{"Services"}</h2>
                <div class="features-grid">
                    {
                        SERVICES.iter().enumerate().map(|(idx, service)| {
                            let title_id = format!("{}-title", service.id);
                            html! {
                                <article key={service.id} class="card-cyber" aria-labelledby={title_id.clone()}>
                                    <div class="card-head">
                                        <h3 id={title_id}>{service.title}</h3>
                                        <span class="pill-accent">{badge(idx)}</span>
                                    </div>
                                    <p>{service.description}</p>
                                    <a href="/#contact" class="btn-ghost-neon" aria-label={format!("En savoir plus sur {}", service.title)}>
                                        {"En savoir plus"}
                                    </a>
                                </article>
                            }
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn service_ids_are_unique() {
        let ids: HashSet<_> = SERVICES.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), SERVICES.len());
    }

    #[test]
    fn only_the_first_card_is_top() {
        assert_eq!(badge(0), "Top");
        assert!((1..SERVICES.len()).all(|i| badge(i) == "Pro"));
    }
}
