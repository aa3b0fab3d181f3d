use yew::prelude::*;

use crate::components::{about::About, contact::ContactSection, features::Features, hero::Hero};
use crate::context::AppContext;

#[function_component]
pub fn Home() -> Html {
    let context = use_context::<AppContext>();

    html! {
        <main class="home">
            <div aria-hidden="true" class="hero-gradient"></div>
            <Hero />
            <Features />
            <About />
            {
                match context {
                    Some(context) => html! { <ContactSection {context} /> },
                    None => {
                        log::error!("Home rendered outside the app context, contact form disabled");
                        html! {}
                    }
                }
            }
        </main>
    }
}

#[function_component]
pub fn NotFound() -> Html {
    html! {
        <main class="legal-content">
            <h1>{"Page introuvable"}</h1>
            <p>{"La page demandée n'existe pas ou a été déplacée."}</p>
            <a href="/" class="btn-ghost-neon">{"Retour à l'accueil"}</a>
        </main>
    }
}
