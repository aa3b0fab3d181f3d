use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod context;
mod forms;
mod hooks;
mod relay;
mod components {
    pub mod about;
    pub mod contact;
    pub mod features;
    pub mod footer;
    pub mod hero;
    pub mod navbar;
    pub mod newsletter;
    pub mod notification;
}
mod pages {
    pub mod home;
    pub mod legal;
}

use components::{footer::Footer, navbar::Navbar};
use config::SiteConfig;
use context::AppContext;
use pages::{
    home::{Home, NotFound},
    legal::{Cookies, MentionsLegales, PrivacyPolicy},
};


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/mentions-legales")]
    MentionsLegales,
    #[at("/politique-confidentialite")]
    Privacy,
    #[at("/cookies")]
    Cookies,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::MentionsLegales => {
            info!("Rendering Mentions legales page");
            html! { <MentionsLegales /> }
        },
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy /> }
        },
        Route::Cookies => {
            info!("Rendering Cookies page");
            html! { <Cookies /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}


#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub context: AppContext,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    let context = props.context.clone();
    let logo_url = context.config.company.logo_url.clone();

    html! {
        <ContextProvider<AppContext> context={context.clone()}>
            <BrowserRouter>
                <div class="site-root">
                    <Navbar {logo_url} />
                    <Switch<Route> render={switch} />
                    <Footer {context} />
                </div>
            </BrowserRouter>
        </ContextProvider<AppContext>>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    let config = SiteConfig::from_build_env();
    info!(
        "Starting site (contact relay: {}, newsletter relay: {})",
        if config.emailjs.is_some() { "emailjs" } else { "simulated" },
        if config.mailing_list.is_some() { "mailing list" } else { "simulated" },
    );

    yew::Renderer::<App>::with_props(AppProps { context: AppContext::new(config) }).render();
}
