use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::{use_hide_on_idle_scroll, DEFAULT_IDLE_MS};
use crate::Route;

const SECTIONS: [(&str, &str); 3] = [
    ("Services", "/#features"),
    ("À propos", "/#about"),
    ("Contact", "/#contact"),
];

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub logo_url: String,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let menu_open = use_state(|| false);
    let hidden = use_hide_on_idle_scroll(DEFAULT_IDLE_MS);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    // keep the bar up while the mobile menu is open
    let nav_class = classes!("top-nav", (hidden && !*menu_open).then(|| "nav-hidden"));

    html! {
        <nav class={nav_class}>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        width: 100%;
                        z-index: 40;
                        background: rgba(18, 18, 18, 0.6);
                        backdrop-filter: blur(12px);
                        border-bottom: 1px solid rgba(255, 51, 204, 0.1);
                        transition: transform 0.3s ease;
                    }
                    .top-nav.nav-hidden { transform: translateY(-100%); }
                    .nav-content {
                        max-width: 72rem;
                        margin: 0 auto;
                        padding: 1rem 1.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo { font-weight: 800; font-size: 2.5rem; color: var(--photon-magenta); text-decoration: none; }
                    .nav-logo-img { width: 6rem; height: 6rem; border-radius: 9999px; object-fit: cover; }
                    .nav-right { display: flex; align-items: center; gap: 1.5rem; }
                    .nav-link { font-size: 0.875rem; color: #d1d5db; text-decoration: none; }
                    .nav-link:hover { color: var(--photon-magenta); }
                    .burger-menu { display: none; background: none; border: none; color: #fff; font-size: 1.4rem; }
                    @media (max-width: 768px) {
                        .burger-menu { display: block; }
                        .nav-right { display: none; }
                        .nav-right.mobile-menu-open {
                            display: flex;
                            flex-direction: column;
                            position: absolute;
                            top: 100%;
                            left: 0;
                            right: 0;
                            padding: 1.5rem;
                            background: rgba(18, 18, 18, 0.9);
                        }
                    }
                "#}
            </style>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo neon-text">{"MNGDEV"}</Link<Route>>
                <img src={props.logo_url.clone()} alt="MNG DEV" class="nav-logo-img" />

                <button class="burger-menu" onclick={toggle_menu} aria-expanded={(*menu_open).to_string()} aria-label="Ouvrir le menu">
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
                <div class={classes!("nav-right", (*menu_open).then(|| "mobile-menu-open"))}>
                    {
                        SECTIONS.iter().map(|(label, href)| html! {
                            <a href={*href} class="nav-link" onclick={close_menu.clone()}>{*label}</a>
                        }).collect::<Html>()
                    }
                    <a href="/#contact" class="btn-ghost-neon" onclick={close_menu.clone()} aria-label="Demander un devis">
                        {"Demander un devis"}
                    </a>
                </div>
            </div>
        </nav>
    }
}
