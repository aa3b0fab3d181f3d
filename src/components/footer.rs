use chrono::{Datelike, Local};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::newsletter::NewsletterSignup;
use crate::context::AppContext;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub context: AppContext,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let company = &props.context.config.company;
    let current_year = Local::now().year();
    let phone_href = format!("tel:{}", company.contact_phone.replace(' ', ""));

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                    .site-footer { border-top: 1px solid rgba(255, 51, 204, 0.1); color: #e5e7eb; }
                    .footer-grid {
                        max-width: 72rem;
                        margin: 0 auto;
                        padding: 3rem 1.5rem;
                        display: grid;
                        gap: 2rem;
                        grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr));
                    }
                    .footer-brand { font-size: 1.5rem; font-weight: 800; color: var(--photon-magenta); }
                    .footer-tagline { margin-top: 0.25rem; font-size: 0.875rem; color: #9ca3af; max-width: 20rem; }
                    .footer-links { display: flex; flex-direction: column; gap: 0.5rem; font-size: 0.875rem; }
                    .footer-contact { margin-top: 0.75rem; list-style: none; padding: 0; font-size: 0.875rem; color: #9ca3af; }
                    .newsletter { margin-top: 1.25rem; }
                    .newsletter-row { margin-top: 0.5rem; display: flex; gap: 0.5rem; }
                    .newsletter-row input { flex: 1; }
                    .newsletter-status { margin-top: 0.5rem; font-size: 0.75rem; height: 1.25rem; }
                    .footer-bottom {
                        border-top: 1px solid rgba(255, 51, 204, 0.06);
                        max-width: 72rem;
                        margin: 0 auto;
                        padding: 1rem 1.5rem;
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: space-between;
                        font-size: 0.75rem;
                        color: #6b7280;
                    }
                    .footer-bottom nav { display: flex; gap: 1rem; }
                "#}
            </style>
            <div class="footer-grid">
                <div>
                    <Link<Route> to={Route::Home} classes="footer-brand neon-text">{"MNGDEV"}</Link<Route>>
                    <p class="footer-tagline">
                        {"Sites vitrines et e-commerce sur-mesure, design néon et expérience soignée."}
                    </p>
                </div>

                <nav aria-label="Liens rapides" class="footer-links">
                    <h3>{"Liens"}</h3>
                    <a href="/#features">{"Services"}</a>
                    <a href="/#about">{"À propos"}</a>
                    <a href="/#contact">{"Contact"}</a>
                    <Link<Route> to={Route::MentionsLegales}>{"Mentions légales"}</Link<Route>>
                </nav>

                <div>
                    <h3>{"Contact"}</h3>
                    <ul class="footer-contact">
                        <li>
                            <a href={format!("mailto:{}", company.contact_email)}>{&company.contact_email}</a>
                        </li>
                        <li><a href={phone_href}>{&company.contact_phone}</a></li>
                        <li>{"Paris, France"}</li>
                    </ul>
                    <NewsletterSignup context={props.context.clone()} />
                </div>
            </div>

            <div class="footer-bottom">
                <span>{format!("© {} {}, tous droits réservés", current_year, company.name)}</span>
                <nav>
                    <Link<Route> to={Route::Privacy}>{"Politique de confidentialité"}</Link<Route>>
                    <Link<Route> to={Route::Cookies}>{"Cookies"}</Link<Route>>
                </nav>
            </div>
        </footer>
    }
}
