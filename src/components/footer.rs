use yew::prelude::*;
use yew_router::prelude::*;

use crate::state::router::View;

pub const INSTAGRAM_URL: &str = "https://www.instagram.com/matchme.vr/";
pub const FACEBOOK_URL: &str = "https://www.facebook.com/people/MATCH-ME-Verona/61572689409935/";

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub on_navigate: Callback<View>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let go = |view: View| {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(view);
        })
    };

    html! {
        <footer class="site-footer">
            <div class="container footer-grid">
                <div>
                    <a href="/" class="footer-logo" onclick={go(View::Home)}>{"♥ Match Me"}</a>
                    <p class="footer-tagline">{"Speed date e serata disco a Verona."}</p>
                    <div class="footer-social">
                        <a href={INSTAGRAM_URL} target="_blank" rel="noopener noreferrer">{"Instagram"}</a>
                        <a href={FACEBOOK_URL} target="_blank" rel="noopener noreferrer">{"Facebook"}</a>
                    </div>
                </div>
                <div>
                    <h4>{"Contatti"}</h4>
                    <a href="https://maps.google.com/?q=Via+San+Marco+114,+37138+Verona" target="_blank" rel="noopener noreferrer">
                        {"Via San Marco 114, 37138 Verona"}
                    </a>
                    <a href="tel:+393481609492">{"+39 348 160 9492"}</a>
                    <a href="mailto:info@matchme.it">{"info@matchme.it"}</a>
                </div>
                <div>
                    <h4>{"Pagine"}</h4>
                    { for View::ALL.into_iter().map(|view| html! {
                        <a href={view.to_path()} onclick={go(view)}>{view.label()}</a>
                    }) }
                </div>
            </div>
            <p class="footer-copy">{"© Match Me. Tutti i diritti riservati."}</p>
        </footer>
    }
}
