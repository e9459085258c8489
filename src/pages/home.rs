use yew::prelude::*;

use crate::state::router::View;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub on_navigate: Callback<View>,
}

struct Feature {
    icon: &'static str,
    title: &'static str,
    lines: [&'static str; 2],
}

const FEATURES: [Feature; 3] = [
    Feature {
        icon: "⏱",
        title: "Speed Date",
        lines: [
            "Un'ora di speed date con tavoli composti da 3 ragazze.",
            "Avrai l'opportunità di conoscere diverse persone in un ambiente divertente e rilassato.",
        ],
    },
    Feature {
        icon: "♥",
        title: "Connessioni",
        lines: [
            "Crea connessioni autentiche in un ambiente stimolante.",
            "Ogni incontro è un'opportunità per trovare qualcuno di speciale.",
        ],
    },
    Feature {
        icon: "♫",
        title: "Serata Disco",
        lines: [
            "Dopo lo speed date, la serata continua con musica e balli.",
            "Un'occasione perfetta per approfondire le conoscenze fatte.",
        ],
    },
];

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let go = |view: View| {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(view))
    };

    html! {
        <div class="page home-page">
            <section class="hero fade-in">
                <div class="card hero-card">
                    <div class="hero-heart pulse-slow">{"♥"}</div>
                    <h1 class="hero-title">{"Match Me"}</h1>
                    <p class="hero-subtitle">
                        {"Un'esperienza di speed date unica in discoteca."}
                        <br />
                        {"Incontra nuove persone, crea connessioni e continua la serata ballando."}
                    </p>
                    <button class="button primary" onclick={go(View::Booking)}>
                        {"Prenota Ora →"}
                    </button>
                </div>
            </section>

            <section class="section">
                <div class="container">
                    <h2 class="section-title slide-up">{"Come Funziona"}</h2>
                    <div class="feature-grid">
                        { for FEATURES.iter().enumerate().map(|(i, feature)| html! {
                            <div class="card feature slide-up" style={format!("animation-delay: {}ms", (i + 1) * 100)}>
                                <div class="feature-icon">{feature.icon}</div>
                                <h3>{feature.title}</h3>
                                <p>
                                    {feature.lines[0]}
                                    <br />
                                    {feature.lines[1]}
                                </p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section class="section">
                <div class="container">
                    <div class="card cta slide-up">
                        <h2>{"Pronto a Vivere un'Esperienza Unica?"}</h2>
                        <p>{"I posti sono limitati, prenota ora per assicurarti di partecipare!"}</p>
                        <div class="button-row">
                            <button class="button primary" onclick={go(View::Booking)}>
                                {"Prenota il Tuo Posto →"}
                            </button>
                            <button class="button outline" onclick={go(View::Contact)}>
                                {"Contattaci"}
                            </button>
                        </div>
                    </div>
                </div>
            </section>
        </div>
    }
}
