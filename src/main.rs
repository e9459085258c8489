use yew::prelude::*;
use yew_router::prelude::*;
use yew_router::scope_ext::LocationHandle;
use log::{info, warn, Level};

mod config;
mod dom;
mod styles;
mod api {
    pub mod bookings;
}
mod state {
    pub mod fields;
    pub mod router;
    pub mod stepper;
    pub mod submission;
    pub mod timers;
    pub mod validator;
}
mod components {
    pub mod background;
    pub mod footer;
    pub mod form_controls;
    pub mod nav;
}
mod pages {
    pub mod booking;
    pub mod contact;
    pub mod home;
}

use components::{background::AbstractBackground, footer::Footer, nav::Nav};
use pages::{booking::BookingPage, contact::ContactPage, home::Home};
use state::router::{RouterEffect, View, ViewRouter};
use state::timers::{ScheduledTask, Ticket};

pub enum Msg {
    Navigate(View),
    LocationChanged(View),
    Commit(Ticket),
}

/// Owns the view router; pages only ever see the current view and a callback.
pub struct Site {
    router: ViewRouter,
    commit_task: ScheduledTask,
    _location_listener: Option<LocationHandle>,
}

impl Component for Site {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let initial = ctx.link().route::<View>().unwrap_or(View::Home);
        info!("Starting on {:?}", initial);
        let listener = ctx.link().add_location_listener(ctx.link().callback(|location: Location| {
            Msg::LocationChanged(View::recognize(location.path()).unwrap_or(View::Home))
        }));
        if listener.is_none() {
            warn!("no router context, back/forward will not switch views");
        }
        Self {
            router: ViewRouter::new(initial),
            commit_task: ScheduledTask::default(),
            _location_listener: listener,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let effect = match msg {
            Msg::Navigate(view) => self.router.navigate_to(view),
            Msg::LocationChanged(view) => self.router.location_changed(view),
            Msg::Commit(ticket) => self.router.commit(ticket),
        };
        if effect.is_none() && !self.router.is_transitioning() {
            // A dropped request leaves nothing to wait for.
            self.commit_task.cancel();
        }

        match effect {
            Some(RouterEffect::CommitAfter { ticket, delay_ms }) => {
                let link = ctx.link().clone();
                self.commit_task.schedule(delay_ms, move || {
                    link.send_message(Msg::Commit(ticket));
                });
            }
            Some(RouterEffect::ScrollToTop { view, push }) => {
                if push {
                    if let Some(navigator) = ctx.link().navigator() {
                        navigator.push(&view);
                    }
                }
                dom::scroll_to_top();
            }
            None => {}
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_navigate = ctx.link().callback(Msg::Navigate);
        let current = self.router.current();

        let page = match current {
            View::Home => html! { <Home on_navigate={on_navigate.clone()} /> },
            View::Booking => html! { <BookingPage on_navigate={on_navigate.clone()} /> },
            View::Contact => html! { <ContactPage /> },
        };

        html! {
            <>
                <style>{styles::GLOBAL_CSS}</style>
                <AbstractBackground />
                <Nav current={current} on_navigate={on_navigate.clone()} />
                <main class={classes!("app-main", self.router.is_transitioning().then(|| "transitioning"))}>
                    {page}
                </main>
                <Footer on_navigate={on_navigate} />
            </>
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Site />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
