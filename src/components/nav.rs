use yew::prelude::*;
use yew_router::prelude::*;

use crate::state::router::View;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub current: View,
    pub on_navigate: Callback<View>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { current, on_navigate } = props;
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let go = |view: View| {
        let menu_open = menu_open.clone();
        let on_navigate = on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            on_navigate.emit(view);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <a href="/" class="nav-logo" onclick={go(View::Home)}>
                    {"♥ Match Me"}
                </a>
                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for View::ALL.into_iter().map(|view| html! {
                        <a
                            href={view.to_path()}
                            class={classes!("nav-link", (view == *current).then(|| "active"))}
                            onclick={go(view)}
                        >
                            {view.label()}
                        </a>
                    }) }
                </div>
            </div>
        </nav>
    }
}
