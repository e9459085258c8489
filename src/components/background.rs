use yew::prelude::*;

/// Fixed gradient layers behind every page. Purely decorative.
#[function_component(AbstractBackground)]
pub fn abstract_background() -> Html {
    html! {
        <div class="abstract-background" aria-hidden="true">
            <div class="bg-base"></div>
            <div class="bg-glow bg-glow-top"></div>
            <div class="bg-glow bg-glow-right"></div>
            <div class="bg-shimmer"></div>
            <div class="bg-divider" style="top: 100vh;"></div>
            <div class="bg-divider" style="top: 200vh;"></div>
        </div>
    }
}
