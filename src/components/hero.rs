use yew::prelude::*;

use crate::hooks::use_prediction::PredictionState;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub state: PredictionState,
    pub on_refresh: Callback<()>,
}

/// Header section: badge, title, tagline, refresh control and the
/// last-updated timestamp.
#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let onclick = {
        let on_refresh = props.on_refresh.clone();
        Callback::from(move |_: MouseEvent| on_refresh.emit(()))
    };

    let button_label = if props.state.loading {
        "Summoning data…"
    } else {
        "Refresh prediction"
    };

    html! {
        <section class="hero">
            <p class="badge">{"Chaospanda"}</p>
            <h1>{"Lakers Win Predictor"}</h1>
            <p class="tagline">{props.state.vibe_line()}</p>
            <div class="hero-actions">
                <button class="primary" {onclick} disabled={props.state.loading}>
                    {button_label}
                </button>
                if let Some(at) = props.state.last_updated {
                    <span class="timestamp">{format!("Updated {}", at.format("%H:%M:%S"))}</span>
                }
            </div>
        </section>
    }
}
