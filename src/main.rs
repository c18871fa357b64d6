use yew::prelude::*;

use lakers_win_predictor::components::{Hero, PredictionCard};
use lakers_win_predictor::hooks::use_prediction::use_prediction;

#[function_component(App)]
fn app() -> Html {
    let prediction = use_prediction();
    let state = (*prediction.state).clone();

    html! {
        <div class="app">
            <div class="nebula" aria-hidden="true"></div>
            <div class="nebula accent" aria-hidden="true"></div>

            <main class="prediction-shell">
                <Hero state={state.clone()} on_refresh={prediction.refresh.clone()} />
                <PredictionCard state={state} />
            </main>

            <style>
                {include_str!("style.css")}
            </style>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
