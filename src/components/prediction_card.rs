use yew::prelude::*;

use crate::hooks::use_prediction::PredictionState;
use crate::utils::format::format_game_date;

#[derive(Properties, PartialEq)]
pub struct PredictionCardProps {
    pub state: PredictionState,
}

/// Result panel: error banner, loaded outcome card or the placeholder.
#[function_component(PredictionCard)]
pub fn prediction_card(props: &PredictionCardProps) -> Html {
    let state = &props.state;

    let placeholder = if state.loading {
        "Calibrating the model…"
    } else {
        "Ping the backend to reveal the next matchup."
    };

    html! {
        <section class="prediction-panel">
            <div class="glow-ring" aria-hidden="true">
                <div class="orb" aria-hidden="true"></div>
            </div>

            <div class="prediction-card">
                if let Some(message) = &state.error {
                    <div class="alert">{message}</div>
                }

                if let Some(game) = &state.next_game {
                    // Keyed on the refresh token so the entrance animation
                    // replays after every successful fetch.
                    <div key={state.refresh_token} class="probability-orb">
                        <span class="label">{"model pick"}</span>
                        <span class="value">{game.outcome_label()}</span>
                    </div>

                    <div class="details-grid compact">
                        <div>
                            <p class="muted">{"Opponent"}</p>
                            <h3>{game.opponent.clone()}</h3>
                        </div>
                        <div>
                            <p class="muted">{"Date"}</p>
                            <h3>{format_game_date(&game.game_date)}</h3>
                        </div>
                    </div>
                } else {
                    <div class="placeholder">{placeholder}</div>
                }
            </div>
        </section>
    }
}
