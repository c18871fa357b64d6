use std::rc::Rc;

use chrono::{DateTime, Local};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::models::prediction::{IDLE_VIBE_LINE, NextGamePrediction};
use crate::services::api::fetch_next_game_prediction;

/// UI state owned by the prediction fetch cycle.
///
/// `loading` is true strictly between fetch initiation and settlement. A
/// failed fetch clears `next_game` and sets `error`; a successful fetch does
/// the reverse. `last_updated` is only written on success and survives later
/// failures.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct PredictionState {
    pub next_game: Option<Rc<NextGamePrediction>>,
    pub error: Option<String>,
    pub loading: bool,
    pub last_updated: Option<DateTime<Local>>,
    /// Changes on every successful fetch; only used to remount the outcome
    /// element so its entrance animation replays.
    pub refresh_token: u64,
}

impl PredictionState {
    /// State at the start of a fetch attempt.
    pub fn begin_fetch(&self) -> Self {
        Self {
            loading: true,
            error: None,
            ..self.clone()
        }
    }

    /// State after a fetch settled successfully.
    pub fn with_success(
        &self,
        payload: Rc<NextGamePrediction>,
        at: DateTime<Local>,
        token: u64,
    ) -> Self {
        Self {
            next_game: Some(payload),
            error: None,
            loading: false,
            last_updated: Some(at),
            refresh_token: token,
        }
    }

    /// State after a fetch settled with an error.
    pub fn with_failure(&self, message: String) -> Self {
        Self {
            next_game: None,
            error: Some(message),
            loading: false,
            ..self.clone()
        }
    }

    /// Decorative tagline for the current state.
    pub fn vibe_line(&self) -> &'static str {
        self.next_game
            .as_deref()
            .map_or(IDLE_VIBE_LINE, NextGamePrediction::vibe_line)
    }
}

/// Handle returned by `use_prediction`.
#[derive(Clone, PartialEq)]
pub struct PredictionHandle {
    pub state: UseStateHandle<PredictionState>,
    pub refresh: Callback<()>,
}

/// Custom hook owning the prediction fetch cycle.
///
/// Fetches once on mount and again whenever `refresh` is emitted. Each
/// refresh takes a monotonically increasing sequence number; a request that
/// settles after a newer one has been issued is discarded, so overlapping
/// refreshes cannot apply stale state out of order. The sequence number of a
/// successful request doubles as the refresh token.
#[hook]
pub fn use_prediction() -> PredictionHandle {
    let state = use_state(PredictionState::default);
    let request_seq = use_mut_ref(|| 0u64);

    let refresh = {
        let state = state.clone();
        let request_seq = request_seq.clone();

        Callback::from(move |()| {
            let seq = {
                let mut latest = request_seq.borrow_mut();
                *latest += 1;
                *latest
            };

            state.set(state.begin_fetch());

            let state = state.clone();
            let request_seq = request_seq.clone();

            spawn_local(async move {
                let outcome = fetch_next_game_prediction().await;

                // A newer refresh superseded this request.
                if *request_seq.borrow() != seq {
                    return;
                }

                match outcome {
                    Ok(payload) => {
                        state.set(state.with_success(Rc::new(payload), Local::now(), seq));
                    }
                    Err(e) => {
                        gloo::console::warn!(&format!("Prediction fetch failed: {e}"));
                        state.set(state.with_failure(e.to_string()));
                    }
                }
            });
        })
    };

    // Initial fetch on mount.
    {
        let refresh = refresh.clone();
        use_effect_with((), move |_| {
            refresh.emit(());
            || () // Cleanup
        });
    }

    PredictionHandle { state, refresh }
}
