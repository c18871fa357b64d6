use serde::Deserialize;

/// Tagline shown before any payload has loaded.
pub const IDLE_VIBE_LINE: &str = "Dialing up the oracle for the next purple & gold storyline.";

/// Prediction payload returned by the backend for the next scheduled game.
///
/// `win_probability` is part of the backend contract but is not surfaced in
/// the rendered view.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct NextGamePrediction {
    pub opponent: String,
    pub opponent_id: i64,
    pub game_date: String,
    pub home: bool,
    pub win_probability: f64,
    pub prediction: i64,
}

impl NextGamePrediction {
    /// The backend emits 1 for a predicted win; any other value counts as a loss.
    pub fn is_predicted_win(&self) -> bool {
        self.prediction == 1
    }

    /// Display label for the model's pick.
    pub fn outcome_label(&self) -> String {
        if self.is_predicted_win() {
            "Lakers Win".to_string()
        } else {
            format!("{} Win", self.opponent)
        }
    }

    /// Decorative tagline for the loaded payload.
    pub fn vibe_line(&self) -> &'static str {
        if self.is_predicted_win() {
            "Momentum check: the model smells a W."
        } else {
            "Warning lights: time to lock in and steal one."
        }
    }
}
