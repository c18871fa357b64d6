pub mod hero;
pub mod prediction_card;

pub use hero::Hero;
pub use prediction_card::PredictionCard;
