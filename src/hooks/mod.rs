pub mod use_prediction;
