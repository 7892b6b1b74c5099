pub mod predictor;
pub mod rating_lookup;
pub mod similarity;

pub use predictor::IPredictor;
pub use rating_lookup::IRatingLookup;
pub use similarity::ISimilarity;
