pub mod types;
pub mod weights;
pub mod engine;
pub mod validation;

pub use types::{DownRoad, Outcome, PredictionInput, RoadColor, Side};
pub use weights::Weights;
pub use engine::{predict_next, Prediction, RawScores};
pub use validation::validate_weights;
