pub mod engine;
pub mod table;
pub mod validation;

pub use engine::{compute_scores, ScoreMaps};
pub use table::points_for;
pub use validation::{validate_all, validate_entry};
