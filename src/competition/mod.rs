pub mod state;
pub mod types;

pub use state::Competition;
pub use types::{CountryId, EventConfig, EventId, Gender, RankEntry, TopN, MAX_PLACEMENTS};
