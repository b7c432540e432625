use thiserror::Error;

/// Errors raised by the core entry points.
///
/// These are all invalid-input conditions; a failed call never leaves the
/// competition in a partially applied state. Per-event validation problems
/// (missing or duplicate placements) are not errors — they are advisory
/// messages from the validator and never block score computation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TallyError {
    #[error("invalid competition size: need n >= 1 and m + w >= 1 (got n={n}, m={m}, w={w})")]
    InvalidDimensions { n: u32, m: u32, w: u32 },

    #[error("country id {id} out of range (1..{max})")]
    CountryOutOfRange { id: u32, max: u32 },

    #[error("event id {id} out of range (1..{max})")]
    EventOutOfRange { id: u32, max: u32 },

    #[error("placement index {index} out of range (0..5)")]
    PlacementOutOfRange { index: usize },
}
