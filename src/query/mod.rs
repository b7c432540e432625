//! Read-only projections over the entered event data: where did one country
//! place across all events, and who placed in one event.

use crate::competition::{Competition, CountryId, EventId, Gender};
use crate::error::TallyError;
use crate::scoring::table;

/// One row of a by-country query: how the country fared in one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryEventResult {
    pub event_id: EventId,
    pub gender: Gender,
    /// 1-based placement, `None` when the country did not place.
    pub placement: Option<usize>,
    pub score: u32,
    pub note: &'static str,
}

/// One row of a by-event query: one placement slot of the event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementResult {
    /// 1-based placement.
    pub placement: usize,
    pub country: Option<CountryId>,
    /// The table's point value for this placement; a property of the slot,
    /// shown whether or not the slot is filled.
    pub score: u32,
}

/// Scan every event for one country, in event order. Always returns one
/// record per event; "not placed" is an expected outcome, not an error.
pub fn query_country(
    comp: &Competition,
    country: CountryId,
) -> Result<Vec<CountryEventResult>, TallyError> {
    if country < 1 || country > comp.country_count() {
        return Err(TallyError::CountryOutOfRange {
            id: country,
            max: comp.country_count(),
        });
    }

    let results = comp
        .configs()
        .iter()
        .zip(comp.entries())
        .map(|(cfg, entry)| {
            // At most one hit per event, by the uniqueness invariant
            let hit = (0..cfg.top_n.required()).find(|&pos| entry.get(pos) == Some(country));
            match hit {
                Some(pos) => CountryEventResult {
                    event_id: cfg.event_id,
                    gender: cfg.gender,
                    placement: Some(pos + 1),
                    score: table::points_for(cfg.top_n, pos),
                    note: "",
                },
                None => CountryEventResult {
                    event_id: cfg.event_id,
                    gender: cfg.gender,
                    placement: None,
                    score: 0,
                    note: "not placed",
                },
            }
        })
        .collect();
    Ok(results)
}

/// List one event's roster: one record per placement slot its current mode
/// requires, filled or not.
pub fn query_event(
    comp: &Competition,
    event_id: EventId,
) -> Result<Vec<PlacementResult>, TallyError> {
    let cfg = comp.config(event_id)?;
    let entry = comp.entry(event_id)?;

    let results = (0..cfg.top_n.required())
        .map(|pos| PlacementResult {
            placement: pos + 1,
            country: entry.get(pos),
            score: table::points_for(cfg.top_n, pos),
        })
        .collect();
    Ok(results)
}
