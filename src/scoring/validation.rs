use std::collections::HashSet;

use crate::competition::{EventConfig, RankEntry};

/// Check one event's entry for completeness, range and uniqueness across the
/// placements its mode requires. Purely advisory: a failing entry still
/// scores whatever valid placements it has.
///
/// Returns `Ok(())` or the first problem found, in placement order.
pub fn validate_entry(
    cfg: &EventConfig,
    entry: &RankEntry,
    country_count: u32,
) -> Result<(), String> {
    let required = cfg.top_n.required();

    for i in 0..required {
        match entry.get(i) {
            None => return Err(format!("missing placement {}", i + 1)),
            Some(id) if id < 1 || id > country_count => {
                return Err(format!(
                    "placement {} out of range (1..{})",
                    i + 1,
                    country_count
                ));
            }
            Some(_) => {}
        }
    }

    let mut seen = HashSet::new();
    for i in 0..required {
        if let Some(id) = entry.get(i) {
            if !seen.insert(id) {
                return Err(format!("duplicate country id: {}", id));
            }
        }
    }

    Ok(())
}

/// Validate every event, returning one status message per event in event
/// order ("valid" on success). This is what the entry table's status column
/// shows.
pub fn validate_all(
    configs: &[EventConfig],
    entries: &[RankEntry],
    country_count: u32,
) -> Vec<String> {
    configs
        .iter()
        .zip(entries)
        .map(
            |(cfg, entry)| match validate_entry(cfg, entry, country_count) {
                Ok(()) => "valid".to_string(),
                Err(msg) => msg,
            },
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::competition::{Competition, Gender, TopN};

    fn top3_event() -> EventConfig {
        EventConfig::new(1, Gender::Male)
    }

    fn top5_event() -> EventConfig {
        let mut cfg = EventConfig::new(1, Gender::Male);
        cfg.top_n = TopN::Top5;
        cfg
    }

    #[test]
    fn test_complete_top3_entry_is_valid() {
        let entry = RankEntry::from_ranks(&[3, 1, 2]);
        assert!(validate_entry(&top3_event(), &entry, 7).is_ok());
    }

    #[test]
    fn test_missing_placement_reported_with_position() {
        let mut entry = RankEntry::new();
        entry.set(0, Some(1));
        entry.set(2, Some(3));
        let err = validate_entry(&top3_event(), &entry, 7).unwrap_err();
        assert_eq!(err, "missing placement 2");
    }

    #[test]
    fn test_top3_ignores_trailing_slots() {
        // Slots 4/5 populated but mode is top 3: not validated, not reported
        let mut entry = RankEntry::from_ranks(&[1, 2, 3]);
        entry.set(3, Some(99));
        entry.set(4, Some(1)); // would be a duplicate if considered
        assert!(validate_entry(&top3_event(), &entry, 7).is_ok());
    }

    #[test]
    fn test_top5_requires_all_five() {
        let entry = RankEntry::from_ranks(&[1, 2, 3]);
        let err = validate_entry(&top5_event(), &entry, 7).unwrap_err();
        assert_eq!(err, "missing placement 4");
    }

    #[test]
    fn test_out_of_range_country() {
        let entry = RankEntry::from_ranks(&[1, 8, 3]);
        let err = validate_entry(&top3_event(), &entry, 7).unwrap_err();
        assert_eq!(err, "placement 2 out of range (1..7)");
    }

    #[test]
    fn test_zero_is_out_of_range() {
        let entry = RankEntry::from_ranks(&[0, 2, 3]);
        let err = validate_entry(&top3_event(), &entry, 7).unwrap_err();
        assert_eq!(err, "placement 1 out of range (1..7)");
    }

    #[test]
    fn test_duplicate_country_reported_by_id() {
        let entry = RankEntry::from_ranks(&[4, 2, 4]);
        let err = validate_entry(&top3_event(), &entry, 7).unwrap_err();
        assert_eq!(err, "duplicate country id: 4");
    }

    #[test]
    fn test_missing_wins_over_duplicate() {
        // Completeness and range are checked before uniqueness
        let mut entry = RankEntry::new();
        entry.set(0, Some(4));
        entry.set(1, Some(4));
        let err = validate_entry(&top3_event(), &entry, 7).unwrap_err();
        assert_eq!(err, "missing placement 3");
    }

    #[test]
    fn test_same_country_across_events_is_fine() {
        let comp = Competition::sample();
        // Country 1 places in events 1, 2, 3 and 4 of the sample
        let messages = validate_all(comp.configs(), comp.entries(), comp.country_count());
        assert_eq!(messages.len(), 5);
        assert!(messages.iter().all(|m| m == "valid"));
    }

    #[test]
    fn test_validate_all_reports_per_event() {
        let mut comp = Competition::initialize(7, 2, 0).unwrap();
        comp.set_rank(1, 0, Some(1)).unwrap();
        comp.set_rank(1, 1, Some(2)).unwrap();
        comp.set_rank(1, 2, Some(3)).unwrap();

        let messages = validate_all(comp.configs(), comp.entries(), comp.country_count());
        assert_eq!(messages, vec!["valid", "missing placement 1"]);
    }
}
