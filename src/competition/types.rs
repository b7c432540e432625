/// Country identifier, 1-based (`1..=country_count`).
pub type CountryId = u32;

/// Event identifier, 1-based. Ids `1..=m` are men's events, `m+1..=m+w` women's.
pub type EventId = u32;

/// Widest outcome an event can have (TOP5).
pub const MAX_PLACEMENTS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

/// Whether an event awards points to the top 3 or top 5 finishers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TopN {
    #[default]
    Top3,
    Top5,
}

impl TopN {
    /// Number of placements that must be filled for a valid entry.
    pub fn required(self) -> usize {
        match self {
            TopN::Top3 => 3,
            TopN::Top5 => 5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TopN::Top3 => "top 3",
            TopN::Top5 => "top 5",
        }
    }
}

/// Identity and mode of one event. Gender is fixed at creation from the
/// event's position; the top-N mode is the only mutable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventConfig {
    pub event_id: EventId,
    pub gender: Gender,
    pub top_n: TopN,
}

impl EventConfig {
    pub fn new(event_id: EventId, gender: Gender) -> Self {
        Self {
            event_id,
            gender,
            top_n: TopN::default(),
        }
    }
}

/// One event's entered outcome: up to five optional country ids, positionally
/// indexed by placement (slot 0 = 1st place, slot 4 = 5th place).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RankEntry {
    slots: [Option<CountryId>; MAX_PLACEMENTS],
}

impl RankEntry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an entry from the leading placements; remaining slots stay empty.
    pub fn from_ranks(ranks: &[CountryId]) -> Self {
        let mut entry = Self::default();
        for (i, &id) in ranks.iter().take(MAX_PLACEMENTS).enumerate() {
            entry.slots[i] = Some(id);
        }
        entry
    }

    pub fn get(&self, placement: usize) -> Option<CountryId> {
        self.slots.get(placement).copied().flatten()
    }

    pub fn set(&mut self, placement: usize, country: Option<CountryId>) {
        if placement < MAX_PLACEMENTS {
            self.slots[placement] = country;
        }
    }

    /// Clear every slot at or beyond `from` (used when reverting to top 3).
    pub fn clear_from(&mut self, from: usize) {
        for slot in self.slots.iter_mut().skip(from) {
            *slot = None;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topn_required_counts() {
        assert_eq!(TopN::Top3.required(), 3);
        assert_eq!(TopN::Top5.required(), 5);
    }

    #[test]
    fn test_event_config_defaults_to_top3() {
        let cfg = EventConfig::new(1, Gender::Male);
        assert_eq!(cfg.top_n, TopN::Top3);
    }

    #[test]
    fn test_rank_entry_from_ranks() {
        let entry = RankEntry::from_ranks(&[3, 1, 2]);
        assert_eq!(entry.get(0), Some(3));
        assert_eq!(entry.get(1), Some(1));
        assert_eq!(entry.get(2), Some(2));
        assert_eq!(entry.get(3), None);
        assert_eq!(entry.get(4), None);
    }

    #[test]
    fn test_rank_entry_set_and_clear() {
        let mut entry = RankEntry::new();
        entry.set(3, Some(7));
        entry.set(4, Some(2));
        assert_eq!(entry.get(3), Some(7));

        entry.clear_from(3);
        assert_eq!(entry.get(3), None);
        assert_eq!(entry.get(4), None);
    }

    #[test]
    fn test_rank_entry_out_of_bounds_set_is_noop() {
        let mut entry = RankEntry::new();
        entry.set(5, Some(1));
        assert!(entry.is_empty());
        assert_eq!(entry.get(5), None);
    }
}
