use super::types::{CountryId, EventConfig, EventId, Gender, RankEntry, TopN, MAX_PLACEMENTS};
use crate::error::TallyError;

/// The competition: global sizes plus one `EventConfig` and one `RankEntry`
/// per event, indexed by stable event id.
///
/// Sizes are immutable once initialized; building a new `Competition` is the
/// only way to change them, and it discards all entered ranks. Rank slots are
/// mutated freely through [`set_rank`](Competition::set_rank) — validation is
/// a separate, explicit step and never blocks mutation or scoring.
#[derive(Debug, Clone)]
pub struct Competition {
    country_count: u32,
    men_event_count: u32,
    women_event_count: u32,
    configs: Vec<EventConfig>,
    entries: Vec<RankEntry>,
}

impl Competition {
    /// Create a competition with `n` countries, `m` men's and `w` women's
    /// events. Events `1..=m` are male, `m+1..=m+w` female, all in top-3 mode
    /// with empty entries.
    pub fn initialize(n: u32, m: u32, w: u32) -> Result<Self, TallyError> {
        let total_events = m.checked_add(w);
        let Some(total_events @ 1..) = total_events else {
            return Err(TallyError::InvalidDimensions { n, m, w });
        };
        if n < 1 {
            return Err(TallyError::InvalidDimensions { n, m, w });
        }

        let total = total_events as usize;
        let mut configs = Vec::with_capacity(total);
        for event_id in 1..=total_events {
            let gender = if event_id <= m {
                Gender::Male
            } else {
                Gender::Female
            };
            configs.push(EventConfig::new(event_id, gender));
        }

        Ok(Self {
            country_count: n,
            men_event_count: m,
            women_event_count: w,
            configs,
            entries: vec![RankEntry::new(); total],
        })
    }

    /// The preset dataset from the original tool: 7 countries, 3 men's and
    /// 2 women's events, with all five outcomes filled in.
    pub fn sample() -> Self {
        let presets: [(TopN, &[CountryId]); 5] = [
            (TopN::Top5, &[1, 2, 3, 4, 5]),
            (TopN::Top3, &[3, 1, 2]),
            (TopN::Top5, &[2, 4, 6, 1, 7]),
            (TopN::Top3, &[5, 4, 1]),
            (TopN::Top5, &[7, 5, 2, 3, 6]),
        ];

        let mut comp = Self::initialize(7, 3, 2).expect("sample dimensions are valid");
        for (row, (mode, ranks)) in presets.iter().enumerate() {
            comp.configs[row].top_n = *mode;
            comp.entries[row] = RankEntry::from_ranks(ranks);
        }
        comp
    }

    pub fn country_count(&self) -> u32 {
        self.country_count
    }

    pub fn men_event_count(&self) -> u32 {
        self.men_event_count
    }

    pub fn women_event_count(&self) -> u32 {
        self.women_event_count
    }

    pub fn event_count(&self) -> u32 {
        self.configs.len() as u32
    }

    pub fn configs(&self) -> &[EventConfig] {
        &self.configs
    }

    pub fn entries(&self) -> &[RankEntry] {
        &self.entries
    }

    pub fn config(&self, event_id: EventId) -> Result<&EventConfig, TallyError> {
        let idx = self.index(event_id)?;
        Ok(&self.configs[idx])
    }

    pub fn entry(&self, event_id: EventId) -> Result<&RankEntry, TallyError> {
        let idx = self.index(event_id)?;
        Ok(&self.entries[idx])
    }

    /// Change one event's top-N mode. Switching down to top 3 clears the
    /// 4th/5th place slots so stale data can never be scored.
    pub fn set_top_n(&mut self, event_id: EventId, mode: TopN) -> Result<(), TallyError> {
        let idx = self.index(event_id)?;
        self.configs[idx].top_n = mode;
        if mode == TopN::Top3 {
            self.entries[idx].clear_from(TopN::Top3.required());
        }
        Ok(())
    }

    /// Set or clear one placement slot of one event. No value validation
    /// happens here; the validator reports problems and the aggregator skips
    /// whatever it cannot score.
    pub fn set_rank(
        &mut self,
        event_id: EventId,
        placement: usize,
        country: Option<CountryId>,
    ) -> Result<(), TallyError> {
        if placement >= MAX_PLACEMENTS {
            return Err(TallyError::PlacementOutOfRange { index: placement });
        }
        let idx = self.index(event_id)?;
        self.entries[idx].set(placement, country);
        Ok(())
    }

    fn index(&self, event_id: EventId) -> Result<usize, TallyError> {
        if event_id < 1 || event_id > self.event_count() {
            return Err(TallyError::EventOutOfRange {
                id: event_id,
                max: self.event_count(),
            });
        }
        Ok((event_id - 1) as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_partitions_genders_at_m() {
        let comp = Competition::initialize(7, 3, 2).unwrap();
        assert_eq!(comp.country_count(), 7);
        assert_eq!(comp.event_count(), 5);

        for cfg in &comp.configs()[..3] {
            assert_eq!(cfg.gender, Gender::Male);
        }
        for cfg in &comp.configs()[3..] {
            assert_eq!(cfg.gender, Gender::Female);
        }
        let ids: Vec<u32> = comp.configs().iter().map(|c| c.event_id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_initialize_rejects_bad_dimensions() {
        assert!(matches!(
            Competition::initialize(0, 3, 2),
            Err(TallyError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            Competition::initialize(5, 0, 0),
            Err(TallyError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_initialize_allows_single_gender() {
        let men_only = Competition::initialize(3, 2, 0).unwrap();
        assert_eq!(men_only.event_count(), 2);
        let women_only = Competition::initialize(3, 0, 2).unwrap();
        assert_eq!(women_only.configs()[0].gender, Gender::Female);
    }

    #[test]
    fn test_set_rank_and_entry_roundtrip() {
        let mut comp = Competition::initialize(4, 1, 1).unwrap();
        comp.set_rank(2, 0, Some(3)).unwrap();
        assert_eq!(comp.entry(2).unwrap().get(0), Some(3));

        comp.set_rank(2, 0, None).unwrap();
        assert_eq!(comp.entry(2).unwrap().get(0), None);
    }

    #[test]
    fn test_set_rank_rejects_bad_event_and_placement() {
        let mut comp = Competition::initialize(4, 1, 1).unwrap();
        assert!(matches!(
            comp.set_rank(3, 0, Some(1)),
            Err(TallyError::EventOutOfRange { id: 3, max: 2 })
        ));
        assert!(matches!(
            comp.set_rank(0, 0, Some(1)),
            Err(TallyError::EventOutOfRange { id: 0, .. })
        ));
        assert!(matches!(
            comp.set_rank(1, 5, Some(1)),
            Err(TallyError::PlacementOutOfRange { index: 5 })
        ));
    }

    #[test]
    fn test_top3_switch_clears_trailing_slots() {
        let mut comp = Competition::initialize(7, 1, 0).unwrap();
        comp.set_top_n(1, TopN::Top5).unwrap();
        for (i, id) in [1, 2, 3, 4, 5].into_iter().enumerate() {
            comp.set_rank(1, i, Some(id)).unwrap();
        }

        comp.set_top_n(1, TopN::Top3).unwrap();
        let entry = comp.entry(1).unwrap();
        assert_eq!(entry.get(2), Some(3));
        assert_eq!(entry.get(3), None);
        assert_eq!(entry.get(4), None);

        // Switching back up must not resurrect the cleared slots
        comp.set_top_n(1, TopN::Top5).unwrap();
        let entry = comp.entry(1).unwrap();
        assert_eq!(entry.get(3), None);
        assert_eq!(entry.get(4), None);
    }

    #[test]
    fn test_sample_matches_preset() {
        let comp = Competition::sample();
        assert_eq!(comp.country_count(), 7);
        assert_eq!(comp.men_event_count(), 3);
        assert_eq!(comp.women_event_count(), 2);
        assert_eq!(comp.config(1).unwrap().top_n, TopN::Top5);
        assert_eq!(comp.config(2).unwrap().top_n, TopN::Top3);
        assert_eq!(comp.entry(2).unwrap().get(0), Some(3));
        assert_eq!(comp.entry(5).unwrap().get(4), Some(6));
    }
}
