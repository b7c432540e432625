use std::collections::BTreeMap;

use crate::competition::{CountryId, EventConfig, Gender, RankEntry};
use crate::scoring::table;

/// Aggregated per-country point totals: overall, men's events only, women's
/// events only. Derived data — recomputed from the current configs and
/// entries on every call, never cached.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScoreMaps {
    pub total: BTreeMap<CountryId, u32>,
    pub male: BTreeMap<CountryId, u32>,
    pub female: BTreeMap<CountryId, u32>,
}

impl ScoreMaps {
    fn zeroed(country_count: u32) -> Self {
        let zeros: BTreeMap<CountryId, u32> = (1..=country_count).map(|id| (id, 0)).collect();
        Self {
            total: zeros.clone(),
            male: zeros.clone(),
            female: zeros,
        }
    }
}

/// Fold every event's entered ranks into per-country score maps.
///
/// Absent slots and out-of-range country ids are skipped without error, so
/// partially entered events contribute whatever they have — provisional
/// standings stay available while data entry is in progress. Slots beyond an
/// event's active top-N count are never read.
pub fn compute_scores(
    configs: &[EventConfig],
    entries: &[RankEntry],
    country_count: u32,
) -> ScoreMaps {
    if country_count == 0 {
        return ScoreMaps::default();
    }
    let mut maps = ScoreMaps::zeroed(country_count);

    for (cfg, entry) in configs.iter().zip(entries) {
        let points = table::table(cfg.top_n);
        for (pos, &score) in points.iter().enumerate() {
            let Some(country) = entry.get(pos) else {
                continue;
            };
            if country < 1 || country > country_count {
                continue;
            }
            *maps.total.entry(country).or_insert(0) += score;
            let gender_map = match cfg.gender {
                Gender::Male => &mut maps.male,
                Gender::Female => &mut maps.female,
            };
            *gender_map.entry(country).or_insert(0) += score;
        }
    }
    maps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::competition::{Competition, TopN};

    fn sample_event(event_id: u32, gender: Gender, mode: TopN) -> EventConfig {
        let mut cfg = EventConfig::new(event_id, gender);
        cfg.top_n = mode;
        cfg
    }

    #[test]
    fn test_zero_countries_yields_empty_maps() {
        let maps = compute_scores(&[], &[], 0);
        assert!(maps.total.is_empty());
        assert!(maps.male.is_empty());
        assert!(maps.female.is_empty());
    }

    #[test]
    fn test_all_countries_zero_filled() {
        let maps = compute_scores(&[], &[], 4);
        assert_eq!(maps.total.len(), 4);
        assert!(maps.total.values().all(|&v| v == 0));
        assert_eq!(maps.male.len(), 4);
        assert_eq!(maps.female.len(), 4);
    }

    #[test]
    fn test_single_top5_event() {
        let configs = vec![sample_event(1, Gender::Male, TopN::Top5)];
        let entries = vec![RankEntry::from_ranks(&[1, 2, 3, 4, 5])];
        let maps = compute_scores(&configs, &entries, 7);

        assert_eq!(maps.total[&1], 7);
        assert_eq!(maps.total[&2], 5);
        assert_eq!(maps.total[&3], 3);
        assert_eq!(maps.total[&4], 2);
        assert_eq!(maps.total[&5], 1);
        assert_eq!(maps.total[&6], 0);
        assert_eq!(maps.male[&1], 7);
        assert_eq!(maps.female[&1], 0);
    }

    #[test]
    fn test_gender_routing() {
        let configs = vec![
            sample_event(1, Gender::Male, TopN::Top3),
            sample_event(2, Gender::Female, TopN::Top3),
        ];
        let entries = vec![
            RankEntry::from_ranks(&[1, 2, 3]),
            RankEntry::from_ranks(&[1, 3, 2]),
        ];
        let maps = compute_scores(&configs, &entries, 3);

        assert_eq!(maps.male[&1], 5);
        assert_eq!(maps.female[&1], 5);
        assert_eq!(maps.total[&1], 10);
        assert_eq!(maps.male[&2], 3);
        assert_eq!(maps.female[&2], 2);
    }

    #[test]
    fn test_total_is_male_plus_female() {
        let comp = Competition::sample();
        let maps = compute_scores(comp.configs(), comp.entries(), comp.country_count());
        for id in 1..=comp.country_count() {
            assert_eq!(maps.total[&id], maps.male[&id] + maps.female[&id]);
        }
    }

    #[test]
    fn test_partial_entry_scores_what_it_has() {
        let configs = vec![sample_event(1, Gender::Male, TopN::Top3)];
        let mut entry = RankEntry::new();
        entry.set(1, Some(2)); // only 2nd place entered
        let maps = compute_scores(&configs, &[entry], 3);

        assert_eq!(maps.total[&2], 3);
        assert_eq!(maps.total[&1], 0);
        assert_eq!(maps.total[&3], 0);
    }

    #[test]
    fn test_out_of_range_country_skipped() {
        let configs = vec![sample_event(1, Gender::Female, TopN::Top3)];
        let entries = vec![RankEntry::from_ranks(&[9, 1, 2])]; // 9 > country_count
        let maps = compute_scores(&configs, &entries, 3);

        assert_eq!(maps.total[&1], 3);
        assert_eq!(maps.total[&2], 2);
        assert_eq!(maps.total.values().sum::<u32>(), 5);
    }

    #[test]
    fn test_top3_event_ignores_trailing_slots() {
        let configs = vec![sample_event(1, Gender::Male, TopN::Top3)];
        let mut entry = RankEntry::from_ranks(&[1, 2, 3]);
        // Slots beyond the active mode must not score even if populated
        entry.set(3, Some(4));
        entry.set(4, Some(5));
        let maps = compute_scores(&configs, &[entry], 5);

        assert_eq!(maps.total[&4], 0);
        assert_eq!(maps.total[&5], 0);
    }

    #[test]
    fn test_recomputation_is_idempotent() {
        let comp = Competition::sample();
        let first = compute_scores(comp.configs(), comp.entries(), comp.country_count());
        let second = compute_scores(comp.configs(), comp.entries(), comp.country_count());
        assert_eq!(first, second);
    }

    #[test]
    fn test_sample_data_sums() {
        // Expected sums derived by applying the point tables to the preset
        // rank lists event by event.
        let comp = Competition::sample();
        let maps = compute_scores(comp.configs(), comp.entries(), comp.country_count());

        // Event 1 (M, top5): [1,2,3,4,5] -> 7,5,3,2,1
        // Event 2 (M, top3): [3,1,2]     -> 3:+5, 1:+3, 2:+2
        // Event 3 (M, top5): [2,4,6,1,7] -> 2:+7, 4:+5, 6:+3, 1:+2, 7:+1
        // Event 4 (F, top3): [5,4,1]     -> 5:+5, 4:+3, 1:+2
        // Event 5 (F, top5): [7,5,2,3,6] -> 7:+7, 5:+5, 2:+3, 3:+2, 6:+1
        assert_eq!(maps.male[&1], 7 + 3 + 2);
        assert_eq!(maps.female[&1], 2);
        assert_eq!(maps.total[&1], 14);
        assert_eq!(maps.total[&2], 5 + 2 + 7 + 3);
        assert_eq!(maps.total[&3], 3 + 5 + 2);
        assert_eq!(maps.total[&7], 1 + 7);
        assert_eq!(maps.female[&7], 7);
    }
}
