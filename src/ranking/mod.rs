//! Sorted standings derived from score maps.

use crate::competition::CountryId;
use crate::scoring::ScoreMaps;

/// Which column the standings are ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Id,
    Total,
    Male,
    Female,
}

impl SortKey {
    pub fn label(self) -> &'static str {
        match self {
            SortKey::Id => "country",
            SortKey::Total => "total",
            SortKey::Male => "men",
            SortKey::Female => "women",
        }
    }
}

/// One standings row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Standing {
    pub id: CountryId,
    pub total: u32,
    pub male: u32,
    pub female: u32,
}

impl Standing {
    fn key(&self, key: SortKey) -> u32 {
        match key {
            SortKey::Id => self.id,
            SortKey::Total => self.total,
            SortKey::Male => self.male,
            SortKey::Female => self.female,
        }
    }
}

/// Build one row per country id `1..=country_count` and sort by the chosen
/// key. The sort is stable, so ties keep ascending-id order regardless of
/// direction.
pub fn rank(maps: &ScoreMaps, country_count: u32, key: SortKey, ascending: bool) -> Vec<Standing> {
    let mut rows: Vec<Standing> = (1..=country_count)
        .map(|id| Standing {
            id,
            total: maps.total.get(&id).copied().unwrap_or(0),
            male: maps.male.get(&id).copied().unwrap_or(0),
            female: maps.female.get(&id).copied().unwrap_or(0),
        })
        .collect();

    if ascending {
        rows.sort_by_key(|row| row.key(key));
    } else {
        rows.sort_by(|a, b| b.key(key).cmp(&a.key(key)));
    }
    rows
}
