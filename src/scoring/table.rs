use crate::competition::TopN;

/// Points awarded per placement in a top-3 event.
pub const POINTS_TOP3: [u32; 3] = [5, 3, 2];

/// Points awarded per placement in a top-5 event.
pub const POINTS_TOP5: [u32; 5] = [7, 5, 3, 2, 1];

/// The point table for an event mode, indexed by 0-based placement.
pub fn table(mode: TopN) -> &'static [u32] {
    match mode {
        TopN::Top3 => &POINTS_TOP3,
        TopN::Top5 => &POINTS_TOP5,
    }
}

/// Points for one placement under a mode, 0 if the placement is not awarded.
pub fn points_for(mode: TopN, placement: usize) -> u32 {
    table(mode).get(placement).copied().unwrap_or(0)
}
