use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ingest::parse_leading_int;
use crate::profiles::UserProfile;
use crate::reference::store::ReferenceData;
use crate::reference::types::{FoodGroupId, Gender, PerGroup};

/// Age band labels, youngest first, exactly as they appear in the servings table.
pub const AGE_BANDS: [&str; 8] = [
    "2 to 3", "4 to 8", "9 to 13", "14 to 18", "19 to 30", "31 to 50", "51 to 70", "71+",
];

/// Recommended servings per day for one food group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServingRange {
    pub min: u32,
    pub max: u32,
}

impl ServingRange {
    pub const ZERO: ServingRange = ServingRange { min: 0, max: 0 };

    pub fn exactly(n: u32) -> Self {
        Self { min: n, max: n }
    }

    /// Servings the menu aims for: the middle of the range, rounded down.
    pub fn target(self) -> u32 {
        ((u64::from(self.min) + u64::from(self.max)) / 2) as u32
    }
}

/// Maps an age onto its band. Anything not covered by the lower bands,
/// including ages under 2, lands in the open-ended top band.
pub fn age_band(age: u32) -> &'static str {
    match age {
        2..=3 => AGE_BANDS[0],
        4..=8 => AGE_BANDS[1],
        9..=13 => AGE_BANDS[2],
        14..=18 => AGE_BANDS[3],
        19..=30 => AGE_BANDS[4],
        31..=50 => AGE_BANDS[5],
        51..=70 => AGE_BANDS[6],
        _ => AGE_BANDS[7],
    }
}

/// Parses `"<int> to <int>"` or a leading integer. `None` when the text has
/// neither.
pub fn parse_serving_range(text: &str) -> Option<ServingRange> {
    lazy_static! {
        static ref RANGE_RE: Regex = Regex::new(r"(\d+)\s+to\s+(\d+)").unwrap();
    }
    let trimmed = text.trim();
    if let Some(caps) = RANGE_RE.captures(trimmed) {
        let min = caps[1].parse::<u32>().ok()?;
        let max = caps[2].parse::<u32>().ok()?;
        return Some(ServingRange { min, max });
    }
    parse_leading_int(trimmed)
        .and_then(|n| u32::try_from(n).ok())
        .map(ServingRange::exactly)
}

/// Looks up and parses the requirement row for the triple. `None` when there
/// is no row or its servings text does not parse.
pub fn serving_requirement(
    data: &ReferenceData,
    fgid: FoodGroupId,
    gender: Gender,
    age: u32,
) -> Option<ServingRange> {
    let band = age_band(age);
    let row = data
        .serving_requirements()
        .iter()
        .find(|r| r.fgid == fgid && r.gender == gender && r.ages == band)?;
    let range = parse_serving_range(&row.servings);
    if range.is_none() {
        debug!(%fgid, %gender, band, servings = %row.servings, "unparsable servings text");
    }
    range
}

/// Required ranges for all four groups; misses default to zero.
pub fn required_servings(data: &ReferenceData, profile: &UserProfile) -> PerGroup<ServingRange> {
    PerGroup::from_fn(|fgid| {
        serving_requirement(data, fgid, profile.gender, profile.age).unwrap_or(ServingRange::ZERO)
    })
}
