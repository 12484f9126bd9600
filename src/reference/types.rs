use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ingest::{fix_encoding, parse_leading_int, CsvRecord, CsvRow, RowError};

/// One of the four top-level food groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoodGroupId {
    Vf,
    Gr,
    Mi,
    Me,
}

impl FoodGroupId {
    pub const ALL: [FoodGroupId; 4] = [Self::Vf, Self::Gr, Self::Mi, Self::Me];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Vf => "vf",
            Self::Gr => "gr",
            Self::Mi => "mi",
            Self::Me => "me",
        }
    }

    /// Name stamped on every menu item of this group.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Vf => "Vegetables and Fruit",
            Self::Gr => "Grains",
            Self::Mi => "Milk and Alternatives",
            Self::Me => "Meat and Alternatives",
        }
    }

    /// Short heading used next to guideline statements and serving summaries.
    pub fn summary_label(self) -> &'static str {
        match self {
            Self::Vf => "Vegetables & Fruits",
            Self::Gr => "Grains",
            Self::Mi => "Milk & Alternatives",
            Self::Me => "Meat & Alternatives",
        }
    }
}

impl fmt::Display for FoodGroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FoodGroupId {
    type Err = RowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vf" => Ok(Self::Vf),
            "gr" => Ok(Self::Gr),
            "mi" => Ok(Self::Mi),
            "me" => Ok(Self::Me),
            other => Err(RowError::UnknownFoodGroup(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = RowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Male" => Ok(Self::Male),
            "Female" => Ok(Self::Female),
            other => Err(RowError::UnknownGender(other.to_string())),
        }
    }
}

/// Category ids as they appear in the food and food group tables.
pub mod category {
    pub const VF_OTHER: u32 = 0;
    pub const VF_DARK_GREEN: u32 = 1;
    pub const VF_ORANGE: u32 = 2;
    pub const GR_WHOLE: u32 = 3;
    pub const GR_NON_WHOLE: u32 = 4;
    pub const MI_MILK: u32 = 5;
    pub const MI_ALTERNATIVES: u32 = 6;
    pub const ME_ALTERNATIVES: u32 = 7;
    pub const ME_MEAT: u32 = 8;
}

/// Non-numeric or missing category text counts as category 0.
fn category_id(record: &CsvRecord) -> u32 {
    record
        .get("fgcat_id")
        .and_then(parse_leading_int)
        .and_then(|v| u32::try_from(v).ok())
        .unwrap_or(0)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FoodItem {
    pub fgid: FoodGroupId,
    pub fgcat_id: u32,
    pub srvg_sz: String,
    pub food: String,
}

impl CsvRow for FoodItem {
    const TABLE: &'static str = "foods";
    const COLUMNS: &'static [&'static str] = &["fgid", "fgcat_id", "srvg_sz", "food"];

    fn from_record(record: &CsvRecord) -> Result<Self, RowError> {
        let food = record.require("food")?;
        let fgid = record.require("fgid")?.parse::<FoodGroupId>()?;
        Ok(Self {
            fgid,
            fgcat_id: category_id(record),
            srvg_sz: fix_encoding(record.get("srvg_sz").unwrap_or_default()),
            food: fix_encoding(food),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FoodGroup {
    pub fgid: FoodGroupId,
    pub foodgroup: String,
    pub fgcat_id: u32,
    pub fgcat: String,
}

impl CsvRow for FoodGroup {
    const TABLE: &'static str = "food groups";
    const COLUMNS: &'static [&'static str] = &["fgid", "foodgroup", "fgcat_id", "fgcat"];

    fn from_record(record: &CsvRecord) -> Result<Self, RowError> {
        let fgid = record.require("fgid")?.parse::<FoodGroupId>()?;
        let foodgroup = record.require("foodgroup")?;
        Ok(Self {
            fgid,
            foodgroup: fix_encoding(foodgroup),
            fgcat_id: category_id(record),
            fgcat: fix_encoding(record.get("fgcat").unwrap_or_default()),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServingRequirement {
    pub fgid: FoodGroupId,
    pub gender: Gender,
    pub ages: String,
    pub servings: String,
}

impl CsvRow for ServingRequirement {
    const TABLE: &'static str = "serving requirements";
    const COLUMNS: &'static [&'static str] = &["fgid", "gender", "ages", "servings"];

    fn from_record(record: &CsvRecord) -> Result<Self, RowError> {
        Ok(Self {
            fgid: record.require("fgid")?.parse::<FoodGroupId>()?,
            gender: record.require("gender")?.parse::<Gender>()?,
            ages: record.require("ages")?.to_string(),
            servings: record.get("servings").unwrap_or_default().to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectionalStatement {
    pub fgid: FoodGroupId,
    pub statement: String,
}

impl CsvRow for DirectionalStatement {
    const TABLE: &'static str = "directional statements";
    const COLUMNS: &'static [&'static str] = &["fgid", "directional-statement"];

    fn from_record(record: &CsvRecord) -> Result<Self, RowError> {
        Ok(Self {
            fgid: record.require("fgid")?.parse::<FoodGroupId>()?,
            statement: fix_encoding(record.require("directional-statement")?),
        })
    }
}

/// One value per food group; serializes as `{"vf": .., "gr": .., "mi": .., "me": ..}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerGroup<T> {
    pub vf: T,
    pub gr: T,
    pub mi: T,
    pub me: T,
}

impl<T> PerGroup<T> {
    pub fn from_fn(mut f: impl FnMut(FoodGroupId) -> T) -> Self {
        Self {
            vf: f(FoodGroupId::Vf),
            gr: f(FoodGroupId::Gr),
            mi: f(FoodGroupId::Mi),
            me: f(FoodGroupId::Me),
        }
    }

    pub fn get(&self, id: FoodGroupId) -> &T {
        match id {
            FoodGroupId::Vf => &self.vf,
            FoodGroupId::Gr => &self.gr,
            FoodGroupId::Mi => &self.mi,
            FoodGroupId::Me => &self.me,
        }
    }

    pub fn get_mut(&mut self, id: FoodGroupId) -> &mut T {
        match id {
            FoodGroupId::Vf => &mut self.vf,
            FoodGroupId::Gr => &mut self.gr,
            FoodGroupId::Mi => &mut self.mi,
            FoodGroupId::Me => &mut self.me,
        }
    }
}
