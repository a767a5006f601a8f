use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Requesting this name selects the whole catalogue.
pub const ALL_REGIONS: &str = "all";

/// The fixed catalogue of extractable regions, in catalogue order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionName {
    Forehead,
    LeftEyebrow,
    RightEyebrow,
    BothEyebrow,
    ClearEyebrow,
    LeftEye,
    RightEye,
    BothEye,
    ClearEye,
    LeftEyeEyebrow,
    RightEyeEyebrow,
    BothEyeEyebrow,
    ClearEyeEyebrow,
    Nose,
    Mouth,
    EyeNoseMouthEyebrow,
}

impl RegionName {
    pub const ALL: &[RegionName] = &[
        RegionName::Forehead,
        RegionName::LeftEyebrow,
        RegionName::RightEyebrow,
        RegionName::BothEyebrow,
        RegionName::ClearEyebrow,
        RegionName::LeftEye,
        RegionName::RightEye,
        RegionName::BothEye,
        RegionName::ClearEye,
        RegionName::LeftEyeEyebrow,
        RegionName::RightEyeEyebrow,
        RegionName::BothEyeEyebrow,
        RegionName::ClearEyeEyebrow,
        RegionName::Nose,
        RegionName::Mouth,
        RegionName::EyeNoseMouthEyebrow,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RegionName::Forehead => "forehead",
            RegionName::LeftEyebrow => "left_eyebrow",
            RegionName::RightEyebrow => "right_eyebrow",
            RegionName::BothEyebrow => "both_eyebrow",
            RegionName::ClearEyebrow => "clear_eyebrow",
            RegionName::LeftEye => "left_eye",
            RegionName::RightEye => "right_eye",
            RegionName::BothEye => "both_eye",
            RegionName::ClearEye => "clear_eye",
            RegionName::LeftEyeEyebrow => "left_eye_eyebrow",
            RegionName::RightEyeEyebrow => "right_eye_eyebrow",
            RegionName::BothEyeEyebrow => "both_eye_eyebrow",
            RegionName::ClearEyeEyebrow => "clear_eye_eyebrow",
            RegionName::Nose => "nose",
            RegionName::Mouth => "mouth",
            RegionName::EyeNoseMouthEyebrow => "eye_nose_mouth_eyebrow",
        }
    }
}

impl fmt::Display for RegionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RegionName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RegionName::ALL
            .iter()
            .copied()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| format!("unknown region '{s}'"))
    }
}

/// Set of regions requested for one extraction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegionSelection {
    regions: BTreeSet<RegionName>,
}

impl RegionSelection {
    pub fn all() -> Self {
        Self {
            regions: RegionName::ALL.iter().copied().collect(),
        }
    }

    /// Resolves requested names. `"all"` adds the whole catalogue; unknown
    /// names are dropped.
    pub fn parse<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut regions = BTreeSet::new();
        for name in names {
            let name = name.as_ref().trim();
            if name == ALL_REGIONS {
                regions.extend(RegionName::ALL.iter().copied());
                continue;
            }
            match name.parse::<RegionName>() {
                Ok(region) => {
                    regions.insert(region);
                }
                Err(e) => log::debug!("Ignoring region request: {e}"),
            }
        }
        Self { regions }
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Selected regions in catalogue order.
    pub fn iter(&self) -> impl Iterator<Item = RegionName> + '_ {
        self.regions.iter().copied()
    }
}
