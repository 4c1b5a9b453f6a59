use std::fmt;

use serde::{Deserialize, Serialize};

/// Foods the color classifier can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoodLabel {
    Apple,
    Banana,
    Orange,
    Blueberry,
    Unknown,
}

impl FoodLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            FoodLabel::Apple => "apple",
            FoodLabel::Banana => "banana",
            FoodLabel::Orange => "orange",
            FoodLabel::Blueberry => "blueberry",
            FoodLabel::Unknown => "unknown",
        }
    }

    pub fn is_recognized(&self) -> bool {
        *self != FoodLabel::Unknown
    }
}

impl fmt::Display for FoodLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
