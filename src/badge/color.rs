use serde::{Deserialize, Serialize};

/// Badge colors understood by shields.io.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BadgeColor {
    BrightGreen,
    Green,
    YellowGreen,
    Yellow,
    Orange,
    Red,
}

impl BadgeColor {
    /// Map a rounded coverage percentage to a color. Inclusive lower
    /// bounds, highest threshold wins.
    pub fn from_coverage(coverage: u8) -> Self {
        if coverage >= 90 {
            BadgeColor::BrightGreen
        } else if coverage >= 80 {
            BadgeColor::Green
        } else if coverage >= 70 {
            BadgeColor::YellowGreen
        } else if coverage >= 60 {
            BadgeColor::Yellow
        } else if coverage >= 50 {
            BadgeColor::Orange
        } else {
            BadgeColor::Red
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeColor::BrightGreen => "brightgreen",
            BadgeColor::Green => "green",
            BadgeColor::YellowGreen => "yellowgreen",
            BadgeColor::Yellow => "yellow",
            BadgeColor::Orange => "orange",
            BadgeColor::Red => "red",
        }
    }
}
