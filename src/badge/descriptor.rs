use serde::{Deserialize, Serialize};

use super::color::BadgeColor;

pub const SCHEMA_VERSION: u32 = 1;
pub const BADGE_LABEL: &str = "coverage";

/// shields.io endpoint schema. Field order is part of the output format.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeDescriptor {
    pub schema_version: u32,
    pub label: String,
    pub message: String,
    pub color: BadgeColor,
}

impl BadgeDescriptor {
    pub fn new(coverage: u8, color: BadgeColor) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            label: BADGE_LABEL.to_string(),
            message: format!("{}%", coverage),
            color,
        }
    }
}
