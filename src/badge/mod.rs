pub mod color;
pub mod descriptor;
pub mod generator;

use self::color::BadgeColor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeOutcome {
    /// Coverage source was absent, nothing written.
    Skipped,
    Written { coverage: u8, color: BadgeColor },
}
