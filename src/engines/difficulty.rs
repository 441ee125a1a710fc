//! Named difficulty presets mapped to search depths.
//!
//! The mapping lives outside the search algorithm so new tiers require no
//! algorithm changes. Search time grows roughly exponentially with depth,
//! bounded by pruning efficiency.

/// Depth used when a caller configures no tier and passes no explicit depth.
pub const DEFAULT_DEPTH: u8 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    #[inline]
    pub const fn depth(self) -> u8 {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Medium => 4,
            Difficulty::Hard => 6,
        }
    }

    /// Case-insensitive tier lookup for callers configured by name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}
