//! Difficulty tiers for grammars.

use std::fmt;
use std::str::FromStr;

/// Difficulty tier declared by a grammar with `; grammar tier <Tier>`.
///
/// Tiers are ordered; a generator asked for a ceiling draws from every grammar
/// at or below it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    /// Entry-level tasks.
    #[default]
    Easy,
    /// Tasks with some indirection.
    Moderate,
    /// Tasks with obfuscation and chained constraints.
    High,
    /// Everything.
    Expert,
}

impl Tier {
    /// All tiers, lowest first.
    pub const ALL: [Tier; 4] = [Self::Easy, Self::Moderate, Self::High, Self::Expert];

    /// Returns the canonical lowercase name of this tier.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Moderate => "moderate",
            Self::High => "high",
            Self::Expert => "expert",
        }
    }

    /// Returns the tier for a 1-based menu index.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        index.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" | "1" => Ok(Self::Easy),
            "moderate" | "2" => Ok(Self::Moderate),
            "high" | "3" => Ok(Self::High),
            "expert" | "4" => Ok(Self::Expert),
            other => Err(format!("unknown tier: {other}")),
        }
    }
}
