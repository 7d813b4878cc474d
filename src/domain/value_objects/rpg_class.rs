//! Character classes

use serde::{Deserialize, Serialize};

/// The class a character was created with
///
/// Classes are flavour only; combat reads the raw stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RpgClass {
    #[default]
    Knight,
    Mage,
    Cleric,
}

impl RpgClass {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Knight => "Knight",
            Self::Mage => "Mage",
            Self::Cleric => "Cleric",
        }
    }
}

impl std::fmt::Display for RpgClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for RpgClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "knight" => Ok(Self::Knight),
            "mage" => Ok(Self::Mage),
            "cleric" => Ok(Self::Cleric),
            other => Err(format!("Unknown class: {}", other)),
        }
    }
}
