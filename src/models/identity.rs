//! Player identity.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, EnumIter, EnumString};

/// Game region a realm belongs to.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    ValueEnum,
    AsRefStr,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Region {
    Eu,
    Us,
    Kr,
    Tw,
    Cn,
}

impl Region {
    pub fn as_str(&self) -> &str {
        self.as_ref()
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The character a lookup is performed for.
///
/// Realm and character keep the caller's spelling for display and for the
/// upstream URLs; matching against analytics data is case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerIdentity {
    pub region: Region,
    pub realm: String,
    pub character: String,
}

impl PlayerIdentity {
    pub fn new(region: Region, realm: impl Into<String>, character: impl Into<String>) -> Self {
        Self {
            region,
            realm: realm.into(),
            character: character.into(),
        }
    }

    /// Lowercased character name used to match combat summary entries.
    pub fn match_name(&self) -> String {
        self.character.to_lowercase()
    }

    /// Human-readable form, e.g. `Dyrael @ Blackmoore-EU`.
    pub fn display_name(&self) -> String {
        format!(
            "{} @ {}-{}",
            capitalize(&self.character),
            capitalize(&self.realm),
            self.region.as_str().to_uppercase()
        )
    }
}

impl fmt::Display for PlayerIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name())
    }
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_parses_case_insensitively() {
        assert_eq!("eu".parse::<Region>().unwrap(), Region::Eu);
        assert_eq!("US".parse::<Region>().unwrap(), Region::Us);
        assert!("moon".parse::<Region>().is_err());
    }

    #[test]
    fn test_region_display_is_lowercase() {
        assert_eq!(Region::Kr.to_string(), "kr");
        assert_eq!(Region::Eu.as_str(), "eu");
    }

    #[test]
    fn test_display_name() {
        let identity = PlayerIdentity::new(Region::Eu, "blackmoore", "dyrael");
        assert_eq!(identity.display_name(), "Dyrael @ Blackmoore-EU");
    }

    #[test]
    fn test_display_name_keeps_non_ascii_initial() {
        let identity = PlayerIdentity::new(Region::Us, "area-52", "éowyn");
        assert_eq!(identity.to_string(), "Éowyn @ Area-52-US");
    }

    #[test]
    fn test_match_name_is_lowercase() {
        let identity = PlayerIdentity::new(Region::Eu, "Blackmoore", "DyRael");
        assert_eq!(identity.match_name(), "dyrael");
    }
}
