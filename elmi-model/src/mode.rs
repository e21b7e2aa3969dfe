//! Generation modes.

use std::{fmt, str::FromStr};

use serde::Deserialize;

use crate::EntryKind;

/// Selects which kinds of accessor are generated for every translation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMode {
    /// Plain lookups only (`t` / `tr`)
    #[default]
    Default,
    /// Lookups taking a lifting function only (`customTr`)
    Custom,
    /// Both kinds, custom accessors suffixed with `Custom`
    Both,
}

impl GenerationMode {
    /// Returns the mode identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationMode::Default => "default",
            GenerationMode::Custom => "custom",
            GenerationMode::Both => "both",
        }
    }

    /// Entry kinds emitted per translation, in emission order.
    pub fn kinds(&self) -> &'static [EntryKind] {
        match self {
            GenerationMode::Default => &[EntryKind::Plain],
            GenerationMode::Custom => &[EntryKind::Custom],
            GenerationMode::Both => &[EntryKind::Plain, EntryKind::Custom],
        }
    }

    /// Whether plain accessors are generated.
    pub fn has_plain(&self) -> bool {
        self.kinds().contains(&EntryKind::Plain)
    }

    /// Whether custom accessors are generated.
    pub fn has_custom(&self) -> bool {
        self.kinds().contains(&EntryKind::Custom)
    }
}

impl fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for GenerationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "default" => Ok(GenerationMode::Default),
            "custom" => Ok(GenerationMode::Custom),
            "both" => Ok(GenerationMode::Both),
            _ => Err(format!(
                "unknown translation type '{}', expected 'default', 'custom' or 'both'",
                s
            )),
        }
    }
}
