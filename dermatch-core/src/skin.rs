//! Skin types and climates describing a user's baseline condition.
//!
//! The enums offer compile-time safety for classification lookups.
//!
//! # Examples
//! ```
//! use dermatch_core::{Climate, SkinType};
//!
//! assert_eq!(SkinType::Oily.as_str(), "oily");
//! assert_eq!(Climate::Tropical.to_string(), "tropical");
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Mutually exclusive classification of a user's skin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SkinType {
    /// Balanced oil and hydration.
    Normal,
    /// Excess sebum production.
    Oily,
    /// Low hydration or compromised barrier.
    Dry,
    /// Oily T-zone with dry cheeks.
    Combination,
    /// Prone to redness and irritation.
    Sensitive,
}

impl SkinType {
    /// Return the skin type as a lowercase `&str`.
    ///
    /// # Examples
    /// ```
    /// use dermatch_core::SkinType;
    ///
    /// assert_eq!(SkinType::Combination.as_str(), "combination");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Oily => "oily",
            Self::Dry => "dry",
            Self::Combination => "combination",
            Self::Sensitive => "sensitive",
        }
    }
}

impl std::fmt::Display for SkinType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SkinType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "normal" => Ok(Self::Normal),
            "oily" => Ok(Self::Oily),
            "dry" => Ok(Self::Dry),
            "combination" => Ok(Self::Combination),
            "sensitive" => Ok(Self::Sensitive),
            _ => Err(format!("unknown skin type '{s}'")),
        }
    }
}

/// Broad climate classification affecting product suitability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Climate {
    /// High ambient humidity.
    Humid,
    /// Low ambient humidity.
    Dry,
    /// Hot and humid year-round.
    Tropical,
    /// Moderate seasonal swings. The permissive questionnaire boundary falls
    /// back to this variant for unrecognised input.
    #[default]
    Temperate,
    /// Low temperatures and indoor heating.
    Cold,
}

impl Climate {
    /// Return the climate as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Humid => "humid",
            Self::Dry => "dry",
            Self::Tropical => "tropical",
            Self::Temperate => "temperate",
            Self::Cold => "cold",
        }
    }
}

impl std::fmt::Display for Climate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Climate {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "humid" => Ok(Self::Humid),
            "dry" => Ok(Self::Dry),
            "tropical" => Ok(Self::Tropical),
            "temperate" => Ok(Self::Temperate),
            "cold" => Ok(Self::Cold),
            _ => Err(format!("unknown climate '{s}'")),
        }
    }
}
