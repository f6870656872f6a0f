//! User skin profiles produced by questionnaire analysis.
//!
//! Profiles are immutable once constructed; later questionnaire runs produce
//! a fresh profile rather than mutating an existing one.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Climate, SkinType};

/// A finalised skin profile.
///
/// The optional 0–10 scale readings are retained for transparency but are
/// only consulted during classification; scoring reads the classified
/// `skin_type` and the expanded `concerns` list.
///
/// # Examples
/// ```
/// use dermatch_core::{Climate, SkinType, UserProfile};
///
/// # fn main() -> Result<(), dermatch_core::UserProfileError> {
/// let profile = UserProfile::new(SkinType::Oily, Climate::Tropical, 22, 0.9)?
///     .with_concerns(["acne", "pores"]);
/// assert_eq!(profile.skin_type, SkinType::Oily);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UserProfile {
    /// Classified skin type.
    pub skin_type: SkinType,
    /// Expanded concern terms, deduplicated, first-seen order preserved.
    pub concerns: Vec<String>,
    /// Age in years; always positive.
    pub age: u32,
    /// Self-reported climate.
    pub climate: Climate,
    /// Raw oiliness reading (0–10), when the questionnaire captured one.
    #[cfg_attr(feature = "serde", serde(default))]
    pub oiliness: Option<u8>,
    /// Raw sensitivity reading (0–10), when captured.
    #[cfg_attr(feature = "serde", serde(default))]
    pub sensitivity: Option<u8>,
    /// Raw hydration reading (0–10), when captured.
    #[cfg_attr(feature = "serde", serde(default))]
    pub hydration: Option<u8>,
    /// Classifier confidence in `skin_type`, in `0.0..=1.0`.
    pub confidence: f32,
}

/// Errors returned by [`UserProfile::new`].
#[derive(Debug, Error, PartialEq)]
pub enum UserProfileError {
    /// Age was zero.
    #[error("age must be positive")]
    ZeroAge,
    /// Confidence fell outside `0.0..=1.0` or was not finite.
    #[error("confidence must be a finite value between 0.0 and 1.0")]
    InvalidConfidence,
}

impl UserProfile {
    /// Validate and construct a profile with an empty concern list.
    ///
    /// # Errors
    /// Returns [`UserProfileError::ZeroAge`] for a zero age and
    /// [`UserProfileError::InvalidConfidence`] when `confidence` is not a
    /// finite value in `0.0..=1.0`.
    pub fn new(
        skin_type: SkinType,
        climate: Climate,
        age: u32,
        confidence: f32,
    ) -> Result<Self, UserProfileError> {
        if age == 0 {
            return Err(UserProfileError::ZeroAge);
        }
        if !confidence.is_finite() || !(0.0..=1.0).contains(&confidence) {
            return Err(UserProfileError::InvalidConfidence);
        }
        Ok(Self {
            skin_type,
            concerns: Vec::new(),
            age,
            climate,
            oiliness: None,
            sensitivity: None,
            hydration: None,
            confidence,
        })
    }

    /// Replace the concern list while returning `self` for chaining.
    ///
    /// Duplicates are dropped, keeping the first occurrence so output stays
    /// deterministic across runs.
    #[must_use]
    pub fn with_concerns<I, S>(mut self, concerns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.concerns.clear();
        for concern in concerns {
            let concern = concern.into();
            if !self.concerns.contains(&concern) {
                self.concerns.push(concern);
            }
        }
        self
    }

    /// Attach the raw scale readings while returning `self` for chaining.
    #[must_use]
    pub const fn with_scale_readings(
        mut self,
        oiliness: u8,
        sensitivity: u8,
        hydration: u8,
    ) -> Self {
        self.oiliness = Some(oiliness);
        self.sensitivity = Some(sensitivity);
        self.hydration = Some(hydration);
        self
    }

    /// Report whether the profile carries a concern matching `term`.
    ///
    /// Matching is case-insensitive on full terms.
    #[must_use]
    pub fn has_concern(&self, term: &str) -> bool {
        self.concerns
            .iter()
            .any(|concern| concern.eq_ignore_ascii_case(term))
    }
}
