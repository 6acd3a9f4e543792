//! Validated user profile.
//!
//! A `UserProfile` can only exist with `age >= MIN_AGE`: the fields are
//! private, `UserProfile::new` checks the rule, and deserialization goes
//! through the same constructor.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Youngest accepted age.
pub const MIN_AGE: i64 = 18;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("age must be at least {min}, got {age}")]
    Underage { age: i64, min: i64 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawUserProfile")]
pub struct UserProfile {
    name: String,
    email: String,
    age: i64,
}

#[derive(Deserialize)]
struct RawUserProfile {
    name: String,
    email: String,
    age: i64,
}

impl TryFrom<RawUserProfile> for UserProfile {
    type Error = ValidationError;

    fn try_from(raw: RawUserProfile) -> Result<Self, Self::Error> {
        UserProfile::new(raw.name, raw.email, raw.age)
    }
}

impl UserProfile {
    /// Build a profile, rejecting anyone younger than [`MIN_AGE`].
    ///
    /// `name` and `email` are stored as given; the email is not checked for
    /// shape.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        age: i64,
    ) -> Result<Self, ValidationError> {
        if age < MIN_AGE {
            return Err(ValidationError::Underage { age, min: MIN_AGE });
        }
        Ok(Self {
            name: name.into(),
            email: email.into(),
            age,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn age(&self) -> i64 {
        self.age
    }
}
