use std::fmt::Display;

use thiserror::Error;

/// An error produced by strict lookups and rule checks.
///
/// Calculations themselves never fail; lenient entry points degrade unknown names to neutral
/// values instead of producing these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("unknown type: {0}")]
    UnknownType(String),
    #[error("unknown nature: {0}")]
    UnknownNature(String),
    #[error("invalid rules: {0}")]
    InvalidRules(String),
}

impl CalcError {
    pub fn invalid_rules<M>(message: M) -> Self
    where
        M: Display,
    {
        Self::InvalidRules(message.to_string())
    }
}

/// An error resulting from some validation process.
#[derive(Debug, Default, Clone, PartialEq, Eq, Error)]
#[error("validation failed: {}", .problems.join("; "))]
pub struct ValidationError {
    problems: Vec<String>,
}

impl ValidationError {
    /// All problems.
    pub fn problems(&self) -> impl Iterator<Item = &str> {
        self.problems.iter().map(|s| s.as_str())
    }

    /// Checks if the problem list is empty.
    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }
}

impl<S> FromIterator<S> for ValidationError
where
    S: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self {
            problems: iter.into_iter().map(|s| s.into()).collect(),
        }
    }
}
