//! Tri-state lifecycle of one asynchronous resource read.

#[cfg(test)]
#[path = "status_test.rs"]
mod status_test;

use crate::error::FetchError;

/// Exactly one of pending, failed, or resolved-with-value.
///
/// `Success` always carries a concrete value; optional resources use
/// `FetchStatus<Option<T>>` so "resolved to nothing" stays distinct from
/// "not resolved yet".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FetchStatus<T> {
    #[default]
    Pending,
    Error(FetchError),
    Success(T),
}

impl<T> FetchStatus<T> {
    pub fn from_result(result: Result<T, FetchError>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(err) => Self::Error(err),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Pending | Self::Error(_) => None,
        }
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            Self::Error(err) => Some(err),
            Self::Pending | Self::Success(_) => None,
        }
    }

    pub fn as_ref(&self) -> FetchStatus<&T> {
        match self {
            Self::Pending => FetchStatus::Pending,
            Self::Error(err) => FetchStatus::Error(err.clone()),
            Self::Success(value) => FetchStatus::Success(value),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> FetchStatus<U> {
        match self {
            Self::Pending => FetchStatus::Pending,
            Self::Error(err) => FetchStatus::Error(err),
            Self::Success(value) => FetchStatus::Success(f(value)),
        }
    }
}
