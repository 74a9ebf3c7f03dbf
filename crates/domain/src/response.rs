//! Success-or-error response envelope

use serde::{Deserialize, Serialize};

/// Result of a well-formed API call
///
/// Both tracker APIs report failures inside an otherwise successful HTTP
/// response. Those payloads are returned as [`ApiResponse::Failure`] so
/// callers can branch on them without error handling; transport and schema
/// problems are reported through [`crate::TrackerError`] instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ApiResponse<T, E> {
    /// The payload matched the endpoint's schema
    Success(T),
    /// The API reported an error
    Failure(E),
}

impl<T, E> ApiResponse<T, E> {
    /// True for the error variant
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// True for the success variant
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Success payload, if any
    #[must_use]
    pub fn success(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Error payload, if any
    #[must_use]
    pub fn failure(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(err) => Some(err),
        }
    }

    /// Borrowing view
    pub const fn as_ref(&self) -> ApiResponse<&T, &E> {
        match self {
            Self::Success(value) => ApiResponse::Success(value),
            Self::Failure(err) => ApiResponse::Failure(err),
        }
    }

    /// Map the success payload
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResponse<U, E> {
        match self {
            Self::Success(value) => ApiResponse::Success(f(value)),
            Self::Failure(err) => ApiResponse::Failure(err),
        }
    }

    /// Convert into a plain `Result`
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(err) => Err(err),
        }
    }
}

impl<T, E> From<Result<T, E>> for ApiResponse<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(err) => Self::Failure(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Sample = ApiResponse<u32, String>;

    #[test]
    fn variant_predicates() {
        assert!(Sample::Success(1).is_success());
        assert!(Sample::Failure("no data".into()).is_failure());
    }

    #[test]
    fn accessors() {
        assert_eq!(Sample::Success(3).success(), Some(3));
        assert_eq!(Sample::Success(3).failure(), None);
        assert_eq!(Sample::Failure("x".into()).failure().as_deref(), Some("x"));
    }

    #[test]
    fn map_and_into_result() {
        let doubled = Sample::Success(4).map(|v| v * 2);
        assert_eq!(doubled.into_result(), Ok(8));
        let failed: Result<u32, String> = Sample::Failure("bad".into()).into_result();
        assert!(failed.is_err());
    }

    #[test]
    fn from_result() {
        let resp: Sample = Ok(5).into();
        assert_eq!(resp, ApiResponse::Success(5));
    }
}
