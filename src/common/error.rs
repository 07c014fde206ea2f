//! Error types for the B-tree index.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
/// This is a common Rust pattern (see `std::io::Result`).
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors raised by the index.
///
/// A missing key is not an error: lookups and deletes report it as
/// `None`. The only failure is a bad argument, and it is always raised
/// before the tree is touched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// An argument was rejected before any traversal or mutation.
    ///
    /// Raised for absent keys (see [`IndexKey::is_absent`]) and for an
    /// order below [`MIN_ORDER`].
    ///
    /// [`IndexKey::is_absent`]: crate::common::IndexKey::is_absent
    /// [`MIN_ORDER`]: crate::common::config::MIN_ORDER
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Shorthand for the absent-key rejection shared by every operation.
    pub(crate) fn absent_key() -> Self {
        Error::InvalidArgument("key is absent".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::absent_key();
        assert_eq!(format!("{}", err), "invalid argument: key is absent");

        let err = Error::InvalidArgument("order 1 is below the minimum of 2".into());
        assert_eq!(
            err.to_string(),
            "invalid argument: order 1 is below the minimum of 2"
        );
    }

    #[test]
    fn test_result_type_alias() {
        fn might_fail(ok: bool) -> Result<u32> {
            if ok {
                Ok(42)
            } else {
                Err(Error::absent_key())
            }
        }

        assert_eq!(might_fail(true).unwrap(), 42);
        assert!(matches!(might_fail(false), Err(Error::InvalidArgument(_))));
    }
}
