//! Key trait for index entries.

/// A key that can be stored in the index.
///
/// Keys need a total order (`Ord`) and must be cloneable because
/// separator keys move between nodes during rotation and merge.
///
/// `is_absent` lets a key type carry a "no key" state that the index
/// must refuse. Plain key types never have one and keep the default.
/// `Option<T>` treats `None` as absent, so a tree keyed on optional
/// values rejects `None` with `Error::InvalidArgument` instead of
/// storing it.
///
/// # Example
/// ```
/// use interchangedb_btree::IndexKey;
///
/// assert!(!42u64.is_absent());
/// assert!(None::<u64>.is_absent());
/// assert!(!Some(7u64).is_absent());
/// ```
pub trait IndexKey: Ord + Clone {
    /// Returns true if this value stands for "no key".
    #[inline]
    fn is_absent(&self) -> bool {
        false
    }
}

macro_rules! impl_index_key {
    ($($t:ty),* $(,)?) => {
        $(impl IndexKey for $t {})*
    };
}

impl_index_key!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, char, bool, (), String,
    Vec<u8>,
);

impl IndexKey for &str {}

impl<const N: usize> IndexKey for [u8; N] {}

impl<T: IndexKey> IndexKey for Option<T> {
    #[inline]
    fn is_absent(&self) -> bool {
        match self {
            None => true,
            Some(inner) => inner.is_absent(),
        }
    }
}

impl<A: IndexKey, B: IndexKey> IndexKey for (A, B) {
    #[inline]
    fn is_absent(&self) -> bool {
        self.0.is_absent() || self.1.is_absent()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_keys_never_absent() {
        assert!(!0u32.is_absent());
        assert!(!String::new().is_absent());
        assert!(!"".is_absent());
        assert!(!Vec::<u8>::new().is_absent());
        assert!(![0u8; 16].is_absent());
    }

    #[test]
    fn test_option_key_absent() {
        assert!(None::<String>.is_absent());
        assert!(!Some("a".to_string()).is_absent());
        assert!(Some(None::<u8>).is_absent());
    }

    #[test]
    fn test_tuple_key_absent() {
        assert!(!(1u32, 2u32).is_absent());
        assert!((1u32, None::<u32>).is_absent());
    }
}
