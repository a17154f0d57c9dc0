//! Typed integer id wrappers for compile-time type safety.
//!
//! Rows in this application are keyed by database-generated `BIGINT` identity
//! columns. `Id<T>` wraps the raw `i64` so that a `UrlCheckId` can never be passed
//! where a `UrlId` was expected.
//!
//! # Example
//!
//! ```rust
//! use page_analyzer_core::common::Id;
//!
//! pub struct Url;
//! pub struct UrlCheck;
//!
//! pub type UrlId = Id<Url>;
//! pub type UrlCheckId = Id<UrlCheck>;
//!
//! let url_id = UrlId::from_i64(7);
//! assert_eq!(url_id.as_i64(), 7);
//!
//! // This would be a compile error:
//! // let wrong: UrlCheckId = url_id;
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt::{self, Debug, Display};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// A typed wrapper around a database-generated `i64` key.
///
/// Ids are never minted in process; they only come back from `INSERT ... RETURNING`
/// or from request paths.
#[repr(transparent)]
pub struct Id<T>(i64, PhantomData<fn() -> T>);

impl<T> Id<T> {
    /// Creates an `Id` from a raw integer.
    #[inline]
    pub fn from_i64(value: i64) -> Self {
        Self(value, PhantomData)
    }

    /// Returns the inner integer.
    #[inline]
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

// ============================================================================
// Standard trait implementations
// ============================================================================

impl<T> Clone for Id<T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(&format!("Id<{}>", std::any::type_name::<T>()))
            .field(&self.0)
            .finish()
    }
}

impl<T> Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl<T> PartialEq for Id<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for Id<T> {}

impl<T> PartialOrd for Id<T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Id<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl<T> Hash for Id<T> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

// ============================================================================
// Serde support (also lets axum's `Path` extract typed ids)
// ============================================================================

impl<T> Serialize for Id<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        i64::deserialize(deserializer).map(Self::from_i64)
    }
}

// ============================================================================
// sqlx support
// ============================================================================

use sqlx::encode::IsNull;
use sqlx::error::BoxDynError;
use sqlx::postgres::{PgArgumentBuffer, PgTypeInfo, PgValueRef, Postgres};
use sqlx::{Decode, Encode, Type};

impl<T> Type<Postgres> for Id<T> {
    fn type_info() -> PgTypeInfo {
        <i64 as Type<Postgres>>::type_info()
    }

    fn compatible(ty: &PgTypeInfo) -> bool {
        <i64 as Type<Postgres>>::compatible(ty)
    }
}

impl<T> Encode<'_, Postgres> for Id<T> {
    fn encode_by_ref(&self, buf: &mut PgArgumentBuffer) -> Result<IsNull, BoxDynError> {
        <i64 as Encode<Postgres>>::encode_by_ref(&self.0, buf)
    }
}

impl<T> Decode<'_, Postgres> for Id<T> {
    fn decode(value: PgValueRef<'_>) -> Result<Self, BoxDynError> {
        <i64 as Decode<Postgres>>::decode(value).map(Self::from_i64)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    struct User;

    type UserId = Id<User>;

    #[test]
    fn test_display_is_bare_integer() {
        let id = UserId::from_i64(42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn test_debug_includes_type_name() {
        let id = UserId::from_i64(1);
        let debug = format!("{:?}", id);
        assert!(debug.contains("User"));
        assert!(debug.contains('1'));
    }

    #[test]
    fn test_ordering_follows_inner_value() {
        let a = UserId::from_i64(1);
        let b = UserId::from_i64(2);
        assert!(a < b);
        assert_eq!(a.max(b), b);
    }

    #[test]
    fn test_hash_and_eq() {
        let mut set = HashSet::new();
        set.insert(UserId::from_i64(5));
        set.insert(UserId::from_i64(5));
        set.insert(UserId::from_i64(6));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_serde_roundtrip_is_plain_number() {
        let id = UserId::from_i64(99);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "99");
        let back: UserId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
