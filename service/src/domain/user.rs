//! [`User`] definitions.

use std::fmt;

#[cfg(feature = "postgres")]
use postgres_types::{FromSql, ToSql};

/// Registered user of the platform, either a guest or a property owner.
#[derive(Clone, Debug)]
pub struct User {
    /// ID of this [`User`].
    pub id: Id,

    /// [`Name`] of this [`User`].
    pub name: Name,

    /// [`Email`] of this [`User`].
    pub email: Email,

    /// [`PasswordHash`] of this [`User`].
    pub password_hash: PasswordHash,
}

define_id! {
    #[doc = "ID of a [`User`]."]
    Id
}

define_text! {
    #[doc = "Name of a [`User`]."]
    Name;

    #[doc = "Email address of a [`User`], unique across all [`User`]s."]
    Email;
}

/// Hash of a [`User`] password.
///
/// Hashing happens before the value reaches this layer, so it is stored as
/// provided.
#[derive(Clone, Eq, PartialEq)]
#[cfg_attr(feature = "postgres", derive(FromSql, ToSql), postgres(transparent))]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Wraps the provided already hashed password.
    #[must_use]
    pub fn new(hash: impl Into<String>) -> Self {
        Self(hash.into())
    }

    /// Exposes the underlying hash.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(***)")
    }
}

#[cfg(test)]
mod spec {
    use super::PasswordHash;

    #[test]
    fn password_hash_is_redacted_in_debug() {
        let hash = PasswordHash::new("$2a$10$FB/BOAVhpuLvpOREQVmvmezD4ED");

        assert_eq!(format!("{hash:?}"), "PasswordHash(***)");
        assert_eq!(hash.expose(), "$2a$10$FB/BOAVhpuLvpOREQVmvmezD4ED");
    }
}
