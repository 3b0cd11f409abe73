//! Domain definitions.

/// Defines a UUID-based identifier of a domain entity.
macro_rules! define_id {
    (
        #[doc = $doc:literal]
        $name:ident
    ) => {
        #[doc = $doc]
        #[derive(
            Clone,
            Copy,
            Debug,
            Default,
            ::serde::Deserialize,
            ::derive_more::Display,
            Eq,
            ::derive_more::From,
            ::derive_more::FromStr,
            Hash,
            ::derive_more::Into,
            PartialEq,
            ::serde::Serialize,
        )]
        #[cfg_attr(
            feature = "postgres",
            derive(::postgres_types::FromSql, ::postgres_types::ToSql),
            postgres(transparent)
        )]
        pub struct $name(::uuid::Uuid);

        impl $name {
            /// Creates a new random identifier.
            #[must_use]
            pub fn new() -> Self {
                Self(::uuid::Uuid::new_v4())
            }
        }
    };
}

/// Defines free-form text of a domain entity, stored as `VARCHAR`.
///
/// No format is enforced: callers are trusted to provide sane values.
macro_rules! define_text {
    ($(
        #[doc = $doc:literal]
        $name:ident;
    )*) => {$(
        #[doc = $doc]
        #[derive(
            ::derive_more::AsRef,
            Clone,
            Debug,
            ::derive_more::Display,
            Eq,
            ::derive_more::From,
            ::derive_more::FromStr,
            Hash,
            ::derive_more::Into,
            PartialEq,
        )]
        #[cfg_attr(
            feature = "postgres",
            derive(::postgres_types::FromSql, ::postgres_types::ToSql),
            postgres(transparent)
        )]
        #[as_ref(forward)]
        #[from(&str, String)]
        pub struct $name(String);
    )*};
}

// Declared after the macros above, so they are in textual scope.
pub mod property;
pub mod reservation;
pub mod user;

pub use self::{property::Property, reservation::Reservation, user::User};
