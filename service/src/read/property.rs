//! [`Property`]-related read definitions.

use derive_more::{Display, From, FromStr, Into};
#[cfg(feature = "postgres")]
use postgres_types::{FromSql, ToSql};
use rust_decimal::Decimal;

use crate::domain::Property;

/// [`Property`] along with its review aggregates.
#[derive(Clone, Debug)]
pub struct Listing {
    /// Listed [`Property`].
    pub property: Property,

    /// [`AverageRating`] of the [`Property`], if it has been reviewed.
    pub average_rating: Option<AverageRating>,
}

/// Average of all the review ratings of a [`Property`].
#[derive(
    Clone, Copy, Debug, Display, Eq, From, FromStr, Hash, Into, Ord, PartialEq,
    PartialOrd,
)]
#[cfg_attr(feature = "postgres", derive(FromSql, ToSql), postgres(transparent))]
pub struct AverageRating(Decimal);

pub mod search {
    //! [`Property`] search definitions.

    use common::Limit;

    use crate::domain::{property, user};
    #[cfg(doc)]
    use crate::domain::{Property, User};

    use super::AverageRating;

    /// Criteria of a [`Property`] search.
    ///
    /// Every [`None`] criterion is left out of the search entirely.
    #[derive(Clone, Debug, Default)]
    pub struct Criteria {
        /// Part of the [`property::City`] to look for, case-sensitive.
        pub city: Option<property::City>,

        /// ID of the [`User`] owning the [`Property`].
        pub owner_id: Option<user::Id>,

        /// Minimum [`property::Cost`] of a night, inclusive.
        pub min_cost: Option<property::Cost>,

        /// Maximum [`property::Cost`] of a night, inclusive.
        pub max_cost: Option<property::Cost>,

        /// Minimum [`AverageRating`] of the [`Property`], inclusive.
        pub min_rating: Option<AverageRating>,

        /// Maximum number of [`Property`]s to return.
        pub limit: Limit,
    }
}
