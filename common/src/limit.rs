//! [`Limit`]-related definitions.

use std::{num::ParseIntError, str::FromStr};

use derive_more::{Display, From, Into};
#[cfg(feature = "postgres")]
use postgres_types::{
    accepts, private::BytesMut, to_sql_checked, IsNull, ToSql, Type,
};

/// Maximum number of rows a query may return.
#[derive(
    Clone, Copy, Debug, Display, Eq, From, Hash, Into, Ord, PartialEq, PartialOrd,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(transparent)
)]
pub struct Limit(u32);

impl Limit {
    /// [`Limit`] applied when the caller doesn't specify one.
    pub const DEFAULT: Self = Self(10);

    /// Creates a new [`Limit`] of the provided number of rows.
    #[must_use]
    pub const fn new(rows: u32) -> Self {
        Self(rows)
    }

    /// Returns the number of rows this [`Limit`] allows.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Returns this [`Limit`] as an `INT4` value, saturating at
    /// [`i32::MAX`].
    #[must_use]
    pub fn to_i32(self) -> i32 {
        i32::try_from(self.0).unwrap_or(i32::MAX)
    }
}

impl Default for Limit {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl FromStr for Limit {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

#[cfg(feature = "postgres")]
impl ToSql for Limit {
    accepts!(INT4);
    to_sql_checked!();

    fn to_sql(
        &self,
        ty: &Type,
        w: &mut BytesMut,
    ) -> Result<IsNull, Box<dyn std::error::Error + Sync + Send>> {
        self.to_i32().to_sql(ty, w)
    }
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use super::Limit;

    #[test]
    fn defaults_to_ten_rows() {
        assert_eq!(Limit::default(), Limit::new(10));
        assert_eq!(Limit::default().get(), 10);
    }

    #[test]
    fn from_str() {
        assert_eq!(Limit::from_str("25").unwrap(), Limit::new(25));
        assert_eq!(Limit::from_str("0").unwrap(), Limit::new(0));

        assert!(Limit::from_str("-1").is_err());
        assert!(Limit::from_str("ten").is_err());
        assert!(Limit::from_str("").is_err());
    }

    #[test]
    fn saturates_to_int4() {
        assert_eq!(Limit::new(42).to_i32(), 42);
        assert_eq!(Limit::new(u32::MAX).to_i32(), i32::MAX);
    }
}
