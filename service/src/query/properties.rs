//! [`Query`] collection related to the multiple [`Property`]s.

use common::operations::By;

use crate::read;
#[cfg(doc)]
use crate::{domain::Property, Query};

use super::DatabaseQuery;

/// Searches [`Property`]s matching [`read::property::search::Criteria`],
/// the cheapest first.
pub type Search = DatabaseQuery<
    By<Vec<read::property::Listing>, read::property::search::Criteria>,
>;
