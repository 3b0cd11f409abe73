//! [`Query`] collection related to the multiple [`Reservation`]s.

use common::operations::By;

use crate::read;
#[cfg(doc)]
use crate::{domain::Reservation, Query};

use super::DatabaseQuery;

/// Queries [`Reservation`]s made by a guest, the earliest first.
pub type ByGuest = DatabaseQuery<
    By<Vec<read::reservation::Listing>, read::reservation::list::Selector>,
>;
