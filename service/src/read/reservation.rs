//! [`Reservation`]-related read definitions.

use crate::domain::{Property, Reservation};

use super::property::AverageRating;

/// [`Reservation`] along with the reserved [`Property`].
#[derive(Clone, Debug)]
pub struct Listing {
    /// Listed [`Reservation`].
    pub reservation: Reservation,

    /// Reserved [`Property`].
    pub property: Property,

    /// [`AverageRating`] of the reserved [`Property`], if it has been
    /// reviewed.
    pub average_rating: Option<AverageRating>,
}

pub mod list {
    //! [`Reservation`]s list definitions.

    use common::Limit;

    use crate::domain::user;
    #[cfg(doc)]
    use crate::domain::{Reservation, User};

    /// Selector of the [`Reservation`]s made by a guest [`User`].
    #[derive(Clone, Copy, Debug)]
    pub struct Selector {
        /// ID of the guest [`User`].
        pub guest_id: user::Id,

        /// Maximum number of [`Reservation`]s to return.
        pub limit: Limit,
    }
}
