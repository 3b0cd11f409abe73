//! [`Reservation`] definitions.

use time::Date;

#[cfg(doc)]
use super::User;
use super::{property, user};

/// Stay of a guest [`User`] in a [`Property`].
///
/// [`Property`]: super::Property
#[derive(Clone, Copy, Debug)]
pub struct Reservation {
    /// ID of this [`Reservation`].
    pub id: Id,

    /// [`Date`] this [`Reservation`] starts on.
    pub start_date: Date,

    /// [`Date`] this [`Reservation`] ends on.
    pub end_date: Date,

    /// ID of the reserved [`Property`].
    ///
    /// [`Property`]: super::Property
    pub property_id: property::Id,

    /// ID of the guest [`User`].
    pub guest_id: user::Id,
}

define_id! {
    #[doc = "ID of a [`Reservation`]."]
    Id
}
