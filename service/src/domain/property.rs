//! [`Property`] definitions.

use derive_more::{Display, From, FromStr, Into};
#[cfg(feature = "postgres")]
use postgres_types::{FromSql, ToSql};
use serde::{Deserialize, Serialize};

use super::user;

/// Property listed for rent.
#[derive(Clone, Debug)]
pub struct Property {
    /// ID of this [`Property`].
    pub id: Id,

    /// ID of the [`User`] owning this [`Property`].
    ///
    /// [`User`]: super::User
    pub owner_id: user::Id,

    /// [`Title`] of this [`Property`].
    pub title: Title,

    /// [`Description`] of this [`Property`].
    pub description: Description,

    /// URL of the thumbnail photo of this [`Property`].
    pub thumbnail_photo_url: PhotoUrl,

    /// URL of the cover photo of this [`Property`].
    pub cover_photo_url: PhotoUrl,

    /// [`Cost`] of a night in this [`Property`].
    pub cost_per_night: Cost,

    /// Number of parking spaces of this [`Property`].
    pub parking_spaces: Count,

    /// Number of bathrooms in this [`Property`].
    pub number_of_bathrooms: Count,

    /// Number of bedrooms in this [`Property`].
    pub number_of_bedrooms: Count,

    /// [`Country`] this [`Property`] is located in.
    pub country: Country,

    /// [`Street`] this [`Property`] is located on.
    pub street: Street,

    /// [`City`] this [`Property`] is located in.
    pub city: City,

    /// [`Province`] this [`Property`] is located in.
    pub province: Province,

    /// [`PostCode`] of this [`Property`].
    pub post_code: PostCode,

    /// Indicator whether this [`Property`] is listed.
    pub active: bool,
}

define_id! {
    #[doc = "ID of a [`Property`]."]
    Id
}

define_text! {
    #[doc = "Title of a [`Property`]."]
    Title;

    #[doc = "Description of a [`Property`]."]
    Description;

    #[doc = "URL of a [`Property`] photo."]
    PhotoUrl;

    #[doc = "Country a [`Property`] is located in."]
    Country;

    #[doc = "Street a [`Property`] is located on."]
    Street;

    #[doc = "City a [`Property`] is located in."]
    City;

    #[doc = "Province a [`Property`] is located in."]
    Province;

    #[doc = "Post code of a [`Property`]."]
    PostCode;
}

/// Nightly cost of a [`Property`], in cents.
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[cfg_attr(feature = "postgres", derive(FromSql, ToSql), postgres(transparent))]
pub struct Cost(i32);

/// Number of parking spaces, bathrooms or bedrooms of a [`Property`].
pub type Count = u16;
