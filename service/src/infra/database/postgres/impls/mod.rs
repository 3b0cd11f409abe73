//! [`Database`] implementations.
//!
//! [`Database`]: crate::infra::Database

#![allow(
    clippy::items_after_statements,
    reason = "`const SQL` after statements"
)]

/// Expands to the column list of the `properties` table.
///
/// Qualified with the table name, as properties are always selected along
/// with joined tables.
macro_rules! property_columns {
    () => {
        "properties.id, properties.owner_id, \
         properties.title, properties.description, \
         properties.thumbnail_photo_url, properties.cover_photo_url, \
         properties.cost_per_night, \
         properties.parking_spaces, \
         properties.number_of_bathrooms, properties.number_of_bedrooms, \
         properties.country, properties.street, properties.city, \
         properties.province, properties.post_code, \
         properties.active"
    };
}

mod property;
mod reservation;
mod user;
