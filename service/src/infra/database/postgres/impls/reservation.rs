//! [`Reservation`]-related [`Database`] implementations.
//!
//! [`Reservation`]: crate::domain::Reservation

use common::operations::{By, Select};
use tracerr::Traced;

use crate::{
    domain::Reservation,
    infra::{
        database::{self, postgres::Connection, Postgres},
        Database,
    },
    read,
};

use super::property::property_from_row;

impl<C>
    Database<
        Select<
            By<
                Vec<read::reservation::Listing>,
                read::reservation::list::Selector,
            >,
        >,
    > for Postgres<C>
where
    C: Connection,
{
    type Ok = Vec<read::reservation::Listing>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<
            By<
                Vec<read::reservation::Listing>,
                read::reservation::list::Selector,
            >,
        >,
    ) -> Result<Self::Ok, Self::Err> {
        let read::reservation::list::Selector { guest_id, limit } =
            by.into_inner();

        const SQL: &str = concat!(
            "SELECT reservations.id AS reservation_id, \
                    reservations.start_date, \
                    reservations.end_date, \
                    reservations.guest_id, ",
            property_columns!(),
            ", AVG(property_reviews.rating) AS average_rating \
             FROM reservations \
             JOIN properties \
               ON reservations.property_id = properties.id \
             LEFT JOIN property_reviews \
                    ON properties.id = property_reviews.property_id \
             WHERE reservations.guest_id = $1::UUID \
             GROUP BY properties.id, reservations.id \
             ORDER BY reservations.start_date \
             LIMIT $2::INT4",
        );
        Ok(self
            .query(SQL, &[&guest_id, &limit])
            .await
            .map_err(tracerr::wrap!())?
            .iter()
            .map(|row| {
                let property = property_from_row(row);
                read::reservation::Listing {
                    reservation: Reservation {
                        id: row.get("reservation_id"),
                        start_date: row.get("start_date"),
                        end_date: row.get("end_date"),
                        property_id: property.id,
                        guest_id: row.get("guest_id"),
                    },
                    property,
                    average_rating: row.get("average_rating"),
                }
            })
            .collect())
    }
}
