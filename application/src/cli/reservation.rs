//! [`Reservation`]-related operations.

use clap::Args;
use common::Limit;
use serde::Serialize;
use service::{domain, query, read, Query as _};

use crate::{
    cli::{property::Property, Command},
    AsError, Error, Service,
};

/// A stay of a guest `User` in a [`Property`].
#[derive(Clone, Debug, Serialize)]
pub struct Reservation {
    /// ID of this [`Reservation`].
    pub id: domain::reservation::Id,

    /// Date this [`Reservation`] starts on, as `YYYY-MM-DD`.
    pub start_date: String,

    /// Date this [`Reservation`] ends on, as `YYYY-MM-DD`.
    pub end_date: String,

    /// ID of the guest `User`.
    pub guest_id: domain::user::Id,

    /// Reserved [`Property`].
    pub property: Property,
}

impl From<read::reservation::Listing> for Reservation {
    fn from(listing: read::reservation::Listing) -> Self {
        let read::reservation::Listing {
            reservation,
            property,
            average_rating,
        } = listing;

        Self {
            id: reservation.id,
            start_date: reservation.start_date.to_string(),
            end_date: reservation.end_date.to_string(),
            guest_id: reservation.guest_id,
            property: read::property::Listing {
                property,
                average_rating,
            }
            .into(),
        }
    }
}

/// Lists [`Reservation`]s made by a guest `User`, the earliest first.
#[derive(Args, Clone, Copy, Debug)]
pub struct List {
    /// ID of the guest `User`.
    pub guest_id: domain::user::Id,

    /// Maximum number of `Reservation`s to return.
    #[arg(long)]
    pub limit: Option<Limit>,
}

impl List {
    /// Executes this operation, applying the provided `default_limit` if no
    /// limit is specified.
    ///
    /// # Errors
    ///
    /// If the database operation fails.
    #[tracing::instrument(
        skip_all,
        fields(
            cli.name = "reservations",
            guest_id = %self.guest_id,
            otel.name = Command::SPAN_NAME,
        ),
    )]
    pub async fn execute(
        self,
        service: &Service,
        default_limit: Limit,
    ) -> Result<Vec<Reservation>, Error> {
        service
            .execute(query::reservations::ByGuest::by(
                read::reservation::list::Selector {
                    guest_id: self.guest_id,
                    limit: self.limit.unwrap_or(default_limit),
                },
            ))
            .await
            .map_err(AsError::into_error)
            .map(|listings| listings.into_iter().map(Into::into).collect())
    }
}
