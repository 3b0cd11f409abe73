//! Command line operations over the [`Service`].

pub mod property;
pub mod reservation;
pub mod user;

use clap::Subcommand;
use common::Limit;
use serde::Serialize;

use crate::{Error, Service};

/// Operation to execute over the [`Service`].
#[derive(Clone, Debug, Subcommand)]
pub enum Command {
    /// Looks up a `User` by its email.
    UserByEmail(user::ByEmail),

    /// Looks up a `User` by its ID.
    UserById(user::ById),

    /// Creates a new `User`.
    CreateUser(user::Create),

    /// Lists `Reservation`s made by a guest `User`.
    Reservations(reservation::List),

    /// Searches `Property`s, the cheapest first.
    Properties(property::Search),

    /// Creates a new `Property`.
    CreateProperty(property::Create),
}

impl Command {
    /// Name of the [`tracing::Span`] for the operations.
    pub(crate) const SPAN_NAME: &'static str = "CLI operation";

    /// Executes this [`Command`] over the provided [`Service`].
    ///
    /// `limit` is applied to the listing operations not specifying their own.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `USER_NOT_EXISTS` - looked up `User` doesn't exist;
    /// - `EMAIL_OCCUPIED` - email of a new `User` is occupied by another
    ///                      `User`;
    /// - `INTERNAL_ERROR` - database operation failed.
    pub async fn execute(
        self,
        service: &Service,
        limit: Limit,
    ) -> Result<Vec<Output>, Error> {
        match self {
            Self::UserByEmail(op) => {
                op.execute(service).await.map(|u| vec![u.into()])
            }
            Self::UserById(op) => {
                op.execute(service).await.map(|u| vec![u.into()])
            }
            Self::CreateUser(op) => {
                op.execute(service).await.map(|u| vec![u.into()])
            }
            Self::Reservations(op) => op
                .execute(service, limit)
                .await
                .map(|rs| rs.into_iter().map(Into::into).collect()),
            Self::Properties(op) => op
                .execute(service, limit)
                .await
                .map(|ps| ps.into_iter().map(Into::into).collect()),
            Self::CreateProperty(op) => {
                op.execute(service).await.map(|p| vec![p.into()])
            }
        }
    }
}

/// Output of a [`Command`], printed as a single JSON line.
#[derive(Clone, Debug, Serialize)]
#[serde(untagged)]
pub enum Output {
    /// [`user::User`] output.
    User(user::User),

    /// [`property::Property`] output.
    Property(property::Property),

    /// [`reservation::Reservation`] output.
    Reservation(reservation::Reservation),
}

impl From<user::User> for Output {
    fn from(user: user::User) -> Self {
        Self::User(user)
    }
}

impl From<property::Property> for Output {
    fn from(property: property::Property) -> Self {
        Self::Property(property)
    }
}

impl From<reservation::Reservation> for Output {
    fn from(reservation: reservation::Reservation) -> Self {
        Self::Reservation(reservation)
    }
}
