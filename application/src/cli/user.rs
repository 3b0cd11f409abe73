//! [`User`]-related operations.

use clap::Args;
use serde::Serialize;
use service::{command, domain, query, Query as _};

use crate::{cli::Command, error::UserError, AsError, Error, Service};

/// A `User` of the system, without its password hash.
#[derive(Clone, Debug, Serialize)]
pub struct User {
    /// ID of this [`User`].
    pub id: domain::user::Id,

    /// Name of this [`User`].
    pub name: String,

    /// Email of this [`User`].
    pub email: String,
}

impl From<domain::User> for User {
    fn from(user: domain::User) -> Self {
        let domain::User {
            id,
            name,
            email,
            password_hash: _,
        } = user;

        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Looks up a [`User`] by its email.
#[derive(Args, Clone, Debug)]
pub struct ByEmail {
    /// Email of the `User`.
    pub email: domain::user::Email,
}

impl ByEmail {
    /// Executes this operation.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `USER_NOT_EXISTS` - `User` with the provided email doesn't exist.
    #[tracing::instrument(
        skip_all,
        fields(
            cli.name = "user-by-email",
            email = %self.email,
            otel.name = Command::SPAN_NAME,
        ),
    )]
    pub async fn execute(self, service: &Service) -> Result<User, Error> {
        service
            .execute(query::user::ByEmail::by(&self.email))
            .await
            .map_err(AsError::into_error)?
            .map(Into::into)
            .ok_or_else(|| UserError::NotExists.into())
    }
}

/// Looks up a [`User`] by its ID.
#[derive(Args, Clone, Copy, Debug)]
pub struct ById {
    /// ID of the `User`.
    pub id: domain::user::Id,
}

impl ById {
    /// Executes this operation.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `USER_NOT_EXISTS` - `User` with the provided ID doesn't exist.
    #[tracing::instrument(
        skip_all,
        fields(
            cli.name = "user-by-id",
            id = %self.id,
            otel.name = Command::SPAN_NAME,
        ),
    )]
    pub async fn execute(self, service: &Service) -> Result<User, Error> {
        service
            .execute(query::user::ById::by(self.id))
            .await
            .map_err(AsError::into_error)?
            .map(Into::into)
            .ok_or_else(|| UserError::NotExists.into())
    }
}

/// Creates a new [`User`].
#[derive(Args, Clone, Debug)]
pub struct Create {
    /// Name of the new `User`.
    #[arg(long)]
    pub name: domain::user::Name,

    /// Email of the new `User`.
    #[arg(long)]
    pub email: domain::user::Email,

    /// Already hashed password of the new `User`.
    #[arg(long)]
    pub password_hash: String,
}

impl Create {
    /// Executes this operation.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `EMAIL_OCCUPIED` - provided email is occupied by another `User`.
    #[tracing::instrument(
        skip_all,
        fields(
            cli.name = "create-user",
            email = %self.email,
            name = %self.name,
            otel.name = Command::SPAN_NAME,
        ),
    )]
    pub async fn execute(self, service: &Service) -> Result<User, Error> {
        let Self {
            name,
            email,
            password_hash,
        } = self;

        service
            .execute(command::CreateUser {
                name,
                email,
                password_hash: domain::user::PasswordHash::new(password_hash),
            })
            .await
            .map_err(AsError::into_error)
            .map(Into::into)
    }
}
