//! Postgres [`Database`] implementation.

pub mod connection;
mod impls;
mod like_pattern;
pub mod statement;

use std::{ops::Deref, sync::Arc};

use derive_more::{Display, Error as StdError, From};
use futures::FutureExt as _;
use tokio_postgres::{error::SqlState, Client, NoTls};
use tracerr::Traced;
use tracing as log;

use crate::infra::database;
#[cfg(doc)]
use crate::infra::Database;

pub use tokio_postgres::Config;

pub use self::{
    connection::Connection,
    like_pattern::LikePattern,
    statement::{Param, Placeholder, Statement},
};

/// Postgres [`Database`] client.
#[derive(Debug)]
pub struct Postgres<C = Client>(Arc<C>);

impl Postgres {
    /// Connects a new [`Postgres`] client with the provided [`Config`].
    ///
    /// The connection is driven on the current [`tokio`] runtime until the
    /// client is dropped.
    ///
    /// # Errors
    ///
    /// If failed to connect to the database.
    pub async fn connect(conf: &Config) -> Result<Self, Traced<database::Error>> {
        let (client, connection) = conf
            .connect(NoTls)
            .await
            .map_err(tracerr::from_and_wrap!(=> Error))
            .map_err(tracerr::map_from)?;

        _ = tokio::spawn(connection.map(|res| {
            if let Err(e) = res {
                log::error!("`Postgres` connection failed: {e}");
            }
        }));

        Ok(Self::new(client))
    }
}

impl<C> Postgres<C> {
    /// Wraps the provided [`Connection`] into a [`Postgres`] client.
    #[must_use]
    pub fn new(conn: C) -> Self {
        Self(Arc::new(conn))
    }
}

impl<C> Clone for Postgres<C> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<C> Deref for Postgres<C> {
    type Target = C;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Postgres database [`Error`].
#[derive(Debug, Display, StdError, From)]
pub enum Error {
    /// [`Connection`] error.
    #[display("`Connection` error: {_0}")]
    Connection(connection::Error),
}

impl Error {
    /// Checks if the error is a unique violation of the specified constraint.
    #[must_use]
    pub fn is_unique_violation(&self, constraint: Option<&str>) -> bool {
        match self {
            Self::Connection(e) => {
                e.code() == Some(&SqlState::UNIQUE_VIOLATION)
                    && constraint.map_or(true, |c| {
                        e.as_db_error().and_then(|e| e.constraint()) == Some(c)
                    })
            }
        }
    }
}
