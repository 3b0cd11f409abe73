//! [`Command`] definition.

pub mod create_property;
pub mod create_user;

/// [`Command`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Command;

pub use self::{create_property::CreateProperty, create_user::CreateUser};
