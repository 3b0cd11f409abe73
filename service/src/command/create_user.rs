//! [`Command`] for creating a new [`User`].

use common::operations::{By, Insert, Select};
use derive_more::{Display, Error, From};
use tracerr::Traced;

#[cfg(doc)]
use crate::domain::user::{Email, Name, PasswordHash};
use crate::{
    domain::{user, User},
    infra::{database, Database},
    Service,
};

use super::Command;

/// Name of the unique constraint on [`User`] emails.
const EMAIL_CONSTRAINT: &str = "users_email_key";

/// [`Command`] for creating a new [`User`].
#[derive(Clone, Debug)]
pub struct CreateUser {
    /// [`Name`] of a new [`User`].
    pub name: user::Name,

    /// [`Email`] of a new [`User`].
    pub email: user::Email,

    /// [`PasswordHash`] of a new [`User`].
    pub password_hash: user::PasswordHash,
}

impl<Db> Command<CreateUser> for Service<Db>
where
    Db: for<'e> Database<
            Select<By<Option<User>, &'e user::Email>>,
            Ok = Option<User>,
            Err = Traced<database::Error>,
        > + Database<Insert<User>, Err = Traced<database::Error>>,
{
    type Ok = User;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: CreateUser) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CreateUser {
            name,
            email,
            password_hash,
        } = cmd;

        let u = self
            .database()
            .execute(Select(By::new(&email)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        if u.is_some() {
            return Err(tracerr::new!(E::EmailOccupied(email)));
        }

        let user = User {
            id: user::Id::new(),
            name,
            email,
            password_hash,
        };

        // Concurrent creation may still occupy the email after the check.
        self.database()
            .execute(Insert(user.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map_err(|e| match e.as_ref() {
                E::Db(db) if db.is_unique_violation(Some(EMAIL_CONSTRAINT)) => {
                    tracerr::new!(E::EmailOccupied(user.email.clone()))
                }
                E::Db(_) | E::EmailOccupied(_) => e,
            })
            .map(drop)?;

        Ok(user)
    }
}

/// Error of [`CreateUser`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`user::Email`] is already occupied.
    #[display("`{_0}` email is occupied")]
    EmailOccupied(#[error(not(source))] user::Email),
}

#[cfg(test)]
mod spec {
    use std::sync::Mutex;

    use common::operations::{By, Insert, Select};
    use futures::executor::block_on;
    use tracerr::Traced;

    use crate::{
        domain::{user, User},
        infra::{database, Database},
        Command as _, Service,
    };

    use super::{CreateUser, ExecutionError};

    /// In-memory [`Database`] of [`User`]s.
    #[derive(Debug, Default)]
    struct Users(Mutex<Vec<User>>);

    impl<'e> Database<Select<By<Option<User>, &'e user::Email>>> for Users {
        type Ok = Option<User>;
        type Err = Traced<database::Error>;

        async fn execute(
            &self,
            Select(by): Select<By<Option<User>, &'e user::Email>>,
        ) -> Result<Self::Ok, Self::Err> {
            let email = by.into_inner();
            Ok(self
                .0
                .lock()
                .unwrap()
                .iter()
                .find(|u| &u.email == email)
                .cloned())
        }
    }

    impl Database<Insert<User>> for Users {
        type Ok = ();
        type Err = Traced<database::Error>;

        async fn execute(
            &self,
            Insert(user): Insert<User>,
        ) -> Result<Self::Ok, Self::Err> {
            self.0.lock().unwrap().push(user);
            Ok(())
        }
    }

    fn cmd(email: &str) -> CreateUser {
        CreateUser {
            name: "Devin Sanders".into(),
            email: email.into(),
            password_hash: user::PasswordHash::new("$2a$10$hash"),
        }
    }

    #[test]
    fn creates_user_with_fresh_id() {
        let svc = Service::new(Users::default());

        let user = block_on(svc.execute(cmd("devin@example.com"))).unwrap();

        assert_eq!(user.email, "devin@example.com".into());
        assert_ne!(user.id, user::Id::default());
        let stored = svc.database().0.lock().unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id, user.id);
    }

    #[test]
    fn rejects_occupied_email() {
        let svc = Service::new(Users::default());
        _ = block_on(svc.execute(cmd("devin@example.com"))).unwrap();

        let err = block_on(svc.execute(cmd("devin@example.com"))).unwrap_err();

        let occupied = user::Email::from("devin@example.com");
        assert!(matches!(
            AsRef::<ExecutionError>::as_ref(&err),
            ExecutionError::EmailOccupied(e) if *e == occupied,
        ));
        assert_eq!(svc.database().0.lock().unwrap().len(), 1);
    }
}
