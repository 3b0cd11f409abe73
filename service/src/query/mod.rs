//! [`Query`] definition.

pub mod properties;
pub mod reservations;
pub mod user;

use common::operations::{By, Select};
use tracerr::Traced;

use crate::{
    infra::{database, Database},
    Service,
};

/// [`Query`] of the [`Service`].
pub use common::Handler as Query;

/// [`Query`] [`Select`]ing a `T`ype from a [`Database`].
///
/// Every read operation of the [`Service`] is a plain [`Database`] selection,
/// so the concrete queries are aliases of this type.
#[derive(Clone, Copy, Debug)]
#[expect(clippy::module_name_repetitions, reason = "more readable")]
pub struct DatabaseQuery<T>(T);

impl<W, B> DatabaseQuery<By<W, B>> {
    /// Creates a new [`DatabaseQuery`] selecting a `W` by the provided `B`.
    #[must_use]
    pub fn by(by: B) -> Self {
        Self(By::new(by))
    }
}

impl<Db, W, B> Query<DatabaseQuery<By<W, B>>> for Service<Db>
where
    Db: Database<Select<By<W, B>>, Ok = W, Err = Traced<database::Error>>,
{
    type Ok = W;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        DatabaseQuery(by): DatabaseQuery<By<W, B>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.database()
            .execute(Select(by))
            .await
            .map_err(tracerr::wrap!())
    }
}

#[cfg(test)]
mod spec {
    use common::{
        operations::{By, Select},
        Limit,
    };
    use futures::executor::block_on;
    use tracerr::Traced;

    use crate::{
        domain::{user, User},
        infra::{database, Database},
        query, read, Query as _, Service,
    };

    /// [`Database`] recording the last [`read::reservation::list::Selector`].
    #[derive(Debug, Default)]
    struct Recorder(std::sync::Mutex<Option<read::reservation::list::Selector>>);

    impl Database<Select<By<Option<User>, user::Id>>> for Recorder {
        type Ok = Option<User>;
        type Err = Traced<database::Error>;

        async fn execute(
            &self,
            _: Select<By<Option<User>, user::Id>>,
        ) -> Result<Self::Ok, Self::Err> {
            Ok(None)
        }
    }

    impl
        Database<
            Select<
                By<
                    Vec<read::reservation::Listing>,
                    read::reservation::list::Selector,
                >,
            >,
        > for Recorder
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
            *self.0.lock().unwrap() = Some(by.into_inner());
            Ok(Vec::new())
        }
    }

    #[test]
    fn missing_user_is_none() {
        let svc = Service::new(Recorder::default());

        let user =
            block_on(svc.execute(query::user::ById::by(user::Id::new())))
                .unwrap();

        assert!(user.is_none());
    }

    #[test]
    fn passes_selector_through() {
        let svc = Service::new(Recorder::default());
        let guest_id = user::Id::new();

        let listings = block_on(svc.execute(query::reservations::ByGuest::by(
            read::reservation::list::Selector {
                guest_id,
                limit: Limit::new(3),
            },
        )))
        .unwrap();

        assert!(listings.is_empty());
        let selector = svc.database().0.lock().unwrap().unwrap();
        assert_eq!(selector.guest_id, guest_id);
        assert_eq!(selector.limit, Limit::new(3));
    }
}
