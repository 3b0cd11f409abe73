//! [`Command`] for creating a new [`Property`].

use common::operations::Insert;
use tracerr::Traced;

#[cfg(doc)]
use crate::domain::{
    property::{
        City, Cost, Country, Description, PhotoUrl, PostCode, Province, Street,
        Title,
    },
    User,
};
use crate::{
    domain::{property, user, Property},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for creating a new [`Property`].
///
/// Created [`Property`] is listed right away.
#[derive(Clone, Debug)]
pub struct CreateProperty {
    /// ID of the [`User`] owning a new [`Property`].
    pub owner_id: user::Id,

    /// [`Title`] of a new [`Property`].
    pub title: property::Title,

    /// [`Description`] of a new [`Property`].
    pub description: property::Description,

    /// Thumbnail [`PhotoUrl`] of a new [`Property`].
    pub thumbnail_photo_url: property::PhotoUrl,

    /// Cover [`PhotoUrl`] of a new [`Property`].
    pub cover_photo_url: property::PhotoUrl,

    /// [`Cost`] of a night in a new [`Property`].
    pub cost_per_night: property::Cost,

    /// Number of parking spaces of a new [`Property`].
    pub parking_spaces: property::Count,

    /// Number of bathrooms in a new [`Property`].
    pub number_of_bathrooms: property::Count,

    /// Number of bedrooms in a new [`Property`].
    pub number_of_bedrooms: property::Count,

    /// [`Country`] of a new [`Property`].
    pub country: property::Country,

    /// [`Street`] of a new [`Property`].
    pub street: property::Street,

    /// [`City`] of a new [`Property`].
    pub city: property::City,

    /// [`Province`] of a new [`Property`].
    pub province: property::Province,

    /// [`PostCode`] of a new [`Property`].
    pub post_code: property::PostCode,
}

impl<Db> Command<CreateProperty> for Service<Db>
where
    Db: Database<Insert<Property>, Err = Traced<database::Error>>,
{
    type Ok = Property;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: CreateProperty,
    ) -> Result<Self::Ok, Self::Err> {
        let CreateProperty {
            owner_id,
            title,
            description,
            thumbnail_photo_url,
            cover_photo_url,
            cost_per_night,
            parking_spaces,
            number_of_bathrooms,
            number_of_bedrooms,
            country,
            street,
            city,
            province,
            post_code,
        } = cmd;

        let property = Property {
            id: property::Id::new(),
            owner_id,
            title,
            description,
            thumbnail_photo_url,
            cover_photo_url,
            cost_per_night,
            parking_spaces,
            number_of_bathrooms,
            number_of_bedrooms,
            country,
            street,
            city,
            province,
            post_code,
            active: true,
        };

        self.database()
            .execute(Insert(property.clone()))
            .await
            .map_err(tracerr::wrap!())
            .map(drop)?;

        Ok(property)
    }
}

/// Error of [`CreateProperty`] [`Command`] execution.
pub type ExecutionError = database::Error;

#[cfg(test)]
mod spec {
    use std::sync::Mutex;

    use common::operations::Insert;
    use futures::executor::block_on;
    use tracerr::Traced;

    use crate::{
        domain::{user, Property},
        infra::{database, Database},
        Command as _, Service,
    };

    use super::CreateProperty;

    /// In-memory [`Database`] of [`Property`]s.
    #[derive(Debug, Default)]
    struct Properties(Mutex<Vec<Property>>);

    impl Database<Insert<Property>> for Properties {
        type Ok = ();
        type Err = Traced<database::Error>;

        async fn execute(
            &self,
            Insert(property): Insert<Property>,
        ) -> Result<Self::Ok, Self::Err> {
            self.0.lock().unwrap().push(property);
            Ok(())
        }
    }

    #[test]
    fn creates_active_property() {
        let svc = Service::new(Properties::default());
        let owner_id = user::Id::new();

        let property = block_on(svc.execute(CreateProperty {
            owner_id,
            title: "Speed lamp".into(),
            description: "description".into(),
            thumbnail_photo_url: "https://example.com/thumb.jpg".into(),
            cover_photo_url: "https://example.com/cover.jpg".into(),
            cost_per_night: 93_061.into(),
            parking_spaces: 6,
            number_of_bathrooms: 4,
            number_of_bedrooms: 8,
            country: "Canada".into(),
            street: "536 Namsub Highway".into(),
            city: "Sotboske".into(),
            province: "Quebec".into(),
            post_code: "28142".into(),
        }))
        .unwrap();

        assert!(property.active);
        assert_eq!(property.owner_id, owner_id);
        let stored = svc.database().0.lock().unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id, property.id);
        assert_eq!(stored[0].city, "Sotboske".into());
    }
}
