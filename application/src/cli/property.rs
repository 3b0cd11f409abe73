//! [`Property`]-related operations.

use clap::Args;
use common::Limit;
use rust_decimal::Decimal;
use serde::Serialize;
use service::{command, domain, query, read, Query as _};

use crate::{cli::Command, AsError, Error, Service};

/// A property listed for rent.
#[derive(Clone, Debug, Serialize)]
pub struct Property {
    /// ID of this [`Property`].
    pub id: domain::property::Id,

    /// ID of the `User` owning this [`Property`].
    pub owner_id: domain::user::Id,

    /// Title of this [`Property`].
    pub title: String,

    /// Description of this [`Property`].
    pub description: String,

    /// URL of the thumbnail photo of this [`Property`].
    pub thumbnail_photo_url: String,

    /// URL of the cover photo of this [`Property`].
    pub cover_photo_url: String,

    /// Cost of a night in this [`Property`], in cents.
    pub cost_per_night: domain::property::Cost,

    /// Number of parking spaces of this [`Property`].
    pub parking_spaces: domain::property::Count,

    /// Number of bathrooms in this [`Property`].
    pub number_of_bathrooms: domain::property::Count,

    /// Number of bedrooms in this [`Property`].
    pub number_of_bedrooms: domain::property::Count,

    /// Country this [`Property`] is located in.
    pub country: String,

    /// Street this [`Property`] is located on.
    pub street: String,

    /// City this [`Property`] is located in.
    pub city: String,

    /// Province this [`Property`] is located in.
    pub province: String,

    /// Post code of this [`Property`].
    pub post_code: String,

    /// Indicator whether this [`Property`] is listed.
    pub active: bool,

    /// Average review rating of this [`Property`], if it has been reviewed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_rating: Option<Decimal>,
}

impl From<domain::Property> for Property {
    fn from(property: domain::Property) -> Self {
        let domain::Property {
            id,
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
            active,
        } = property;

        Self {
            id,
            owner_id,
            title: title.into(),
            description: description.into(),
            thumbnail_photo_url: thumbnail_photo_url.into(),
            cover_photo_url: cover_photo_url.into(),
            cost_per_night,
            parking_spaces,
            number_of_bathrooms,
            number_of_bedrooms,
            country: country.into(),
            street: street.into(),
            city: city.into(),
            province: province.into(),
            post_code: post_code.into(),
            active,
            average_rating: None,
        }
    }
}

impl From<read::property::Listing> for Property {
    fn from(listing: read::property::Listing) -> Self {
        let read::property::Listing {
            property,
            average_rating,
        } = listing;

        Self {
            average_rating: average_rating.map(Into::into),
            ..property.into()
        }
    }
}

/// Searches [`Property`]s, the cheapest first.
#[derive(Args, Clone, Debug)]
pub struct Search {
    /// Part of the city name to look for, case-sensitive.
    #[arg(long)]
    pub city: Option<domain::property::City>,

    /// ID of the `User` owning the `Property`.
    #[arg(long)]
    pub owner_id: Option<domain::user::Id>,

    /// Minimum cost of a night, in cents.
    #[arg(long)]
    pub min_cost: Option<domain::property::Cost>,

    /// Maximum cost of a night, in cents.
    #[arg(long)]
    pub max_cost: Option<domain::property::Cost>,

    /// Minimum average review rating.
    #[arg(long)]
    pub min_rating: Option<read::property::AverageRating>,

    /// Maximum number of `Property`s to return.
    #[arg(long)]
    pub limit: Option<Limit>,
}

impl Search {
    /// Executes this operation, applying the provided `default_limit` if no
    /// limit is specified.
    ///
    /// # Errors
    ///
    /// If the database operation fails.
    #[tracing::instrument(
        skip_all,
        fields(
            cli.name = "properties",
            city = ?self.city,
            max_cost = ?self.max_cost,
            min_cost = ?self.min_cost,
            min_rating = ?self.min_rating,
            otel.name = Command::SPAN_NAME,
            owner_id = ?self.owner_id,
        ),
    )]
    pub async fn execute(
        self,
        service: &Service,
        default_limit: Limit,
    ) -> Result<Vec<Property>, Error> {
        let Self {
            city,
            owner_id,
            min_cost,
            max_cost,
            min_rating,
            limit,
        } = self;

        service
            .execute(query::properties::Search::by(
                read::property::search::Criteria {
                    city,
                    owner_id,
                    min_cost,
                    max_cost,
                    min_rating,
                    limit: limit.unwrap_or(default_limit),
                },
            ))
            .await
            .map_err(AsError::into_error)
            .map(|listings| listings.into_iter().map(Into::into).collect())
    }
}

/// Creates a new [`Property`], listed right away.
#[derive(Args, Clone, Debug)]
pub struct Create {
    /// ID of the `User` owning the new `Property`.
    #[arg(long)]
    pub owner_id: domain::user::Id,

    /// Title of the new `Property`.
    #[arg(long)]
    pub title: domain::property::Title,

    /// Description of the new `Property`.
    #[arg(long, default_value = "")]
    pub description: domain::property::Description,

    /// URL of the thumbnail photo of the new `Property`.
    #[arg(long)]
    pub thumbnail_photo_url: domain::property::PhotoUrl,

    /// URL of the cover photo of the new `Property`.
    #[arg(long)]
    pub cover_photo_url: domain::property::PhotoUrl,

    /// Cost of a night in the new `Property`, in cents.
    #[arg(long)]
    pub cost_per_night: domain::property::Cost,

    /// Number of parking spaces of the new `Property`.
    #[arg(long, default_value_t = 0)]
    pub parking_spaces: domain::property::Count,

    /// Number of bathrooms in the new `Property`.
    #[arg(long, default_value_t = 0)]
    pub number_of_bathrooms: domain::property::Count,

    /// Number of bedrooms in the new `Property`.
    #[arg(long, default_value_t = 0)]
    pub number_of_bedrooms: domain::property::Count,

    /// Country the new `Property` is located in.
    #[arg(long)]
    pub country: domain::property::Country,

    /// Street the new `Property` is located on.
    #[arg(long)]
    pub street: domain::property::Street,

    /// City the new `Property` is located in.
    #[arg(long)]
    pub city: domain::property::City,

    /// Province the new `Property` is located in.
    #[arg(long)]
    pub province: domain::property::Province,

    /// Post code of the new `Property`.
    #[arg(long)]
    pub post_code: domain::property::PostCode,
}

impl Create {
    /// Executes this operation.
    ///
    /// # Errors
    ///
    /// If the database operation fails.
    #[tracing::instrument(
        skip_all,
        fields(
            cli.name = "create-property",
            city = %self.city,
            otel.name = Command::SPAN_NAME,
            owner_id = %self.owner_id,
            title = %self.title,
        ),
    )]
    pub async fn execute(self, service: &Service) -> Result<Property, Error> {
        let Self {
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
        } = self;

        service
            .execute(command::CreateProperty {
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
            })
            .await
            .map_err(AsError::into_error)
            .map(Into::into)
    }
}
