//! [`Property`]-related [`Database`] implementations.

use common::operations::{By, Insert, Select};
use tokio_postgres::Row;
use tracerr::Traced;

use crate::{
    domain::{property, Property},
    infra::{
        database::{
            self,
            postgres::{Connection, LikePattern, Statement},
            Postgres,
        },
        Database,
    },
    read,
};

impl Statement {
    /// Base of the [`Statement::property_search()`].
    const PROPERTY_SEARCH: &'static str = concat!(
        "SELECT ",
        property_columns!(),
        ", AVG(property_reviews.rating) AS average_rating \
         FROM properties \
         LEFT JOIN property_reviews \
                ON properties.id = property_reviews.property_id",
    );

    /// Builds a [`Statement`] searching [`Property`]s matching the provided
    /// [`read::property::search::Criteria`].
    ///
    /// Criteria are applied in the following order, each one only if present:
    /// city, owner, minimum cost, maximum cost, minimum rating. Found
    /// [`Property`]s are ordered by their cost, the cheapest first.
    #[must_use]
    pub fn property_search(
        criteria: &read::property::search::Criteria,
    ) -> Self {
        let read::property::search::Criteria {
            city,
            owner_id,
            min_cost,
            max_cost,
            min_rating,
            limit,
        } = criteria;

        let mut stmt = Self::new(Self::PROPERTY_SEARCH);
        if let Some(city) = city {
            _ = stmt.filter(LikePattern::contains(city.as_ref()), |p| {
                format!("properties.city LIKE {p}")
            });
        }
        if let Some(owner_id) = *owner_id {
            _ = stmt
                .filter(owner_id, |p| format!("properties.owner_id = {p}"));
        }
        if let Some(min_cost) = *min_cost {
            _ = stmt.filter(min_cost, |p| {
                format!("properties.cost_per_night >= {p}")
            });
        }
        if let Some(max_cost) = *max_cost {
            _ = stmt.filter(max_cost, |p| {
                format!("properties.cost_per_night <= {p}")
            });
        }

        _ = stmt.push("GROUP BY properties.id");
        if let Some(min_rating) = *min_rating {
            _ = stmt.having(min_rating, |p| {
                format!("AVG(property_reviews.rating) >= {p}")
            });
        }

        let limit = stmt.bind(*limit);
        _ = stmt.push(format_args!(
            "ORDER BY properties.cost_per_night ASC \
             LIMIT {limit}",
        ));

        stmt
    }
}

impl<C>
    Database<
        Select<
            By<
                Vec<read::property::Listing>,
                read::property::search::Criteria,
            >,
        >,
    > for Postgres<C>
where
    C: Connection,
{
    type Ok = Vec<read::property::Listing>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<
            By<
                Vec<read::property::Listing>,
                read::property::search::Criteria,
            >,
        >,
    ) -> Result<Self::Ok, Self::Err> {
        let stmt = Statement::property_search(&by.into_inner());

        Ok(self
            .query(stmt.sql(), &stmt.sql_params())
            .await
            .map_err(tracerr::wrap!())?
            .iter()
            .map(|row| read::property::Listing {
                property: property_from_row(row),
                average_rating: row.get("average_rating"),
            })
            .collect())
    }
}

impl<C> Database<Insert<Property>> for Postgres<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(property): Insert<Property>,
    ) -> Result<Self::Ok, Self::Err> {
        let Property {
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

        let parking_spaces = i32::from(parking_spaces);
        let number_of_bathrooms = i32::from(number_of_bathrooms);
        let number_of_bedrooms = i32::from(number_of_bedrooms);

        const SQL: &str = "\
            INSERT INTO properties (\
                id, owner_id, \
                title, description, \
                thumbnail_photo_url, cover_photo_url, \
                cost_per_night, \
                parking_spaces, \
                number_of_bathrooms, number_of_bedrooms, \
                country, street, city, province, post_code, \
                active\
            ) VALUES (\
                $1::UUID, $2::UUID, \
                $3::VARCHAR, $4::TEXT, \
                $5::VARCHAR, $6::VARCHAR, \
                $7::INT4, \
                $8::INT4, \
                $9::INT4, $10::INT4, \
                $11::VARCHAR, $12::VARCHAR, $13::VARCHAR, \
                $14::VARCHAR, $15::VARCHAR, \
                $16::BOOL\
            )";
        self.exec(
            SQL,
            &[
                &id,
                &owner_id,
                &title,
                &description,
                &thumbnail_photo_url,
                &cover_photo_url,
                &cost_per_night,
                &parking_spaces,
                &number_of_bathrooms,
                &number_of_bedrooms,
                &country,
                &street,
                &city,
                &province,
                &post_code,
                &active,
            ],
        )
        .await
        .map_err(tracerr::wrap!())
        .map(drop)
    }
}

/// Reads a [`Property`] out of the provided [`Row`] containing the
/// `property_columns!()`.
pub(super) fn property_from_row(row: &Row) -> Property {
    Property {
        id: row.get("id"),
        owner_id: row.get("owner_id"),
        title: row.get("title"),
        description: row.get("description"),
        thumbnail_photo_url: row.get("thumbnail_photo_url"),
        cover_photo_url: row.get("cover_photo_url"),
        cost_per_night: row.get("cost_per_night"),
        parking_spaces: count(row, "parking_spaces"),
        number_of_bathrooms: count(row, "number_of_bathrooms"),
        number_of_bedrooms: count(row, "number_of_bedrooms"),
        country: row.get("country"),
        street: row.get("street"),
        city: row.get("city"),
        province: row.get("province"),
        post_code: row.get("post_code"),
        active: row.get("active"),
    }
}

/// Reads a [`property::Count`] out of the provided `column` of the [`Row`].
fn count(row: &Row, column: &str) -> property::Count {
    property::Count::try_from(row.get::<_, i32>(column))
        .unwrap_or_else(|_| panic!("`{column}` overflow"))
}

#[cfg(test)]
mod spec {
    use std::sync::LazyLock;

    use common::Limit;
    use regex::Regex;
    use rust_decimal::Decimal;
    use uuid::Uuid;

    use crate::{
        domain::{property, user},
        infra::postgres::{Param, Statement},
        read::property::{search::Criteria, AverageRating},
    };

    /// Matches a `$N` placeholder, capturing its index.
    static PLACEHOLDER: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"\$(\d+)::").unwrap());

    /// Returns the number of the whole-word `token` occurrences in `sql`.
    fn count_token(sql: &str, token: &str) -> usize {
        Regex::new(&format!(r"\b{token}\b"))
            .unwrap()
            .find_iter(sql)
            .count()
    }

    /// Returns the placeholder indices in the order they appear in `sql`.
    fn placeholders(sql: &str) -> Vec<usize> {
        PLACEHOLDER
            .captures_iter(sql)
            .map(|c| c[1].parse().unwrap())
            .collect()
    }

    /// Returns the part of `sql` preceding its `GROUP BY` clause.
    fn before_group_by(sql: &str) -> &str {
        &sql[..sql.find("GROUP BY").unwrap()]
    }

    fn rating(value: i64) -> AverageRating {
        Decimal::from(value).into()
    }

    /// Builds [`Criteria`] with the optional filters selected by the `mask`
    /// bits (city, owner, minimum cost, maximum cost, minimum rating).
    fn criteria(mask: u8) -> Criteria {
        Criteria {
            city: (mask & 0b00001 != 0).then(|| "Vancouver".into()),
            owner_id: (mask & 0b00010 != 0).then(|| Uuid::nil().into()),
            min_cost: (mask & 0b00100 != 0).then(|| 1_000.into()),
            max_cost: (mask & 0b01000 != 0).then(|| 50_000.into()),
            min_rating: (mask & 0b10000 != 0).then(|| rating(3)),
            limit: Limit::default(),
        }
    }

    #[test]
    fn no_criteria() {
        let stmt = Statement::property_search(&Criteria::default());

        assert_eq!(stmt.params(), &[Param::Int4(10)]);
        assert_eq!(count_token(stmt.sql(), "WHERE"), 0);
        assert_eq!(count_token(stmt.sql(), "AND"), 0);
        assert_eq!(count_token(stmt.sql(), "HAVING"), 0);
        assert!(
            stmt.sql().ends_with(
                "GROUP BY properties.id \
                 ORDER BY properties.cost_per_night ASC \
                 LIMIT $1::INT4",
            ),
            "unexpected SQL: {}",
            stmt.sql(),
        );
    }

    #[test]
    fn city_and_rating() {
        let stmt = Statement::property_search(&Criteria {
            city: Some("van".into()),
            min_rating: Some(rating(4)),
            ..Criteria::default()
        });

        assert_eq!(
            stmt.params(),
            &[
                Param::Varchar("%van%".into()),
                Param::Numeric(Decimal::from(4)),
                Param::Int4(10),
            ],
        );
        assert_eq!(count_token(stmt.sql(), "WHERE"), 1);
        assert_eq!(count_token(stmt.sql(), "AND"), 0);
        assert!(stmt.sql().contains("WHERE properties.city LIKE $1::VARCHAR"));
        assert!(stmt
            .sql()
            .contains("HAVING AVG(property_reviews.rating) >= $2::NUMERIC"));
        assert!(stmt.sql().ends_with("LIMIT $3::INT4"));
    }

    #[test]
    fn all_criteria() {
        let owner_id = user::Id::from(Uuid::nil());
        let stmt = Statement::property_search(&Criteria {
            city: Some("Van".into()),
            owner_id: Some(owner_id),
            min_cost: Some(property::Cost::from(10_000)),
            max_cost: Some(property::Cost::from(20_000)),
            min_rating: Some(rating(2)),
            limit: Limit::new(3),
        });

        assert_eq!(
            stmt.params(),
            &[
                Param::Varchar("%Van%".into()),
                Param::Uuid(Uuid::nil()),
                Param::Int4(10_000),
                Param::Int4(20_000),
                Param::Numeric(Decimal::from(2)),
                Param::Int4(3),
            ],
        );
        assert!(stmt.sql().contains(
            "WHERE properties.city LIKE $1::VARCHAR \
             AND properties.owner_id = $2::UUID \
             AND properties.cost_per_night >= $3::INT4 \
             AND properties.cost_per_night <= $4::INT4 \
             GROUP BY properties.id \
             HAVING AVG(property_reviews.rating) >= $5::NUMERIC \
             ORDER BY properties.cost_per_night ASC \
             LIMIT $6::INT4",
        ));
    }

    #[test]
    fn first_present_criterion_opens_where() {
        let stmt = Statement::property_search(&Criteria {
            max_cost: Some(property::Cost::from(500)),
            ..Criteria::default()
        });

        assert_eq!(stmt.params(), &[Param::Int4(500), Param::Int4(10)]);
        assert!(stmt
            .sql()
            .contains("WHERE properties.cost_per_night <= $1::INT4"));
        assert_eq!(count_token(stmt.sql(), "AND"), 0);
    }

    #[test]
    fn escapes_city_wildcards() {
        let stmt = Statement::property_search(&Criteria {
            city: Some("100%_".into()),
            ..Criteria::default()
        });

        assert_eq!(stmt.params()[0], Param::Varchar(r"%100\%\_%".into()));
    }

    #[test]
    fn keywords_match_present_filters() {
        for mask in 0..32_u8 {
            let stmt = Statement::property_search(&criteria(mask));
            let filters = (mask & 0b01111).count_ones() as usize;
            let head = before_group_by(stmt.sql());

            assert_eq!(
                count_token(head, "WHERE"),
                usize::from(filters > 0),
                "mask {mask:05b}: {}",
                stmt.sql(),
            );
            assert_eq!(
                count_token(head, "AND"),
                filters.saturating_sub(1),
                "mask {mask:05b}: {}",
                stmt.sql(),
            );
            assert_eq!(
                count_token(stmt.sql(), "HAVING"),
                usize::from(mask & 0b10000 != 0),
                "mask {mask:05b}: {}",
                stmt.sql(),
            );
        }
    }

    #[test]
    fn placeholders_match_params() {
        for mask in 0..32_u8 {
            let stmt = Statement::property_search(&criteria(mask));
            let total = stmt.params().len();

            assert_eq!(
                placeholders(stmt.sql()),
                (1..=total).collect::<Vec<_>>(),
                "mask {mask:05b}: {}",
                stmt.sql(),
            );
            assert_eq!(
                total,
                (mask.count_ones() + 1) as usize,
                "mask {mask:05b}",
            );
            assert_eq!(
                stmt.params().last(),
                Some(&Param::Int4(10)),
                "mask {mask:05b}",
            );
            assert!(
                stmt.sql().ends_with(&format!("LIMIT ${total}::INT4")),
                "mask {mask:05b}: {}",
                stmt.sql(),
            );

            if mask & 0b10000 != 0 {
                let having = format!(
                    "HAVING AVG(property_reviews.rating) >= ${}::NUMERIC",
                    total - 1,
                );
                assert!(
                    stmt.sql().contains(&having),
                    "mask {mask:05b}: {}",
                    stmt.sql(),
                );
                assert_eq!(
                    stmt.params()[total - 2],
                    Param::Numeric(Decimal::from(3)),
                );
            }
        }
    }
}
