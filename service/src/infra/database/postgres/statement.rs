//! [`Statement`] definitions.

use std::{error::Error as StdError, fmt, fmt::Write as _};

use common::Limit;
use postgres_types::{private::BytesMut, IsNull, ToSql, Type};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    domain::{property, user},
    read,
};

use super::LikePattern;

/// SQL statement along with the positional [`Param`]s bound to it.
///
/// The `N`th [`Placeholder`] in the SQL text always refers to the `N`th
/// bound [`Param`], since [`Placeholder`]s are numbered by the count of
/// [`Param`]s bound so far.
#[derive(Clone, Debug, PartialEq)]
pub struct Statement {
    /// SQL text of this [`Statement`].
    sql: String,

    /// [`Param`]s bound to this [`Statement`], in the order of their
    /// [`Placeholder`]s.
    params: Vec<Param>,

    /// Number of predicates appended to the `WHERE` clause so far.
    filters: usize,

    /// Number of predicates appended to the `HAVING` clause so far.
    aggregate_filters: usize,
}

impl Statement {
    /// Creates a new [`Statement`] out of the provided base `sql` with no
    /// [`Param`]s bound.
    #[must_use]
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            params: Vec::new(),
            filters: 0,
            aggregate_filters: 0,
        }
    }

    /// Returns the SQL text of this [`Statement`].
    #[must_use]
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Returns the [`Param`]s bound to this [`Statement`].
    #[must_use]
    pub fn params(&self) -> &[Param] {
        &self.params
    }

    /// Returns the [`Param`]s of this [`Statement`] in the form accepted by
    /// [`Connection`]s.
    ///
    /// [`Connection`]: super::Connection
    #[must_use]
    pub fn sql_params(&self) -> Vec<&(dyn ToSql + Sync)> {
        self.params
            .iter()
            .map(|p| -> &(dyn ToSql + Sync) { p })
            .collect()
    }

    /// Binds the provided `param` to this [`Statement`], returning the
    /// [`Placeholder`] referring to it.
    pub fn bind(&mut self, param: impl Into<Param>) -> Placeholder {
        let param = param.into();
        let sql_type = param.sql_type();
        self.params.push(param);
        Placeholder {
            index: self.params.len(),
            sql_type,
        }
    }

    /// Appends the provided `sql` fragment to this [`Statement`], separated
    /// with a whitespace.
    pub fn push(&mut self, sql: impl fmt::Display) -> &mut Self {
        _ = write!(self.sql, " {sql}");
        self
    }

    /// Appends a `WHERE` clause predicate, built from the [`Placeholder`] of
    /// the provided `param`.
    ///
    /// The first predicate opens the `WHERE` clause, any following one is
    /// joined with `AND`. Must not be called after a `GROUP BY` is pushed.
    pub fn filter(
        &mut self,
        param: impl Into<Param>,
        predicate: impl FnOnce(Placeholder) -> String,
    ) -> &mut Self {
        self.predicate(Clause::Where, param.into(), predicate)
    }

    /// Appends a `HAVING` clause predicate, built from the [`Placeholder`] of
    /// the provided `param`.
    ///
    /// The first predicate opens the `HAVING` clause, any following one is
    /// joined with `AND`. Must be called right after a `GROUP BY` is pushed.
    pub fn having(
        &mut self,
        param: impl Into<Param>,
        predicate: impl FnOnce(Placeholder) -> String,
    ) -> &mut Self {
        self.predicate(Clause::Having, param.into(), predicate)
    }

    /// Consumes this [`Statement`] returning its SQL text and [`Param`]s.
    #[must_use]
    pub fn into_parts(self) -> (String, Vec<Param>) {
        (self.sql, self.params)
    }

    /// Appends a predicate to the provided [`Clause`].
    fn predicate(
        &mut self,
        clause: Clause,
        param: Param,
        predicate: impl FnOnce(Placeholder) -> String,
    ) -> &mut Self {
        let placeholder = self.bind(param);
        let count = match clause {
            Clause::Where => &mut self.filters,
            Clause::Having => &mut self.aggregate_filters,
        };
        let keyword = if *count == 0 { clause.keyword() } else { "AND" };
        *count += 1;
        self.push(format_args!("{keyword} {}", predicate(placeholder)))
    }
}

/// Clause of a [`Statement`] accepting predicates.
#[derive(Clone, Copy, Debug)]
enum Clause {
    /// `WHERE` clause, filtering rows.
    Where,

    /// `HAVING` clause, filtering groups.
    Having,
}

impl Clause {
    /// Returns the keyword opening this [`Clause`].
    const fn keyword(self) -> &'static str {
        match self {
            Self::Where => "WHERE",
            Self::Having => "HAVING",
        }
    }
}

/// Positional placeholder of a [`Param`] bound to a [`Statement`].
///
/// Displayed as `$N::TYPE`, so the server never has to infer its type.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Placeholder {
    /// One-based index of the [`Param`].
    index: usize,

    /// SQL type of the [`Param`].
    sql_type: &'static str,
}

impl Placeholder {
    /// Returns the one-based index of the [`Param`] this [`Placeholder`]
    /// refers to.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}::{}", self.index, self.sql_type)
    }
}

/// Scalar parameter bound to a [`Statement`].
#[derive(Clone, Debug, PartialEq)]
pub enum Param {
    /// `VARCHAR` value.
    Varchar(String),

    /// `UUID` value.
    Uuid(Uuid),

    /// `INT4` value.
    Int4(i32),

    /// `NUMERIC` value.
    Numeric(Decimal),
}

impl Param {
    /// Returns the SQL type of this [`Param`].
    #[must_use]
    pub const fn sql_type(&self) -> &'static str {
        match self {
            Self::Varchar(_) => "VARCHAR",
            Self::Uuid(_) => "UUID",
            Self::Int4(_) => "INT4",
            Self::Numeric(_) => "NUMERIC",
        }
    }
}

impl ToSql for Param {
    fn to_sql(
        &self,
        ty: &Type,
        out: &mut BytesMut,
    ) -> Result<IsNull, Box<dyn StdError + Sync + Send>> {
        match self {
            Self::Varchar(v) => v.to_sql(ty, out),
            Self::Uuid(v) => v.to_sql(ty, out),
            Self::Int4(v) => v.to_sql(ty, out),
            Self::Numeric(v) => v.to_sql(ty, out),
        }
    }

    fn accepts(ty: &Type) -> bool {
        <String as ToSql>::accepts(ty)
            || <Uuid as ToSql>::accepts(ty)
            || <i32 as ToSql>::accepts(ty)
            || <Decimal as ToSql>::accepts(ty)
    }

    // Type is checked against the actual variant rather than `accepts()`,
    // which admits the types of every variant.
    fn to_sql_checked(
        &self,
        ty: &Type,
        out: &mut BytesMut,
    ) -> Result<IsNull, Box<dyn StdError + Sync + Send>> {
        match self {
            Self::Varchar(v) => v.to_sql_checked(ty, out),
            Self::Uuid(v) => v.to_sql_checked(ty, out),
            Self::Int4(v) => v.to_sql_checked(ty, out),
            Self::Numeric(v) => v.to_sql_checked(ty, out),
        }
    }
}

impl From<LikePattern> for Param {
    fn from(pattern: LikePattern) -> Self {
        Self::Varchar(pattern.into())
    }
}

impl From<user::Id> for Param {
    fn from(id: user::Id) -> Self {
        Self::Uuid(id.into())
    }
}

impl From<property::Cost> for Param {
    fn from(cost: property::Cost) -> Self {
        Self::Int4(cost.into())
    }
}

impl From<read::property::AverageRating> for Param {
    fn from(rating: read::property::AverageRating) -> Self {
        Self::Numeric(rating.into())
    }
}

impl From<Limit> for Param {
    fn from(limit: Limit) -> Self {
        Self::Int4(limit.to_i32())
    }
}

#[cfg(test)]
mod spec {
    use super::{Param, Statement};

    #[test]
    fn numbers_placeholders_by_bound_params() {
        let mut stmt = Statement::new("SELECT 1");

        let first = stmt.bind(Param::Int4(7));
        let second = stmt.bind(Param::Varchar("x".into()));

        assert_eq!(first.index(), 1);
        assert_eq!(first.to_string(), "$1::INT4");
        assert_eq!(second.index(), 2);
        assert_eq!(second.to_string(), "$2::VARCHAR");
        assert_eq!(
            stmt.params(),
            &[Param::Int4(7), Param::Varchar("x".into())],
        );
    }

    #[test]
    fn opens_where_clause_once() {
        let mut stmt = Statement::new("SELECT * FROM t");
        _ = stmt
            .filter(Param::Int4(1), |p| format!("a = {p}"))
            .filter(Param::Int4(2), |p| format!("b = {p}"))
            .filter(Param::Int4(3), |p| format!("c = {p}"));

        assert_eq!(
            stmt.sql(),
            "SELECT * FROM t \
             WHERE a = $1::INT4 AND b = $2::INT4 AND c = $3::INT4",
        );
    }

    #[test]
    fn opens_having_clause_separately() {
        let mut stmt = Statement::new("SELECT a FROM t");
        _ = stmt
            .filter(Param::Int4(1), |p| format!("a = {p}"))
            .push("GROUP BY a")
            .having(Param::Int4(2), |p| format!("COUNT(*) >= {p}"))
            .having(Param::Int4(3), |p| format!("COUNT(*) <= {p}"));

        assert_eq!(
            stmt.sql(),
            "SELECT a FROM t WHERE a = $1::INT4 GROUP BY a \
             HAVING COUNT(*) >= $2::INT4 AND COUNT(*) <= $3::INT4",
        );
    }

    #[test]
    fn exposes_params_for_connection() {
        let mut stmt = Statement::new("SELECT 1");
        _ = stmt.bind(Param::Int4(1));
        _ = stmt.bind(Param::Int4(2));

        assert_eq!(stmt.sql_params().len(), 2);

        let (sql, params) = stmt.into_parts();
        assert_eq!(sql, "SELECT 1");
        assert_eq!(params, [Param::Int4(1), Param::Int4(2)]);
    }
}
