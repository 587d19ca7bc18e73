//! Dynamically bound query parameters

use chrono::NaiveDate;
use sqlx::postgres::PgArguments;
use sqlx::query::{QueryAs, QueryScalar};
use sqlx::Postgres;

/// A single positional parameter for a dynamically built statement
#[derive(Debug, Clone, PartialEq)]
pub enum BindValue {
    Text(String),
    SmallInt(i16),
    Int(i32),
    Float(f64),
    Real(f32),
    Date(Option<NaiveDate>),
}

/// Bind a slice of `BindValue` to a sqlx `QueryAs`.
pub(crate) fn bind_query_as<'q, O>(
    mut q: QueryAs<'q, Postgres, O, PgArguments>,
    values: &'q [BindValue],
) -> QueryAs<'q, Postgres, O, PgArguments> {
    for value in values {
        q = match value {
            BindValue::Text(v) => q.bind(v.as_str()),
            BindValue::SmallInt(v) => q.bind(*v),
            BindValue::Int(v) => q.bind(*v),
            BindValue::Float(v) => q.bind(*v),
            BindValue::Real(v) => q.bind(*v),
            BindValue::Date(v) => q.bind(*v),
        };
    }
    q
}

/// Bind a slice of `BindValue` to a sqlx `QueryScalar`.
pub(crate) fn bind_query_scalar<'q, O>(
    mut q: QueryScalar<'q, Postgres, O, PgArguments>,
    values: &'q [BindValue],
) -> QueryScalar<'q, Postgres, O, PgArguments> {
    for value in values {
        q = match value {
            BindValue::Text(v) => q.bind(v.as_str()),
            BindValue::SmallInt(v) => q.bind(*v),
            BindValue::Int(v) => q.bind(*v),
            BindValue::Float(v) => q.bind(*v),
            BindValue::Real(v) => q.bind(*v),
            BindValue::Date(v) => q.bind(*v),
        };
    }
    q
}
