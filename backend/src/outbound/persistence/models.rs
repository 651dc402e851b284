//! Internal Diesel row structs for the `cars` table.
//!
//! These types never leave the persistence layer.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::domain::{Car, CarDetails, CarId, NewCar};

use super::schema::cars;

/// Row read from `cars`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = cars)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CarRow {
    pub id: i64,
    pub make: String,
    pub model: String,
    pub package: String,
    pub color: String,
    pub mileage: i64,
    pub price: i64,
    pub category: String,
    pub year: i64,
    pub identification: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<CarRow> for Car {
    fn from(row: CarRow) -> Self {
        Self {
            id: CarId::new(row.id),
            details: CarDetails {
                make: row.make,
                model: row.model,
                package: row.package,
                color: row.color,
                year: row.year,
                category: row.category,
                mileage: row.mileage,
                price: row.price,
                identification: row.identification,
            },
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Insertable row; the store assigns `id`.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = cars)]
pub(crate) struct NewCarRow<'a> {
    pub make: &'a str,
    pub model: &'a str,
    pub package: &'a str,
    pub color: &'a str,
    pub mileage: i64,
    pub price: i64,
    pub category: &'a str,
    pub year: i64,
    pub identification: &'a str,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl<'a> From<&'a NewCar> for NewCarRow<'a> {
    fn from(car: &'a NewCar) -> Self {
        let details = &car.details;
        Self {
            make: &details.make,
            model: &details.model,
            package: &details.package,
            color: &details.color,
            mileage: details.mileage,
            price: details.price,
            category: &details.category,
            year: details.year,
            identification: &details.identification,
            created_at: car.created_at,
            updated_at: car.updated_at,
        }
    }
}

/// Full replacement of the mutable columns. `created_at` is never written.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = cars)]
pub(crate) struct CarChangeset<'a> {
    pub make: &'a str,
    pub model: &'a str,
    pub package: &'a str,
    pub color: &'a str,
    pub mileage: i64,
    pub price: i64,
    pub category: &'a str,
    pub year: i64,
    pub identification: &'a str,
    pub updated_at: DateTime<Utc>,
}

impl<'a> From<&'a Car> for CarChangeset<'a> {
    fn from(car: &'a Car) -> Self {
        let details = &car.details;
        Self {
            make: &details.make,
            model: &details.model,
            package: &details.package,
            color: &details.color,
            mileage: details.mileage,
            price: details.price,
            category: &details.category,
            year: details.year,
            identification: &details.identification,
            updated_at: car.updated_at,
        }
    }
}
