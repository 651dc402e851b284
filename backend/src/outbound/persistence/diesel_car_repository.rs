//! PostgreSQL-backed `CarRepository` implementation using Diesel.
//!
//! Row-level writes are checked against the affected-row count; anything
//! other than exactly one row is reported as
//! [`CarRepositoryError::UnexpectedRowCount`].

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{CarRepository, CarRepositoryError};
use crate::domain::{Car, CarId, NewCar};

use super::models::{CarChangeset, CarRow, NewCarRow};
use super::pool::{DbPool, PoolError};
use super::schema::cars;

/// Diesel-backed implementation of the [`CarRepository`] port.
#[derive(Clone)]
pub struct DieselCarRepository {
    pool: DbPool,
}

impl DieselCarRepository {
    /// Create a repository over the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> CarRepositoryError {
    debug!(%error, "car repository pool checkout failed");
    CarRepositoryError::connection(error.message())
}

fn map_diesel_error(error: diesel::result::Error) -> CarRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(%error, "diesel operation failed"),
    }

    match error {
        DieselError::NotFound => CarRepositoryError::no_rows(),
        DieselError::QueryBuilderError(_) => CarRepositoryError::query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            CarRepositoryError::connection("database connection error")
        }
        _ => CarRepositoryError::query("database error"),
    }
}

fn expect_single_row(affected: usize) -> Result<(), CarRepositoryError> {
    if affected == 1 {
        Ok(())
    } else {
        Err(CarRepositoryError::unexpected_row_count(affected))
    }
}

#[async_trait]
impl CarRepository for DieselCarRepository {
    async fn create(&self, car: &NewCar) -> Result<CarId, CarRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let id: i64 = diesel::insert_into(cars::table)
            .values(NewCarRow::from(car))
            .returning(cars::id)
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(CarId::new(id))
    }

    async fn get_by_id(&self, id: CarId) -> Result<Car, CarRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: CarRow = cars::table
            .find(id.value())
            .select(CarRow::as_select())
            .first(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(row.into())
    }

    async fn fetch(&self) -> Result<Vec<Car>, CarRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<CarRow> = cars::table
            .select(CarRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Car::from).collect())
    }

    async fn update(&self, car: &Car) -> Result<(), CarRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let affected = diesel::update(cars::table.find(car.id.value()))
            .set(CarChangeset::from(car))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        expect_single_row(affected)
    }

    async fn delete(&self, id: CarId) -> Result<(), CarRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let affected = diesel::delete(cars::table.find(id.value()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        expect_single_row(affected)
    }
}
