//! Diesel table definitions for the PostgreSQL schema.
//!
//! Must match the `cars` table as deployed. Schema migrations are managed
//! outside this service.

diesel::table! {
    /// Car inventory records.
    cars (id) {
        /// Store-assigned key (BIGSERIAL).
        id -> Int8,
        make -> Varchar,
        model -> Varchar,
        package -> Varchar,
        color -> Varchar,
        mileage -> Int8,
        price -> Int8,
        category -> Varchar,
        year -> Int8,
        identification -> Varchar,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}
