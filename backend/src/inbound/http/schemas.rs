//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework-agnostic and do not derive `ToSchema`. The
//! wrappers below mirror their wire shape and register them with utoipa.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// A required field is missing.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The body is not valid JSON or has wrongly typed fields.
    #[schema(rename = "unprocessable_entity")]
    UnprocessableEntity,
    /// The requested car does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// The operation did not finish in time.
    #[schema(rename = "timeout")]
    Timeout,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "invalid input")]
    message: String,
    /// Correlation identifier matching the `trace-id` response header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary details; validation failures list `fields`.
    #[schema(value_type = Object, example = json!({"fields": {"year": "cannot be blank"}}))]
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::Car`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Car)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct CarSchema {
    #[schema(example = 1)]
    id: i64,
    #[schema(example = "Toyota")]
    make: String,
    #[schema(example = "Corolla")]
    model: String,
    #[schema(example = "LE")]
    package: String,
    #[schema(example = "Blue")]
    color: String,
    #[schema(example = 2020)]
    year: i64,
    #[schema(example = "Sedan")]
    category: String,
    #[schema(example = 5000)]
    mileage: i64,
    #[schema(example = 18000)]
    price: i64,
    #[schema(example = "VIN123")]
    identification: String,
    #[schema(value_type = String, format = DateTime)]
    created_at: String,
    #[schema(value_type = String, format = DateTime)]
    updated_at: String,
}
