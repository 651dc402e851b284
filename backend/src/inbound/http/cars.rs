//! Car HTTP handlers.
//!
//! ```text
//! POST   /api/v1/cars
//! GET    /api/v1/cars/{id}
//! GET    /api/v1/cars
//! PUT    /api/v1/cars/{id}
//! DELETE /api/v1/cars/{id}
//! ```
//!
//! Checks run in a fixed order: path id (404), body decoding (422), then
//! required fields (400). Every request field defaults when absent, so a
//! missing field reaches validation rather than failing to decode.

use actix_web::{delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Car, CarDetails};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{CarSchema, ErrorSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{decoded_body, parse_car_id, require_car_details};

/// Body of create and update requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct CarRequest {
    #[schema(example = "Toyota")]
    pub make: String,
    #[schema(example = "Corolla")]
    pub model: String,
    #[schema(example = "LE")]
    pub package: String,
    #[schema(example = "Blue")]
    pub color: String,
    #[schema(example = 2020)]
    pub year: i64,
    #[schema(example = "Sedan")]
    pub category: String,
    #[schema(example = 5000)]
    pub mileage: i64,
    #[schema(example = 18000)]
    pub price: i64,
    #[schema(example = "VIN123")]
    pub identification: String,
}

impl From<CarRequest> for CarDetails {
    fn from(value: CarRequest) -> Self {
        Self {
            make: value.make,
            model: value.model,
            package: value.package,
            color: value.color,
            year: value.year,
            category: value.category,
            mileage: value.mileage,
            price: value.price,
            identification: value.identification,
        }
    }
}

/// Single-car envelope.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CarResponse {
    #[schema(value_type = CarSchema)]
    pub data: Car,
}

/// Car list envelope; `data` is `[]` when no cars exist.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CarListResponse {
    #[schema(value_type = Vec<CarSchema>)]
    pub data: Vec<Car>,
}

/// Acknowledgement returned by write endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "car created")]
    pub message: String,
}

impl MessageResponse {
    fn new(message: &str) -> web::Json<Self> {
        web::Json(Self {
            message: message.to_owned(),
        })
    }
}

/// Create a car.
#[utoipa::path(
    post,
    path = "/api/v1/cars",
    request_body = CarRequest,
    responses(
        (status = 200, description = "Car created", body = MessageResponse),
        (status = 400, description = "A required field is missing", body = ErrorSchema),
        (status = 422, description = "Body could not be decoded", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["cars"],
    operation_id = "createCar"
)]
#[post("/cars")]
pub async fn create_car(
    state: web::Data<HttpState>,
    payload: Result<web::Json<CarRequest>, actix_web::Error>,
) -> ApiResult<web::Json<MessageResponse>> {
    let details = CarDetails::from(decoded_body(payload)?);
    require_car_details(&details)?;
    state.cars.create(details).await?;
    Ok(MessageResponse::new("car created"))
}

/// Fetch one car.
#[utoipa::path(
    get,
    path = "/api/v1/cars/{id}",
    params(("id" = i64, Path, description = "Car identifier")),
    responses(
        (status = 200, description = "Car found", body = CarResponse),
        (status = 404, description = "Car not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["cars"],
    operation_id = "getCar"
)]
#[get("/cars/{id}")]
pub async fn get_car(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<CarResponse>> {
    let id = parse_car_id(&path)?;
    let data = state.cars_query.get_by_id(id).await?;
    Ok(web::Json(CarResponse { data }))
}

/// List every car. May lag recent writes by up to the list cache TTL.
#[utoipa::path(
    get,
    path = "/api/v1/cars",
    responses(
        (status = 200, description = "All cars", body = CarListResponse),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["cars"],
    operation_id = "listCars"
)]
#[get("/cars")]
pub async fn list_cars(state: web::Data<HttpState>) -> ApiResult<web::Json<CarListResponse>> {
    let data = state.cars_query.fetch().await?;
    Ok(web::Json(CarListResponse { data }))
}

/// Replace every writable field of a car.
#[utoipa::path(
    put,
    path = "/api/v1/cars/{id}",
    params(("id" = i64, Path, description = "Car identifier")),
    request_body = CarRequest,
    responses(
        (status = 200, description = "Car updated", body = MessageResponse),
        (status = 400, description = "A required field is missing", body = ErrorSchema),
        (status = 404, description = "Car not found", body = ErrorSchema),
        (status = 422, description = "Body could not be decoded", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["cars"],
    operation_id = "updateCar"
)]
#[put("/cars/{id}")]
pub async fn update_car(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: Result<web::Json<CarRequest>, actix_web::Error>,
) -> ApiResult<web::Json<MessageResponse>> {
    let id = parse_car_id(&path)?;
    let details = CarDetails::from(decoded_body(payload)?);
    require_car_details(&details)?;
    state.cars.update(id, details).await?;
    Ok(MessageResponse::new("car updated"))
}

/// Permanently remove a car.
#[utoipa::path(
    delete,
    path = "/api/v1/cars/{id}",
    params(("id" = i64, Path, description = "Car identifier")),
    responses(
        (status = 200, description = "Car deleted", body = MessageResponse),
        (status = 404, description = "Car not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["cars"],
    operation_id = "deleteCar"
)]
#[delete("/cars/{id}")]
pub async fn delete_car(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<MessageResponse>> {
    let id = parse_car_id(&path)?;
    state.cars.delete(id).await?;
    Ok(MessageResponse::new("car deleted"))
}

/// Register every car handler on `cfg`; mount under `/api/v1`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(create_car)
        .service(list_cars)
        .service(get_car)
        .service(update_car)
        .service(delete_car);
}

#[cfg(test)]
#[path = "cars_tests.rs"]
mod tests;
