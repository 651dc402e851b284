//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every car endpoint and the health probes together
//! with schema wrappers for domain types ([`ErrorSchema`], [`ErrorCodeSchema`],
//! [`CarSchema`]), so the domain stays free of utoipa derives.
//!
//! The document backs Swagger UI in debug builds and is exported by
//! `cargo run --bin openapi-dump` for external tooling.

use utoipa::OpenApi;

use crate::inbound::http::cars::{CarListResponse, CarRequest, CarResponse, MessageResponse};
use crate::inbound::http::schemas::{CarSchema, ErrorCodeSchema, ErrorSchema};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Car API",
        description = "CRUD interface for the car inventory plus health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::cars::create_car,
        crate::inbound::http::cars::get_car,
        crate::inbound::http::cars::list_cars,
        crate::inbound::http::cars::update_car,
        crate::inbound::http::cars::delete_car,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        CarRequest,
        CarResponse,
        CarListResponse,
        MessageResponse,
        CarSchema,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "cars", description = "Car inventory operations"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying the OpenAPI document structure.

    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    // utoipa replaces :: with . in schema names
    const ERROR_SCHEMA_NAME: &str = "crate.domain.Error";
    const CAR_SCHEMA_NAME: &str = "crate.domain.Car";

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[rstest]
    fn error_schema_has_envelope_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let error_schema = schemas.get(ERROR_SCHEMA_NAME).expect("Error schema");

        assert_object_schema_has_field(error_schema, "code");
        assert_object_schema_has_field(error_schema, "message");
        assert_object_schema_has_field(error_schema, "traceId");
    }

    #[rstest]
    #[case("id")]
    #[case("make")]
    #[case("identification")]
    #[case("created_at")]
    #[case("updated_at")]
    fn car_schema_has_field(#[case] field: &str) {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let car_schema = schemas.get(CAR_SCHEMA_NAME).expect("Car schema");

        assert_object_schema_has_field(car_schema, field);
    }

    #[rstest]
    #[case("/api/v1/cars")]
    #[case("/api/v1/cars/{id}")]
    #[case("/health/ready")]
    #[case("/health/live")]
    fn paths_are_registered(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing path {path}");
    }

    #[rstest]
    fn car_item_path_exposes_get_put_delete() {
        let doc = ApiDoc::openapi();
        let item = doc.paths.paths.get("/api/v1/cars/{id}").expect("item path");
        assert!(item.get.is_some());
        assert!(item.put.is_some());
        assert!(item.delete.is_some());
    }
}
