//! Request validation helpers for inbound HTTP adapters.

use actix_web::web;
use serde_json::json;

use crate::domain::{CarDetails, CarId, Error, validate_car_details};

/// Parse a path segment into a [`CarId`].
///
/// A segment that is not a base-10 integer cannot name a stored car, so it
/// is answered as not found.
///
/// # Examples
/// ```
/// use car_api::domain::{CarId, ErrorCode};
/// use car_api::inbound::http::validation::parse_car_id;
///
/// assert_eq!(parse_car_id("42").expect("numeric"), CarId::new(42));
/// let err = parse_car_id("abc").expect_err("not numeric");
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// ```
pub fn parse_car_id(raw: &str) -> Result<CarId, Error> {
    raw.parse::<i64>()
        .map(CarId::new)
        .map_err(|_| Error::not_found("car not found"))
}

/// Check every required field, turning violations into a 400 payload.
pub(crate) fn require_car_details(details: &CarDetails) -> Result<(), Error> {
    validate_car_details(details).map_err(Error::from)
}

/// Unwrap a JSON body extracted as `Result`, answering decode failures with
/// 422.
///
/// Handlers take the body as `Result` so path checks run first. When the
/// app's `JsonConfig` handler already produced a domain error it is reused.
pub(crate) fn decoded_body<T>(payload: Result<web::Json<T>, actix_web::Error>) -> Result<T, Error> {
    match payload {
        Ok(body) => Ok(body.into_inner()),
        Err(err) => Err(err.as_error::<Error>().cloned().unwrap_or_else(|| {
            Error::unprocessable_entity("request body could not be decoded")
                .with_details(json!({ "reason": err.to_string() }))
        })),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::domain::ErrorCode;

    #[rstest]
    #[case("1", 1)]
    #[case("999999", 999_999)]
    #[case("-3", -3)]
    fn numeric_segments_parse(#[case] raw: &str, #[case] expected: i64) {
        assert_eq!(parse_car_id(raw).expect("numeric"), CarId::new(expected));
    }

    #[rstest]
    #[case("abc")]
    #[case("1.5")]
    #[case("")]
    #[case("99999999999999999999")]
    fn non_numeric_segments_are_not_found(#[case] raw: &str) {
        let err = parse_car_id(raw).expect_err("rejected");
        assert_eq!(err.code(), ErrorCode::NotFound);
        assert_eq!(err.message(), "car not found");
    }

    #[rstest]
    fn decode_failures_become_unprocessable_entity() {
        let err = decoded_body::<CarDetails>(Err(actix_web::error::ErrorBadRequest("eof")))
            .expect_err("decode failure");
        assert_eq!(err.code(), ErrorCode::UnprocessableEntity);
    }

    #[rstest]
    fn decode_failures_reuse_domain_errors() {
        let original = Error::unprocessable_entity("request body could not be decoded")
            .with_details(json!({ "reason": "expected value" }));
        let err = decoded_body::<CarDetails>(Err(original.clone().into())).expect_err("decode failure");
        assert_eq!(err, original);
    }

    #[rstest]
    fn blank_details_become_invalid_request() {
        let err = require_car_details(&CarDetails::default()).expect_err("blank");
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
        assert_eq!(err.message(), "invalid input");
    }
}
