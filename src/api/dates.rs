use axum::{http::StatusCode, response::IntoResponse, response::Response, Json};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::json;

/// An unparseable date field in a request body. Carries the wire-level
/// field name so the client sees which value was rejected.
pub struct InvalidDate(pub &'static str);

impl IntoResponse for InvalidDate {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": format!("Invalid {}", self.0)})),
        )
            .into_response()
    }
}

/// Coerce an ISO-8601 wire string to a row timestamp. Accepts a full
/// RFC 3339 datetime (normalized to UTC), a naive datetime, or a bare
/// date taken as midnight.
pub fn parse_datetime(field: &'static str, value: &str) -> Result<NaiveDateTime, InvalidDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.naive_utc());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(dt);
    }
    if let Ok(d) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        // midnight; bare dates carry no time component
        return Ok(d.and_hms_opt(0, 0, 0).unwrap());
    }
    Err(InvalidDate(field))
}

/// Same coercion for optional fields. Absent or empty values pass
/// through as None (the original clients send "" for cleared inputs).
pub fn parse_optional_datetime(
    field: &'static str,
    value: Option<&str>,
) -> Result<Option<NaiveDateTime>, InvalidDate> {
    match value {
        None => Ok(None),
        Some("") => Ok(None),
        Some(v) => parse_datetime(field, v).map(Some),
    }
}
