//! Uniform response envelope
//!
//! Every endpoint returns `{ "data": ..., "errors": [...] }`. `data` holds the
//! payload (object, array, or boolean); `errors` is an ordered list of
//! field-scoped messages, empty on success.

use serde::Serialize;

/// A single field-scoped error entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// The response envelope wrapping every payload
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub errors: Vec<FieldError>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            errors: Vec::new(),
        }
    }
}

impl ApiResponse<serde_json::Value> {
    /// An envelope with null data and the given errors
    pub fn failure(errors: Vec<FieldError>) -> Self {
        Self {
            data: serde_json::Value::Null,
            errors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_has_empty_errors() {
        let json = serde_json::to_value(ApiResponse::new(true)).unwrap();
        assert_eq!(json["data"], true);
        assert_eq!(json["errors"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn failure_envelope_has_null_data() {
        let json = serde_json::to_value(ApiResponse::failure(vec![FieldError {
            field: "units".to_string(),
            message: "Units must be greater than 0".to_string(),
        }]))
        .unwrap();
        assert!(json["data"].is_null());
        assert_eq!(json["errors"][0]["field"], "units");
    }

    #[test]
    fn null_data_serializes_for_missing_reads() {
        let json = serde_json::to_value(ApiResponse::new(Option::<i32>::None)).unwrap();
        assert!(json["data"].is_null());
    }
}
