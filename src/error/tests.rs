//! Unit tests for error module.

use super::*;

// ============================================================================
// ErrorResponse Tests
// ============================================================================

#[test]
fn test_error_response_serialization() {
    let response = ErrorResponse {
        code: "INTERNAL_ERROR".to_string(),
        message: "Something went wrong".to_string(),
    };

    let json = serde_json::to_string(&response).unwrap();
    assert_eq!(
        json,
        r#"{"code":"INTERNAL_ERROR","message":"Something went wrong"}"#
    );
}

// ============================================================================
// ApiError Display Tests
// ============================================================================

#[test]
fn test_api_error_no_matching_interaction_display() {
    let error = ApiError::NoMatchingInteraction {
        method: "GET".to_string(),
        path: "/orders/42".to_string(),
    };
    assert_eq!(format!("{}", error), "No interaction matches GET /orders/42");
}

#[test]
fn test_api_error_invalid_request_display() {
    let error = ApiError::InvalidRequest("Missing required field".to_string());
    assert_eq!(
        format!("{}", error),
        "Invalid request: Missing required field"
    );
}

#[test]
fn test_api_error_from_contract_error() {
    let error = ApiError::from(ContractError::InvalidInteraction("probe: bad".to_string()));
    assert!(matches!(error, ApiError::InvalidRequest(_)));
    assert!(format!("{}", error).contains("probe: bad"));
}

// ============================================================================
// Status Code Tests
// ============================================================================

#[test]
fn test_status_and_code() {
    let cases = [
        (
            ApiError::NoMatchingInteraction {
                method: "GET".to_string(),
                path: "/".to_string(),
            },
            StatusCode::NOT_FOUND,
            "NO_MATCHING_INTERACTION",
        ),
        (
            ApiError::InvalidRequest("x".to_string()),
            StatusCode::BAD_REQUEST,
            "INVALID_REQUEST",
        ),
        (
            ApiError::Internal("x".to_string()),
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL_ERROR",
        ),
    ];

    for (error, status, code) in cases {
        assert_eq!(error.status_and_code(), (status, code));
    }
}

#[test]
fn test_into_response_status() {
    let response = ApiError::InvalidRequest("bad".to_string()).into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
