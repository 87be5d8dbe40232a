use nationbuilder_client::error::{ApiError, ApiErrorKind, AppError};
use reqwest::StatusCode;
use reqwest::header::HeaderMap;

fn api_error(status: StatusCode) -> ApiError {
    ApiError::new(
        "Get person 1",
        status,
        HeaderMap::new(),
        r#"{"code":"x"}"#,
        "https://acme.nationbuilder.com/api/v1/people/1",
    )
}

#[test]
fn test_app_error_display_configuration() {
    let error = AppError::Configuration("api token is missing".to_string());
    assert_eq!(error.to_string(), "configuration error: api token is missing");
}

#[test]
fn test_app_error_display_invalid_input() {
    let error = AppError::InvalidInput("no tags given".to_string());
    assert_eq!(error.to_string(), "invalid input: no tags given");
}

#[test]
fn test_app_error_display_not_found() {
    let error: AppError = api_error(StatusCode::NOT_FOUND).into();
    assert_eq!(
        error.to_string(),
        r#"not found: Get person 1 (404 Not Found) for https://acme.nationbuilder.com/api/v1/people/1: {"code":"x"}"#
    );
}

#[test]
fn test_api_error_kind_from_status() {
    assert_eq!(ApiErrorKind::classify(StatusCode::OK), None);
    assert_eq!(ApiErrorKind::classify(StatusCode::NO_CONTENT), None);
    assert_eq!(
        ApiErrorKind::classify(StatusCode::NOT_FOUND),
        Some(ApiErrorKind::NotFound)
    );
    assert_eq!(
        ApiErrorKind::classify(StatusCode::BAD_REQUEST),
        Some(ApiErrorKind::BadRequest)
    );
    assert_eq!(
        ApiErrorKind::classify(StatusCode::UNAUTHORIZED),
        Some(ApiErrorKind::Other)
    );
}

#[test]
fn test_app_error_conversion_by_kind() {
    let bad: AppError = api_error(StatusCode::BAD_REQUEST).into();
    assert!(matches!(bad, AppError::BadRequest(_)));
    let other: AppError = api_error(StatusCode::TOO_MANY_REQUESTS).into();
    assert!(matches!(other, AppError::Response(_)));
    assert_eq!(other.status(), Some(StatusCode::TOO_MANY_REQUESTS));
    assert!(!other.is_not_found());
}

#[test]
fn test_app_error_from_json() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error: AppError = json_err.into();
    assert!(error.to_string().starts_with("json error"));
    assert!(error.api_error().is_none());
}
