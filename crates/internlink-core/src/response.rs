//! The JSON envelope every endpoint answers with.

use serde::Serialize;
use utoipa::ToSchema;

/// Successful envelope carrying a payload.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data,
        }
    }
}

/// Envelope without a payload.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// Login envelope; the signed token is repeated at the top level next to
/// the session cookie.
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse<T> {
    pub access_token: String,
    pub success: bool,
    pub message: String,
    pub data: T,
}

impl<T> LoginResponse<T> {
    pub fn new(access_token: String, message: impl Into<String>, data: T) -> Self {
        Self {
            access_token,
            success: true,
            message: message.into(),
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_api_response_serializes_data() {
        let response = ApiResponse::ok("Students fetched successfully", vec![1, 2]);
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(
            value,
            json!({
                "success": true,
                "message": "Students fetched successfully",
                "data": [1, 2],
            })
        );
    }

    #[test]
    fn test_api_response_keeps_null_data() {
        let response: ApiResponse<Option<u8>> = ApiResponse::ok("Progress report not found", None);
        let value = serde_json::to_value(&response).unwrap();
        assert!(value["data"].is_null());
        assert!(value.as_object().unwrap().contains_key("data"));
    }

    #[test]
    fn test_message_response_has_no_data() {
        let value = serde_json::to_value(MessageResponse::ok("Admin logged out successfully"))
            .unwrap();
        assert_eq!(value["success"], true);
        assert!(value.get("data").is_none());
    }

    #[test]
    fn test_login_response_exposes_token() {
        let response = LoginResponse::new("tok".to_string(), "Admin logged in successfully", ());
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["access_token"], "tok");
        assert_eq!(value["message"], "Admin logged in successfully");
    }
}
