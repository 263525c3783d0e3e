use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request body for user registration.
///
/// Fields default to empty so a missing field surfaces as a validation
/// failure on that field instead of a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Response returned after successful registration.
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: String,
    pub token: String,
    pub user: UserId,
}

#[derive(Debug, Serialize)]
pub struct UserId {
    pub id: Uuid,
}

/// Response returned after successful login.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_response_shape() {
        let response = RegisterResponse {
            message: "user registered".into(),
            token: "abc.def.ghi".into(),
            user: UserId {
                id: uuid::Uuid::new_v4(),
            },
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["message"], "user registered");
        assert_eq!(json["token"], "abc.def.ghi");
        assert!(json["user"]["id"].is_string());
    }

    #[test]
    fn missing_request_fields_default_to_empty() {
        let request: RegisterRequest = serde_json::from_str(r#"{"email":"a@b.co"}"#).unwrap();
        assert_eq!(request.email, "a@b.co");
        assert!(request.name.is_empty());
        assert!(request.password.is_empty());
    }
}
