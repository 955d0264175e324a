use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Deserialize, Validate, ToSchema)]
pub struct LoginReqJson {
    #[validate(email)]
    email: String,
    password: String,
}

impl LoginReqJson {
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

#[derive(Serialize, ToSchema)]
pub struct TokenResJson {
    access_token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    refresh_token: Option<String>,
    token_type: String,
}

impl TokenResJson {
    pub fn new_pair(access_token: &str, refresh_token: &str) -> Self {
        Self {
            access_token: access_token.to_owned(),
            refresh_token: Some(refresh_token.to_owned()),
            token_type: "bearer".to_owned(),
        }
    }

    pub fn new_access(access_token: &str) -> Self {
        Self {
            access_token: access_token.to_owned(),
            refresh_token: None,
            token_type: "bearer".to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn access_only_token_skips_refresh_field() {
        let value = serde_json::to_value(TokenResJson::new_access("token")).unwrap();

        assert_eq!(value["access_token"], "token");
        assert_eq!(value["token_type"], "bearer");
        assert!(value.get("refresh_token").is_none());
    }

    #[test]
    fn login_requires_wellformed_email() {
        let data = serde_json::from_value::<LoginReqJson>(serde_json::json!({
            "email": "not-an-email",
            "password": "1234"
        }))
        .unwrap();

        assert!(data.validate().is_err());
    }
}
