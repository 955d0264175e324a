use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

const FULL_NAME_MAX_LENGTH: usize = 20;
const PASSWORD_MIN_LENGTH: usize = 8;
const PASSWORD_SPECIAL_CHARACTERS: &str = "!@#$%^&*()-_=+[{]};:'\",<.>/?\\|`~";

fn validate_full_name(full_name: &str) -> Result<(), ValidationError> {
    if full_name.is_empty() || full_name.chars().count() > FULL_NAME_MAX_LENGTH {
        return Err(ValidationError::new("full_name_length"));
    }
    if !full_name
        .chars()
        .all(|char| char.is_alphabetic() || char == '-' || char == ' ')
    {
        return Err(ValidationError::new("full_name_characters"));
    }
    Ok(())
}

fn validate_password_strength(password: &str) -> Result<(), ValidationError> {
    let has_uppercase = password.chars().any(|char| char.is_uppercase());
    let has_lowercase = password.chars().any(|char| char.is_lowercase());
    let has_digit = password.chars().any(|char| char.is_ascii_digit());
    let has_special = password
        .chars()
        .any(|char| PASSWORD_SPECIAL_CHARACTERS.contains(char));

    if password.chars().count() < PASSWORD_MIN_LENGTH
        || !has_uppercase
        || !has_lowercase
        || !has_digit
        || !has_special
    {
        return Err(ValidationError::new("password_strength"));
    }
    Ok(())
}

#[derive(Deserialize, Validate, ToSchema)]
pub struct InsertOneUserReqJson {
    #[validate(email)]
    email: String,
    #[validate(custom(function = validate_full_name))]
    full_name: String,
    #[validate(custom(function = validate_password_strength))]
    password: String,
    repeat_password: String,
}

impl InsertOneUserReqJson {
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn repeat_password(&self) -> &str {
        &self.repeat_password
    }
}

#[derive(Deserialize)]
pub struct FindOneUserPath {
    user_id: Uuid,
}

impl FindOneUserPath {
    pub fn user_id(&self) -> &Uuid {
        &self.user_id
    }
}

#[derive(Deserialize, Validate, ToSchema)]
pub struct UpdateOneUserReqJson {
    #[validate(email)]
    email: Option<String>,
    #[validate(custom(function = validate_full_name))]
    full_name: Option<String>,
    #[validate(custom(function = validate_password_strength))]
    password: Option<String>,
    repeat_password: Option<String>,
}

impl UpdateOneUserReqJson {
    pub fn email(&self) -> &Option<String> {
        &self.email
    }

    pub fn full_name(&self) -> &Option<String> {
        &self.full_name
    }

    pub fn password(&self) -> &Option<String> {
        &self.password
    }

    pub fn repeat_password(&self) -> &Option<String> {
        &self.repeat_password
    }

    pub fn is_all_none(&self) -> bool {
        self.email.is_none() && self.full_name.is_none() && self.password.is_none()
    }
}

#[derive(Deserialize)]
pub struct UpdateOneUserPath {
    user_id: Uuid,
}

impl UpdateOneUserPath {
    pub fn user_id(&self) -> &Uuid {
        &self.user_id
    }
}

#[derive(Deserialize)]
pub struct DeleteOneUserPath {
    user_id: Uuid,
}

impl DeleteOneUserPath {
    pub fn user_id(&self) -> &Uuid {
        &self.user_id
    }
}

#[derive(Serialize, ToSchema)]
pub struct UserResJson {
    id: Uuid,
    email: String,
    full_name: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserResJson {
    pub fn new(
        id: &Uuid,
        email: &str,
        full_name: &str,
        created_at: &DateTime<Utc>,
        updated_at: &DateTime<Utc>,
    ) -> Self {
        Self {
            id: *id,
            email: email.to_owned(),
            full_name: full_name.to_owned(),
            created_at: *created_at,
            updated_at: *updated_at,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct DeleteOneUserResJson {
    id: Uuid,
}

impl DeleteOneUserResJson {
    pub fn new(id: &Uuid) -> Self {
        Self { id: *id }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn accepts_strong_password() {
        assert!(validate_password_strength("Sup3r$ecret").is_ok());
    }

    #[test]
    fn rejects_weak_passwords() {
        assert!(validate_password_strength("short1A$").is_ok());
        assert!(validate_password_strength("sh0rt$A").is_err());
        assert!(validate_password_strength("alllowercase1$").is_err());
        assert!(validate_password_strength("ALLUPPERCASE1$").is_err());
        assert!(validate_password_strength("NoDigitsHere$").is_err());
        assert!(validate_password_strength("NoSpecials123").is_err());
    }

    #[test]
    fn accepts_letter_names_with_spaces_and_hyphens() {
        assert!(validate_full_name("Anna-Maria Smith").is_ok());
        assert!(validate_full_name("Иван Петров").is_ok());
    }

    #[test]
    fn rejects_invalid_full_names() {
        assert!(validate_full_name("").is_err());
        assert!(validate_full_name("Name With A Digit 1").is_err());
        assert!(validate_full_name("This full name is way too long").is_err());
    }

    #[test]
    fn validates_whole_creation_payload() {
        let data = serde_json::from_value::<InsertOneUserReqJson>(json!({
            "email": "user@example.com",
            "full_name": "Regular User",
            "password": "Sup3r$ecret",
            "repeat_password": "Sup3r$ecret"
        }))
        .unwrap();
        assert!(data.validate().is_ok());

        let data = serde_json::from_value::<InsertOneUserReqJson>(json!({
            "email": "user@example.com",
            "full_name": "Regular User",
            "password": "weak",
            "repeat_password": "weak"
        }))
        .unwrap();
        assert!(data.validate().is_err());
    }

    #[test]
    fn update_payload_reports_empty_field_set() {
        let data = serde_json::from_value::<UpdateOneUserReqJson>(json!({})).unwrap();
        assert!(data.is_all_none());

        let data =
            serde_json::from_value::<UpdateOneUserReqJson>(json!({"full_name": "New Name"}))
                .unwrap();
        assert!(!data.is_all_none());
        assert!(data.validate().is_ok());
    }
}
