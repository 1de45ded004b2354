use crate::error::AppError;
use crate::models::User;
use crate::service::validation::{FieldRule, Format, Validate};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const USERNAME: FieldRule = FieldRule::text(120).required().min_length(3);
const EMAIL: FieldRule = FieldRule::text(255).required().format(Format::Email);
const PASSWORD: FieldRule = FieldRule::text(128).required().min_length(8);

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserCreate {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl Validate for UserCreate {
    fn validate(&self) -> Result<(), AppError> {
        USERNAME.check_str("username", Some(&self.username))?;
        EMAIL.check_str("email", Some(&self.email))?;
        PASSWORD.check_str("password", Some(&self.password))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserUpdate {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

impl UserUpdate {
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.email.is_none() && self.password.is_none()
    }
}

impl Validate for UserUpdate {
    fn validate(&self) -> Result<(), AppError> {
        USERNAME.check_str("username", self.username.as_deref())?;
        EMAIL.check_str("email", self.email.as_deref())?;
        PASSWORD.check_str("password", self.password.as_deref())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UserOut {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserOut {
    fn from(u: User) -> Self {
        UserOut {
            id: u.id,
            username: u.username,
            email: u.email,
            created_at: u.created_at,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TokenRequest {
    pub username: String,
    pub password: String,
}

impl Validate for TokenRequest {
    fn validate(&self) -> Result<(), AppError> {
        let present = FieldRule::long_text().required();
        present.check_str("username", Some(&self.username))?;
        present.check_str("password", Some(&self.password))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: &'static str,
    /// Seconds until expiry.
    pub expires_in: i64,
}
