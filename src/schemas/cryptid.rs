use crate::error::AppError;
use crate::models::Cryptid;
use crate::service::validation::{FieldRule, Validate};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const NAME: FieldRule = FieldRule::text(200).required();
const CLASSIFICATION: FieldRule = FieldRule::text(100);
const DESCRIPTION: FieldRule = FieldRule::long_text();
const RARITY: FieldRule = FieldRule::text(50);
const LAST_SEEN_LOCATION: FieldRule = FieldRule::text(200);

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CryptidCreate {
    pub name: String,
    #[serde(default)]
    pub classification: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub rarity: Option<String>,
    #[serde(default)]
    pub last_seen_location: Option<String>,
    /// The creating user.
    pub created_by: Uuid,
}

impl Validate for CryptidCreate {
    fn validate(&self) -> Result<(), AppError> {
        NAME.check_str("name", Some(&self.name))?;
        CLASSIFICATION.check_str("classification", self.classification.as_deref())?;
        DESCRIPTION.check_str("description", self.description.as_deref())?;
        RARITY.check_str("rarity", self.rarity.as_deref())?;
        LAST_SEEN_LOCATION.check_str("last_seen_location", self.last_seen_location.as_deref())
    }
}

/// `created_by` is fixed at creation and cannot be patched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CryptidUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub classification: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub rarity: Option<String>,
    #[serde(default)]
    pub last_seen_location: Option<String>,
}

impl CryptidUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.classification.is_none()
            && self.description.is_none()
            && self.rarity.is_none()
            && self.last_seen_location.is_none()
    }
}

impl Validate for CryptidUpdate {
    fn validate(&self) -> Result<(), AppError> {
        NAME.check_str("name", self.name.as_deref())?;
        CLASSIFICATION.check_str("classification", self.classification.as_deref())?;
        DESCRIPTION.check_str("description", self.description.as_deref())?;
        RARITY.check_str("rarity", self.rarity.as_deref())?;
        LAST_SEEN_LOCATION.check_str("last_seen_location", self.last_seen_location.as_deref())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CryptidOut {
    pub id: Uuid,
    pub name: String,
    pub classification: Option<String>,
    pub description: Option<String>,
    pub rarity: Option<String>,
    pub last_seen_location: Option<String>,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
}

impl From<Cryptid> for CryptidOut {
    fn from(c: Cryptid) -> Self {
        CryptidOut {
            id: c.id,
            name: c.name,
            classification: c.classification,
            description: c.description,
            rarity: c.rarity,
            last_seen_location: c.last_seen_location,
            created_by: c.created_by,
            created_at: c.created_at,
        }
    }
}
