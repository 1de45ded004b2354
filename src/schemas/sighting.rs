use crate::error::AppError;
use crate::models::Sighting;
use crate::service::validation::{FieldRule, Validate};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const LOCATION: FieldRule = FieldRule::text(255).required();
const CONFIDENCE: FieldRule = FieldRule::range(1, 5);
const NOTES: FieldRule = FieldRule::long_text();

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SightingCreate {
    pub cryptid_id: Uuid,
    pub chaser_id: Uuid,
    pub location: String,
    /// RFC 3339; a date-time without an offset is taken as UTC.
    #[serde(deserialize_with = "super::timestamp::utc::deserialize")]
    pub sighted_at: DateTime<Utc>,
    #[serde(default)]
    pub confidence: Option<i32>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Validate for SightingCreate {
    fn validate(&self) -> Result<(), AppError> {
        LOCATION.check_str("location", Some(&self.location))?;
        CONFIDENCE.check_int("confidence", self.confidence.map(i64::from))?;
        NOTES.check_str("notes", self.notes.as_deref())
    }
}

/// The cryptid and chaser of a sighting are fixed at creation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SightingUpdate {
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "super::timestamp::utc_option::deserialize")]
    pub sighted_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub confidence: Option<i32>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl SightingUpdate {
    pub fn is_empty(&self) -> bool {
        self.location.is_none()
            && self.sighted_at.is_none()
            && self.confidence.is_none()
            && self.notes.is_none()
    }
}

impl Validate for SightingUpdate {
    fn validate(&self) -> Result<(), AppError> {
        LOCATION.check_str("location", self.location.as_deref())?;
        CONFIDENCE.check_int("confidence", self.confidence.map(i64::from))?;
        NOTES.check_str("notes", self.notes.as_deref())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SightingOut {
    pub id: Uuid,
    pub cryptid_id: Uuid,
    pub chaser_id: Uuid,
    pub location: String,
    pub sighted_at: DateTime<Utc>,
    pub confidence: Option<i32>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Sighting> for SightingOut {
    fn from(s: Sighting) -> Self {
        SightingOut {
            id: s.id,
            cryptid_id: s.cryptid_id,
            chaser_id: s.chaser_id,
            location: s.location,
            sighted_at: s.sighted_at,
            confidence: s.confidence,
            notes: s.notes,
            created_at: s.created_at,
            updated_at: s.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(confidence: serde_json::Value) -> serde_json::Value {
        json!({
            "cryptid_id": Uuid::new_v4(),
            "chaser_id": Uuid::new_v4(),
            "location": "Point Pleasant, WV",
            "sighted_at": "1966-11-15T23:30:00Z",
            "confidence": confidence
        })
    }

    #[test]
    fn confidence_outside_one_to_five_is_rejected() {
        for bad in [0, 6, -1, 100] {
            let s: SightingCreate = serde_json::from_value(body(json!(bad))).unwrap();
            assert!(
                matches!(s.validate(), Err(AppError::Validation(ref m)) if m.starts_with("confidence")),
                "confidence {} accepted",
                bad
            );
        }
        for good in 1..=5 {
            let s: SightingCreate = serde_json::from_value(body(json!(good))).unwrap();
            assert!(s.validate().is_ok());
        }
    }

    #[test]
    fn confidence_is_optional() {
        let s: SightingCreate = serde_json::from_value(body(serde_json::Value::Null)).unwrap();
        assert!(s.confidence.is_none());
        assert!(s.validate().is_ok());
    }

    #[test]
    fn fractional_confidence_is_a_type_error() {
        assert!(serde_json::from_value::<SightingCreate>(body(json!(2.5))).is_err());
    }

    #[test]
    fn sighted_at_without_offset_is_utc() {
        let mut b = body(json!(3));
        b["sighted_at"] = json!("1966-11-15T23:30:00");
        let s: SightingCreate = serde_json::from_value(b).unwrap();
        assert_eq!(s.sighted_at.to_rfc3339(), "1966-11-15T23:30:00+00:00");

        let patch: SightingUpdate =
            serde_json::from_value(json!({ "sighted_at": "1966-11-16 01:00:00" })).unwrap();
        assert_eq!(patch.sighted_at.map(|t| t.to_rfc3339()).as_deref(), Some("1966-11-16T01:00:00+00:00"));
        let patch: SightingUpdate = serde_json::from_value(json!({ "sighted_at": null })).unwrap();
        assert!(patch.is_empty());
    }

    #[test]
    fn sighted_at_must_be_a_date_time() {
        let mut b = body(json!(3));
        b["sighted_at"] = json!("around midnight");
        assert!(serde_json::from_value::<SightingCreate>(b).is_err());
    }

    #[test]
    fn update_checks_confidence_too() {
        let patch: SightingUpdate = serde_json::from_value(json!({ "confidence": 9 })).unwrap();
        assert!(patch.validate().is_err());
        let patch: SightingUpdate = serde_json::from_value(json!({ "notes": "tall, red eyes" })).unwrap();
        assert!(patch.validate().is_ok());
        assert!(patch.location.is_none());
    }

    #[test]
    fn update_cannot_move_sighting_to_another_cryptid() {
        let r = serde_json::from_value::<SightingUpdate>(json!({ "cryptid_id": Uuid::new_v4() }));
        assert!(r.is_err());
    }
}
