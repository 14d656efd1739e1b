//! Doctor record types
//!
//! Shared by the CLI and the Web (WASM) app:
//! - DoctorId: stable key of a record (number or string)
//! - DoctorRecord: one entry of the `/doctors` response

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Record identifier as delivered by the data source
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DoctorId {
    Number(i64),
    Text(String),
}

impl Default for DoctorId {
    fn default() -> Self {
        DoctorId::Number(0)
    }
}

impl fmt::Display for DoctorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DoctorId::Number(n) => write!(f, "{}", n),
            DoctorId::Text(s) => f.write_str(s),
        }
    }
}

/// One doctor as returned by `GET {API}/doctors`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorRecord {
    pub id: DoctorId,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub specialty: String,

    #[serde(default)]
    pub location: String,

    #[serde(default)]
    pub rating: f64,

    #[serde(default)]
    pub accepting_new_patients: bool,

    #[serde(default)]
    pub offers_telehealth: bool,

    /// Avatar image URL
    #[serde(default)]
    pub avatar: String,
}

impl DoctorRecord {
    /// Rating with one decimal, as shown on cards
    pub fn rating_label(&self) -> String {
        format!("{:.1}", self.rating)
    }
}

/// Decode a `/doctors` response body
///
/// The body must be a JSON array; anything else is an `Error::Json`.
pub fn decode_doctors(body: &str) -> Result<Vec<DoctorRecord>> {
    serde_json::from_str(body).map_err(Error::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doctor_record_default() {
        let doctor = DoctorRecord::default();
        assert_eq!(doctor.name, "");
        assert_eq!(doctor.rating, 0.0);
        assert!(!doctor.accepting_new_patients);
    }

    #[test]
    fn test_doctor_record_deserialize() {
        let json = r#"{
            "id": 7,
            "name": "Dr. Asha Rao",
            "specialty": "Cardiology",
            "location": "Pune",
            "rating": 4.8,
            "acceptingNewPatients": true,
            "offersTelehealth": false,
            "avatar": "https://example.com/a.png"
        }"#;

        let doctor: DoctorRecord = serde_json::from_str(json).expect("decode failed");
        assert_eq!(doctor.id, DoctorId::Number(7));
        assert_eq!(doctor.specialty, "Cardiology");
        assert_eq!(doctor.rating, 4.8);
        assert!(doctor.accepting_new_patients);
        assert!(!doctor.offers_telehealth);
    }

    #[test]
    fn test_doctor_record_missing_flags_default_to_false() {
        let json = r#"{"id": "d-1", "name": "Dr. Minimal", "rating": 3}"#;

        let doctor: DoctorRecord = serde_json::from_str(json).expect("decode failed");
        assert_eq!(doctor.id, DoctorId::Text("d-1".to_string()));
        assert_eq!(doctor.rating, 3.0);
        assert!(!doctor.offers_telehealth);
        assert_eq!(doctor.avatar, ""); // default
    }

    #[test]
    fn test_doctor_record_serialize_camel_case() {
        let doctor = DoctorRecord {
            id: DoctorId::Number(1),
            accepting_new_patients: true,
            ..Default::default()
        };

        let json = serde_json::to_string(&doctor).expect("encode failed");
        assert!(json.contains("\"acceptingNewPatients\":true"));
        assert!(json.contains("\"offersTelehealth\":false"));
    }

    #[test]
    fn test_doctor_id_display() {
        assert_eq!(DoctorId::Number(42).to_string(), "42");
        assert_eq!(DoctorId::Text("abc".into()).to_string(), "abc");
    }

    #[test]
    fn test_rating_label() {
        let doctor = DoctorRecord { rating: 4.76, ..Default::default() };
        assert_eq!(doctor.rating_label(), "4.8");
    }

    #[test]
    fn test_decode_doctors_array() {
        let body = r#"[{"id": 1, "name": "A", "rating": 4.1}, {"id": 2, "name": "B", "rating": 3.9}]"#;
        let doctors = decode_doctors(body).expect("decode failed");
        assert_eq!(doctors.len(), 2);
        assert_eq!(doctors[1].name, "B");
    }

    #[test]
    fn test_decode_doctors_rejects_object() {
        let result = decode_doctors(r#"{"doctors": []}"#);
        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[test]
    fn test_decode_doctors_rejects_html() {
        let result = decode_doctors("<!doctype html><html></html>");
        assert!(result.is_err());
    }
}
