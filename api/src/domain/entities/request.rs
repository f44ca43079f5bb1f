//! Blood request domain entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{BloodTypeId, HospitalId};

/// Unique identifier for a blood request, assigned by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestId(pub i32);

impl From<i32> for RequestId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A request for blood units, addressed to a hospital
#[derive(Debug, Clone, Serialize)]
pub struct Request {
    pub id: RequestId,
    pub requester_name: String,
    pub blood_type_id: BloodTypeId,
    pub quantity: i32,
    pub hospital_id: HospitalId,
    pub request_date: DateTime<Utc>,
}

/// Data needed to create or overwrite a request
///
/// Create and update carry the same full field set.
#[derive(Debug, Clone)]
pub struct NewRequest {
    pub requester_name: String,
    pub blood_type_id: BloodTypeId,
    pub quantity: i32,
    pub hospital_id: HospitalId,
    pub request_date: DateTime<Utc>,
}
