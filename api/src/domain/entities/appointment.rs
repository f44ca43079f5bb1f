//! Donation appointment domain entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{HospitalId, UserId};

/// Unique identifier for an appointment, assigned by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AppointmentId(pub i32);

impl From<i32> for AppointmentId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for AppointmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Appointment lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    /// Booked, awaiting staff approval
    Pending,
    /// Approved by hospital staff
    Approved,
    /// Cancelled by either side
    Cancelled,
    /// Visit took place
    Completed,
}

impl std::fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppointmentStatus::Pending => write!(f, "pending"),
            AppointmentStatus::Approved => write!(f, "approved"),
            AppointmentStatus::Cancelled => write!(f, "cancelled"),
            AppointmentStatus::Completed => write!(f, "completed"),
        }
    }
}

impl std::str::FromStr for AppointmentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(AppointmentStatus::Pending),
            "approved" => Ok(AppointmentStatus::Approved),
            "cancelled" => Ok(AppointmentStatus::Cancelled),
            "completed" => Ok(AppointmentStatus::Completed),
            _ => Err(format!("Unknown appointment status: {}", s)),
        }
    }
}

/// A scheduled donation or visit at a hospital
#[derive(Debug, Clone, Serialize)]
pub struct Appointment {
    pub id: AppointmentId,
    pub user_id: UserId,
    pub hospital_id: HospitalId,
    pub appointment_type: String,
    pub status: AppointmentStatus,
    pub date: DateTime<Utc>,
    pub info: String,
}

/// Data needed to create a new appointment
///
/// `user_id` is the authenticated caller, threaded in explicitly by the
/// handler rather than read from ambient request state.
#[derive(Debug, Clone)]
pub struct NewAppointment {
    pub user_id: UserId,
    pub hospital_id: HospitalId,
    pub appointment_type: String,
    pub status: AppointmentStatus,
    pub date: DateTime<Utc>,
    pub info: String,
}

/// Full-field overwrite for an existing appointment
#[derive(Debug, Clone)]
pub struct UpdateAppointment {
    pub user_id: UserId,
    pub hospital_id: HospitalId,
    pub appointment_type: String,
    pub status: AppointmentStatus,
    pub date: DateTime<Utc>,
    pub info: String,
}
