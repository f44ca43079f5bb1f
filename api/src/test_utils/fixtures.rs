//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid entity that can be customized.

use chrono::Utc;

use crate::domain::entities::{
    Appointment, AppointmentId, AppointmentStatus, BloodInventory, BloodInventoryId, BloodType,
    BloodTypeId, Hospital, HospitalId, Request, RequestId, User, UserId,
};

/// Create a test hospital with default values
pub fn test_hospital(id: i32) -> Hospital {
    Hospital {
        id: HospitalId(id),
        name: format!("General Hospital {}", id),
        address: "1 Main St".to_string(),
        phone: "555-0100".to_string(),
        email: format!("contact{}@hospital.example", id),
    }
}

/// Create a test blood type with a specific name
pub fn test_blood_type(id: i32, name: &str) -> BloodType {
    BloodType {
        id: BloodTypeId(id),
        name: name.to_string(),
    }
}

/// Create a test inventory row with a specific balance
pub fn test_inventory(id: i32, hospital_id: i32, blood_type_id: i32, units: i32) -> BloodInventory {
    BloodInventory {
        id: BloodInventoryId(id),
        hospital_id: HospitalId(hospital_id),
        blood_type_id: BloodTypeId(blood_type_id),
        available_units: units,
    }
}

/// Create a test appointment with default values
pub fn test_appointment(id: i32, user_id: i32, hospital_id: i32) -> Appointment {
    Appointment {
        id: AppointmentId(id),
        user_id: UserId(user_id),
        hospital_id: HospitalId(hospital_id),
        appointment_type: "donation".to_string(),
        status: AppointmentStatus::Pending,
        date: Utc::now(),
        info: "".to_string(),
    }
}

/// Create a test request with default values
pub fn test_request(id: i32, blood_type_id: i32, hospital_id: i32) -> Request {
    Request {
        id: RequestId(id),
        requester_name: "Test Requester".to_string(),
        blood_type_id: BloodTypeId(blood_type_id),
        quantity: 2,
        hospital_id: HospitalId(hospital_id),
        request_date: Utc::now(),
    }
}

/// Create a test user with default values
pub fn test_user(id: i32) -> User {
    User {
        id: UserId(id),
        first_name: "Test".to_string(),
        last_name: format!("User{}", id),
        user_name: format!("tuser{}", id),
        email: format!("tuser{}@example.com", id),
        phone_number: "555-0123".to_string(),
        gender: "other".to_string(),
        address: "2 Side St".to_string(),
        create_date: Utc::now(),
        update_date: Utc::now(),
        last_donation_date: None,
        date_of_birth: Utc::now(),
        user_type: "donor".to_string(),
        blood_type: "O+".to_string(),
    }
}
