//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).

use async_trait::async_trait;

use crate::domain::entities::{
    Appointment, AppointmentId, AppointmentStatus, BloodInventory, BloodInventoryId, BloodType,
    BloodTypeId, Hospital, HospitalId, NewAppointment, NewBloodInventory, NewBloodType,
    NewHospital, NewRequest, Request, RequestId, UpdateAppointment,
};
use crate::error::DomainError;

/// Repository for Hospital reference data
#[async_trait]
pub trait HospitalRepository: Send + Sync {
    /// Find a hospital by ID
    async fn find_by_id(&self, id: &HospitalId) -> Result<Option<Hospital>, DomainError>;

    /// List all hospitals in store-native order
    async fn find_all(&self) -> Result<Vec<Hospital>, DomainError>;

    /// Create a new hospital
    async fn create(&self, hospital: &NewHospital) -> Result<Hospital, DomainError>;

    /// Overwrite all fields of an existing hospital
    async fn update(&self, id: &HospitalId, hospital: &NewHospital)
        -> Result<Hospital, DomainError>;

    /// Delete a hospital; NotFound if absent
    async fn delete(&self, id: &HospitalId) -> Result<(), DomainError>;
}

/// Repository for BloodType reference data
#[async_trait]
pub trait BloodTypeRepository: Send + Sync {
    /// Find a blood type by ID
    async fn find_by_id(&self, id: &BloodTypeId) -> Result<Option<BloodType>, DomainError>;

    /// List all blood types in store-native order
    async fn find_all(&self) -> Result<Vec<BloodType>, DomainError>;

    /// Create a new blood type (duplicate names permitted)
    async fn create(&self, blood_type: &NewBloodType) -> Result<BloodType, DomainError>;

    /// Overwrite the name of an existing blood type
    async fn update(
        &self,
        id: &BloodTypeId,
        blood_type: &NewBloodType,
    ) -> Result<BloodType, DomainError>;

    /// Delete a blood type; NotFound if absent
    async fn delete(&self, id: &BloodTypeId) -> Result<(), DomainError>;
}

/// Repository for the blood inventory ledger
#[async_trait]
pub trait InventoryRepository: Send + Sync {
    /// Find an inventory row by ID
    async fn find_by_id(&self, id: &BloodInventoryId)
        -> Result<Option<BloodInventory>, DomainError>;

    /// List all inventory rows in store-native order
    async fn find_all(&self) -> Result<Vec<BloodInventory>, DomainError>;

    /// Create a new inventory row with a zero balance
    async fn create(&self, inventory: &NewBloodInventory) -> Result<BloodInventory, DomainError>;

    /// Overwrite the foreign keys only; the balance is untouched
    async fn update_refs(
        &self,
        id: &BloodInventoryId,
        hospital_id: &HospitalId,
        blood_type_id: &BloodTypeId,
    ) -> Result<(), DomainError>;

    /// Persist a new unit balance
    async fn update_units(&self, id: &BloodInventoryId, units: i32) -> Result<(), DomainError>;

    /// Delete an inventory row; NotFound if absent
    async fn delete(&self, id: &BloodInventoryId) -> Result<(), DomainError>;
}

/// Repository for Appointment entities
#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    /// Find an appointment by ID
    async fn find_by_id(&self, id: &AppointmentId) -> Result<Option<Appointment>, DomainError>;

    /// List all appointments in store-native order
    async fn find_all(&self) -> Result<Vec<Appointment>, DomainError>;

    /// Create a new appointment
    async fn create(&self, appointment: &NewAppointment) -> Result<Appointment, DomainError>;

    /// Overwrite all fields of an existing appointment
    async fn update(
        &self,
        id: &AppointmentId,
        appointment: &UpdateAppointment,
    ) -> Result<Appointment, DomainError>;

    /// Update only the status field
    async fn update_status(
        &self,
        id: &AppointmentId,
        status: AppointmentStatus,
    ) -> Result<(), DomainError>;

    /// Delete an appointment; NotFound if absent
    async fn delete(&self, id: &AppointmentId) -> Result<(), DomainError>;
}

/// Repository for blood Request entities
#[async_trait]
pub trait RequestRepository: Send + Sync {
    /// Find a request by ID
    async fn find_by_id(&self, id: &RequestId) -> Result<Option<Request>, DomainError>;

    /// List all requests in store-native order
    async fn find_all(&self) -> Result<Vec<Request>, DomainError>;

    /// Create a new request
    async fn create(&self, request: &NewRequest) -> Result<Request, DomainError>;

    /// Overwrite all fields of an existing request
    async fn update(&self, id: &RequestId, request: &NewRequest) -> Result<Request, DomainError>;

    /// Delete a request; NotFound if absent
    async fn delete(&self, id: &RequestId) -> Result<(), DomainError>;
}
