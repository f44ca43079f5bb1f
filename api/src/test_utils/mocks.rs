//! Mock implementations of port traits
//!
//! In-memory stores over locked hash maps, with sequential i32 ids like the
//! real database. Lists come back sorted by id so tests stay deterministic.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::{Arc, RwLock};

use crate::domain::entities::{
    Appointment, AppointmentId, AppointmentStatus, BloodInventory, BloodInventoryId, BloodType,
    BloodTypeId, Hospital, HospitalId, NewAppointment, NewBloodInventory, NewBloodType,
    NewHospital, NewRequest, NewUser, Request, RequestId, UpdateAppointment, UpdateUser, User,
    UserId,
};
use crate::domain::ports::{
    AppointmentRepository, BloodTypeRepository, HospitalRepository, InventoryRepository,
    RequestRepository, UserDirectory,
};
use crate::error::DomainError;

fn next(counter: &AtomicI32) -> i32 {
    counter.fetch_add(1, Ordering::SeqCst)
}

// ============================================================================
// In-Memory Hospital Repository
// ============================================================================

pub struct InMemoryHospitalRepository {
    hospitals: Arc<RwLock<HashMap<HospitalId, Hospital>>>,
    next_id: AtomicI32,
}

impl Default for InMemoryHospitalRepository {
    fn default() -> Self {
        Self {
            hospitals: Arc::new(RwLock::new(HashMap::new())),
            next_id: AtomicI32::new(1),
        }
    }
}

impl InMemoryHospitalRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a hospital for testing
    pub fn with_hospital(self, hospital: Hospital) -> Self {
        {
            let mut hospitals = self.hospitals.write().unwrap();
            self.next_id
                .fetch_max(hospital.id.0 + 1, Ordering::SeqCst);
            hospitals.insert(hospital.id, hospital);
        }
        self
    }
}

#[async_trait]
impl HospitalRepository for InMemoryHospitalRepository {
    async fn find_by_id(&self, id: &HospitalId) -> Result<Option<Hospital>, DomainError> {
        let hospitals = self.hospitals.read().unwrap();
        Ok(hospitals.get(id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Hospital>, DomainError> {
        let hospitals = self.hospitals.read().unwrap();
        let mut all: Vec<Hospital> = hospitals.values().cloned().collect();
        all.sort_by_key(|h| h.id.0);
        Ok(all)
    }

    async fn create(&self, hospital: &NewHospital) -> Result<Hospital, DomainError> {
        let created = Hospital {
            id: HospitalId(next(&self.next_id)),
            name: hospital.name.clone(),
            address: hospital.address.clone(),
            phone: hospital.phone.clone(),
            email: hospital.email.clone(),
        };
        let mut hospitals = self.hospitals.write().unwrap();
        hospitals.insert(created.id, created.clone());
        Ok(created)
    }

    async fn update(
        &self,
        id: &HospitalId,
        hospital: &NewHospital,
    ) -> Result<Hospital, DomainError> {
        let mut hospitals = self.hospitals.write().unwrap();
        let existing = hospitals
            .get_mut(id)
            .ok_or_else(|| DomainError::NotFound(format!("Hospital {} not found", id)))?;
        existing.name = hospital.name.clone();
        existing.address = hospital.address.clone();
        existing.phone = hospital.phone.clone();
        existing.email = hospital.email.clone();
        Ok(existing.clone())
    }

    async fn delete(&self, id: &HospitalId) -> Result<(), DomainError> {
        let mut hospitals = self.hospitals.write().unwrap();
        hospitals
            .remove(id)
            .ok_or_else(|| DomainError::NotFound(format!("Hospital {} not found", id)))?;
        Ok(())
    }
}

// ============================================================================
// In-Memory BloodType Repository
// ============================================================================

pub struct InMemoryBloodTypeRepository {
    blood_types: Arc<RwLock<HashMap<BloodTypeId, BloodType>>>,
    next_id: AtomicI32,
}

impl Default for InMemoryBloodTypeRepository {
    fn default() -> Self {
        Self {
            blood_types: Arc::new(RwLock::new(HashMap::new())),
            next_id: AtomicI32::new(1),
        }
    }
}

impl InMemoryBloodTypeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a blood type for testing
    pub fn with_blood_type(self, blood_type: BloodType) -> Self {
        {
            let mut blood_types = self.blood_types.write().unwrap();
            self.next_id
                .fetch_max(blood_type.id.0 + 1, Ordering::SeqCst);
            blood_types.insert(blood_type.id, blood_type);
        }
        self
    }
}

#[async_trait]
impl BloodTypeRepository for InMemoryBloodTypeRepository {
    async fn find_by_id(&self, id: &BloodTypeId) -> Result<Option<BloodType>, DomainError> {
        let blood_types = self.blood_types.read().unwrap();
        Ok(blood_types.get(id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<BloodType>, DomainError> {
        let blood_types = self.blood_types.read().unwrap();
        let mut all: Vec<BloodType> = blood_types.values().cloned().collect();
        all.sort_by_key(|b| b.id.0);
        Ok(all)
    }

    async fn create(&self, blood_type: &NewBloodType) -> Result<BloodType, DomainError> {
        let created = BloodType {
            id: BloodTypeId(next(&self.next_id)),
            name: blood_type.name.clone(),
        };
        let mut blood_types = self.blood_types.write().unwrap();
        blood_types.insert(created.id, created.clone());
        Ok(created)
    }

    async fn update(
        &self,
        id: &BloodTypeId,
        blood_type: &NewBloodType,
    ) -> Result<BloodType, DomainError> {
        let mut blood_types = self.blood_types.write().unwrap();
        let existing = blood_types
            .get_mut(id)
            .ok_or_else(|| DomainError::NotFound(format!("Blood type {} not found", id)))?;
        existing.name = blood_type.name.clone();
        Ok(existing.clone())
    }

    async fn delete(&self, id: &BloodTypeId) -> Result<(), DomainError> {
        let mut blood_types = self.blood_types.write().unwrap();
        blood_types
            .remove(id)
            .ok_or_else(|| DomainError::NotFound(format!("Blood type {} not found", id)))?;
        Ok(())
    }
}

// ============================================================================
// In-Memory Inventory Repository
// ============================================================================

pub struct InMemoryInventoryRepository {
    inventories: Arc<RwLock<HashMap<BloodInventoryId, BloodInventory>>>,
    next_id: AtomicI32,
}

impl Default for InMemoryInventoryRepository {
    fn default() -> Self {
        Self {
            inventories: Arc::new(RwLock::new(HashMap::new())),
            next_id: AtomicI32::new(1),
        }
    }
}

impl InMemoryInventoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with an inventory row for testing
    pub fn with_inventory(self, inventory: BloodInventory) -> Self {
        {
            let mut inventories = self.inventories.write().unwrap();
            self.next_id
                .fetch_max(inventory.id.0 + 1, Ordering::SeqCst);
            inventories.insert(inventory.id, inventory);
        }
        self
    }
}

#[async_trait]
impl InventoryRepository for InMemoryInventoryRepository {
    async fn find_by_id(
        &self,
        id: &BloodInventoryId,
    ) -> Result<Option<BloodInventory>, DomainError> {
        let inventories = self.inventories.read().unwrap();
        Ok(inventories.get(id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<BloodInventory>, DomainError> {
        let inventories = self.inventories.read().unwrap();
        let mut all: Vec<BloodInventory> = inventories.values().cloned().collect();
        all.sort_by_key(|i| i.id.0);
        Ok(all)
    }

    async fn create(&self, inventory: &NewBloodInventory) -> Result<BloodInventory, DomainError> {
        let created = BloodInventory {
            id: BloodInventoryId(next(&self.next_id)),
            hospital_id: inventory.hospital_id,
            blood_type_id: inventory.blood_type_id,
            available_units: 0,
        };
        let mut inventories = self.inventories.write().unwrap();
        inventories.insert(created.id, created.clone());
        Ok(created)
    }

    async fn update_refs(
        &self,
        id: &BloodInventoryId,
        hospital_id: &HospitalId,
        blood_type_id: &BloodTypeId,
    ) -> Result<(), DomainError> {
        let mut inventories = self.inventories.write().unwrap();
        let existing = inventories
            .get_mut(id)
            .ok_or_else(|| DomainError::NotFound(format!("Inventory {} not found", id)))?;
        existing.hospital_id = *hospital_id;
        existing.blood_type_id = *blood_type_id;
        Ok(())
    }

    async fn update_units(&self, id: &BloodInventoryId, units: i32) -> Result<(), DomainError> {
        let mut inventories = self.inventories.write().unwrap();
        let existing = inventories
            .get_mut(id)
            .ok_or_else(|| DomainError::NotFound(format!("Inventory {} not found", id)))?;
        existing.available_units = units;
        Ok(())
    }

    async fn delete(&self, id: &BloodInventoryId) -> Result<(), DomainError> {
        let mut inventories = self.inventories.write().unwrap();
        inventories
            .remove(id)
            .ok_or_else(|| DomainError::NotFound(format!("Inventory {} not found", id)))?;
        Ok(())
    }
}

// ============================================================================
// In-Memory Appointment Repository
// ============================================================================

pub struct InMemoryAppointmentRepository {
    appointments: Arc<RwLock<HashMap<AppointmentId, Appointment>>>,
    next_id: AtomicI32,
}

impl Default for InMemoryAppointmentRepository {
    fn default() -> Self {
        Self {
            appointments: Arc::new(RwLock::new(HashMap::new())),
            next_id: AtomicI32::new(1),
        }
    }
}

impl InMemoryAppointmentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with an appointment for testing
    pub fn with_appointment(self, appointment: Appointment) -> Self {
        {
            let mut appointments = self.appointments.write().unwrap();
            self.next_id
                .fetch_max(appointment.id.0 + 1, Ordering::SeqCst);
            appointments.insert(appointment.id, appointment);
        }
        self
    }

    /// Number of stored rows, for asserting nothing was created
    pub fn len(&self) -> usize {
        self.appointments.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl AppointmentRepository for InMemoryAppointmentRepository {
    async fn find_by_id(&self, id: &AppointmentId) -> Result<Option<Appointment>, DomainError> {
        let appointments = self.appointments.read().unwrap();
        Ok(appointments.get(id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Appointment>, DomainError> {
        let appointments = self.appointments.read().unwrap();
        let mut all: Vec<Appointment> = appointments.values().cloned().collect();
        all.sort_by_key(|a| a.id.0);
        Ok(all)
    }

    async fn create(&self, appointment: &NewAppointment) -> Result<Appointment, DomainError> {
        let created = Appointment {
            id: AppointmentId(next(&self.next_id)),
            user_id: appointment.user_id,
            hospital_id: appointment.hospital_id,
            appointment_type: appointment.appointment_type.clone(),
            status: appointment.status,
            date: appointment.date,
            info: appointment.info.clone(),
        };
        let mut appointments = self.appointments.write().unwrap();
        appointments.insert(created.id, created.clone());
        Ok(created)
    }

    async fn update(
        &self,
        id: &AppointmentId,
        appointment: &UpdateAppointment,
    ) -> Result<Appointment, DomainError> {
        let mut appointments = self.appointments.write().unwrap();
        let existing = appointments
            .get_mut(id)
            .ok_or_else(|| DomainError::NotFound(format!("Appointment {} not found", id)))?;
        existing.user_id = appointment.user_id;
        existing.hospital_id = appointment.hospital_id;
        existing.appointment_type = appointment.appointment_type.clone();
        existing.status = appointment.status;
        existing.date = appointment.date;
        existing.info = appointment.info.clone();
        Ok(existing.clone())
    }

    async fn update_status(
        &self,
        id: &AppointmentId,
        status: AppointmentStatus,
    ) -> Result<(), DomainError> {
        let mut appointments = self.appointments.write().unwrap();
        let existing = appointments
            .get_mut(id)
            .ok_or_else(|| DomainError::NotFound(format!("Appointment {} not found", id)))?;
        existing.status = status;
        Ok(())
    }

    async fn delete(&self, id: &AppointmentId) -> Result<(), DomainError> {
        let mut appointments = self.appointments.write().unwrap();
        appointments
            .remove(id)
            .ok_or_else(|| DomainError::NotFound(format!("Appointment {} not found", id)))?;
        Ok(())
    }
}

// ============================================================================
// In-Memory Request Repository
// ============================================================================

pub struct InMemoryRequestRepository {
    requests: Arc<RwLock<HashMap<RequestId, Request>>>,
    next_id: AtomicI32,
}

impl Default for InMemoryRequestRepository {
    fn default() -> Self {
        Self {
            requests: Arc::new(RwLock::new(HashMap::new())),
            next_id: AtomicI32::new(1),
        }
    }
}

impl InMemoryRequestRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a request for testing
    pub fn with_request(self, request: Request) -> Self {
        {
            let mut requests = self.requests.write().unwrap();
            self.next_id
                .fetch_max(request.id.0 + 1, Ordering::SeqCst);
            requests.insert(request.id, request);
        }
        self
    }
}

#[async_trait]
impl RequestRepository for InMemoryRequestRepository {
    async fn find_by_id(&self, id: &RequestId) -> Result<Option<Request>, DomainError> {
        let requests = self.requests.read().unwrap();
        Ok(requests.get(id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Request>, DomainError> {
        let requests = self.requests.read().unwrap();
        let mut all: Vec<Request> = requests.values().cloned().collect();
        all.sort_by_key(|r| r.id.0);
        Ok(all)
    }

    async fn create(&self, request: &NewRequest) -> Result<Request, DomainError> {
        let created = Request {
            id: RequestId(next(&self.next_id)),
            requester_name: request.requester_name.clone(),
            blood_type_id: request.blood_type_id,
            quantity: request.quantity,
            hospital_id: request.hospital_id,
            request_date: request.request_date,
        };
        let mut requests = self.requests.write().unwrap();
        requests.insert(created.id, created.clone());
        Ok(created)
    }

    async fn update(&self, id: &RequestId, request: &NewRequest) -> Result<Request, DomainError> {
        let mut requests = self.requests.write().unwrap();
        let existing = requests
            .get_mut(id)
            .ok_or_else(|| DomainError::NotFound(format!("Request {} not found", id)))?;
        existing.requester_name = request.requester_name.clone();
        existing.blood_type_id = request.blood_type_id;
        existing.quantity = request.quantity;
        existing.hospital_id = request.hospital_id;
        existing.request_date = request.request_date;
        Ok(existing.clone())
    }

    async fn delete(&self, id: &RequestId) -> Result<(), DomainError> {
        let mut requests = self.requests.write().unwrap();
        requests
            .remove(id)
            .ok_or_else(|| DomainError::NotFound(format!("Request {} not found", id)))?;
        Ok(())
    }
}

// ============================================================================
// In-Memory User Directory
// ============================================================================

pub struct InMemoryUserDirectory {
    users: Arc<RwLock<HashMap<UserId, User>>>,
    by_session_hash: Arc<RwLock<HashMap<String, UserId>>>,
    roles: Arc<RwLock<Vec<String>>>,
    user_roles: Arc<RwLock<Vec<(UserId, String)>>>,
    next_id: AtomicI32,
}

impl Default for InMemoryUserDirectory {
    fn default() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
            by_session_hash: Arc::new(RwLock::new(HashMap::new())),
            roles: Arc::new(RwLock::new(Vec::new())),
            user_roles: Arc::new(RwLock::new(Vec::new())),
            next_id: AtomicI32::new(1),
        }
    }
}

impl InMemoryUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a user for testing
    pub fn with_user(self, user: User) -> Self {
        {
            let mut users = self.users.write().unwrap();
            self.next_id.fetch_max(user.id.0 + 1, Ordering::SeqCst);
            users.insert(user.id, user);
        }
        self
    }

    /// Whether the role exists in the directory
    pub fn has_role(&self, name: &str) -> bool {
        self.roles.read().unwrap().iter().any(|r| r == name)
    }

    /// Whether the user carries the role
    pub fn user_has_role(&self, user_id: &UserId, name: &str) -> bool {
        self.user_roles
            .read()
            .unwrap()
            .iter()
            .any(|(id, role)| id == user_id && role == name)
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn create_user(&self, user: &NewUser, _password: &str) -> Result<User, DomainError> {
        let mut users = self.users.write().unwrap();

        if users.values().any(|u| u.user_name == user.user_name) {
            return Err(DomainError::validation(
                "user_name",
                "Username is already taken.",
            ));
        }

        let now = Utc::now();
        let created = User {
            id: UserId(next(&self.next_id)),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            user_name: user.user_name.clone(),
            email: user.email.clone(),
            phone_number: user.phone_number.clone(),
            gender: user.gender.clone(),
            address: user.address.clone(),
            create_date: now,
            update_date: now,
            last_donation_date: user.last_donation_date,
            date_of_birth: user.date_of_birth,
            user_type: user.user_type.clone(),
            blood_type: user.blood_type.clone(),
        };

        users.insert(created.id, created.clone());
        self.by_session_hash
            .write()
            .unwrap()
            .insert(user.session_token_hash.clone(), created.id);
        Ok(created)
    }

    async fn ensure_role(&self, name: &str) -> Result<(), DomainError> {
        let mut roles = self.roles.write().unwrap();
        if !roles.iter().any(|r| r == name) {
            roles.push(name.to_string());
        }
        Ok(())
    }

    async fn assign_role(&self, user_id: &UserId, name: &str) -> Result<(), DomainError> {
        if !self.has_role(name) {
            return Err(DomainError::Internal(format!("Role {} not found", name)));
        }
        let mut user_roles = self.user_roles.write().unwrap();
        if !user_roles
            .iter()
            .any(|(id, role)| id == user_id && role == name)
        {
            user_roles.push((*user_id, name.to_string()));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        let users = self.users.read().unwrap();
        Ok(users.get(id).cloned())
    }

    async fn find_by_session_hash(&self, hash: &str) -> Result<Option<User>, DomainError> {
        let by_session_hash = self.by_session_hash.read().unwrap();
        let users = self.users.read().unwrap();

        if let Some(id) = by_session_hash.get(hash) {
            Ok(users.get(id).cloned())
        } else {
            Ok(None)
        }
    }

    async fn list_all(&self) -> Result<Vec<User>, DomainError> {
        let users = self.users.read().unwrap();
        let mut all: Vec<User> = users.values().cloned().collect();
        all.sort_by_key(|u| u.id.0);
        Ok(all)
    }

    async fn update(&self, id: &UserId, user: &UpdateUser) -> Result<User, DomainError> {
        let mut users = self.users.write().unwrap();
        let existing = users
            .get_mut(id)
            .ok_or_else(|| DomainError::NotFound(format!("User {} not found", id)))?;
        existing.first_name = user.first_name.clone();
        existing.last_name = user.last_name.clone();
        existing.user_name = user.user_name.clone();
        existing.email = user.email.clone();
        existing.phone_number = user.phone_number.clone();
        existing.gender = user.gender.clone();
        existing.address = user.address.clone();
        existing.last_donation_date = user.last_donation_date;
        existing.date_of_birth = user.date_of_birth;
        existing.user_type = user.user_type.clone();
        existing.blood_type = user.blood_type.clone();
        existing.update_date = Utc::now();
        Ok(existing.clone())
    }

    async fn delete(&self, id: &UserId) -> Result<(), DomainError> {
        let mut users = self.users.write().unwrap();
        users
            .remove(id)
            .ok_or_else(|| DomainError::NotFound(format!("User {} not found", id)))?;
        Ok(())
    }
}
