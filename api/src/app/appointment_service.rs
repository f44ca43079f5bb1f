//! Appointment service
//!
//! CRUD over donation appointments plus the status-only partial update.
//! Read operations project each appointment against its user and hospital;
//! that join is deliberately strict: a stored foreign key with no matching
//! row is a data-integrity violation and fails loudly.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::{
    Appointment, AppointmentId, AppointmentStatus, HospitalId, NewAppointment, UpdateAppointment,
    UserId,
};
use crate::domain::ports::{AppointmentRepository, HospitalRepository, UserDirectory};
use crate::error::{AppError, DomainError};

/// Appointment joined with user and hospital details
#[derive(Debug, Clone, Serialize)]
pub struct AppointmentView {
    pub id: AppointmentId,
    pub user_id: UserId,
    pub user_full_name: String,
    pub user_email: String,
    pub user_phone_number: String,
    pub hospital_id: HospitalId,
    pub hospital_name: String,
    pub hospital_address: String,
    pub hospital_phone: String,
    pub hospital_email: String,
    pub appointment_type: String,
    pub status: AppointmentStatus,
    pub date: DateTime<Utc>,
    pub info: String,
}

/// Service for donation appointments
pub struct AppointmentService<AR, HR, UD>
where
    AR: AppointmentRepository,
    HR: HospitalRepository,
    UD: UserDirectory,
{
    appointments: Arc<AR>,
    hospitals: Arc<HR>,
    users: Arc<UD>,
}

impl<AR, HR, UD> AppointmentService<AR, HR, UD>
where
    AR: AppointmentRepository,
    HR: HospitalRepository,
    UD: UserDirectory,
{
    pub fn new(appointments: Arc<AR>, hospitals: Arc<HR>, users: Arc<UD>) -> Self {
        Self {
            appointments,
            hospitals,
            users,
        }
    }

    /// List all appointments, joined, in store-native order
    pub async fn list(&self) -> Result<Vec<AppointmentView>, AppError> {
        let rows = self.appointments.find_all().await?;

        let mut views = Vec::with_capacity(rows.len());
        for appointment in rows {
            views.push(self.project(appointment).await?);
        }
        Ok(views)
    }

    /// Get one appointment, joined; None if absent
    pub async fn get(&self, id: &AppointmentId) -> Result<Option<AppointmentView>, AppError> {
        match self.appointments.find_by_id(id).await? {
            Some(appointment) => Ok(Some(self.project(appointment).await?)),
            None => Ok(None),
        }
    }

    /// Create an appointment for the given caller
    ///
    /// `user_id` comes from the authenticated session, passed in explicitly
    /// by the handler; the request body never chooses it.
    pub async fn create(
        &self,
        user_id: UserId,
        hospital_id: HospitalId,
        appointment_type: String,
        status: AppointmentStatus,
        date: DateTime<Utc>,
        info: String,
    ) -> Result<AppointmentView, AppError> {
        self.check_hospital(&hospital_id).await?;

        let created = self
            .appointments
            .create(&NewAppointment {
                user_id,
                hospital_id,
                appointment_type,
                status,
                date,
                info,
            })
            .await?;

        self.project(created).await
    }

    /// Overwrite all fields of an existing appointment
    pub async fn update(
        &self,
        id: &AppointmentId,
        update: UpdateAppointment,
    ) -> Result<AppointmentView, AppError> {
        self.appointments
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::Domain(not_found(id)))?;

        self.check_hospital(&update.hospital_id).await?;
        self.check_user(&update.user_id).await?;

        let updated = self.appointments.update(id, &update).await?;
        self.project(updated).await
    }

    /// Update only the status field
    ///
    /// Returns NotFound for a missing id and never creates a row.
    pub async fn set_status(
        &self,
        id: &AppointmentId,
        status: AppointmentStatus,
    ) -> Result<bool, AppError> {
        self.appointments
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::Domain(not_found(id)))?;

        self.appointments.update_status(id, status).await?;
        Ok(true)
    }

    /// Delete an appointment
    pub async fn delete(&self, id: &AppointmentId) -> Result<(), AppError> {
        Ok(self.appointments.delete(id).await?)
    }

    /// Join one appointment with its user and hospital (inner join)
    async fn project(&self, appointment: Appointment) -> Result<AppointmentView, AppError> {
        let user = self
            .users
            .find_by_id(&appointment.user_id)
            .await?
            .ok_or_else(|| {
                AppError::Domain(DomainError::Integrity(format!(
                    "Appointment {} references missing user {}",
                    appointment.id, appointment.user_id
                )))
            })?;

        let hospital = self
            .hospitals
            .find_by_id(&appointment.hospital_id)
            .await?
            .ok_or_else(|| {
                AppError::Domain(DomainError::Integrity(format!(
                    "Appointment {} references missing hospital {}",
                    appointment.id, appointment.hospital_id
                )))
            })?;

        Ok(AppointmentView {
            id: appointment.id,
            user_id: user.id,
            user_full_name: user.full_name(),
            user_email: user.email,
            user_phone_number: user.phone_number,
            hospital_id: hospital.id,
            hospital_name: hospital.name,
            hospital_address: hospital.address,
            hospital_phone: hospital.phone,
            hospital_email: hospital.email,
            appointment_type: appointment.appointment_type,
            status: appointment.status,
            date: appointment.date,
            info: appointment.info,
        })
    }

    async fn check_hospital(&self, id: &HospitalId) -> Result<(), AppError> {
        if self.hospitals.find_by_id(id).await?.is_none() {
            return Err(AppError::Domain(DomainError::validation(
                "hospital_id",
                format!("Hospital {} does not exist", id),
            )));
        }
        Ok(())
    }

    async fn check_user(&self, id: &UserId) -> Result<(), AppError> {
        if self.users.find_by_id(id).await?.is_none() {
            return Err(AppError::Domain(DomainError::validation(
                "user_id",
                format!("User {} does not exist", id),
            )));
        }
        Ok(())
    }
}

fn not_found(id: &AppointmentId) -> DomainError {
    DomainError::NotFound(format!("Appointment {} not found", id))
}
