//! PostgreSQL adapter for AppointmentRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};

use crate::domain::entities::{
    Appointment, AppointmentId, AppointmentStatus, HospitalId, NewAppointment, UpdateAppointment,
    UserId,
};
use crate::domain::ports::AppointmentRepository;
use crate::entity::appointments;
use crate::error::DomainError;

/// PostgreSQL implementation of AppointmentRepository
pub struct PostgresAppointmentRepository {
    db: DatabaseConnection,
}

impl PostgresAppointmentRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AppointmentRepository for PostgresAppointmentRepository {
    async fn find_by_id(&self, id: &AppointmentId) -> Result<Option<Appointment>, DomainError> {
        let result = appointments::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        result.map(Appointment::try_from).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Appointment>, DomainError> {
        let results = appointments::Entity::find()
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        results.into_iter().map(Appointment::try_from).collect()
    }

    async fn create(&self, appointment: &NewAppointment) -> Result<Appointment, DomainError> {
        let model = appointments::ActiveModel {
            user_id: Set(appointment.user_id.0),
            hospital_id: Set(appointment.hospital_id.0),
            appointment_type: Set(appointment.appointment_type.clone()),
            status: Set(appointment.status.to_string()),
            date: Set(appointment.date.fixed_offset()),
            info: Set(appointment.info.clone()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        result.try_into()
    }

    async fn update(
        &self,
        id: &AppointmentId,
        appointment: &UpdateAppointment,
    ) -> Result<Appointment, DomainError> {
        let result = appointments::ActiveModel {
            id: Set(id.0),
            user_id: Set(appointment.user_id.0),
            hospital_id: Set(appointment.hospital_id.0),
            appointment_type: Set(appointment.appointment_type.clone()),
            status: Set(appointment.status.to_string()),
            date: Set(appointment.date.fixed_offset()),
            info: Set(appointment.info.clone()),
        }
        .update(&self.db)
        .await
        .map_err(|e| DomainError::Database(e.to_string()))?;

        result.try_into()
    }

    async fn update_status(
        &self,
        id: &AppointmentId,
        status: AppointmentStatus,
    ) -> Result<(), DomainError> {
        appointments::ActiveModel {
            id: Set(id.0),
            status: Set(status.to_string()),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(())
    }

    async fn delete(&self, id: &AppointmentId) -> Result<(), DomainError> {
        let result = appointments::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        if result.rows_affected == 0 {
            Err(DomainError::NotFound(format!(
                "Appointment {} not found",
                id
            )))
        } else {
            Ok(())
        }
    }
}

/// Convert SeaORM model to domain entity
///
/// Fallible: a stored status outside the closed enum is corrupt data and
/// surfaces as an integrity error, never a silent default.
impl TryFrom<appointments::Model> for Appointment {
    type Error = DomainError;

    fn try_from(model: appointments::Model) -> Result<Self, Self::Error> {
        let status = model.status.parse().map_err(|_| {
            DomainError::Integrity(format!(
                "Appointment {} has unknown status '{}'",
                model.id, model.status
            ))
        })?;

        Ok(Appointment {
            id: AppointmentId(model.id),
            user_id: UserId(model.user_id),
            hospital_id: HospitalId(model.hospital_id),
            appointment_type: model.appointment_type,
            status,
            date: model.date.with_timezone(&Utc),
            info: model.info,
        })
    }
}
