//! AssignRegistrationToSkierHandler - create a registration draft attached
//! to a skier.
//!
//! First half of incremental registration construction: the record gets a
//! week and a skier, and waits for a course. Drafts occupy no capacity
//! slot and cannot violate the idempotency invariant, so no admission
//! checks run here.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, RegistrationId, SkierId};
use crate::domain::registration::Registration;
use crate::ports::{RegistrationRepository, SkierRepository};

/// Command to create a registration draft for a skier.
#[derive(Debug, Clone)]
pub struct AssignRegistrationToSkierCommand {
    pub skier_id: SkierId,
    pub week: u32,
}

/// Handler creating skier-attached registration drafts.
pub struct AssignRegistrationToSkierHandler {
    skiers: Arc<dyn SkierRepository>,
    registrations: Arc<dyn RegistrationRepository>,
}

impl AssignRegistrationToSkierHandler {
    pub fn new(
        skiers: Arc<dyn SkierRepository>,
        registrations: Arc<dyn RegistrationRepository>,
    ) -> Self {
        Self {
            skiers,
            registrations,
        }
    }

    pub async fn handle(
        &self,
        cmd: AssignRegistrationToSkierCommand,
    ) -> Result<Registration, DomainError> {
        if self.skiers.find_by_id(&cmd.skier_id).await?.is_none() {
            return Err(DomainError::new(
                ErrorCode::SkierNotFound,
                format!("Skier {} not found", cmd.skier_id),
            ));
        }

        let mut registration = Registration::draft(RegistrationId::new(), cmd.week);
        registration.attach_skier(cmd.skier_id);
        self.registrations.save(&registration).await?;

        tracing::debug!(
            registration = %registration.id,
            skier = %cmd.skier_id,
            week = cmd.week,
            "registration draft created for skier"
        );
        Ok(registration)
    }
}
