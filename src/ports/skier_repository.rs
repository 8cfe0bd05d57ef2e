//! Skier repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, SkierId};
use crate::domain::skier::Skier;

/// Repository port for Skier persistence.
#[async_trait]
pub trait SkierRepository: Send + Sync {
    /// Insert or replace a skier by id.
    async fn save(&self, skier: &Skier) -> Result<(), DomainError>;

    /// Find a skier by id. Returns `None` if not found.
    async fn find_by_id(&self, id: &SkierId) -> Result<Option<Skier>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skier_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn SkierRepository) {}
    }
}
