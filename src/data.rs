use crate::error::RosterResult;
use async_trait::async_trait;
use email_address::EmailAddress;
use uuid::Uuid;

use self::student::{NewStudent, Student};

#[cfg(test)]
pub mod memory;
pub mod student;

/// The storage contract the service layer depends on. The store assigns
/// the id on `save`; `delete_by_id` is a no-op for an absent id.
#[async_trait]
pub trait StudentRepository: Send + Sync {
    async fn save(&self, student: NewStudent) -> RosterResult<Student>;
    async fn find_by_id(&self, id: Uuid) -> RosterResult<Option<Student>>;
    async fn find_all(&self) -> RosterResult<Vec<Student>>;
    async fn delete_by_id(&self, id: Uuid) -> RosterResult<()>;
    async fn exists_by_email(&self, email: &EmailAddress) -> RosterResult<bool>;
    async fn find_by_email(&self, email: &EmailAddress) -> RosterResult<Option<Student>>;
}
