use crate::{
    data::{
        StudentRepository,
        student::{StudentRequest, StudentResponse},
    },
    error::{DuplicateEmailSnafu, MissingStudentSnafu, RosterResult},
};
use snafu::{OptionExt, ensure};
use std::sync::Arc;
use uuid::Uuid;

/// Holds the one business rule (email uniqueness) and maps between the
/// request/response projections and the stored entity.
#[derive(Clone)]
pub struct StudentService {
    repository: Arc<dyn StudentRepository>,
}

impl StudentService {
    pub fn new(repository: Arc<dyn StudentRepository>) -> Self {
        Self { repository }
    }

    pub async fn create_student(&self, request: StudentRequest) -> RosterResult<StudentResponse> {
        let new_student = request.validated()?;

        //not atomic with the insert: the unique index backs this up
        ensure!(
            !self.repository.exists_by_email(&new_student.email).await?,
            DuplicateEmailSnafu {
                email: new_student.email
            }
        );

        let student = self.repository.save(new_student).await?;
        Ok(student.into())
    }

    pub async fn get_student(&self, id: Uuid) -> RosterResult<StudentResponse> {
        self.repository
            .find_by_id(id)
            .await?
            .map(StudentResponse::from)
            .context(MissingStudentSnafu { id })
    }

    pub async fn get_all_students(&self) -> RosterResult<Vec<StudentResponse>> {
        Ok(self
            .repository
            .find_all()
            .await?
            .into_iter()
            .map(StudentResponse::from)
            .collect())
    }

    pub async fn delete_student(&self, id: Uuid) -> RosterResult<()> {
        self.repository.delete_by_id(id).await
    }
}
