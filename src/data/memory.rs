use crate::{
    data::{
        StudentRepository,
        student::{NewStudent, Student},
    },
    error::{DuplicateEmailSnafu, RosterResult},
};
use async_trait::async_trait;
use email_address::EmailAddress;
use std::sync::Mutex;
use uuid::Uuid;

/// Test stand-in for the Postgres store. Insertion order doubles as the
/// store's natural retrieval order, and the email uniqueness check mirrors
/// the unique index on the real table.
#[derive(Debug, Default)]
pub struct MemoryStudentRepository {
    students: Mutex<Vec<Student>>,
}

#[async_trait]
impl StudentRepository for MemoryStudentRepository {
    async fn save(&self, student: NewStudent) -> RosterResult<Student> {
        let mut students = self.students.lock().unwrap();
        if students.iter().any(|s| s.email == student.email) {
            return DuplicateEmailSnafu {
                email: student.email,
            }
            .fail();
        }

        let student = Student {
            id: Uuid::new_v4(),
            first_name: student.first_name,
            last_name: student.last_name,
            email: student.email,
        };
        students.push(student.clone());
        Ok(student)
    }

    async fn find_by_id(&self, id: Uuid) -> RosterResult<Option<Student>> {
        let students = self.students.lock().unwrap();
        Ok(students.iter().find(|s| s.id == id).cloned())
    }

    async fn find_all(&self) -> RosterResult<Vec<Student>> {
        Ok(self.students.lock().unwrap().clone())
    }

    async fn delete_by_id(&self, id: Uuid) -> RosterResult<()> {
        self.students.lock().unwrap().retain(|s| s.id != id);
        Ok(())
    }

    async fn exists_by_email(&self, email: &EmailAddress) -> RosterResult<bool> {
        let students = self.students.lock().unwrap();
        Ok(students.iter().any(|s| &s.email == email))
    }

    async fn find_by_email(&self, email: &EmailAddress) -> RosterResult<Option<Student>> {
        let students = self.students.lock().unwrap();
        Ok(students.iter().find(|s| &s.email == email).cloned())
    }
}
