use crate::{
    data::StudentRepository,
    error::{
        DuplicateEmailSnafu, EmailSnafu, EmptyFieldSnafu, MakeQuerySnafu, RosterError, RosterResult,
    },
};
use async_trait::async_trait;
use email_address::EmailAddress;
use serde::{Deserialize, Serialize};
use snafu::{ResultExt, ensure};
use sqlx::{Pool, Postgres};
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct Student {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: EmailAddress,
}

/// A student without an identity yet. Ids are assigned by the store.
#[derive(Debug, Clone)]
pub struct NewStudent {
    pub first_name: String,
    pub last_name: String,
    pub email: EmailAddress,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct StudentRequest {
    /// Accepted for wire compatibility, never honoured.
    pub id: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl StudentRequest {
    /// Checks the request constraints and discards any caller-supplied id.
    pub fn validated(self) -> RosterResult<NewStudent> {
        ensure!(
            !self.first_name.trim().is_empty(),
            EmptyFieldSnafu { field: "first name" }
        );
        ensure!(
            !self.last_name.trim().is_empty(),
            EmptyFieldSnafu { field: "last name" }
        );
        ensure!(!self.email.trim().is_empty(), EmptyFieldSnafu { field: "email" });

        let email = EmailAddress::from_str(&self.email).context(EmailSnafu)?;

        Ok(NewStudent {
            first_name: self.first_name,
            last_name: self.last_name,
            email,
        })
    }
}

#[derive(Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StudentResponse {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: EmailAddress,
}

impl From<Student> for StudentResponse {
    fn from(student: Student) -> Self {
        Self {
            id: student.id,
            first_name: student.first_name,
            last_name: student.last_name,
            email: student.email,
        }
    }
}

#[derive(sqlx::FromRow)]
struct StudentRow {
    id: Uuid,
    first_name: String,
    last_name: String,
    email: String,
}

impl TryFrom<StudentRow> for Student {
    type Error = RosterError;

    fn try_from(row: StudentRow) -> RosterResult<Self> {
        let email = EmailAddress::from_str(&row.email).context(EmailSnafu)?;
        Ok(Self {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            email,
        })
    }
}

#[derive(Clone, Debug)]
pub struct PgStudentRepository {
    pool: Pool<Postgres>,
}

impl PgStudentRepository {
    pub const fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StudentRepository for PgStudentRepository {
    async fn save(&self, student: NewStudent) -> RosterResult<Student> {
        let result = sqlx::query_as::<_, StudentRow>(
            "INSERT INTO public.students (first_name, last_name, email) VALUES ($1, $2, $3) RETURNING id, first_name, last_name, email",
        )
        .bind(&student.first_name)
        .bind(&student.last_name)
        .bind(student.email.as_str())
        .fetch_one(&self.pool)
        .await;

        match result {
            //the unique index on email is the authoritative guard: two
            //concurrent creates can both pass the service's existence check
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
                DuplicateEmailSnafu {
                    email: student.email,
                }
                .fail()
            }
            other => other.context(MakeQuerySnafu)?.try_into(),
        }
    }

    async fn find_by_id(&self, id: Uuid) -> RosterResult<Option<Student>> {
        sqlx::query_as::<_, StudentRow>(
            "SELECT id, first_name, last_name, email FROM public.students WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context(MakeQuerySnafu)?
        .map(Student::try_from)
        .transpose()
    }

    async fn find_all(&self) -> RosterResult<Vec<Student>> {
        sqlx::query_as::<_, StudentRow>(
            "SELECT id, first_name, last_name, email FROM public.students",
        )
        .fetch_all(&self.pool)
        .await
        .context(MakeQuerySnafu)?
        .into_iter()
        .map(Student::try_from)
        .collect()
    }

    async fn delete_by_id(&self, id: Uuid) -> RosterResult<()> {
        sqlx::query("DELETE FROM public.students WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .context(MakeQuerySnafu)?;
        Ok(())
    }

    async fn exists_by_email(&self, email: &EmailAddress) -> RosterResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM public.students WHERE email = $1)",
        )
        .bind(email.as_str())
        .fetch_one(&self.pool)
        .await
        .context(MakeQuerySnafu)
    }

    async fn find_by_email(&self, email: &EmailAddress) -> RosterResult<Option<Student>> {
        sqlx::query_as::<_, StudentRow>(
            "SELECT id, first_name, last_name, email FROM public.students WHERE email = $1",
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .context(MakeQuerySnafu)?
        .map(Student::try_from)
        .transpose()
    }
}
