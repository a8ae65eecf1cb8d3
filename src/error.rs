use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use email_address::EmailAddress;
use serde::Serialize;
use snafu::Snafu;
use std::num::ParseIntError;
use uuid::Uuid;

pub type RosterResult<T> = Result<T, RosterError>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum RosterError {
    #[snafu(display("Error opening database"))]
    OpenDatabase { source: sqlx::Error },
    #[snafu(display("Error making SQL query"))]
    MakeQuery { source: sqlx::Error },
    #[snafu(display("Error migrating DB schema"))]
    Migrate { source: sqlx::migrate::MigrateError },
    #[snafu(display("Unable to retrieve env var `{}`", name))]
    BadEnvVar {
        source: dotenvy::Error,
        name: &'static str,
    },
    #[snafu(display("Unable to parse IP port"))]
    ParsePort { source: ParseIntError },
    #[snafu(display("Unable to parse max connection count"))]
    ParseMaxConnections { source: ParseIntError },
    #[snafu(display("Unable to parse uuid {:?}", original))]
    ParseUuid {
        source: uuid::Error,
        original: String,
    },
    #[snafu(display("Student with id {} not found", id))]
    MissingStudent { id: Uuid },
    #[snafu(display("Student with email {} already exists", email))]
    DuplicateEmail { email: EmailAddress },
    #[snafu(display("Student {} is required", field))]
    EmptyField { field: &'static str },
    #[snafu(display("Student email is invalid"))]
    Email { source: email_address::Error },
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for RosterError {
    fn into_response(self) -> Response {
        const ISE: StatusCode = StatusCode::INTERNAL_SERVER_ERROR; //internal server error
        const NF: StatusCode = StatusCode::NOT_FOUND; //not found
        const BI: StatusCode = StatusCode::BAD_REQUEST; //bad input

        let status_code = match &self {
            Self::OpenDatabase { .. } => ISE,
            Self::Migrate { .. } => ISE,
            Self::MakeQuery { source } => match source {
                sqlx::Error::RowNotFound => NF,
                _ => ISE,
            },
            Self::BadEnvVar { .. } => ISE,
            Self::ParsePort { .. } | Self::ParseMaxConnections { .. } => ISE,
            Self::ParseUuid { .. } => BI,
            Self::MissingStudent { .. } => NF,
            Self::DuplicateEmail { .. } => BI,
            Self::EmptyField { .. } => BI,
            Self::Email { .. } => BI,
        };

        error!(?self, "Error!");
        (
            status_code,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
