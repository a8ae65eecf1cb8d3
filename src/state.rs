use crate::{
    config::RuntimeConfiguration,
    data::{StudentRepository, student::PgStudentRepository},
    error::{MigrateSnafu, OpenDatabaseSnafu, RosterResult},
    service::StudentService,
};
use snafu::ResultExt;
use std::sync::Arc;

#[derive(Clone)]
pub struct RosterState {
    service: StudentService,
}

impl RosterState {
    pub async fn new(config: &RuntimeConfiguration) -> RosterResult<Self> {
        let pool = config
            .pool_options()
            .connect(&config.db_config().get_db_path())
            .await
            .context(OpenDatabaseSnafu)?;

        sqlx::migrate!().run(&pool).await.context(MigrateSnafu)?;

        Ok(Self::with_repository(Arc::new(PgStudentRepository::new(
            pool,
        ))))
    }

    pub fn with_repository(repository: Arc<dyn StudentRepository>) -> Self {
        Self {
            service: StudentService::new(repository),
        }
    }

    pub fn service(&self) -> &StudentService {
        &self.service
    }
}
