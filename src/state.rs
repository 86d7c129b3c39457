use sqlx::PgPool;
use std::sync::Arc;

use crate::mail::{LogMailer, WelcomeMailer};

/// Shared application state handed to every handler.
///
/// Repositories and the validator are constructed per request from the pool
/// handle; there are no process-wide database singletons.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub mailer: Arc<dyn WelcomeMailer>,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            mailer: Arc::new(LogMailer),
        }
    }

    pub fn with_mailer(pool: PgPool, mailer: Arc<dyn WelcomeMailer>) -> Self {
        Self { pool, mailer }
    }
}
