//! Shared application state.

use marquee_database::{PgConnection, PgPool};
use marquee_error::{DatabaseError, DatabaseErrorKind, MarqueeResult};

/// State handed to every handler: the connection pool and nothing else.
///
/// Handlers are stateless; each request checks one connection out of the
/// pool for the duration of its database work and the checkout drops on
/// every exit path.
#[derive(Clone)]
pub struct AppState {
    pool: PgPool,
}

impl AppState {
    /// Creates new application state around a connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Run a database closure on the blocking thread pool with a
    /// request-scoped connection checkout.
    ///
    /// # Errors
    ///
    /// Surfaces pool exhaustion and join failures as database errors, and
    /// passes the closure's own error through.
    pub async fn blocking<T, F>(&self, f: F) -> MarqueeResult<T>
    where
        F: FnOnce(&mut PgConnection) -> Result<T, DatabaseError> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        let result = tokio::task::spawn_blocking(move || {
            let mut conn = pool
                .get()
                .map_err(|e| DatabaseError::new(DatabaseErrorKind::Connection(e.to_string())))?;
            f(&mut conn)
        })
        .await
        .map_err(|e| DatabaseError::new(DatabaseErrorKind::Query(e.to_string())))?;

        Ok(result?)
    }
}
