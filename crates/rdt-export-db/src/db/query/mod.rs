pub mod event;
pub mod participant;

use diesel_async::RunQueryDsl;

use crate::db::connection::DbConnection;
use crate::error::DbError;

/// ## Summary
/// Round-trips a trivial statement to prove the connection is usable.
///
/// ## Errors
/// Returns an error if the server cannot be reached.
pub async fn ping(conn: &mut DbConnection<'_>) -> diesel::QueryResult<()> {
    diesel::sql_query("SELECT 1").execute(conn).await?;
    Ok(())
}

/// ## Summary
/// Turns a failed statement into a [`DbError`], pinging the same connection
/// when the error kind alone cannot tell a dropped link from a bad statement.
pub async fn diagnose(conn: &mut DbConnection<'_>, err: diesel::result::Error) -> DbError {
    if !DbError::may_be_link_failure(&err) {
        return DbError::DatabaseError(err);
    }

    let link_alive = ping(conn).await.is_ok();
    if !link_alive {
        tracing::warn!(error = %err, "Connection dropped during statement");
    }

    DbError::from_query(err, link_alive)
}
