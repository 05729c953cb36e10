//! Lookup of the parent event.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::connection::DbConnection;
use crate::db::schema::rdt_events;
use crate::model::event::Event;

/// ## Summary
/// Finds an event by identifier.
///
/// ## Errors
/// Returns an error if the database operation fails. An unknown identifier is
/// `Ok(None)`.
pub async fn find_by_id(conn: &mut DbConnection<'_>, event_id: u64) -> QueryResult<Option<Event>> {
    rdt_events::table
        .find(event_id)
        .select(Event::as_select())
        .first(conn)
        .await
        .optional()
}
