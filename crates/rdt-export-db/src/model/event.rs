use diesel::{mysql::Mysql, prelude::*};

use crate::db::schema;

/// A screening event; the parent of every exported invitation.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable, Identifiable)]
#[diesel(table_name = schema::rdt_events)]
#[diesel(check_for_backend(Mysql))]
pub struct Event {
    pub id: u64,
    pub event_name: String,
    pub host_name: Option<String>,
}
