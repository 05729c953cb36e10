use chrono::{NaiveDate, NaiveDateTime};
use diesel::{mysql::Mysql, prelude::*};

use crate::db::schema;

/// Invitation of one applicant to one event.
///
/// All `*_at` columns hold UTC wall-clock time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Queryable, Selectable, Identifiable)]
#[diesel(table_name = schema::rdt_invitations)]
#[diesel(check_for_backend(Mysql))]
pub struct Invitation {
    pub id: u64,
    pub rdt_event_id: u64,
    pub rdt_event_schedule_id: Option<u64>,
    pub rdt_applicant_id: u64,
    pub registration_code: Option<String>,
    pub attend_location: Option<String>,
    pub attended_at: Option<NaiveDateTime>,
    pub lab_code_sample: Option<String>,
    pub lab_result_type: Option<String>,
    pub result_at: Option<NaiveDateTime>,
    pub notified_at: Option<NaiveDateTime>,
    pub notified_result_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Queryable, Selectable, Identifiable)]
#[diesel(table_name = schema::rdt_applicants)]
#[diesel(check_for_backend(Mysql))]
pub struct Applicant {
    pub id: u64,
    pub nik: Option<String>,
    pub name: String,
    pub phone_number: Option<String>,
    pub gender: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub address: Option<String>,
    pub city_code: String,
    pub district_code: String,
    pub village_code: String,
    pub is_pns: Option<i8>,
    pub occupation_type: Option<String>,
    pub occupation_name: Option<String>,
    pub workplace_name: Option<String>,
    pub symptoms: Option<String>,
    pub symptoms_notes: Option<String>,
    pub symptoms_interaction: Option<String>,
    pub symptoms_activity: Option<String>,
    pub person_status: Option<String>,
    /// Registration time.
    pub created_at: Option<NaiveDateTime>,
}

/// One row of the invitation → applicant → area (×3) join.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParticipantRecord {
    pub invitation: Invitation,
    pub applicant: Applicant,
    pub city_name: String,
    pub district_name: String,
    pub village_name: String,
}

impl From<(Invitation, Applicant, String, String, String)> for ParticipantRecord {
    fn from(
        (invitation, applicant, city_name, district_name, village_name): (
            Invitation,
            Applicant,
            String,
            String,
            String,
        ),
    ) -> Self {
        Self {
            invitation,
            applicant,
            city_name,
            district_name,
            village_name,
        }
    }
}
