//! Sample rows shaped like production data.

use chrono::{NaiveDate, NaiveDateTime};

use rdt_export_db::model::event::Event;
use rdt_export_db::model::participant::{Applicant, Invitation, ParticipantRecord};

pub const EVENT_ID: u64 = 42;

fn datetime(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").ok()
}

#[must_use]
pub fn event() -> Event {
    Event {
        id: EVENT_ID,
        event_name: "Tes Masif Kota Bandung".to_string(),
        host_name: Some("Dinkes Kota Bandung".to_string()),
    }
}

/// A fully populated participant of [`EVENT_ID`].
#[must_use]
pub fn participant(registration_code: &str) -> ParticipantRecord {
    ParticipantRecord {
        invitation: Invitation {
            id: 1001,
            rdt_event_id: EVENT_ID,
            rdt_event_schedule_id: Some(7),
            rdt_applicant_id: 501,
            registration_code: Some(registration_code.to_string()),
            attend_location: Some("Puskesmas Garuda".to_string()),
            attended_at: datetime("2020-06-01 02:15:00"),
            lab_code_sample: Some("L-0001".to_string()),
            lab_result_type: Some("NEGATIVE".to_string()),
            result_at: datetime("2020-06-02 10:00:00"),
            notified_at: datetime("2020-05-30 23:30:00"),
            notified_result_at: datetime("2020-06-02 11:45:30"),
        },
        applicant: Applicant {
            id: 501,
            nik: Some("3273010101000001".to_string()),
            name: "Siti Aminah".to_string(),
            phone_number: Some("081234567890".to_string()),
            gender: Some("F".to_string()),
            birth_date: NaiveDate::from_ymd_opt(2000, 5, 20),
            address: Some("Jl. Merdeka No. 1".to_string()),
            city_code: "32.73".to_string(),
            district_code: "32.73.01".to_string(),
            village_code: "32.73.01.1001".to_string(),
            is_pns: Some(0),
            occupation_type: Some("3".to_string()),
            occupation_name: Some("Perawat".to_string()),
            workplace_name: Some("Rs Hasan Sadikin".to_string()),
            symptoms: Some("[\"batuk\"]".to_string()),
            symptoms_notes: Some("ringan".to_string()),
            symptoms_interaction: Some("1".to_string()),
            symptoms_activity: Some("[\"pasar\"]".to_string()),
            person_status: Some("ODP".to_string()),
            created_at: datetime("2020-05-28 18:00:00"),
        },
        city_name: "KOTA BANDUNG".to_string(),
        district_name: "SUKASARI".to_string(),
        village_name: "GEGERKALONG".to_string(),
    }
}

/// A participant who has not attended, been tested, or been notified yet.
#[must_use]
pub fn pending_participant(registration_code: &str) -> ParticipantRecord {
    let mut record = participant(registration_code);
    record.invitation.attended_at = None;
    record.invitation.result_at = None;
    record.invitation.notified_at = None;
    record.invitation.notified_result_at = None;
    record
}
