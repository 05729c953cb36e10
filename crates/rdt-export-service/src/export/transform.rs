//! Row transformer: one joined participant record in, one positional output
//! row out.

use chrono::{Datelike, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

use rdt_export_core::constants::{DATE_FORMAT, DATETIME_FORMAT};
use rdt_export_db::model::event::Event;
use rdt_export_db::model::participant::ParticipantRecord;

use super::cell::CellValue;
use super::columns::COLUMN_COUNT;

pub type ExportRow = [CellValue; COLUMN_COUNT];

/// ## Summary
/// Completed years between `birth` and `today`.
///
/// The birthday itself counts as completed.
#[must_use]
pub fn calculate_age(birth: NaiveDate, today: NaiveDate) -> i32 {
    let before_birthday = (today.month(), today.day()) < (birth.month(), birth.day());
    today.year() - birth.year() - i32::from(before_birthday)
}

/// ## Summary
/// Reads a stored wall-clock time as UTC and formats it in `tz`.
#[must_use]
pub fn localize(utc: NaiveDateTime, tz: Tz) -> String {
    Utc.from_utc_datetime(&utc)
        .with_timezone(&tz)
        .format(DATETIME_FORMAT)
        .to_string()
}

/// ## Summary
/// Today's date as seen in `tz`.
#[must_use]
pub fn today_in(tz: Tz) -> NaiveDate {
    Utc::now().with_timezone(&tz).date_naive()
}

/// Applies the per-column derivations with a fixed zone and reference date.
#[derive(Debug, Clone, Copy)]
pub struct RowTransformer {
    tz: Tz,
    today: NaiveDate,
}

impl RowTransformer {
    #[must_use]
    pub const fn new(tz: Tz, today: NaiveDate) -> Self {
        Self { tz, today }
    }

    fn timestamp(&self, value: Option<NaiveDateTime>) -> CellValue {
        value.map_or(CellValue::Empty, |ts| CellValue::Text(localize(ts, self.tz)))
    }

    /// ## Summary
    /// Builds the output row for `record`, column for column in header order.
    #[must_use]
    pub fn transform(&self, event: &Event, record: &ParticipantRecord) -> ExportRow {
        let inv = &record.invitation;
        let app = &record.applicant;

        [
            CellValue::text(inv.registration_code.as_deref()),
            CellValue::unsigned(inv.rdt_event_id),
            inv.rdt_event_schedule_id
                .map_or(CellValue::Empty, CellValue::unsigned),
            CellValue::upper(Some(&event.event_name)),
            CellValue::upper(event.host_name.as_deref()),
            CellValue::text(app.nik.as_deref()),
            CellValue::upper(Some(&app.name)),
            CellValue::text(app.phone_number.as_deref()),
            CellValue::text(app.gender.as_deref()),
            app.birth_date.map_or(CellValue::Empty, |d| {
                CellValue::Text(d.format(DATE_FORMAT).to_string())
            }),
            app.birth_date.map_or(CellValue::Empty, |d| {
                CellValue::Integer(i64::from(calculate_age(d, self.today)))
            }),
            CellValue::upper(app.address.as_deref().filter(|s| !s.is_empty())),
            CellValue::text(Some(&record.city_name)),
            CellValue::text(Some(&app.city_code)),
            CellValue::text(Some(&record.district_name)),
            CellValue::text(Some(&app.district_code)),
            CellValue::text(Some(&record.village_name)),
            CellValue::text(Some(&app.village_code)),
            app.is_pns.map(i64::from).into(),
            CellValue::text(app.occupation_type.as_deref()),
            CellValue::upper(app.occupation_name.as_deref()),
            CellValue::upper(app.workplace_name.as_deref()),
            CellValue::text(app.symptoms.as_deref()),
            CellValue::text(app.symptoms_notes.as_deref()),
            CellValue::text(app.symptoms_interaction.as_deref()),
            CellValue::text(app.symptoms_activity.as_deref()),
            CellValue::text(app.person_status.as_deref()),
            self.timestamp(app.created_at),
            self.timestamp(inv.notified_at),
            CellValue::upper(inv.attend_location.as_deref().filter(|s| !s.is_empty())),
            self.timestamp(inv.attended_at),
            CellValue::text(inv.lab_code_sample.as_deref()),
            self.timestamp(inv.result_at),
            CellValue::text(inv.lab_result_type.as_deref()),
            self.timestamp(inv.notified_result_at),
        ]
    }
}
