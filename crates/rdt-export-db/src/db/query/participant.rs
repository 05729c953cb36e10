//! Query composition for the participant export join.
//!
//! Each invitation is joined to its applicant and to `areas` three times, once
//! per administrative level. Inner joins drop invitations whose applicant or
//! area codes do not resolve.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::connection::DbConnection;
use crate::db::schema::{areas, rdt_applicants, rdt_invitations};
use crate::model::participant::{Applicant, Invitation, ParticipantRecord};

diesel::alias!(
    areas as city_area: CityArea,
    areas as district_area: DistrictArea,
    areas as village_area: VillageArea,
);

/// Invitations of one event joined to their applicant and the three area
/// levels, in export order.
macro_rules! by_event {
    ($event_id:expr) => {
        rdt_invitations::table
            .inner_join(
                rdt_applicants::table.on(rdt_invitations::rdt_applicant_id.eq(rdt_applicants::id)),
            )
            .inner_join(
                city_area.on(rdt_applicants::city_code.eq(city_area.field(areas::code_kemendagri))),
            )
            .inner_join(
                district_area
                    .on(rdt_applicants::district_code.eq(district_area.field(areas::code_kemendagri))),
            )
            .inner_join(
                village_area
                    .on(rdt_applicants::village_code.eq(village_area.field(areas::code_kemendagri))),
            )
            .filter(rdt_invitations::rdt_event_id.eq($event_id))
            .order((
                rdt_invitations::registration_code.asc(),
                rdt_invitations::id.asc(),
            ))
            .select((
                Invitation::as_select(),
                Applicant::as_select(),
                city_area.field(areas::name),
                district_area.field(areas::name),
                village_area.field(areas::name),
            ))
    };
}

/// ## Summary
/// Loads every joined participant row for an event, ordered by registration
/// code and then invitation id.
///
/// ## Errors
/// Returns an error if the database operation fails.
pub async fn list_by_event(
    conn: &mut DbConnection<'_>,
    event_id: u64,
) -> QueryResult<Vec<ParticipantRecord>> {
    let rows = by_event!(event_id)
        .load::<(Invitation, Applicant, String, String, String)>(conn)
        .await?;

    Ok(rows.into_iter().map(ParticipantRecord::from).collect())
}

#[cfg(test)]
mod tests {
    use diesel::mysql::Mysql;

    use super::*;

    fn by_event_sql(event_id: u64) -> String {
        diesel::debug_query::<Mysql, _>(&by_event!(event_id)).to_string()
    }

    #[test]
    fn test_joins_each_area_level_once() {
        let sql = by_event_sql(42);

        assert_eq!(sql.matches("INNER JOIN `areas` AS").count(), 3, "{sql}");
        for (alias, code) in [
            ("city_area", "city_code"),
            ("district_area", "district_code"),
            ("village_area", "village_code"),
        ] {
            assert!(
                sql.contains(&format!(
                    "`rdt_applicants`.`{code}` = `{alias}`.`code_kemendagri`"
                )),
                "missing {alias} join in {sql}"
            );
        }
        assert!(
            sql.contains("`rdt_invitations`.`rdt_applicant_id` = `rdt_applicants`.`id`"),
            "{sql}"
        );
    }

    #[test]
    fn test_filters_by_event_with_bound_id() {
        let sql = by_event_sql(42);

        assert!(sql.contains("WHERE"), "{sql}");
        assert!(sql.contains("`rdt_invitations`.`rdt_event_id` = ?"), "{sql}");
        assert!(sql.ends_with("-- binds: [42]"), "{sql}");
    }

    #[test]
    fn test_orders_by_registration_code_then_id() {
        let sql = by_event_sql(42);

        assert!(
            sql.contains(
                "ORDER BY `rdt_invitations`.`registration_code` ASC, `rdt_invitations`.`id` ASC"
            ),
            "{sql}"
        );
    }

    #[test]
    fn test_selects_area_names_per_level() {
        let sql = by_event_sql(42);

        for alias in ["city_area", "district_area", "village_area"] {
            assert!(sql.contains(&format!("`{alias}`.`name`")), "{sql}");
        }
    }
}
