// Tables owned by the registration application. This service only reads them.

diesel::table! {
    areas (code_kemendagri) {
        code_kemendagri -> Varchar,
        name -> Varchar,
    }
}

diesel::table! {
    rdt_applicants (id) {
        id -> Unsigned<Bigint>,
        nik -> Nullable<Varchar>,
        name -> Varchar,
        phone_number -> Nullable<Varchar>,
        gender -> Nullable<Varchar>,
        birth_date -> Nullable<Date>,
        address -> Nullable<Varchar>,
        city_code -> Varchar,
        district_code -> Varchar,
        village_code -> Varchar,
        is_pns -> Nullable<Tinyint>,
        occupation_type -> Nullable<Varchar>,
        occupation_name -> Nullable<Varchar>,
        workplace_name -> Nullable<Varchar>,
        symptoms -> Nullable<Text>,
        symptoms_notes -> Nullable<Text>,
        symptoms_interaction -> Nullable<Text>,
        symptoms_activity -> Nullable<Text>,
        person_status -> Nullable<Varchar>,
        created_at -> Nullable<Datetime>,
    }
}

diesel::table! {
    rdt_events (id) {
        id -> Unsigned<Bigint>,
        event_name -> Varchar,
        host_name -> Nullable<Varchar>,
    }
}

diesel::table! {
    rdt_invitations (id) {
        id -> Unsigned<Bigint>,
        rdt_event_id -> Unsigned<Bigint>,
        rdt_event_schedule_id -> Nullable<Unsigned<Bigint>>,
        rdt_applicant_id -> Unsigned<Bigint>,
        registration_code -> Nullable<Varchar>,
        attend_location -> Nullable<Varchar>,
        attended_at -> Nullable<Datetime>,
        lab_code_sample -> Nullable<Varchar>,
        lab_result_type -> Nullable<Varchar>,
        result_at -> Nullable<Datetime>,
        notified_at -> Nullable<Datetime>,
        notified_result_at -> Nullable<Datetime>,
    }
}

diesel::allow_tables_to_appear_in_same_query!(areas, rdt_applicants, rdt_events, rdt_invitations);
