/// Route component constants shared across crates
pub const EXPORT_ROUTE_COMPONENT: &str = "export";
pub const EXPORT_ROUTE_PREFIX: &str = const_str::concat!("/", EXPORT_ROUTE_COMPONENT);

/// Query parameter carrying the event identifier on the export route.
pub const EVENT_ID_QUERY_PARAM: &str = "rdt_event_id";

pub const DEFAULT_EXPORT_TIMEZONE: &str = "Asia/Jakarta";
pub const DEFAULT_EXPORT_FILENAME: &str = "export";
pub const DEFAULT_EXPORT_SHEET: &str = "Export";

pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Excel sheet name maximum length.
pub const EXCEL_SHEET_NAME_MAX_LEN: usize = 31;
/// Characters not allowed in sheet names.
pub const EXCEL_SHEET_NAME_ILLEGAL: [&str; 7] = ["*", ":", "?", "/", "\\", "[", "]"];

/// Display format for localized timestamps.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
/// Display format for birth dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";
