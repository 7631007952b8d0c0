use chrono::NaiveDate;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// History section header, e.g. "Monday 2026-08-24".
pub fn format_date_header(d: &NaiveDate) -> String {
    d.format("%A %Y-%m-%d").to_string()
}
