//! The copyright line is computed once, when the site configuration is built, and never
//! refreshed afterwards.

pub fn current_year() -> i32 {
    time::OffsetDateTime::now_utc().year()
}

pub fn copyright_notice(year: i32, holder: &str) -> String {
    format!("Copyright © {year} {holder}")
}
