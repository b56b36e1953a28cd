use chrono::{DateTime, FixedOffset, TimeZone};

mod booking;
mod reminder;

/// Wall-clock time in Asia/Kolkata as an offset timestamp.
///
/// 2030-01-07 is a Monday.
fn civil(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<FixedOffset> {
    chrono_tz::Asia::Kolkata
        .with_ymd_and_hms(year, month, day, hour, minute, 0)
        .unwrap()
        .fixed_offset()
}

fn monday(hour: u32, minute: u32) -> DateTime<FixedOffset> {
    civil(2030, 1, 7, hour, minute)
}
