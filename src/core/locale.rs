//! Fixed Indonesian (id-ID) number and date conventions.

use time::{Date, Month, OffsetDateTime, Weekday};

const CURRENCY_PREFIX: &str = "Rp";

/// Formats an amount as Rupiah with no decimals, e.g. `Rp 1.500.000`.
pub fn format_rupiah(amount: f64) -> String {
    if !amount.is_finite() {
        return format!("{} {}", CURRENCY_PREFIX, amount);
    }
    let rounded = amount.round() as i128;
    let digits = group_thousands(rounded.unsigned_abs());
    if rounded < 0 {
        format!("-{} {}", CURRENCY_PREFIX, digits)
    } else {
        format!("{} {}", CURRENCY_PREFIX, digits)
    }
}

/// Plain number with `.` as the thousands separator and up to two decimals.
pub fn format_quantity(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() {
        let whole = value as i128;
        let digits = group_thousands(whole.unsigned_abs());
        return if whole < 0 { format!("-{digits}") } else { digits };
    }
    format!("{:.2}", value).replace('.', ",")
}

fn group_thousands(mut value: u128) -> String {
    let mut groups = Vec::new();
    loop {
        let group = value % 1000;
        value /= 1000;
        if value == 0 {
            groups.push(group.to_string());
            break;
        }
        groups.push(format!("{:03}", group));
    }
    groups.reverse();
    groups.join(".")
}

/// Today's date in the local offset, UTC when the offset is unknown.
pub fn today() -> Date {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date()
}

/// Long form date, e.g. `Sabtu, 17 Oktober 2026`.
pub fn format_long_date(date: Date) -> String {
    format!(
        "{}, {} {} {}",
        weekday_name(date.weekday()),
        date.day(),
        month_name(date.month()),
        date.year()
    )
}

/// Short numeric date used in tables, e.g. `05/01/2026`.
pub fn format_short_date(date: Date) -> String {
    format!(
        "{:02}/{:02}/{}",
        date.day(),
        u8::from(date.month()),
        date.year()
    )
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Monday => "Senin",
        Weekday::Tuesday => "Selasa",
        Weekday::Wednesday => "Rabu",
        Weekday::Thursday => "Kamis",
        Weekday::Friday => "Jumat",
        Weekday::Saturday => "Sabtu",
        Weekday::Sunday => "Minggu",
    }
}

fn month_name(month: Month) -> &'static str {
    match month {
        Month::January => "Januari",
        Month::February => "Februari",
        Month::March => "Maret",
        Month::April => "April",
        Month::May => "Mei",
        Month::June => "Juni",
        Month::July => "Juli",
        Month::August => "Agustus",
        Month::September => "September",
        Month::October => "Oktober",
        Month::November => "November",
        Month::December => "Desember",
    }
}
