use time::macros::format_description;
use time::{Date, OffsetDateTime, UtcOffset};

/// Shift a server timestamp into the local offset for display, falling back
/// to UTC when the offset cannot be determined.
pub fn to_local_time(dt: OffsetDateTime) -> OffsetDateTime {
    match UtcOffset::current_local_offset() {
        Ok(local_offset) => dt.to_offset(local_offset),
        Err(_) => dt,
    }
}

/// "09:30" — the time column of the expense tables.
pub fn clock_label(dt: OffsetDateTime) -> String {
    dt.format(format_description!("[hour]:[minute]"))
        .unwrap_or_default()
}

/// "Monday, January 5" — weekly group heading.
pub fn weekday_heading(date: Date) -> String {
    date.format(format_description!(
        "[weekday], [month repr:long] [day padding:none]"
    ))
    .unwrap_or_default()
}

/// "January 5, 2026" — monthly group heading.
pub fn month_heading(date: Date) -> String {
    date.format(format_description!(
        "[month repr:long] [day padding:none], [year]"
    ))
    .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn labels_format_as_displayed() {
        let dt = datetime!(2026-01-05 09:30 UTC);
        assert_eq!(clock_label(dt), "09:30");
        assert_eq!(weekday_heading(dt.date()), "Monday, January 5");
        assert_eq!(month_heading(dt.date()), "January 5, 2026");
    }
}
