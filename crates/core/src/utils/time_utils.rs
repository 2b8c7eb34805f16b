use chrono::{Local, NaiveDate, NaiveDateTime};

/// Current local wall-clock time. Backend timestamps are zone-less local date-times.
pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Spanish relative-time label for a timestamp, e.g. `hace 3 horas`.
///
/// Timestamps in the future are treated as just now.
pub fn format_time_ago(created: Option<NaiveDateTime>, now: NaiveDateTime) -> String {
    let Some(created) = created else {
        return "Fecha desconocida".to_string();
    };

    let seconds = (now - created).num_seconds().max(0);
    if seconds < 60 {
        return "hace unos segundos".to_string();
    }
    if seconds < 3_600 {
        return format!("hace {} minutos", seconds / 60);
    }
    if seconds < 86_400 {
        return format!("hace {} horas", seconds / 3_600);
    }
    if seconds < 604_800 {
        return format!("hace {} días", seconds / 86_400);
    }
    format!("hace {} semanas", seconds / 604_800)
}

/// Whole days from `today` until `deadline`. Negative when overdue.
pub fn days_until(deadline: NaiveDate, today: NaiveDate) -> i64 {
    (deadline - today).num_days()
}

/// `dd/mm/yyyy`, the display format used across the application.
pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}
