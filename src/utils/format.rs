use chrono::{DateTime, Datelike, NaiveDate, Utc, Weekday};

/// Spanish month name (1-12). Out-of-range input returns "?".
pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "Enero",
        2 => "Febrero",
        3 => "Marzo",
        4 => "Abril",
        5 => "Mayo",
        6 => "Junio",
        7 => "Julio",
        8 => "Agosto",
        9 => "Septiembre",
        10 => "Octubre",
        11 => "Noviembre",
        12 => "Diciembre",
        _ => "?",
    }
}

/// Spanish weekday name, lowercase as customary.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "lunes",
        Weekday::Tue => "martes",
        Weekday::Wed => "miércoles",
        Weekday::Thu => "jueves",
        Weekday::Fri => "viernes",
        Weekday::Sat => "sábado",
        Weekday::Sun => "domingo",
    }
}

/// Long Spanish date: "jueves 25 de diciembre".
pub fn format_date_long(date: NaiveDate) -> String {
    format!(
        "{} {} de {}",
        weekday_name(date.weekday()),
        date.day(),
        month_name(date.month()).to_lowercase()
    )
}

/// Relative age of a timestamp for the status bar: "recién",
/// "hace 5 min", "hace 3 h", "hace 2 d". Negative ages (clock skew)
/// read as "recién".
pub fn relative_age(fetched_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let minutes = (now - fetched_at).num_minutes();
    if minutes < 1 {
        "recién".to_string()
    } else if minutes < 60 {
        format!("hace {} min", minutes)
    } else if minutes < 1440 {
        format!("hace {} h", minutes / 60)
    } else {
        format!("hace {} d", minutes / 1440)
    }
}

/// Truncate a string to a maximum character length, adding an ellipsis
/// if needed.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    }
}
