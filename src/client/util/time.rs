use chrono::NaiveDateTime;

/// Render how long before `now` something happened, e.g. "3 hours ago".
pub fn format_relative_time(datetime: &NaiveDateTime, now: NaiveDateTime) -> String {
    let duration = now.signed_duration_since(*datetime);

    let seconds = duration.num_seconds();
    let minutes = duration.num_minutes();
    let hours = duration.num_hours();
    let days = duration.num_days();

    if seconds < 0 {
        "just now".to_string()
    } else if seconds < 60 {
        format!("{} second{} ago", seconds, plural(seconds))
    } else if minutes < 60 {
        format!("{} minute{} ago", minutes, plural(minutes))
    } else if hours < 24 {
        format!("{} hour{} ago", hours, plural(hours))
    } else if days < 30 {
        format!("{} day{} ago", days, plural(days))
    } else if days < 365 {
        let months = days / 30;
        format!("{} month{} ago", months, plural(months))
    } else {
        let years = days / 365;
        format!("{} year{} ago", years, plural(years))
    }
}

fn plural(count: i64) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}
