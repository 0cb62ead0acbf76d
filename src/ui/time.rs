/// Format elapsed and total seconds as `current/total`.
///
/// The layout is picked from `total` alone and applied to both sides so they
/// line up: `H:MM:SS` from one hour, `M:SS` below that.
pub fn format_time(current: f64, total: f64) -> String {
    let current = whole_seconds(current);
    let total = whole_seconds(total);

    if total >= 3600 {
        format!("{}/{}", hms(current), hms(total))
    } else {
        format!("{}/{}", ms(current), ms(total))
    }
}

fn whole_seconds(secs: f64) -> u64 {
    if secs.is_finite() && secs > 0.0 {
        secs as u64
    } else {
        0
    }
}

fn hms(secs: u64) -> String {
    format!("{}:{:02}:{:02}", secs / 3600, (secs / 60) % 60, secs % 60)
}

fn ms(secs: u64) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}
