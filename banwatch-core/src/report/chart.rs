use crate::stats::HourlyCount;

const BAR_CELL: &str = "█";

/// Bar scaled against `max`; any non-zero count gets at least one cell.
pub fn bar(count: u64, max: u64, width: usize) -> String {
    if count == 0 || max == 0 || width == 0 {
        return String::new();
    }

    let cells = ((count as f64 / max as f64) * width as f64).floor() as usize;
    BAR_CELL.repeat(cells.clamp(1, width))
}

/// Every hourly bucket, oldest first.
pub fn render_hourly_chart(hourly: &[HourlyCount], width: usize) -> String {
    if hourly.is_empty() {
        return "No hourly data available yet.\n".to_string();
    }

    let max = hourly.iter().map(|h| h.bans).max().unwrap_or(0);

    let mut out = String::new();
    out.push_str("\nHourly Ban Distribution:\n");
    out.push_str("========================\n");
    for h in hourly {
        out.push_str(&format!("{}: {} ({})\n", h.hour, bar(h.bans, max, width), h.bans));
    }
    out.push_str("========================\n");
    out
}

/// The most recent `hours` buckets as fixed-width bars.
pub fn render_recent_hours(hourly: &[HourlyCount], hours: usize, width: usize) -> String {
    let recent = &hourly[hourly.len().saturating_sub(hours)..];
    if recent.is_empty() {
        return String::new();
    }

    let max = recent.iter().map(|h| h.bans).max().unwrap_or(0);

    let mut out = format!("\nHourly Ban Activity (last {hours} hours):\n");
    for h in recent {
        out.push_str(&format!(
            "  {} | {:<width$} | {}\n",
            h.hour,
            bar(h.bans, max, width),
            h.bans,
            width = width
        ));
    }
    out
}
