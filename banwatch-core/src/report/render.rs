use crate::report::chart::{render_hourly_chart, render_recent_hours};
use crate::stats::Summary;

const RULE: &str = "============================================================";

/// Presentation knobs for the console report.
#[derive(Debug, Clone, Copy)]
pub struct ReportLayout {
    pub recent_hours: usize,
    pub chart_width: usize,
}

impl Default for ReportLayout {
    fn default() -> Self {
        Self {
            recent_hours: 5,
            chart_width: 50,
        }
    }
}

pub fn render_status(summary: &Summary, layout: &ReportLayout) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "\n{RULE}\n\
         Fail2ban Monitor Status Update ({} elapsed)\n\
         {RULE}\n",
        summary.runtime
    ));
    out.push_str(&format!(
        "Total Bans: {}\n\
         Total Unbans: {}\n\
         Unique IPs Banned: {}\n\
         Attack Detection Rate: {}\n\
         Ban Frequency: {}\n",
        summary.total_bans,
        summary.total_unbans,
        summary.unique_addresses,
        summary.detection_rate_display(),
        summary.ban_rate_display(),
    ));

    if !summary.top_addresses.is_empty() {
        out.push_str("\nTop Banned IPs:\n");
        for a in &summary.top_addresses {
            out.push_str(&format!("{}: {} times\n", a.address, a.bans));
        }
    }

    if !summary.top_jails.is_empty() {
        out.push_str("\nMost Active Jails:\n");
        for j in &summary.top_jails {
            out.push_str(&format!("{}: {} bans\n", j.jail, j.bans));
        }
    }

    out.push_str(&render_recent_hours(
        &summary.hourly_bans,
        layout.recent_hours,
        layout.chart_width,
    ));

    out
}

/// Shutdown output: full hourly chart followed by the summary as JSON.
pub fn render_final(summary: &Summary, layout: &ReportLayout) -> anyhow::Result<String> {
    let mut out = render_hourly_chart(&summary.hourly_bans, layout.chart_width);
    out.push_str("\nFinal statistics:\n");
    out.push_str(&serde_json::to_string_pretty(summary)?);
    out.push('\n');
    Ok(out)
}
