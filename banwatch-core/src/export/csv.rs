use crate::export::error::ExportError;
use crate::stats::StatsSnapshot;

pub const CSV_HEADER: [&str; 3] = ["Address", "Ban Count", "Jails"];

/// One row per banned address, most banned first.
pub(crate) fn render(snapshot: &StatsSnapshot) -> Result<Vec<u8>, ExportError> {
    let mut writer = ::csv::WriterBuilder::new()
        .terminator(::csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;

    for entry in &snapshot.banned_addresses {
        writer.write_record([
            entry.address.as_str(),
            entry.bans.to_string().as_str(),
            entry.jails.join(", ").as_str(),
        ])?;
    }

    writer
        .into_inner()
        .map_err(|e| ExportError::Csv(e.into_error().into()))
}
