//! Quoted tab-separated rendering.

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::error::Result;

/// Render the header and rows as quoted, tab-separated text.
///
/// Every field is quoted (embedded quotes are doubled), fields are joined by a
/// single tab with no trailing tab, and each record ends with `\n`.
pub fn render_sorted_bom<H, R>(headers: &[H], rows: &[R]) -> Result<Vec<u8>>
where
    H: AsRef<str>,
    R: AsRef<[String]>,
{
    let mut writer = WriterBuilder::new()
        .delimiter(b'\t')
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .flexible(true)
        .from_writer(Vec::new());

    writer.write_record(headers.iter().map(AsRef::<str>::as_ref))?;
    for row in rows {
        writer.write_record(row.as_ref())?;
    }
    writer.flush().map_err(csv::Error::from)?;

    writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()).into())
}
