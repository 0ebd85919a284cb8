//! Display formatting for table cells.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;

const SIZE_UNITS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];

/// Human-readable size using 1024-based units, at most two decimals.
#[allow(clippy::cast_precision_loss)]
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_owned();
    }
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    let rounded = format!("{value:.2}");
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed} {}", SIZE_UNITS[unit])
}

/// `Jun 1, 2025, 09:30` for RFC 3339 input, `N/A` when empty, the raw text
/// when unparseable.
pub fn format_date(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return "N/A".to_owned();
    }
    let Ok(at) = OffsetDateTime::parse(raw, &Rfc3339) else {
        return raw.to_owned();
    };
    let description = format_description!("[month repr:short] [day padding:none], [year], [hour]:[minute]");
    at.format(description).unwrap_or_else(|_| raw.to_owned())
}

/// `format_date` over an optional field.
pub fn format_optional_date(raw: Option<&str>) -> String {
    format_date(raw.unwrap_or_default())
}
