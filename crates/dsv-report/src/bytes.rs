//! Human-scaled byte formatting for the summary block.

const UNITS: &[&str] = &["B", "kB", "MB", "GB", "TB", "PB"];

/// Format a byte count with decimal (base-1000) units, at most two decimals.
pub fn format_bytes(bytes: u64) -> String {
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1000.0 && unit < UNITS.len() - 1 {
        value /= 1000.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{bytes} B")
    } else {
        let text = format!("{value:.2}");
        let text = text.trim_end_matches('0').trim_end_matches('.');
        format!("{text} {}", UNITS[unit])
    }
}

#[cfg(test)]
mod tests {
    use super::format_bytes;

    #[test]
    fn formats_plain_bytes() {
        assert_eq!(format_bytes(0), "0 B");
        assert_eq!(format_bytes(999), "999 B");
    }

    #[test]
    fn formats_scaled_units() {
        assert_eq!(format_bytes(2_500), "2.5 kB");
        assert_eq!(format_bytes(1_440_000), "1.44 MB");
        assert_eq!(format_bytes(3_000_000_000), "3 GB");
    }
}
