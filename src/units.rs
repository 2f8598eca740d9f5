//! Formatting of values with SI prefixes.

const PREFIXES: [(f64, f64, &str); 8] = [
    (1e-9, 1e12, "p"),
    (1e-6, 1e9, "n"),
    (1e-3, 1e6, "µ"),
    (1.0, 1e3, "m"),
    (1e3, 1.0, ""),
    (1e6, 1e-3, "k"),
    (1e9, 1e-6, "M"),
    (f64::INFINITY, 1e-9, "G"),
];

/// Formats `value` with an SI prefix and up to two decimals, e.g.
/// `unit_text(0.1, "H") == "100 mH"`.
///
/// Magnitudes below 1e-14 print as zero.
pub fn unit_text(value: f64, unit: &str) -> String {
    if value.is_nan() {
        return format!("NaN {}", unit);
    }
    let magnitude = value.abs();
    if magnitude < 1e-14 {
        return format!("0 {}", unit);
    }

    let (scale, prefix) = PREFIXES
        .iter()
        .find(|(limit, _, _)| magnitude < *limit)
        .map_or((1e-9, "G"), |&(_, scale, prefix)| (scale, prefix));

    format!("{} {}{}", short_number(value * scale), prefix, unit)
}

fn short_number(value: f64) -> String {
    let text = format!("{:.2}", value);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    match text {
        "-0" => "0".to_string(),
        _ => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes() {
        assert_eq!(unit_text(0.1, "H"), "100 mH");
        assert_eq!(unit_text(1e-6, "F"), "1 µF");
        assert_eq!(unit_text(100e-6, "F"), "100 µF");
        assert_eq!(unit_text(2.2e-12, "F"), "2.2 pF");
        assert_eq!(unit_text(4700.0, "Ω"), "4.7 kΩ");
        assert_eq!(unit_text(5.05, "H"), "5.05 H");
        assert_eq!(unit_text(-3.5, "V"), "-3.5 V");
    }

    #[test]
    fn tiny_values_are_zero() {
        assert_eq!(unit_text(1e-15, "A"), "0 A");
        assert_eq!(unit_text(-0.0, "V"), "0 V");
    }

    #[test]
    fn nan_has_no_prefix() {
        assert_eq!(unit_text(f64::NAN, "H"), "NaN H");
        assert_eq!(unit_text(f64::INFINITY, "V"), "inf GV");
    }
}
