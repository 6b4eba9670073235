//! Number formatting for axis labels and the status bar.

/// Format a number with thousand separators.
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Format axis label with smart precision.
pub fn format_axis_label(val: f64) -> String {
    if !val.is_finite() {
        return "?".to_string();
    }
    let abs_val = val.abs();
    if abs_val == 0.0 {
        "0".to_string()
    } else if !(1e-2..1e5).contains(&abs_val) {
        format!("{:.1e}", val)
    } else if abs_val >= 100.0 {
        format!("{:.0}", val)
    } else if abs_val >= 1.0 {
        format!("{:.1}", val)
    } else {
        format!("{:.2}", val)
    }
}
