//! Report formatting utilities for terminal output

/// Create a simple bar chart segment of `width` cells
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bar() {
        assert_eq!(format_bar(5.0, 10.0, 4), "██░░");
        assert_eq!(format_bar(10.0, 10.0, 4), "████");
        assert_eq!(format_bar(0.0, 10.0, 4), "░░░░");
        assert_eq!(format_bar(3.0, 0.0, 2), "░░");
    }

    #[test]
    fn test_separator() {
        assert_eq!(separator(3), "───");
    }
}
