//! Display helpers shared by the exporter and the CLI
//!
//! All amounts are US dollars; there is no locale handling.

/// Chart palette, assigned to base components by position
pub const CHART_COLORS: [&str; 10] = [
    "#1FB8CD", "#FFC185", "#B4413C", "#ECEBD5", "#5D878F", "#DB4545", "#D2BA4C", "#964325",
    "#944454", "#13343B",
];

/// Colour for the component at `index`, wrapping past the palette end
pub fn chart_color(index: usize) -> &'static str {
    CHART_COLORS[index % CHART_COLORS.len()]
}

/// Group an integer with thousands separators: 75600 -> "75,600"
pub fn format_grouped(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

/// Whole-dollar currency with grouping: 75600.4 -> "$75,600"
pub fn format_currency(amount: f64) -> String {
    let rounded = amount.round();
    if rounded < 0.0 {
        format!("-${}", format_grouped((-rounded) as u64))
    } else {
        format!("${}", format_grouped(rounded as u64))
    }
}

/// Two-decimal dollar amount: 350.0 -> "$350.00"
pub fn format_money(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// One-decimal percentage: 25.0 -> "25.0%"
pub fn format_percentage(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Hourly rate, or "N/A" when undefined
pub fn format_rate(rate: Option<f64>) -> String {
    match rate {
        Some(rate) => format_money(rate),
        None => "N/A".to_string(),
    }
}

/// Chart tooltip label for a base component
pub fn tooltip_label(name: &str, cost: f64, base_total: f64) -> String {
    let share = if base_total > 0.0 {
        cost / base_total * 100.0
    } else {
        0.0
    };
    format!("{}: ${} ({})", name, cost, format_percentage(share))
}

/// Horizontal bar whose filled part is proportional to `percentage`
pub fn cost_bar(percentage: f64, width: usize) -> String {
    let filled = ((percentage.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_grouped() {
        assert_eq!(format_grouped(0), "0");
        assert_eq!(format_grouped(350), "350");
        assert_eq!(format_grouped(4200), "4,200");
        assert_eq!(format_grouped(75600), "75,600");
        assert_eq!(format_grouped(1234567), "1,234,567");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(6300.0), "$6,300");
        assert_eq!(format_currency(99.6), "$100");
        assert_eq!(format_currency(-1500.0), "-$1,500");
    }

    #[test]
    fn test_format_money_and_rate() {
        assert_eq!(format_money(350.0), "$350.00");
        assert_eq!(format_rate(Some(31.5)), "$31.50");
        assert_eq!(format_rate(None), "N/A");
        assert_eq!(format_percentage(18.0), "18.0%");
    }

    #[test]
    fn test_tooltip_label() {
        assert_eq!(
            tooltip_label("GPU Computing", 18.0, 100.0),
            "GPU Computing: $18 (18.0%)"
        );
    }

    #[test]
    fn test_cost_bar() {
        assert_eq!(cost_bar(25.0, 20).chars().filter(|c| *c == '█').count(), 5);
        assert_eq!(cost_bar(150.0, 10), "█".repeat(10));
        assert_eq!(cost_bar(0.0, 4), "░░░░");
    }

    #[test]
    fn test_chart_color_wraps() {
        assert_eq!(chart_color(0), "#1FB8CD");
        assert_eq!(chart_color(10), "#1FB8CD");
        assert_eq!(chart_color(9), "#13343B");
    }
}
