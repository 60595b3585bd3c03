use av_cost_model::format::{chart_color, cost_bar, format_money, format_percentage};
use av_cost_model::CostCatalog;
use colored::{Color, Colorize};

const BAR_WIDTH: usize = 25;

/// Execute the breakdown command
///
/// One card per base component: cost, share bar and description, plus
/// influences and optimization tips when `details` is set.
pub fn execute(catalog: &CostCatalog, details: bool) {
    println!(
        "{}",
        format!("Base Cost Breakdown ({})", format_money(catalog.base_total()))
            .green()
            .bold()
    );
    println!();

    for (idx, component) in catalog.base_costs().iter().enumerate() {
        let color = hex_color(chart_color(idx));

        println!(
            "{} {:>8}  {} {}",
            format!("{:<30}", component.name).bold(),
            format_money(component.cost),
            cost_bar(component.percentage, BAR_WIDTH).color(color),
            format_percentage(component.percentage)
        );
        println!("    {}", component.description.dimmed());

        if details {
            let insight = catalog.insight(&component.name);
            println!("    {} {}", "What influences this cost:".cyan(), insight.influences);
            println!("    {} {}", "Optimization tips:".cyan(), insight.optimization_tips);
        }
    }
}

/// Convert a `#RRGGBB` palette entry into a terminal colour
fn hex_color(hex: &str) -> Color {
    let channel = |range: std::ops::Range<usize>| {
        hex.get(range)
            .and_then(|h| u8::from_str_radix(h, 16).ok())
            .unwrap_or(255)
    };

    Color::TrueColor {
        r: channel(1..3),
        g: channel(3..5),
        b: channel(5..7),
    }
}
