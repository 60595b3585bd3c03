use anyhow::Result;
use av_cost_model::config::Config;
use av_cost_model::estimator::{data_multiplier, user_multiplier};
use av_cost_model::format::{format_currency, format_rate};
use av_cost_model::{estimate, CostEstimate, UsageParameters};
use colored::Colorize;
use serde_json::json;

/// Execute the estimate command
///
/// Flags left out fall back to the configured calculator defaults.
pub fn execute(
    cfg: &Config,
    hours: Option<i64>,
    users: Option<i64>,
    data_gb: Option<i64>,
    json: bool,
) -> Result<()> {
    let params = resolve_usage(cfg, hours, users, data_gb);
    let result = estimate(params);

    if json {
        let body = json!({
            "usage": params,
            "estimate": result,
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    print_estimate(params, &result);
    Ok(())
}

fn resolve_usage(
    cfg: &Config,
    hours: Option<i64>,
    users: Option<i64>,
    data_gb: Option<i64>,
) -> UsageParameters {
    let defaults = &cfg.calculator;
    UsageParameters::clamped(
        hours.unwrap_or(defaults.hours as i64),
        users.unwrap_or(defaults.users as i64),
        data_gb.unwrap_or(defaults.data_gb as i64),
    )
}

pub fn print_estimate(params: UsageParameters, result: &CostEstimate) {
    println!("{}", "Usage:".bold());
    println!("  {}: {}", "Hours/month".cyan(), params.hours);
    println!(
        "  {}: {} (x{:.2})",
        "Users".cyan(),
        params.users,
        user_multiplier(params.users)
    );
    println!(
        "  {}: {} GB (x{:.2})",
        "Data volume".cyan(),
        params.data_volume_gb,
        data_multiplier(params.data_volume_gb)
    );
    println!();
    println!("{}", "Estimated Cost:".green().bold());
    println!(
        "  {}: {}",
        "Monthly".cyan(),
        format_currency(result.monthly_cost as f64)
    );
    println!("  {}: {}", "Hourly".cyan(), format_rate(result.hourly_rate));
    println!(
        "  {}: {}",
        "Annual".cyan(),
        format_currency(result.annual_cost as f64)
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_usage_defaults_and_overrides() {
        let cfg = Config::default();

        assert_eq!(
            resolve_usage(&cfg, None, None, None),
            UsageParameters::new(50, 1, 50)
        );
        assert_eq!(
            resolve_usage(&cfg, Some(200), Some(5), None),
            UsageParameters::new(200, 5, 50)
        );
        assert_eq!(
            resolve_usage(&cfg, Some(-1), None, Some(-20)),
            UsageParameters::new(0, 1, 0)
        );
    }
}
