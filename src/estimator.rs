//! Scaling estimator
//!
//! Projects monthly, hourly and annual cost from three usage parameters.
//! The formula is calibrated so that 50 hours, 1 user and 50 GB reproduce
//! the "Medium Usage" reference scenario.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Base hourly rate, matching the Medium Usage scenario
pub const BASE_HOURLY_RATE: f64 = 7.0;

/// Cost increase per concurrent user
pub const USER_COST_FACTOR: f64 = 0.3;

/// Data volume covered before data scaling applies
pub const DATA_THRESHOLD_GB: f64 = 100.0;

/// Usage inputs for one estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UsageParameters {
    pub hours: u32,
    pub users: u32,
    pub data_volume_gb: u32,
}

impl UsageParameters {
    pub fn new(hours: u32, users: u32, data_volume_gb: u32) -> Self {
        Self {
            hours,
            users,
            data_volume_gb,
        }
    }

    /// Build parameters from raw signed input, clamping negatives to zero
    pub fn clamped(hours: i64, users: i64, data_volume_gb: i64) -> Self {
        Self {
            hours: clamp_input("hours", hours),
            users: clamp_input("users", users),
            data_volume_gb: clamp_input("data_volume_gb", data_volume_gb),
        }
    }
}

fn clamp_input(field: &str, value: i64) -> u32 {
    let clamped = value.clamp(0, u32::MAX as i64) as u32;
    if clamped as i64 != value {
        warn!(field, value, clamped, "Usage parameter out of range, clamped");
    }
    clamped
}

/// Projected cost for a set of usage parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostEstimate {
    pub monthly_cost: u64,
    /// `None` when hours is zero and the rate is undefined
    pub hourly_rate: Option<f64>,
    pub annual_cost: u64,
}

/// Multiplier applied for concurrent users, never below 1
pub fn user_multiplier(users: u32) -> f64 {
    (users as f64 * USER_COST_FACTOR).max(1.0)
}

/// Multiplier applied for data volume past the threshold, never below 1
pub fn data_multiplier(data_volume_gb: u32) -> f64 {
    (data_volume_gb as f64 / DATA_THRESHOLD_GB).max(1.0)
}

/// Estimate costs for the given usage
pub fn estimate(params: UsageParameters) -> CostEstimate {
    let raw = params.hours as f64
        * BASE_HOURLY_RATE
        * user_multiplier(params.users)
        * data_multiplier(params.data_volume_gb);
    let monthly_cost = raw.round() as u64;

    let hourly_rate = if params.hours == 0 {
        None
    } else {
        Some(round_cents(monthly_cost as f64 / params.hours as f64))
    };

    let estimate = CostEstimate {
        monthly_cost,
        hourly_rate,
        annual_cost: monthly_cost.saturating_mul(12),
    };

    debug!(
        hours = params.hours,
        users = params.users,
        data_volume_gb = params.data_volume_gb,
        monthly_cost = estimate.monthly_cost,
        "Computed scaling estimate"
    );

    estimate
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
