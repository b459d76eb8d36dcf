//! Model constants for both pipelines.
//!
//! These are fixed by the model; the only caller-supplied values are
//! the seven economic factors and the conversion query.

use crate::types::Rate;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ── Fluctuation simulator ─────────────────────────────────────────

/// Black-market rates for Jan–Oct 2023, used as the reference panel.
pub const SIM_HISTORICAL_RATES: [Rate; 10] =
    [7.00, 7.50, 8.00, 8.50, 9.00, 9.50, 10.00, 10.50, 11.00, 11.30];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulatorConfig {
    /// Central bank rate, Bs/USD.
    pub official_rate: Rate,
    /// Half-width of the relative jitter applied to each official point.
    pub official_jitter: f64,
    /// Half-width of the instability draw, scaled by (1 - stability).
    pub stability_band: f64,
    /// Gas price (USD) at which gas has no effect on the rate.
    pub gas_baseline: f64,
    /// Relative move per USD of gas price away from the baseline.
    pub gas_sensitivity: f64,
    /// Reserves (billions USD) at which reserves have no effect.
    pub reserves_baseline: f64,
    /// Relative move per billion of reserves below the baseline.
    pub reserves_sensitivity: f64,
    /// Points in the simulated informal and official series.
    pub horizon_months: usize,
    pub simulation_start: NaiveDate,
    pub historical_start: NaiveDate,
    pub historical_rates: Vec<Rate>,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            official_rate:        6.96,
            official_jitter:      0.005,
            stability_band:       0.02,
            gas_baseline:         3.50,
            gas_sensitivity:      0.01,
            reserves_baseline:    5.0,
            reserves_sensitivity: 0.02,
            horizon_months:       12,
            simulation_start:     date(2025, 1, 1),
            historical_start:     date(2023, 1, 1),
            historical_rates:     SIM_HISTORICAL_RATES.to_vec(),
        }
    }
}

impl SimulatorConfig {
    /// The rate the informal walk starts from: the last historical point.
    pub fn seed_rate(&self) -> Rate {
        self.historical_rates.last().copied().unwrap_or(self.official_rate)
    }
}

// ── Trend projector ───────────────────────────────────────────────

pub const PROJECTOR_HISTORICAL_LABELS: [&str; 14] = [
    "Ene 2024", "Feb 2024", "Mar 2024", "Abr 2024", "May 2024", "Jun 2024",
    "Jul 2024", "Ago 2024", "Sep 2024", "Oct 2024", "Nov 2024", "Dic 2024",
    "Ene 2025", "Feb 2025",
];

pub const PROJECTOR_HISTORICAL_RATES: [Rate; 14] = [
    7.00, 7.10, 7.50, 8.00, 8.30, 8.90, 9.20, 9.50, 9.80, 10.20, 10.60, 11.00, 11.20, 11.30,
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectorConfig {
    pub historical_labels: Vec<String>,
    pub historical_rates:  Vec<Rate>,
    pub horizon_months:    usize,
    /// Date of the first projected point. Fixed, not derived from the
    /// last historical label.
    pub projection_start:  NaiveDate,
}

impl Default for ProjectorConfig {
    fn default() -> Self {
        Self {
            historical_labels: PROJECTOR_HISTORICAL_LABELS.iter().map(|s| s.to_string()).collect(),
            historical_rates:  PROJECTOR_HISTORICAL_RATES.to_vec(),
            horizon_months:    24,
            projection_start:  date(2025, 3, 1),
        }
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}
