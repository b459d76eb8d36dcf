//! The fluctuation simulator: a multi-factor random walk for the
//! informal USD rate.
//!
//! PER-MONTH ORDER (fixed, never reordered):
//!   1. Speculation      r * U(-s, s)
//!   2. Scarcity         r * U(-e, e)
//!   3. Legal sale       r * U(-v, v)
//!   4. Inflation        r * U(-f, f)
//!   5. Stability        r * (1 - p) * U(-band, band)
//!   6. Gas impact       r * (gas - baseline) * sensitivity
//!   7. Reserves impact  r * (baseline - reserves) * sensitivity
//!
//! RULES:
//!   - Every term reads the PREVIOUS month's rate `r`.
//!   - Draws 1–5 are taken from the informal stream in the order above;
//!     reordering them changes every seeded run.
//!   - The total is summed left to right in the order above, and the
//!     new rate is exactly `r + total`.
//!   - The official series draws from its own stream.

use crate::{
    calendar,
    config::SimulatorConfig,
    factors::EconomicFactors,
    rng::{RngBank, SimRng, StreamSlot},
    series::{FluctuationStep, RateSeries},
    types::{Rate, RunId},
};
use serde::{Deserialize, Serialize};

pub const HISTORICAL_SERIES: &str = "historical";
pub const INFORMAL_SERIES: &str = "informal";
pub const OFFICIAL_SERIES: &str = "official";

/// Everything one simulation produces.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationRun {
    pub run_id:     RunId,
    /// Master seed, when the run was seeded explicitly.
    pub seed:       Option<u64>,
    pub factors:    EconomicFactors,
    pub historical: RateSeries,
    pub informal:   RateSeries,
    pub official:   RateSeries,
    /// One entry per simulated month after the first.
    pub steps:      Vec<FluctuationStep>,
}

pub struct FluctuationSimulator {
    config: SimulatorConfig,
}

impl FluctuationSimulator {
    pub fn new(config: SimulatorConfig) -> Self {
        Self { config }
    }

    /// Run with a reproducible pair of streams derived from `seed`.
    pub fn simulate_seeded(&self, factors: &EconomicFactors, seed: u64) -> SimulationRun {
        let bank = RngBank::new(seed);
        let mut informal = bank.for_stream(StreamSlot::Informal);
        let mut official = bank.for_stream(StreamSlot::Official);
        let mut run = self.simulate(factors, &mut informal, &mut official);
        run.seed = Some(bank.master_seed());
        run
    }

    /// Run with entropy-seeded streams. Not reproducible.
    pub fn simulate_unseeded(&self, factors: &EconomicFactors) -> SimulationRun {
        let mut informal = SimRng::from_entropy().with_name(StreamSlot::Informal.name());
        let mut official = SimRng::from_entropy().with_name(StreamSlot::Official.name());
        self.simulate(factors, &mut informal, &mut official)
    }

    pub fn simulate(
        &self,
        factors: &EconomicFactors,
        informal_rng: &mut SimRng,
        official_rng: &mut SimRng,
    ) -> SimulationRun {
        let cfg = &self.config;
        let run_id = uuid::Uuid::new_v4().to_string();

        let historical = self.historical_series();
        let labels = calendar::month_labels(cfg.simulation_start, cfg.horizon_months);

        let mut rates: Vec<Rate> = Vec::with_capacity(cfg.horizon_months);
        let mut steps = Vec::with_capacity(cfg.horizon_months.saturating_sub(1));
        if cfg.horizon_months > 0 {
            rates.push(cfg.seed_rate());
        }

        for label in labels.iter().skip(1) {
            let previous = rates[rates.len() - 1];
            let step = self.step(label, previous, factors, informal_rng);
            log::debug!(
                "run={run_id} month={label} rate={previous:.4} variation={:+.4}",
                step.total
            );
            rates.push(previous + step.total);
            steps.push(step);
        }

        let official_rates: Vec<Rate> = (0..cfg.horizon_months)
            .map(|_| cfg.official_rate * (1.0 + official_rng.symmetric(cfg.official_jitter)))
            .collect();

        let informal = RateSeries::from_parts(INFORMAL_SERIES, &labels, &rates);
        let official = RateSeries::from_parts(OFFICIAL_SERIES, &labels, &official_rates);

        log::info!(
            "run={run_id} simulated {} months: {:.2} -> {:.2} Bs/USD",
            informal.len(),
            informal.first().map(|p| p.rate).unwrap_or_default(),
            informal.last().map(|p| p.rate).unwrap_or_default(),
        );

        SimulationRun {
            run_id,
            seed: None,
            factors: *factors,
            historical,
            informal,
            official,
            steps,
        }
    }

    /// The fixed reference series shown above the simulation.
    pub fn historical_series(&self) -> RateSeries {
        let cfg = &self.config;
        let labels = calendar::month_labels(cfg.historical_start, cfg.historical_rates.len());
        RateSeries::from_parts(HISTORICAL_SERIES, &labels, &cfg.historical_rates)
    }

    /// One month of the walk, computed from the previous rate `r`.
    fn step(
        &self,
        month: &str,
        r: Rate,
        factors: &EconomicFactors,
        rng: &mut SimRng,
    ) -> FluctuationStep {
        let cfg = &self.config;

        let speculation = r * rng.symmetric(factors.speculation);
        let scarcity = r * rng.symmetric(factors.scarcity);
        let legal_sale = r * rng.symmetric(factors.legal_dollar_sale);
        let inflation = r * rng.symmetric(factors.inflation);
        let stability =
            r * (1.0 - factors.political_stability) * rng.symmetric(cfg.stability_band);

        let gas_impact = r * (factors.gas_price - cfg.gas_baseline) * cfg.gas_sensitivity;
        let reserves_impact =
            r * (cfg.reserves_baseline - factors.international_reserves) * cfg.reserves_sensitivity;

        let total = speculation
            + scarcity
            + legal_sale
            + inflation
            + stability
            + gas_impact
            + reserves_impact;

        FluctuationStep {
            month: month.to_string(),
            speculation,
            scarcity,
            legal_sale,
            inflation,
            stability,
            gas_impact,
            reserves_impact,
            total,
        }
    }
}

impl Default for FluctuationSimulator {
    fn default() -> Self { Self::new(SimulatorConfig::default()) }
}
