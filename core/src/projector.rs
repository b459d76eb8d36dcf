//! Linear trend projection of the informal rate and USD → BOB conversion.
//!
//! Three independent steps: fit a least-squares line to the historical
//! rates against their index, extend it over the horizon, then answer
//! conversion queries against historical + projected points.

use crate::{
    calendar,
    config::ProjectorConfig,
    error::{RateError, RateResult},
    input::check_usd_amount,
    series::{RatePoint, RateSeries},
    types::Rate,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const HISTORICAL_SERIES: &str = "historical";
pub const PROJECTED_SERIES: &str = "projected";
pub const COMBINED_SERIES: &str = "combined";

/// `rate = slope * index + intercept`, fitted once.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendModel {
    pub slope:     f64,
    pub intercept: f64,
}

impl TrendModel {
    /// Ordinary least squares of `values[i]` against `i`.
    pub fn fit(values: &[Rate]) -> RateResult<Self> {
        let n = values.len();
        if n < 2 {
            return Err(RateError::InsufficientData { needed: 2, got: n });
        }

        let n_f = n as f64;
        let x_mean = (n_f - 1.0) / 2.0;
        let y_mean = values.iter().sum::<f64>() / n_f;

        let (sxy, sxx) = values
            .iter()
            .enumerate()
            .fold((0.0, 0.0), |(sxy, sxx), (i, &y)| {
                let dx = i as f64 - x_mean;
                (sxy + dx * (y - y_mean), sxx + dx * dx)
            });

        let slope = sxy / sxx;
        let intercept = y_mean - slope * x_mean;
        log::debug!("fitted trend over {n} points: slope={slope:.6} intercept={intercept:.6}");

        Ok(Self { slope, intercept })
    }

    pub fn value_at(&self, index: usize) -> Rate {
        self.slope * index as f64 + self.intercept
    }
}

/// Extend `model` over `horizon` months. Point j sits at index
/// `first_index + j` and is labelled `start + 30 * j days`.
pub fn project(
    model: &TrendModel,
    first_index: usize,
    horizon: usize,
    start: NaiveDate,
) -> RateSeries {
    let labels = calendar::month_labels(start, horizon);
    let rates: Vec<Rate> = (0..horizon).map(|j| model.value_at(first_index + j)).collect();
    RateSeries::from_parts(PROJECTED_SERIES, &labels, &rates)
}

/// Historical points followed by projected points, addressed 1-based.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinedSeries {
    series: RateSeries,
    historical_len: usize,
}

impl CombinedSeries {
    pub fn combine(historical: &RateSeries, projected: &RateSeries) -> Self {
        let mut series = RateSeries::new(COMBINED_SERIES);
        series.points.extend(historical.points.iter().cloned());
        series.points.extend(projected.points.iter().cloned());
        Self { series, historical_len: historical.len() }
    }

    pub fn len(&self) -> usize { self.series.len() }

    pub fn is_empty(&self) -> bool { self.series.is_empty() }

    pub fn points(&self) -> &[RatePoint] { &self.series.points }

    pub fn series(&self) -> &RateSeries { &self.series }

    /// 0-based position of the last historical point, where the chart
    /// draws its projection marker.
    pub fn boundary(&self) -> Option<usize> {
        self.historical_len.checked_sub(1)
    }

    /// The point at 1-based `selection`.
    pub fn get(&self, selection: i64) -> RateResult<&RatePoint> {
        let len = self.len();
        usize::try_from(selection)
            .ok()
            .filter(|k| (1..=len).contains(k))
            .map(|k| &self.series.points[k - 1])
            .ok_or(RateError::OutOfRange { index: selection, len })
    }

    /// Bolivianos received for `usd_amount` at the 1-based `selection`.
    pub fn convert(&self, usd_amount: f64, selection: i64) -> RateResult<f64> {
        let usd_amount = check_usd_amount(usd_amount)?;
        let point = self.get(selection)?;
        Ok(usd_amount * point.rate)
    }
}

/// The full projector output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projection {
    pub model:      TrendModel,
    pub historical: RateSeries,
    pub projected:  RateSeries,
    pub combined:   CombinedSeries,
}

pub struct TrendProjector;

impl TrendProjector {
    pub fn run(config: &ProjectorConfig) -> RateResult<Projection> {
        if config.historical_labels.len() != config.historical_rates.len() {
            return Err(RateError::invalid(
                "historical_labels",
                format!(
                    "{} labels for {} rates",
                    config.historical_labels.len(),
                    config.historical_rates.len()
                ),
            ));
        }

        let historical = RateSeries::from_parts(
            HISTORICAL_SERIES,
            &config.historical_labels,
            &config.historical_rates,
        );
        let model = TrendModel::fit(&config.historical_rates)?;
        let projected = project(
            &model,
            historical.len(),
            config.horizon_months,
            config.projection_start,
        );
        let combined = CombinedSeries::combine(&historical, &projected);

        log::info!(
            "projected {} months past {} historical points ({} total)",
            projected.len(),
            historical.len(),
            combined.len()
        );

        Ok(Projection { model, historical, projected, combined })
    }
}
