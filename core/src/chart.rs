//! The seam to whatever draws the charts.
//!
//! The core only hands over labelled series plus layout hints; turning
//! them into pixels belongs to the renderer.

use crate::{
    error::RateResult,
    projector::Projection,
    series::RateSeries,
    simulator::SimulationRun,
};
use serde::{Deserialize, Serialize};

pub trait ChartRenderer {
    type Output;

    /// Two panels: the historical reference on top, informal vs
    /// official below.
    fn render_simulation(&self, run: &SimulationRun) -> RateResult<Self::Output>;

    /// One panel overlaying historical and projected points, with a
    /// marker at the last historical month.
    fn render_projection(&self, projection: &Projection) -> RateResult<Self::Output>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineStyle {
    Solid,
    Dashed,
    Dotted,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartLine {
    pub legend: String,
    pub color:  String,
    pub style:  LineStyle,
    pub series: RateSeries,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoundaryMarker {
    pub label:  String,
    /// The x-axis label the marker sits on.
    pub at:     String,
    pub style:  LineStyle,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartPanel {
    pub title:   String,
    pub x_label: String,
    pub y_label: String,
    pub lines:   Vec<ChartLine>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker:  Option<BoundaryMarker>,
}

/// Renderer-agnostic description of a figure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartSpec {
    pub panels: Vec<ChartPanel>,
}

const X_LABEL: &str = "Month";
const Y_LABEL: &str = "Bolivianos per USD";

fn line(legend: &str, color: &str, style: LineStyle, series: &RateSeries) -> ChartLine {
    ChartLine {
        legend: legend.to_string(),
        color:  color.to_string(),
        style,
        series: series.clone(),
    }
}

impl ChartSpec {
    pub fn for_simulation(run: &SimulationRun) -> Self {
        let historical = ChartPanel {
            title:   "Black-market dollar, historical".into(),
            x_label: X_LABEL.into(),
            y_label: Y_LABEL.into(),
            lines:   vec![line("Black market", "green", LineStyle::Solid, &run.historical)],
            marker:  None,
        };
        let simulated = ChartPanel {
            title:   "Simulated dollar fluctuation in Bolivia".into(),
            x_label: X_LABEL.into(),
            y_label: Y_LABEL.into(),
            lines:   vec![
                line("Informal market", "blue", LineStyle::Solid, &run.informal),
                line("Official rate (BCB)", "red", LineStyle::Solid, &run.official),
            ],
            marker:  None,
        };
        Self { panels: vec![historical, simulated] }
    }

    pub fn for_projection(projection: &Projection) -> Self {
        let marker = projection
            .combined
            .boundary()
            .and_then(|i| projection.combined.points().get(i))
            .map(|p| BoundaryMarker {
                label: "Projection start".into(),
                at:    p.label.clone(),
                style: LineStyle::Dotted,
            });
        let panel = ChartPanel {
            title:   "Informal exchange rate: history and projection".into(),
            x_label: X_LABEL.into(),
            y_label: Y_LABEL.into(),
            lines:   vec![
                line("Historical", "blue", LineStyle::Solid, &projection.historical),
                line("Projection", "red", LineStyle::Dashed, &projection.projected),
            ],
            marker,
        };
        Self { panels: vec![panel] }
    }
}

/// Emits the chart description as pretty JSON for an external plotter.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonChartRenderer;

impl ChartRenderer for JsonChartRenderer {
    type Output = String;

    fn render_simulation(&self, run: &SimulationRun) -> RateResult<String> {
        Ok(serde_json::to_string_pretty(&ChartSpec::for_simulation(run))?)
    }

    fn render_projection(&self, projection: &Projection) -> RateResult<String> {
        Ok(serde_json::to_string_pretty(&ChartSpec::for_projection(projection))?)
    }
}
