//! The data model shared by both pipelines.

use crate::types::{MonthLabel, Rate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatePoint {
    pub label: MonthLabel,
    pub rate:  Rate,
}

/// An ordered run of (label, rate) pairs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateSeries {
    pub name:   String,
    pub points: Vec<RatePoint>,
}

impl RateSeries {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), points: Vec::new() }
    }

    /// Pair labels with rates. Extra entries on either side are dropped.
    pub fn from_parts(name: impl Into<String>, labels: &[MonthLabel], rates: &[Rate]) -> Self {
        let points = labels
            .iter()
            .zip(rates)
            .map(|(label, &rate)| RatePoint { label: label.clone(), rate })
            .collect();
        Self { name: name.into(), points }
    }

    pub fn push(&mut self, label: impl Into<MonthLabel>, rate: Rate) {
        self.points.push(RatePoint { label: label.into(), rate });
    }

    pub fn len(&self) -> usize { self.points.len() }

    pub fn is_empty(&self) -> bool { self.points.is_empty() }

    pub fn rates(&self) -> Vec<Rate> {
        self.points.iter().map(|p| p.rate).collect()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.points.iter().map(|p| p.label.as_str()).collect()
    }

    pub fn first(&self) -> Option<&RatePoint> { self.points.first() }

    pub fn last(&self) -> Option<&RatePoint> { self.points.last() }
}

/// One simulated month: what each factor contributed and the total applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FluctuationStep {
    pub month:           MonthLabel,
    pub speculation:     f64,
    pub scarcity:        f64,
    pub legal_sale:      f64,
    pub inflation:       f64,
    pub stability:       f64,
    pub gas_impact:      f64,
    pub reserves_impact: f64,
    pub total:           f64,
}

impl FluctuationStep {
    /// Components in summation order.
    pub fn components(&self) -> [f64; 7] {
        [
            self.speculation,
            self.scarcity,
            self.legal_sale,
            self.inflation,
            self.stability,
            self.gas_impact,
            self.reserves_impact,
        ]
    }
}
