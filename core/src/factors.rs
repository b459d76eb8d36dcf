//! The seven caller-supplied economic factors.
//!
//! Values are not range-checked: an extreme input simply produces an
//! extreme walk.

use crate::{
    error::{RateError, RateResult},
    input::parse_number,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EconomicFactors {
    /// USD.
    pub gas_price:              f64,
    /// Billions of USD.
    pub international_reserves: f64,
    pub speculation:            f64,
    pub scarcity:               f64,
    pub legal_dollar_sale:      f64,
    pub inflation:              f64,
    /// 0 (unstable) to 1 (stable).
    pub political_stability:    f64,
}

impl EconomicFactors {
    /// Factors that leave the rate untouched every month.
    pub fn neutral() -> Self {
        Self {
            gas_price:              3.50,
            international_reserves: 5.0,
            speculation:            0.0,
            scarcity:               0.0,
            legal_dollar_sale:      0.0,
            inflation:              0.0,
            political_stability:    1.0,
        }
    }

    pub fn get(&self, field: FactorField) -> f64 {
        match field {
            FactorField::GasPrice              => self.gas_price,
            FactorField::InternationalReserves => self.international_reserves,
            FactorField::Speculation           => self.speculation,
            FactorField::Scarcity              => self.scarcity,
            FactorField::LegalDollarSale       => self.legal_dollar_sale,
            FactorField::Inflation             => self.inflation,
            FactorField::PoliticalStability    => self.political_stability,
        }
    }

    pub fn set(&mut self, field: FactorField, value: f64) {
        match field {
            FactorField::GasPrice              => self.gas_price = value,
            FactorField::InternationalReserves => self.international_reserves = value,
            FactorField::Speculation           => self.speculation = value,
            FactorField::Scarcity              => self.scarcity = value,
            FactorField::LegalDollarSale       => self.legal_dollar_sale = value,
            FactorField::Inflation             => self.inflation = value,
            FactorField::PoliticalStability    => self.political_stability = value,
        }
    }

    /// Build factors from a submitted form. Every field is required;
    /// each may appear under its form key or its legacy alias.
    pub fn from_form(form: &HashMap<String, String>) -> RateResult<Self> {
        let mut factors = Self::neutral();
        for field in FactorField::ALL {
            let raw = form
                .get(field.key())
                .or_else(|| form.get(field.alias()))
                .ok_or_else(|| RateError::invalid(field.key(), "field is missing"))?;
            factors.set(field, parse_number(field.key(), raw)?);
        }
        Ok(factors)
    }
}

/// Form fields in submission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FactorField {
    GasPrice,
    InternationalReserves,
    Speculation,
    Scarcity,
    LegalDollarSale,
    Inflation,
    PoliticalStability,
}

impl FactorField {
    pub const ALL: [FactorField; 7] = [
        Self::GasPrice,
        Self::InternationalReserves,
        Self::Speculation,
        Self::Scarcity,
        Self::LegalDollarSale,
        Self::Inflation,
        Self::PoliticalStability,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Self::GasPrice              => "gas_price",
            Self::InternationalReserves => "international_reserves",
            Self::Speculation           => "speculation",
            Self::Scarcity              => "scarcity",
            Self::LegalDollarSale       => "legal_dollar_sale",
            Self::Inflation             => "inflation",
            Self::PoliticalStability    => "political_stability",
        }
    }

    /// Legacy Spanish-language form keys.
    pub fn alias(&self) -> &'static str {
        match self {
            Self::GasPrice              => "precio_gas",
            Self::InternationalReserves => "reservas_internacionales",
            Self::Speculation           => "especulacion",
            Self::Scarcity              => "escasez",
            Self::LegalDollarSale       => "venta_legal_dolar",
            Self::Inflation             => "inflacion",
            Self::PoliticalStability    => "estabilidad_politica",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|f| f.key() == name || f.alias() == name)
    }
}
