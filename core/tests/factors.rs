//! Form parsing for the seven economic factors.

use bobrate_core::{
    error::RateError,
    factors::{EconomicFactors, FactorField},
};
use std::collections::HashMap;

fn full_form() -> HashMap<String, String> {
    [
        ("gas_price", "3.5"),
        ("international_reserves", "2.1"),
        ("speculation", "0.05"),
        ("scarcity", "0.03"),
        ("legal_dollar_sale", "0.02"),
        ("inflation", "0.04"),
        ("political_stability", "0.8"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

#[test]
fn complete_form_parses() {
    let factors = EconomicFactors::from_form(&full_form()).unwrap();
    assert_eq!(factors.gas_price, 3.5);
    assert_eq!(factors.international_reserves, 2.1);
    assert_eq!(factors.political_stability, 0.8);
}

#[test]
fn legacy_field_names_are_accepted() {
    let form: HashMap<String, String> = FactorField::ALL
        .iter()
        .map(|f| (f.alias().to_string(), "0.5".to_string()))
        .collect();
    let factors = EconomicFactors::from_form(&form).unwrap();
    for field in FactorField::ALL {
        assert_eq!(factors.get(field), 0.5);
    }
}

#[test]
fn missing_field_is_invalid_input() {
    let mut form = full_form();
    form.remove("inflation");
    match EconomicFactors::from_form(&form) {
        Err(RateError::InvalidInput { field, .. }) => assert_eq!(field, "inflation"),
        other => panic!("expected InvalidInput, got {other:?}"),
    }
}

#[test]
fn non_numeric_field_is_invalid_input() {
    let mut form = full_form();
    form.insert("scarcity".into(), "high".into());
    let err = EconomicFactors::from_form(&form).unwrap_err();
    assert_eq!(err.kind(), "invalid_input");
    assert!(err.to_string().contains("scarcity"));
}

#[test]
fn out_of_range_values_are_accepted() {
    let mut form = full_form();
    form.insert("political_stability".into(), "7".into());
    form.insert("speculation".into(), "-2".into());
    let factors = EconomicFactors::from_form(&form).unwrap();
    assert_eq!(factors.political_stability, 7.0);
    assert_eq!(factors.speculation, -2.0);
}

#[test]
fn field_names_resolve_both_ways() {
    assert_eq!(FactorField::from_name("precio_gas"), Some(FactorField::GasPrice));
    assert_eq!(FactorField::from_name("gas_price"), Some(FactorField::GasPrice));
    assert_eq!(FactorField::from_name("exchange"), None);
}
