
use approx::assert_abs_diff_eq;
use greeks_lib::{
    value_option, OptionContract, OptionType, PricingError, PricingModel, TRADING_DAYS_PER_YEAR,
};
use test_utils::{load_reference_values, random_contract, seeded_rng};

/// Every measure matches the independently computed reference table.
#[test]
fn test_reference_values() {
    let rows = load_reference_values().expect("Failed to load reference values");
    assert!(rows.len() >= 10, "reference table looks truncated");

    for row in &rows {
        let model = row.model();
        let label = row.describe();
        assert_abs_diff_eq!(model.premium(), row.premium, epsilon = 1e-8);
        assert_abs_diff_eq!(model.delta(), row.delta, epsilon = 1e-8);
        assert_abs_diff_eq!(model.gamma_one_percent(), row.gamma_one_percent, epsilon = 1e-8);
        assert_abs_diff_eq!(model.vega_one_percent(), row.vega_one_percent, epsilon = 1e-8);
        assert_abs_diff_eq!(model.theta_one_day(), row.theta_one_day, epsilon = 1e-8);
        assert_abs_diff_eq!(model.rho_one_percent(), row.rho_one_percent, epsilon = 1e-8);
        assert!(model.valuation().premium.is_finite(), "{label}");
    }
}

/// C - P = S - K·e^{-rT} for sampled contracts.
#[test]
fn test_put_call_parity_sampled() {
    let mut rng = seeded_rng();
    for _ in 0..500 {
        let contract = random_contract(&mut rng);
        let call = PricingModel::new(
            OptionContract::new(
                contract.spot(),
                contract.strike(),
                contract.time_to_maturity(),
                contract.risk_free_rate(),
                contract.volatility(),
                OptionType::Call,
            )
            .unwrap(),
        );
        let put = PricingModel::new(
            OptionContract::new(
                contract.spot(),
                contract.strike(),
                contract.time_to_maturity(),
                contract.risk_free_rate(),
                contract.volatility(),
                OptionType::Put,
            )
            .unwrap(),
        );
        let forward_value = contract.spot() - contract.strike() * contract.discount_factor();
        assert!(
            (call.premium() - put.premium() - forward_value).abs() < 1e-6,
            "parity violated for {:?}",
            contract
        );
    }
}

/// Expiry prices at intrinsic value regardless of volatility and rate.
#[test]
fn test_expiry_shortcut() {
    for (volatility, rate) in [(0.3, 0.02), (1.5, -0.01), (0.0, 0.10)] {
        let call = value_option(100.0, 90.0, 0.0, rate, volatility, OptionType::Call).unwrap();
        let put = value_option(100.0, 90.0, 0.0, rate, volatility, OptionType::Put).unwrap();
        assert_eq!(call.premium, 10.0);
        assert_eq!(put.premium, 0.0);
    }
}

/// Premium never decreases as volatility rises.
#[test]
fn test_premium_monotonic_in_volatility() {
    let vols: Vec<f64> = (1..=200).map(|i| f64::from(i) * 0.01).collect();
    for option_type in [OptionType::Call, OptionType::Put] {
        for strike in [70.0, 90.0, 100.0, 110.0, 140.0] {
            for days in [1.0, 22.0, 60.0, 260.0] {
                let premiums: Vec<f64> = vols
                    .iter()
                    .map(|&vol| {
                        let contract = OptionContract::new(
                            100.0,
                            strike,
                            days / TRADING_DAYS_PER_YEAR,
                            0.02,
                            vol,
                            option_type,
                        )
                        .unwrap();
                        PricingModel::new(contract).premium()
                    })
                    .collect();
                for pair in premiums.windows(2) {
                    assert!(
                        pair[1] >= pair[0] - 1e-12,
                        "{option_type} K={strike} days={days}: {} then {}",
                        pair[0],
                        pair[1]
                    );
                }
            }
        }
    }
}

#[test]
fn test_delta_bounds_sampled() {
    let mut rng = seeded_rng();
    for _ in 0..500 {
        let contract = random_contract(&mut rng);
        let delta = PricingModel::new(contract).delta();
        match contract.option_type() {
            OptionType::Call => assert!((0.0..=1.0).contains(&delta), "{delta}"),
            OptionType::Put => assert!((-1.0..=0.0).contains(&delta), "{delta}"),
        }
    }
}

/// Greeks stay finite on every validated contract, expired ones included.
#[test]
fn test_greeks_finite_sampled() {
    let mut rng = seeded_rng();
    for i in 0..300 {
        let mut contract = random_contract(&mut rng);
        if i % 10 == 0 {
            contract = OptionContract::new(
                contract.spot(),
                contract.strike(),
                0.0,
                contract.risk_free_rate(),
                contract.volatility(),
                contract.option_type(),
            )
            .unwrap();
        }
        let greeks = PricingModel::new(contract).greeks();
        for value in [greeks.delta, greeks.gamma, greeks.vega, greeks.theta, greeks.rho] {
            assert!(value.is_finite(), "{:?} -> {:?}", contract, greeks);
        }
    }
}

#[test]
fn test_unrecognized_variant() {
    let result = OptionContract::from_label(100.0, 105.0, 0.25, 0.02, 0.3, "straddle");
    match result {
        Err(PricingError::InvalidInput { message }) => assert!(message.contains("straddle")),
        other => panic!("expected InvalidInput, got {other:?}"),
    }
}

#[test]
fn test_label_variants_price_identically() {
    let full = OptionContract::from_label(100.0, 105.0, 0.25, 0.02, 0.3, "Put").unwrap();
    let short = OptionContract::from_label(100.0, 105.0, 0.25, 0.02, 0.3, "p").unwrap();
    assert_eq!(
        PricingModel::new(full).premium(),
        PricingModel::new(short).premium()
    );
}

#[test]
fn test_value_option_rejects_invalid_contract() {
    let result = value_option(100.0, 105.0, 0.25, 0.02, 0.0, OptionType::Call);
    assert!(matches!(result, Err(PricingError::InvalidInput { .. })));
}

/// Long-dated gamma is lower than short-dated gamma at the money.
#[test]
fn test_gamma_concentrates_near_expiry() {
    let short = value_option(100.0, 100.0, 5.0 / 260.0, 0.02, 0.3, OptionType::Call).unwrap();
    let long = value_option(100.0, 100.0, 1.0, 0.02, 0.3, OptionType::Call).unwrap();
    assert!(short.greeks.gamma > long.greeks.gamma);
    assert!(short.greeks.vega < long.greeks.vega);
}
