
use greeks_lib::{
    solve_implied_volatility, ImpliedVolSolver, OptionContract, OptionType,
    PricingError, PricingModel, SOLVER_ACCURACY, TRADING_DAYS_PER_YEAR,
};
use test_utils::load_reference_values;

fn premium(
    spot: f64,
    strike: f64,
    days: f64,
    rate: f64,
    volatility: f64,
    option_type: OptionType,
) -> f64 {
    let contract = OptionContract::new(
        spot,
        strike,
        days / TRADING_DAYS_PER_YEAR,
        rate,
        volatility,
        option_type,
    )
    .expect("valid contract");
    PricingModel::new(contract).premium()
}

/// Price a 30% call, then recover the 30% from that premium.
#[test]
fn test_round_trip_reference_case() {
    let t = 60.0 / TRADING_DAYS_PER_YEAR;
    let observed = premium(100.0, 105.0, 60.0, 0.02, 0.30, OptionType::Call);
    let iv = solve_implied_volatility(100.0, 105.0, t, 0.02, observed, OptionType::Call)
        .expect("premium is reachable");
    assert!(
        (iv - 0.30).abs() <= SOLVER_ACCURACY,
        "recovered {iv}, expected 0.30"
    );
}

/// Round trips across moneyness, maturity and volatility levels for both variants.
#[test]
fn test_round_trip_grid() {
    for option_type in [OptionType::Call, OptionType::Put] {
        for strike in [90.0, 100.0, 110.0] {
            for days in [22.0, 60.0, 130.0, 260.0] {
                for vol in [0.1, 0.3, 0.8, 1.5] {
                    let observed = premium(100.0, strike, days, 0.02, vol, option_type);
                    let iv = solve_implied_volatility(
                        100.0,
                        strike,
                        days / TRADING_DAYS_PER_YEAR,
                        0.02,
                        observed,
                        option_type,
                    )
                    .unwrap_or_else(|e| {
                        panic!("{option_type} K={strike} days={days} vol={vol}: {e}")
                    });
                    assert!(
                        (iv - vol).abs() <= SOLVER_ACCURACY,
                        "{option_type} K={strike} days={days}: recovered {iv}, expected {vol}"
                    );
                }
            }
        }
    }
}

/// Non-expired reference rows invert back to their input volatility.
#[test]
fn test_round_trip_reference_rows() {
    let rows = load_reference_values().expect("Failed to load reference values");
    for row in rows.iter().filter(|row| row.trading_days > 0) {
        let contract = row.contract();
        let iv = ImpliedVolSolver::new()
            .solve_for_contract(&contract, row.premium)
            .unwrap_or_else(|e| panic!("{}: {e}", row.describe()));
        assert!(
            (iv.volatility - row.volatility).abs() <= SOLVER_ACCURACY,
            "{}: recovered {}",
            row.describe(),
            iv.volatility
        );
    }
}

/// A call premium below the reachable floor (intrinsic less discounting) has no solution.
#[test]
fn test_rejects_premium_below_floor() {
    let t = 60.0 / TRADING_DAYS_PER_YEAR;
    let floor = premium(110.0, 100.0, 60.0, 0.02, SOLVER_ACCURACY, OptionType::Call);
    let result = solve_implied_volatility(110.0, 100.0, t, 0.02, floor - 0.5, OptionType::Call);
    match result {
        Err(PricingError::NoSolution { low_premium, .. }) => {
            assert!((low_premium - floor).abs() < 1e-12);
        }
        other => panic!("expected NoSolution, got {other:?}"),
    }
}

/// A premium above the 200%-volatility premium has no solution.
#[test]
fn test_rejects_premium_above_ceiling() {
    let t = 60.0 / TRADING_DAYS_PER_YEAR;
    let ceiling = premium(100.0, 105.0, 60.0, 0.02, 2.0, OptionType::Put);
    let result = solve_implied_volatility(100.0, 105.0, t, 0.02, ceiling + 0.01, OptionType::Put);
    match result {
        Err(PricingError::NoSolution { high_premium, .. }) => {
            assert!((high_premium - ceiling).abs() < 1e-12);
        }
        other => panic!("expected NoSolution, got {other:?}"),
    }
}

#[test]
fn test_rejects_expired_contract() {
    let result = solve_implied_volatility(100.0, 90.0, 0.0, 0.02, 10.0, OptionType::Call);
    assert!(matches!(result, Err(PricingError::NoSolution { .. })));
}

#[test]
fn test_converges_within_iteration_budget() {
    let solver = ImpliedVolSolver::new();
    let t = 22.0 / TRADING_DAYS_PER_YEAR;
    let observed = premium(100.0, 100.0, 22.0, 0.02, 0.25, OptionType::Put);
    let solution = solver
        .solve_detailed(100.0, 100.0, t, 0.02, observed, OptionType::Put)
        .unwrap();
    assert!(solution.iterations <= 15, "{} iterations", solution.iterations);
}

/// A wider, tighter configuration loaded from TOML recovers volatilities beyond 200%.
#[cfg(feature = "serde")]
#[test]
fn test_solver_from_toml_config() {
    use greeks_lib::EngineConfig;

    let config = EngineConfig::from_toml_str(
        r#"
        [solver]
        accuracy = 0.000001
        upper_bound = 4.0
        "#,
    )
    .expect("valid configuration");
    let solver = ImpliedVolSolver::with_config(config.solver).unwrap();

    let t = 130.0 / TRADING_DAYS_PER_YEAR;
    let observed = premium(100.0, 100.0, 130.0, 0.02, 2.5, OptionType::Call);
    let iv = solver
        .solve(100.0, 100.0, t, 0.02, observed, OptionType::Call)
        .unwrap();
    assert!((iv - 2.5).abs() < 1e-5, "{iv}");

    // The default solver cannot reach it
    let default_result = solve_implied_volatility(100.0, 100.0, t, 0.02, observed, OptionType::Call);
    assert!(matches!(default_result, Err(PricingError::NoSolution { .. })));
}

/// Call and put with the same inputs imply the same volatility through parity.
#[test]
fn test_call_and_put_imply_same_volatility() {
    let t = 60.0 / TRADING_DAYS_PER_YEAR;
    let call = premium(100.0, 105.0, 60.0, 0.02, 0.42, OptionType::Call);
    let put = premium(100.0, 105.0, 60.0, 0.02, 0.42, OptionType::Put);
    let call_iv = solve_implied_volatility(100.0, 105.0, t, 0.02, call, OptionType::Call).unwrap();
    let put_iv = solve_implied_volatility(100.0, 105.0, t, 0.02, put, OptionType::Put).unwrap();
    assert!((call_iv - put_iv).abs() <= 2.0 * SOLVER_ACCURACY);
}
