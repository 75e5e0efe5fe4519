use anyhow::Result;
use greeks_lib::{
    default_configs, EngineConfig, ImpliedVolSolver, OptionContract, OptionType, PricingModel,
};

fn main() -> Result<()> {
    let contract = OptionContract::new(100.0, 105.0, 60.0 / 260.0, 0.02, 0.30, OptionType::Call)?;

    println!("Greeks-lib Default Configuration Examples\n");

    let presets = [
        ("Standard Configuration (published constants)", default_configs::standard()),
        ("Fine Configuration (research, validation)", default_configs::fine()),
        ("Coarse Configuration (quick scans)", default_configs::coarse()),
    ];

    for (index, (title, config)) in presets.iter().enumerate() {
        println!("{}. {title}:", index + 1);
        println!("   Trading days per year: {}", config.bumps.trading_days_per_year);
        println!("   Spot bump: ±{:.2}%", config.bumps.spot_bump * 100.0);
        println!("   Volatility bump: ±{:.2} vol points", config.bumps.volatility_bump * 100.0);
        println!("   Rate bump: ±{:.2}%", config.bumps.rate_bump * 100.0);
        println!("   Solver tolerance: {:.1e}", config.solver.accuracy);
        println!("   Volatility ceiling: {}", config.solver.upper_bound);
        println!("   Max bisection steps: {}", config.solver.max_iterations());

        let model = PricingModel::with_bumps(contract, config.bumps)?;
        let greeks = model.greeks();
        println!(
            "   Greeks: delta {:.4}, gamma {:.4}, vega {:.4}, theta {:.4}, rho {:.4}",
            greeks.delta, greeks.gamma, greeks.vega, greeks.theta, greeks.rho
        );

        let solver = ImpliedVolSolver::with_config(config.solver)?;
        let solution = solver.solve_detailed(
            contract.spot(),
            contract.strike(),
            contract.time_to_maturity(),
            contract.risk_free_rate(),
            model.premium(),
            contract.option_type(),
        )?;
        println!(
            "   Implied vol round trip: {:.6} in {} steps\n",
            solution.volatility, solution.iterations
        );
    }

    // Overrides from TOML keep every other field at its default
    let custom = EngineConfig::from_toml_str(
        r#"
        [bumps]
        trading_days_per_year = 252.0

        [solver]
        upper_bound = 3.0
        "#,
    )?;
    println!("4. Custom TOML Configuration:");
    println!("   {custom:?}");

    Ok(())
}
