//! Before/after bleaching decay study
//!
//! Integrates the six default runs, prints a summary of each series and
//! writes the comparison figure to `bleach_decay.png`.
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

use decay_rs::output::plot_treatment_panels;
use decay_rs::solver::StepRegime;
use decay_rs::study::{Study, StudyConfig, StudyResult, Treatment};

const OUTPUT_PATH: &str = "bleach_decay.png";

fn print_section(title: &str) {
    println!("\n═══════════════════════════════════════════════════════");
    println!("  {title}");
    println!("═══════════════════════════════════════════════════════\n");
}

fn print_panel(result: &StudyResult, treatment: Treatment) {
    println!("{}:", treatment.title());
    println!(
        "  {:<18} {:>9} {:>12} {:>12} {:>12} {:>12}",
        "compound", "k [1/s]", "t½ [s]", "C_end", "exact", "regime"
    );

    for series in result.panel(treatment) {
        let regime = StepRegime::classify(-series.rate_constant, result.time_step());
        println!(
            "  {:<18} {:>9.4} {:>12.2} {:>12.6} {:>12.6} {:>12}",
            series.label,
            series.rate_constant,
            series.half_life(),
            series.final_concentration(),
            series.analytical_final(result.time_step()),
            regime
        );
    }
    println!();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = StudyConfig::default();

    print_section("Bleaching Chemicals - First-Order Decay");

    println!("Simulation:");
    println!("  C₀    : {} mol/L", config.initial_concentration);
    println!("  dt    : {} s", config.time_step);
    println!("  t_max : {} s", config.horizon);
    println!("  runs  : {}", config.runs.len());

    let result = Study::new(config).run()?;

    print_section("Summary");

    for treatment in Treatment::ALL {
        print_panel(&result, treatment);
    }

    if let (Some(slowest), Some(fastest)) = (result.slowest(), result.fastest()) {
        log::info!(
            "slowest decay: {} (C_end = {:.4}), fastest decay: {} (C_end = {:.4})",
            slowest.label,
            slowest.final_concentration(),
            fastest.label,
            fastest.final_concentration()
        );
    }

    plot_treatment_panels(&result, OUTPUT_PATH, None)?;
    println!("Figure: {OUTPUT_PATH}");

    Ok(())
}
