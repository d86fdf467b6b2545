//! # Beam CLI Application
//!
//! Terminal front end for the continuous-beam engine: prompts for a span
//! and load, solves a simple beam with a catalogue steel section, and
//! prints reactions, point results and a JSON dump of the envelope.

use std::io::{self, BufRead, Write};

use beam_core::analysis::{result_at, solve};
use beam_core::materials::{section_properties, steel_section, Axis};
use beam_core::model::{BeamModel, Load};

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn prompt_str(prompt: &str, default: &str) -> String {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default.to_string();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default.to_string();
    }

    let trimmed = input.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

fn main() {
    println!("Beam CLI - Continuous Beam Calculator");
    println!("=====================================");
    println!();

    let span_m = prompt_f64("Enter beam span (m) [6.0]: ", 6.0);
    let load_knm = prompt_f64("Enter uniform load (kN/m) [10.0]: ", 10.0);
    let designation = prompt_str("Enter steel section [H-300x150x6.5x9]: ", "H-300x150x6.5x9");

    let catalogue = match steel_section(&designation) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {} ({})", e, e.error_code());
            std::process::exit(1);
        }
    };
    let section = match section_properties(&designation, Axis::Strong) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {} ({})", e, e.error_code());
            std::process::exit(1);
        }
    };

    let model = BeamModel::simple_span(span_m).with_load(Load::distributed(load_knm, 0.0, span_m));

    match solve(&model, &section) {
        Ok(result) => {
            println!();
            println!("═══════════════════════════════════════");
            println!("  BEAM ANALYSIS RESULTS");
            println!("═══════════════════════════════════════");
            println!();
            println!("Input:");
            println!("  Span:     {:.2} m (simply supported)", span_m);
            println!("  Load:     {:.1} kN/m uniform", load_knm);
            println!(
                "  Section:  {} (Ix = {:.0} cm4, Zx = {:.0} cm3)",
                designation, catalogue.ix_cm4, catalogue.zx_cm3
            );
            println!();
            println!("Reactions:");
            for r in &result.reactions {
                println!("  R_{} = {:8.2} kN  (x = {:.2} m)", r.label, r.value, r.x);
            }
            println!();
            println!("Envelope:");
            println!(
                "  M_max = {:8.2} kN·m  at x = {:.2} m",
                result.bounds.max_m_pos, result.bounds.max_m_pos_x
            );
            println!(
                "  M_min = {:8.2} kN·m  at x = {:.2} m",
                result.bounds.max_m_neg, result.bounds.max_m_neg_x
            );
            println!("  Q_max = {:8.2} kN", result.bounds.max_shear);
            println!(
                "  δ_max = {:8.3} mm    at x = {:.2} m",
                result.bounds.max_deflection, result.bounds.max_def_x
            );
            println!(
                "  σ     = {:8.2} N/mm² (sagging)",
                result.bounds.max_sigma_pos
            );
            println!();

            println!("Quarter-point results:");
            for k in 0..=4 {
                let x = span_m * k as f64 / 4.0;
                let p = result_at(x, &result, &section, None);
                println!(
                    "  x = {:5.2} m:  Q = {:8.2} kN   M = {:8.2} kN·m   δ = {:7.3} mm",
                    x, p.q, p.m, p.deflection
                );
            }

            println!();
            match serde_json::to_string_pretty(&result.bounds) {
                Ok(json) => {
                    println!("Envelope as JSON:");
                    println!("{}", json);
                }
                Err(e) => eprintln!("JSON serialization failed: {}", e),
            }
        }
        Err(e) => {
            eprintln!("Error: {} ({})", e, e.error_code());
            std::process::exit(1);
        }
    }
}
