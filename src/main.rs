//! Polygonzug-Rechner.
//!
//! Kommandozeilenwerkzeug für geschlossene Polygonzüge: liest eine
//! `.trv`-Projektdatei, gleicht Winkel und Strecken nach Bowditch aus
//! und schreibt den Berechnungsbericht.

use anyhow::{bail, Context, Result};
use clap::Parser;
use polygonzug_rechner::{
    load_project_file, render_report, solve, CalculatorOptions, Traverse, TraverseType, Units,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "polygonzug-rechner")]
#[command(about = "Auswertung geschlossener Polygonzuege nach der Bowditch-Methode")]
#[command(version)]
struct Args {
    /// Pfad zur .trv-Projektdatei
    project: PathBuf,

    /// Bericht in diese Datei schreiben statt auf stdout
    #[arg(long, short)]
    out: Option<PathBuf>,

    /// Einheitensystem der Ausgabe (metric oder english); Standard: Projekteinstellung
    #[arg(long)]
    units: Option<Units>,
}

fn main() -> Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = Args::parse();

    log::info!(
        "Polygonzug-Rechner v{} startet...",
        env!("CARGO_PKG_VERSION")
    );

    let options = CalculatorOptions::load_from_file(&CalculatorOptions::config_path());

    let project = load_project_file(&args.project)?;
    if project.settings.traverse_type == TraverseType::Open {
        bail!("Offene Polygonzuege werden nicht unterstuetzt (nur geschlossene)");
    }

    let traverse =
        Traverse::from_observations(&project.observations(), options.strict_quadrant_angles)
            .context("Eingabedaten sind unvollstaendig oder ungueltig")?;
    let solution = solve(&traverse)?;

    let units = args.units.unwrap_or(project.settings.units);
    let report = render_report(&solution, &project.project_info, units);

    match args.out {
        Some(path) => {
            std::fs::write(&path, &report).with_context(|| {
                format!("Bericht '{}' konnte nicht geschrieben werden", path.display())
            })?;
            log::info!("Bericht geschrieben nach: {}", path.display());
        }
        None => println!("{report}"),
    }

    Ok(())
}
