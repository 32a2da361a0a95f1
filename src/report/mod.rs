//! Textbericht der Ausgleichung.
//!
//! Der Bericht ist ein reiner Textblock mit sechs nummerierten Abschnitten
//! und fester Spaltenbreite; die Trennlinien sind 120 Zeichen breit.

use crate::core::TraverseSolution;
use crate::project::ProjectInfo;
use crate::shared::Units;

/// Breite der Trennlinien.
const RULE_WIDTH: usize = 120;

/// Baut den vollständigen Berechnungsbericht als mehrzeiligen Text.
pub fn render_report(solution: &TraverseSolution, info: &ProjectInfo, units: Units) -> String {
    let heavy = "=".repeat(RULE_WIDTH);
    let light = "-".repeat(RULE_WIDTH);
    let u = units.label();

    let angular = &solution.metrics.angular;
    let linear = &solution.metrics.linear;

    let mut lines: Vec<String> = Vec::new();

    lines.push(heavy.clone());
    lines.push("POLYGON TRAVERSE CALCULATION RESULTS".to_string());
    lines.push(heavy.clone());
    lines.push(String::new());

    // Projektkopf nur, wenn mindestens ein Feld ausgefüllt ist.
    if !info.is_empty() {
        lines.push("PROJECT INFORMATION".to_string());
        lines.push(light.clone());
        if !info.project_name.is_empty() {
            lines.push(format!("Project Name: {}", info.project_name));
        }
        if !info.user_name.is_empty() {
            lines.push(format!("User Name: {}", info.user_name));
        }
        if !info.project_address.is_empty() {
            lines.push(format!("Project Address: {}", info.project_address));
        }
        if !info.traverse_id.is_empty() {
            lines.push(format!("Traverse ID: {}", info.traverse_id));
        }
        lines.push(format!("Units: {}", units.name()));
        lines.push(format!(
            "Date: {}",
            chrono::Local::now().format("%m/%d/%Y %I:%M %p")
        ));
        lines.push(String::new());
    }

    lines.push("COMPUTED INTERIOR ANGLES FROM BEARINGS".to_string());
    lines.push(light.clone());
    lines.push(format!(
        "{:<6} {:<20} {:<20}",
        "Side", "Bearing", "Interior Angle"
    ));
    lines.push(light.clone());
    for leg in &solution.legs {
        lines.push(format!(
            "{:<6} {:>15.6}°   {:>15.6}°",
            leg.side, leg.observed_azimuth, leg.interior_angle
        ));
    }
    lines.push(String::new());

    lines.push("1. ANGULAR MISCLOSURE CHECK".to_string());
    lines.push(light.clone());
    lines.push(format!("Number of sides: {}", solution.metrics.sides));
    lines.push(format!(
        "Theoretical sum of interior angles: {:.4}°",
        angular.theoretical_sum
    ));
    lines.push(format!(
        "Actual sum of interior angles: {:.4}°",
        angular.actual_sum
    ));
    lines.push(format!("Angular misclosure: {:.4}°", angular.misclosure));
    lines.push(format!(
        "Allowable error (±√n minutes): ±{:.2}'",
        angular.allowable_error_minutes
    ));
    lines.push(String::new());
    lines.push(format!(
        "Correction per angle: {:.6}°",
        angular.correction_per_angle
    ));
    lines.push(String::new());

    lines.push("2. ADJUSTED ANGLES AND AZIMUTHS".to_string());
    lines.push(light.clone());
    lines.push(format!(
        "{:<6} {:<20} {:<20} {:<20} {:<20}",
        "Side", "Original Angle", "Correction", "Adjusted Angle", "Azimuth"
    ));
    lines.push(light.clone());
    for leg in &solution.legs {
        lines.push(format!(
            "{:<6} {:>15.6}°   {:>15.6}°   {:>15.6}°   {:>15.6}°",
            leg.side,
            leg.interior_angle,
            angular.correction_per_angle,
            leg.adjusted_angle,
            leg.azimuth
        ));
    }
    lines.push(String::new());

    lines.push("3. LATITUDES AND DEPARTURES".to_string());
    lines.push(light.clone());
    lines.push(format!(
        "{:<6} {:<15} {:<20} {:<20} {:<20}",
        "Side", "Distance", "Azimuth", "Latitude", "Departure"
    ));
    lines.push(light.clone());
    for leg in &solution.legs {
        lines.push(format!(
            "{:<6} {:>12.3} {u}   {:>15.6}°   {:>15.6} {u}   {:>15.6} {u}",
            leg.side, leg.distance, leg.azimuth, leg.components.y, leg.components.x
        ));
    }
    lines.push(light.clone());
    lines.push(format!(
        "{:<6} {:>12.3} {u}   {:<19} {:>15.6} {u}   {:>15.6} {u}",
        "TOTAL", linear.perimeter, "", linear.component_sum.y, linear.component_sum.x
    ));
    lines.push(String::new());

    lines.push("4. LINEAR MISCLOSURE".to_string());
    lines.push(light.clone());
    lines.push(format!(
        "Error in latitude (ΣL): {:.6} {u}",
        linear.component_sum.y
    ));
    lines.push(format!(
        "Error in departure (ΣD): {:.6} {u}",
        linear.component_sum.x
    ));
    lines.push(format!(
        "Total linear misclosure: {:.6} {u}",
        linear.misclosure
    ));
    lines.push(format!("Relative accuracy: {}", linear.relative_accuracy));
    lines.push(String::new());

    lines.push("5. CORRECTIONS AND ADJUSTED VALUES (Bowditch Method)".to_string());
    lines.push(light.clone());
    lines.push(format!(
        "{:<6} {:<15} {:<15} {:<20} {:<20}",
        "Side", "Lat Corr", "Dep Corr", "Adjusted Lat", "Adjusted Dep"
    ));
    lines.push(light.clone());
    for leg in &solution.legs {
        lines.push(format!(
            "{:<6} {:>12.6} {u}  {:>12.6} {u}  {:>15.6} {u}   {:>15.6} {u}",
            leg.side,
            leg.correction.y,
            leg.correction.x,
            leg.adjusted_components.y,
            leg.adjusted_components.x
        ));
    }
    let adjusted_lat_sum: f64 = solution.legs.iter().map(|l| l.adjusted_components.y).sum();
    let adjusted_dep_sum: f64 = solution.legs.iter().map(|l| l.adjusted_components.x).sum();
    lines.push(light.clone());
    lines.push(format!(
        "{:<6} {:<15} {:<15} {:>15.6} {u}   {:>15.6} {u}",
        "TOTAL", "", "", adjusted_lat_sum, adjusted_dep_sum
    ));
    lines.push(String::new());

    lines.push(heavy.clone());
    lines.push("6. FINAL CORRECTED BEARINGS AND DISTANCES".to_string());
    lines.push(heavy.clone());
    lines.push(format!(
        "{:<6} {:<25} {:<20}",
        "Side", "Corrected Bearing", "Corrected Distance"
    ));
    lines.push(light.clone());
    for leg in &solution.legs {
        lines.push(format!(
            "{:<6} {:<25} {:>15.3} {u}",
            leg.side, leg.corrected_bearing, leg.corrected_distance
        ));
    }
    let corrected_total: f64 = solution.legs.iter().map(|l| l.corrected_distance).sum();
    lines.push(light.clone());
    lines.push(format!("{:<6} {:<25} {:>15.3} {u}", "TOTAL", "", corrected_total));
    lines.push(String::new());

    lines.push(heavy.clone());
    lines.push("CALCULATION COMPLETED SUCCESSFULLY".to_string());
    lines.push(heavy);

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{solve, LegObservation, Traverse};

    fn square_solution() -> TraverseSolution {
        let observations = vec![
            LegObservation::new("N90.0000E", "100"),
            LegObservation::new("S0.0000E", "100"),
            LegObservation::new("S90.0000W", "100"),
            LegObservation::new("N0.0000W", "100"),
        ];
        let traverse =
            Traverse::from_observations(&observations, false).expect("Quadrat muss validieren");
        solve(&traverse).expect("Quadrat muss loesbar sein")
    }

    #[test]
    fn test_alle_abschnitte_vorhanden() {
        let report = render_report(&square_solution(), &ProjectInfo::default(), Units::Metric);

        assert!(report.contains("POLYGON TRAVERSE CALCULATION RESULTS"));
        assert!(report.contains("COMPUTED INTERIOR ANGLES FROM BEARINGS"));
        assert!(report.contains("1. ANGULAR MISCLOSURE CHECK"));
        assert!(report.contains("2. ADJUSTED ANGLES AND AZIMUTHS"));
        assert!(report.contains("3. LATITUDES AND DEPARTURES"));
        assert!(report.contains("4. LINEAR MISCLOSURE"));
        assert!(report.contains("5. CORRECTIONS AND ADJUSTED VALUES (Bowditch Method)"));
        assert!(report.contains("6. FINAL CORRECTED BEARINGS AND DISTANCES"));
        assert!(report.contains("CALCULATION COMPLETED SUCCESSFULLY"));
        assert!(report.contains("Relative accuracy: Perfect"));
    }

    #[test]
    fn test_leerer_projektkopf_wird_ausgelassen() {
        let report = render_report(&square_solution(), &ProjectInfo::default(), Units::Metric);
        assert!(!report.contains("PROJECT INFORMATION"));
        assert!(!report.contains("Date: "));
    }

    #[test]
    fn test_projektkopf_mit_inhalt() {
        let info = ProjectInfo {
            project_name: "Flurstueck 17".to_string(),
            user_name: String::new(),
            project_address: String::new(),
            traverse_id: "PZ-2024-03".to_string(),
        };
        let report = render_report(&square_solution(), &info, Units::Metric);

        assert!(report.contains("PROJECT INFORMATION"));
        assert!(report.contains("Project Name: Flurstueck 17"));
        assert!(report.contains("Traverse ID: PZ-2024-03"));
        assert!(report.contains("Units: Meters"));
        assert!(report.contains("Date: "));
        assert!(!report.contains("User Name:"));
    }

    #[test]
    fn test_drei_summenzeilen() {
        let report = render_report(&square_solution(), &ProjectInfo::default(), Units::Metric);
        let totals = report.lines().filter(|l| l.starts_with("TOTAL")).count();
        assert_eq!(totals, 3);
        assert!(report.contains("Number of sides: 4"));
    }

    #[test]
    fn test_englische_einheiten() {
        let info = ProjectInfo {
            project_name: "Boundary".to_string(),
            ..ProjectInfo::default()
        };
        let report = render_report(&square_solution(), &info, Units::English);
        assert!(report.contains("Units: Feet"));
        assert!(report.contains(" ft"));
        assert!(!report.contains(" m\n"));
    }

    #[test]
    fn test_trennlinienbreite() {
        let report = render_report(&square_solution(), &ProjectInfo::default(), Units::Metric);
        let first = report.lines().next().expect("Bericht ist nicht leer");
        assert_eq!(first.len(), 120);
        assert!(first.chars().all(|c| c == '='));
    }
}
