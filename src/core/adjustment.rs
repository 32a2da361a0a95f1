//! Ausgleichung geschlossener Polygonzüge.
//!
//! Rechenweg: aus den beobachteten Azimuten werden Innenwinkel abgeleitet,
//! der Winkelwiderspruch gleichmäßig verteilt, die Azimute neu fortgepflanzt
//! und der lineare Widerspruch nach Bowditch auf die Seiten verteilt.

use crate::core::bearing::format_bearing;
use crate::core::error::TraverseError;
use crate::core::traverse::Traverse;
use glam::DVec2;
use std::fmt;

/// Schwelle, unterhalb derer ein linearer Widerspruch als exakter
/// Abschluss gilt (Rundungsrauschen der Winkelfunktionen).
pub const CLOSURE_EPSILON: f64 = 1e-9;

// ──────────────────────────── Ergebnistypen ────────────────────────────

/// Ergebnis der Winkelausgleichung.
#[derive(Debug, Clone, PartialEq)]
pub struct AngularAdjustment {
    /// Sollsumme der Innenwinkel, (n - 2) * 180°.
    pub theoretical_sum: f64,
    /// Istsumme der abgeleiteten Innenwinkel.
    pub actual_sum: f64,
    /// Istsumme minus Sollsumme.
    pub misclosure: f64,
    /// Gleichverteilte Korrektur je Winkel.
    pub correction_per_angle: f64,
    /// Zulässiger Fehler ±√n in Bogenminuten, rein informativ.
    pub allowable_error_minutes: f64,
    /// Ausgeglichene Innenwinkel in Seitenreihenfolge.
    pub adjusted: Vec<f64>,
}

/// Linearer Abschluss über alle Seitenvektoren.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearClosure {
    /// Vektorsumme aller Seiten; x = Abweitung, y = Breite.
    pub component_sum: DVec2,
    /// Betrag der Vektorsumme.
    pub misclosure: f64,
    /// Summe aller Distanzen.
    pub perimeter: f64,
    /// Genauigkeitsverhältnis relativ zum Umfang.
    pub relative_accuracy: RelativeAccuracy,
}

/// Genauigkeitsmaß des linearen Abschlusses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelativeAccuracy {
    /// Widerspruch unterhalb von [`CLOSURE_EPSILON`].
    Perfect,
    /// Verhältnis 1:n, abgerundet.
    Ratio(u64),
}

impl fmt::Display for RelativeAccuracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelativeAccuracy::Perfect => write!(f, "Perfect"),
            RelativeAccuracy::Ratio(denominator) => write!(f, "1:{denominator}"),
        }
    }
}

/// Bowditch-Korrektur einer einzelnen Seite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompassCorrection {
    /// Anteiliger Korrekturvektor der Seite.
    pub correction: DVec2,
    /// Seitenvektor nach Anbringen der Korrektur.
    pub adjusted: DVec2,
}

/// Kennzahlen des gesamten Rechenlaufs.
#[derive(Debug, Clone, PartialEq)]
pub struct ClosureMetrics {
    /// Anzahl der Seiten.
    pub sides: usize,
    /// Winkelausgleichung.
    pub angular: AngularAdjustment,
    /// Linearer Abschluss vor der Bowditch-Korrektur.
    pub linear: LinearClosure,
}

/// Vollständiger Rechenweg einer Seite.
#[derive(Debug, Clone, PartialEq)]
pub struct LegResult {
    /// Seitennummer, 1-basiert.
    pub side: usize,
    /// Beobachtetes Azimut aus der Eingabe.
    pub observed_azimuth: f64,
    /// Abgeleiteter Innenwinkel am Endpunkt der Seite.
    pub interior_angle: f64,
    /// Innenwinkel nach Verteilung des Winkelwiderspruchs.
    pub adjusted_angle: f64,
    /// Fortgepflanztes Azimut.
    pub azimuth: f64,
    /// Beobachtete Distanz.
    pub distance: f64,
    /// Seitenvektor; x = Abweitung (Ost), y = Breite (Nord).
    pub components: DVec2,
    /// Bowditch-Korrekturvektor.
    pub correction: DVec2,
    /// Seitenvektor nach der Korrektur.
    pub adjusted_components: DVec2,
    /// Distanz aus dem korrigierten Seitenvektor.
    pub corrected_distance: f64,
    /// Azimut aus dem korrigierten Seitenvektor.
    pub corrected_azimuth: f64,
    /// Korrigiertes Azimut in Quadranten-Schreibweise.
    pub corrected_bearing: String,
}

/// Ergebnis der vollständigen Ausgleichung.
#[derive(Debug, Clone, PartialEq)]
pub struct TraverseSolution {
    /// Rechenweg je Seite in Eingabereihenfolge.
    pub legs: Vec<LegResult>,
    /// Kennzahlen des Rechenlaufs.
    pub metrics: ClosureMetrics,
}

// ──────────────────────────── Rechenschritte ────────────────────────────

/// Leitet die Innenwinkel aus aufeinanderfolgenden Azimuten ab.
///
/// Der Winkel an Seite `i` liegt zwischen dem Rückazimut der Seite `i`
/// und dem Azimut der zyklisch folgenden Seite.
pub fn derive_interior_angles(azimuths: &[f64]) -> Vec<f64> {
    let n = azimuths.len();
    (0..n)
        .map(|i| {
            let back_azimuth = (azimuths[i] + 180.0).rem_euclid(360.0);
            (back_azimuth - azimuths[(i + 1) % n]).rem_euclid(360.0)
        })
        .collect()
}

/// Verteilt den Winkelwiderspruch gleichmäßig auf alle Innenwinkel.
pub fn adjust_angles(angles: &[f64]) -> AngularAdjustment {
    let n = angles.len();
    let theoretical_sum = (n as f64 - 2.0) * 180.0;
    let actual_sum: f64 = angles.iter().sum();
    let misclosure = actual_sum - theoretical_sum;
    let correction_per_angle = -misclosure / n as f64;

    AngularAdjustment {
        theoretical_sum,
        actual_sum,
        misclosure,
        correction_per_angle,
        allowable_error_minutes: (n as f64).sqrt(),
        adjusted: angles.iter().map(|a| a + correction_per_angle).collect(),
    }
}

/// Pflanzt Azimute aus dem Startazimut und den ausgeglichenen Winkeln fort.
///
/// Das Startazimut wird unverändert übernommen, alle weiteren werden auf
/// [0°, 360°) normalisiert.
pub fn propagate_azimuths(start_azimuth: f64, adjusted_angles: &[f64]) -> Vec<f64> {
    let n = adjusted_angles.len();
    if n == 0 {
        return Vec::new();
    }

    let mut azimuths = Vec::with_capacity(n);
    azimuths.push(start_azimuth);
    for i in 1..n {
        // Indexversatz beachten: Seite i verwendet den Winkel der Seite i-1.
        let azimuth = (azimuths[i - 1] + 180.0 - adjusted_angles[i - 1]).rem_euclid(360.0);
        azimuths.push(azimuth);
    }
    azimuths
}

/// Rechnet Distanzen und Azimute in Seitenvektoren um.
///
/// x = Abweitung (Ost), y = Breite (Nord).
pub fn compute_components(distances: &[f64], azimuths: &[f64]) -> Vec<DVec2> {
    distances
        .iter()
        .zip(azimuths)
        .map(|(distance, azimuth)| {
            let rad = azimuth.to_radians();
            DVec2::new(distance * rad.sin(), distance * rad.cos())
        })
        .collect()
}

/// Bewertet den linearen Abschluss über alle Seitenvektoren.
pub fn evaluate_closure(components: &[DVec2], distances: &[f64]) -> LinearClosure {
    let component_sum = components.iter().fold(DVec2::ZERO, |sum, c| sum + *c);
    let misclosure = component_sum.length();
    let perimeter: f64 = distances.iter().sum();

    let relative_accuracy = if misclosure > CLOSURE_EPSILON {
        RelativeAccuracy::Ratio((perimeter / misclosure) as u64)
    } else {
        RelativeAccuracy::Perfect
    };

    LinearClosure {
        component_sum,
        misclosure,
        perimeter,
        relative_accuracy,
    }
}

/// Verteilt den linearen Widerspruch nach Bowditch proportional zur Distanz.
pub fn apply_compass_rule(
    components: &[DVec2],
    distances: &[f64],
    closure: &LinearClosure,
) -> Result<Vec<CompassCorrection>, TraverseError> {
    if closure.perimeter == 0.0 {
        return Err(TraverseError::DegenerateTraverse);
    }

    Ok(components
        .iter()
        .zip(distances)
        .map(|(raw, distance)| {
            let correction = -(closure.component_sum * *distance) / closure.perimeter;
            CompassCorrection {
                correction,
                adjusted: *raw + correction,
            }
        })
        .collect())
}

/// Leitet Distanz und Azimut aus einem korrigierten Seitenvektor ab.
///
/// Bei Breite 0 entscheidet das Vorzeichen der Abweitung zwischen Ost
/// (90°) und West (270°); der Nullvektor fällt damit auf 270°.
pub fn resolve_leg(adjusted: DVec2) -> (f64, f64) {
    let distance = adjusted.length();
    let azimuth = if adjusted.y == 0.0 {
        if adjusted.x > 0.0 {
            90.0
        } else {
            270.0
        }
    } else {
        let degrees = adjusted.x.atan2(adjusted.y).to_degrees();
        if degrees < 0.0 {
            degrees + 360.0
        } else {
            degrees
        }
    };
    (distance, azimuth)
}

/// Führt die vollständige Ausgleichung eines Polygonzugs durch.
pub fn solve(traverse: &Traverse) -> Result<TraverseSolution, TraverseError> {
    let observed_azimuths = traverse.azimuths();
    let distances = traverse.distances();

    // Schritt 1: Innenwinkel aus den beobachteten Azimuten ableiten.
    let interior_angles = derive_interior_angles(&observed_azimuths);

    // Schritt 2: Winkelwiderspruch gleichmäßig verteilen.
    let angular = adjust_angles(&interior_angles);

    // Schritt 3: Azimute aus den ausgeglichenen Winkeln fortpflanzen.
    let azimuths = propagate_azimuths(observed_azimuths[0], &angular.adjusted);

    // Schritt 4: Seitenvektoren (Breite und Abweitung) berechnen.
    let components = compute_components(&distances, &azimuths);

    // Schritt 5: Linearen Abschluss bewerten.
    let linear = evaluate_closure(&components, &distances);

    // Schritt 6: Widerspruch nach Bowditch auf die Seiten verteilen.
    let corrections = apply_compass_rule(&components, &distances, &linear)?;

    // Schritt 7: Korrigierte Distanzen und Richtungen ableiten.
    let legs = traverse
        .legs()
        .iter()
        .zip(&interior_angles)
        .zip(&angular.adjusted)
        .zip(&azimuths)
        .zip(&components)
        .zip(&corrections)
        .map(
            |(((((leg, interior), adjusted_angle), azimuth), raw), correction)| {
                let (corrected_distance, corrected_azimuth) = resolve_leg(correction.adjusted);
                LegResult {
                    side: leg.index,
                    observed_azimuth: leg.azimuth,
                    interior_angle: *interior,
                    adjusted_angle: *adjusted_angle,
                    azimuth: *azimuth,
                    distance: leg.distance,
                    components: *raw,
                    correction: correction.correction,
                    adjusted_components: correction.adjusted,
                    corrected_distance,
                    corrected_azimuth,
                    corrected_bearing: format_bearing(corrected_azimuth),
                }
            },
        )
        .collect();

    Ok(TraverseSolution {
        legs,
        metrics: ClosureMetrics {
            sides: traverse.len(),
            angular,
            linear,
        },
    })
}
