//! Eingabedaten einer Polygonseite.

use crate::core::bearing;
use crate::core::error::{truncate_for_error, TraverseError};
use serde::{Deserialize, Serialize};

/// Rohe Feldbuch-Eingabe einer Seite: Richtung und Distanz als Text.
///
/// Entspricht einem Eintrag im `data`-Array einer `.trv`-Projektdatei;
/// fehlende Felder gelten als leerer Text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LegObservation {
    /// Richtungs-Token (DD.MMSS oder Quadranten-Schreibweise).
    #[serde(default)]
    pub bearing: String,
    /// Distanz-Token.
    #[serde(default)]
    pub distance: String,
}

impl LegObservation {
    /// Erstellt eine Beobachtung aus Richtungs- und Distanz-Token.
    pub fn new(bearing: impl Into<String>, distance: impl Into<String>) -> Self {
        Self {
            bearing: bearing.into(),
            distance: distance.into(),
        }
    }
}

/// Validierte Seite: geparster Azimut und Distanz.
///
/// Hält ausschließlich Eingabewerte. Abgeleitete Größen (Innenwinkel,
/// Komponenten, Korrekturen) entstehen in jedem Berechnungslauf neu.
#[derive(Debug, Clone, PartialEq)]
pub struct Leg {
    /// 1-basierte Seitennummer.
    pub index: usize,
    /// Ursprüngliches Richtungs-Token (getrimmt).
    pub bearing_token: String,
    /// Azimut in Grad, unverändert aus dem Token übernommen.
    pub azimuth: f64,
    /// Distanz (endlich, nicht negativ).
    pub distance: f64,
}

impl Leg {
    /// Validiert eine Beobachtung zur Seite `index`.
    ///
    /// `strict` weist Quadranten-Winkel außerhalb von [0°, 90°] zurück.
    pub fn from_observation(
        index: usize,
        observation: &LegObservation,
        strict: bool,
    ) -> Result<Self, TraverseError> {
        let azimuth = if strict {
            bearing::parse_bearing_strict(&observation.bearing)?
        } else {
            bearing::parse_bearing(&observation.bearing)?
        };
        let distance = parse_distance(&observation.distance)?;

        Ok(Self {
            index,
            bearing_token: observation.bearing.trim().to_string(),
            azimuth,
            distance,
        })
    }
}

/// Liest eine Distanz: endliche, nicht-negative Zahl.
fn parse_distance(token: &str) -> Result<f64, TraverseError> {
    let trimmed = token.trim();
    let value: f64 = trimmed
        .parse()
        .map_err(|_| TraverseError::InvalidDistance(truncate_for_error(trimmed).to_string()))?;

    if !value.is_finite() || value < 0.0 {
        return Err(TraverseError::InvalidDistance(
            truncate_for_error(trimmed).to_string(),
        ));
    }

    Ok(value)
}
