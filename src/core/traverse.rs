//! Validierter geschlossener Polygonzug.

use crate::core::error::TraverseError;
use crate::core::leg::{Leg, LegObservation};

/// Mindestanzahl Seiten eines geschlossenen Polygonzugs.
pub const MIN_SIDES: usize = 3;

/// Geordnete, validierte Seiten eines geschlossenen Polygonzugs.
///
/// Die Seitenfolge entspricht der Eingabereihenfolge; Berechnungen an
/// Seite `i` greifen zyklisch auf Seite `(i + 1) % n` zu. Der Container
/// hält nur Eingaben, keine abgeleiteten Größen.
#[derive(Debug, Clone)]
pub struct Traverse {
    legs: Vec<Leg>,
}

impl Traverse {
    /// Erstellt einen Polygonzug aus validierten Seiten.
    pub fn new(legs: Vec<Leg>) -> Result<Self, TraverseError> {
        if legs.len() < MIN_SIDES {
            return Err(TraverseError::TooFewLegs(legs.len()));
        }
        Ok(Self { legs })
    }

    /// Validiert rohe Beobachtungen in Eingabereihenfolge.
    ///
    /// `strict` weist Quadranten-Winkel außerhalb von [0°, 90°] zurück.
    pub fn from_observations(
        observations: &[LegObservation],
        strict: bool,
    ) -> Result<Self, TraverseError> {
        if observations.len() < MIN_SIDES {
            return Err(TraverseError::TooFewLegs(observations.len()));
        }

        let legs = observations
            .iter()
            .enumerate()
            .map(|(i, observation)| Leg::from_observation(i + 1, observation, strict))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { legs })
    }

    /// Anzahl der Seiten.
    pub fn len(&self) -> usize {
        self.legs.len()
    }

    /// Nach Konstruktion nie leer; vorhanden für Container-Konventionen.
    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }

    /// Seiten in Eingabereihenfolge.
    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    /// Beobachtete Azimute in Eingabereihenfolge.
    pub fn azimuths(&self) -> Vec<f64> {
        self.legs.iter().map(|leg| leg.azimuth).collect()
    }

    /// Distanzen in Eingabereihenfolge.
    pub fn distances(&self) -> Vec<f64> {
        self.legs.iter().map(|leg| leg.distance).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observations(tokens: &[(&str, &str)]) -> Vec<LegObservation> {
        tokens
            .iter()
            .map(|(bearing, distance)| LegObservation::new(*bearing, *distance))
            .collect()
    }

    #[test]
    fn test_dreieck_validiert() {
        let traverse = Traverse::from_observations(
            &observations(&[("0", "100"), ("120", "100"), ("240", "100")]),
            false,
        )
        .expect("Dreieck muss validieren");

        assert_eq!(traverse.len(), 3);
        assert_eq!(traverse.azimuths(), vec![0.0, 120.0, 240.0]);
        assert_eq!(traverse.distances(), vec![100.0, 100.0, 100.0]);
    }

    #[test]
    fn test_zwei_seiten_sind_zu_wenig() {
        let result = Traverse::from_observations(&observations(&[("0", "1"), ("90", "1")]), false);
        assert_eq!(result.expect_err("muss scheitern"), TraverseError::TooFewLegs(2));
    }

    #[test]
    fn test_erster_fehler_bricht_die_validierung_ab() {
        let result = Traverse::from_observations(
            &observations(&[("0", "100"), ("kaputt", "100"), ("240", "abc")]),
            false,
        );
        assert_eq!(
            result.expect_err("muss scheitern"),
            TraverseError::InvalidBearing("kaputt".to_string())
        );
    }

    #[test]
    fn test_leere_seitenliste() {
        assert_eq!(
            Traverse::from_observations(&[], false).expect_err("muss scheitern"),
            TraverseError::TooFewLegs(0)
        );
    }
}
