//! Fehlertypen der Polygonzug-Berechnung.

use thiserror::Error;

/// Fehler bei Validierung und Berechnung eines Polygonzugs.
///
/// Alle Fehler werden synchron erkannt und brechen die gesamte Berechnung
/// ab. Es gibt keine Teilergebnisse und keine automatischen Wiederholungen.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TraverseError {
    /// Richtungs-Token weder numerisch noch Quadranten-Schreibweise.
    #[error("Ungueltige Richtungsangabe: '{0}'")]
    InvalidBearing(String),

    /// Distanz-Token keine endliche, nicht-negative Zahl.
    #[error("Ungueltige Distanz: '{0}'")]
    InvalidDistance(String),

    /// Geschlossener Polygonzug braucht mindestens 3 Seiten.
    #[error("Zu wenige Seiten: {0} (mindestens 3 erforderlich)")]
    TooFewLegs(usize),

    /// Gesamtumfang 0, Bowditch-Ausgleichung nicht definiert.
    #[error("Entarteter Polygonzug: Gesamtumfang ist 0")]
    DegenerateTraverse,
}

/// Kürzt ein Eingabe-Token für Fehlermeldungen auf max. 40 Bytes,
/// ohne UTF-8-Zeichen zu zerschneiden.
pub(crate) fn truncate_for_error(s: &str) -> &str {
    const MAX_LEN: usize = 40;
    if s.len() <= MAX_LEN {
        return s;
    }

    let mut end = MAX_LEN;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
