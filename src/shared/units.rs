//! Einheitensystem für Distanzen und Berichtsausgabe.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Einheitensystem eines Projekts.
///
/// Die Wahl beeinflusst nur die Beschriftung; gerechnet wird einheitenfrei.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    #[default]
    Metric,
    English,
}

impl Units {
    /// Kurzzeichen für Tabellenspalten.
    pub fn label(self) -> &'static str {
        match self {
            Units::Metric => "m",
            Units::English => "ft",
        }
    }

    /// Ausgeschriebener Name für den Berichtskopf.
    pub fn name(self) -> &'static str {
        match self {
            Units::Metric => "Meters",
            Units::English => "Feet",
        }
    }
}

impl FromStr for Units {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "metric" => Ok(Units::Metric),
            "english" => Ok(Units::English),
            other => Err(format!("Unbekanntes Einheitensystem: '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beschriftungen() {
        assert_eq!(Units::Metric.label(), "m");
        assert_eq!(Units::Metric.name(), "Meters");
        assert_eq!(Units::English.label(), "ft");
        assert_eq!(Units::English.name(), "Feet");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("metric".parse::<Units>(), Ok(Units::Metric));
        assert_eq!(" English ".parse::<Units>(), Ok(Units::English));
        assert!("imperial".parse::<Units>().is_err());
    }

    #[test]
    fn test_serde_kleinschreibung() {
        assert_eq!(
            serde_json::to_string(&Units::English).expect("Serialisierung fehlgeschlagen"),
            "\"english\""
        );
        let parsed: Units =
            serde_json::from_str("\"metric\"").expect("Deserialisierung fehlgeschlagen");
        assert_eq!(parsed, Units::Metric);
    }

}
