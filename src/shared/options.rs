//! Zentrale Konfiguration für den Polygonzug-Rechner.
//!
//! `CalculatorOptions` enthält alle zur Laufzeit änderbaren Werte.

use serde::{Deserialize, Serialize};

/// Alle zur Laufzeit änderbaren Rechner-Optionen.
/// Wird als `polygonzug_rechner.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalculatorOptions {
    /// Quadranten-Richtungen mit Winkeln außerhalb von [0°, 90°] zurückweisen
    #[serde(default)]
    pub strict_quadrant_angles: bool,
}

impl CalculatorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("polygonzug_rechner"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("polygonzug_rechner.toml")
    }
}
