//! Projektdateien im `.trv`-Format.
//!
//! Eine `.trv`-Datei ist JSON mit Projektkopf, Einstellungen, Seitenzahl
//! und den rohen Beobachtungen. Unbekannte Felder werden ignoriert,
//! fehlende durch Defaults ersetzt.

use crate::core::LegObservation;
use crate::shared::Units;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Seitenzahl eines frisch angelegten Projekts.
pub const DEFAULT_NUM_SIDES: usize = 4;

/// Obergrenze für `num_sides` beim Auffüllen der Beobachtungen.
/// Schützt gegen absurde Seitenzahlen aus beschädigten Dateien.
pub const MAX_SIDES: usize = 10_000;

// ──────────────────────────── Datenmodell ────────────────────────────

/// Beschreibender Projektkopf; rein informativ.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectInfo {
    #[serde(default)]
    pub project_name: String,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub project_address: String,
    #[serde(default)]
    pub traverse_id: String,
}

impl ProjectInfo {
    /// Wahr, wenn kein einziges Kopffeld ausgefüllt ist.
    pub fn is_empty(&self) -> bool {
        self.project_name.is_empty()
            && self.user_name.is_empty()
            && self.project_address.is_empty()
            && self.traverse_id.is_empty()
    }
}

/// Art des Polygonzugs. Gerechnet werden nur geschlossene Züge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraverseType {
    #[default]
    Closed,
    Open,
}

/// Projekteinstellungen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProjectSettings {
    #[serde(default)]
    pub traverse_type: TraverseType,
    #[serde(default, deserialize_with = "units_or_metric")]
    pub units: Units,
}

/// Unbekannte Einheiten-Kennungen fallen auf Metric zurück.
fn units_or_metric<'de, D>(deserializer: D) -> Result<Units, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(match raw.parse::<Units>() {
        Ok(units) => units,
        Err(_) => {
            log::warn!(
                "Unbekanntes Einheitensystem '{}', verwende metric",
                raw.trim()
            );
            Units::Metric
        }
    })
}

/// Vollständiger Inhalt einer `.trv`-Datei.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub project_info: ProjectInfo,
    #[serde(default)]
    pub settings: ProjectSettings,
    #[serde(default = "default_num_sides")]
    pub num_sides: usize,
    #[serde(default)]
    pub data: Vec<LegObservation>,
}

impl Default for Project {
    fn default() -> Self {
        Self {
            project_info: ProjectInfo::default(),
            settings: ProjectSettings::default(),
            num_sides: DEFAULT_NUM_SIDES,
            data: Vec::new(),
        }
    }
}

fn default_num_sides() -> usize {
    DEFAULT_NUM_SIDES
}

impl Project {
    /// Liefert genau `num_sides` Beobachtungen in Dateireihenfolge.
    ///
    /// Überzählige Datensätze werden verworfen, fehlende durch leere
    /// Beobachtungen aufgefüllt (die erst bei der Validierung scheitern).
    pub fn observations(&self) -> Vec<LegObservation> {
        let mut sides = self.num_sides;
        if sides > MAX_SIDES {
            log::warn!(
                "Projekt nennt {} Seiten, begrenzt auf {}",
                sides,
                MAX_SIDES
            );
            sides = MAX_SIDES;
        }
        if self.data.len() != sides {
            log::warn!(
                "Projekt nennt {} Seiten, enthaelt aber {} Datensaetze",
                sides,
                self.data.len()
            );
        }

        let mut observations = self.data.clone();
        observations.truncate(sides);
        observations.resize_with(sides, LegObservation::default);
        observations
    }
}

// ──────────────────────────── Lesen und Schreiben ────────────────────────────

/// Parst den JSON-Inhalt einer `.trv`-Datei.
pub fn parse_project(content: &str) -> Result<Project> {
    serde_json::from_str(content).context("Fehler beim Parsen der Projektdatei")
}

/// Serialisiert ein Projekt als eingerücktes JSON.
pub fn write_project(project: &Project) -> Result<String> {
    serde_json::to_string_pretty(project).context("Fehler beim Serialisieren des Projekts")
}

/// Lädt ein Projekt von der Platte.
pub fn load_project_file(path: &Path) -> Result<Project> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Projektdatei '{}' konnte nicht gelesen werden", path.display()))?;
    let project = parse_project(&content)?;
    log::info!(
        "Projekt geladen aus: {} ({} Seiten)",
        path.display(),
        project.num_sides
    );
    Ok(project)
}

/// Speichert ein Projekt auf die Platte.
pub fn save_project_file(project: &Project, path: &Path) -> Result<()> {
    let content = write_project(project)?;
    std::fs::write(path, content)
        .with_context(|| format!("Projektdatei '{}' konnte nicht geschrieben werden", path.display()))?;
    log::info!("Projekt gespeichert nach: {}", path.display());
    Ok(())
}
