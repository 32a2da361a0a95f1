//! Richtungsangaben: gepackte DD.MMSS-Notation, Quadranten-Schreibweise
//! und Azimute.
//!
//! Eine Richtung kann auf zwei Arten eingegeben werden:
//! - numerisch in gepackter DD.MMSS-Notation (z.B. `120.3045` für
//!   120° 30' 45"), direkt als Azimut ab Nord im Uhrzeigersinn;
//! - in Quadranten-Schreibweise mit Himmelsrichtungs-Buchstaben
//!   (z.B. `N 45.30 E`), wobei der Winkel vom Meridian aus in den
//!   jeweiligen Quadranten gedreht wird.

use crate::core::error::{truncate_for_error, TraverseError};
use regex::Regex;
use std::sync::OnceLock;

/// Quadrant einer Richtungsangabe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quadrant {
    NorthEast,
    SouthEast,
    SouthWest,
    NorthWest,
}

impl Quadrant {
    /// Dreht einen Winkel vom Meridian (Grad) in den Quadranten.
    pub fn azimuth_from_meridian(self, angle: f64) -> f64 {
        match self {
            Quadrant::NorthEast => angle,
            Quadrant::SouthEast => 180.0 - angle,
            Quadrant::SouthWest => 180.0 + angle,
            Quadrant::NorthWest => 360.0 - angle,
        }
    }

    /// Erkennt den Quadranten anhand der enthaltenen Buchstaben.
    /// Prüfreihenfolge: NE, SE, SW, NW; der erste Treffer gewinnt.
    fn from_letters(token: &str) -> Option<Self> {
        let has = |c: char| token.contains(c);
        if has('N') && has('E') {
            Some(Quadrant::NorthEast)
        } else if has('S') && has('E') {
            Some(Quadrant::SouthEast)
        } else if has('S') && has('W') {
            Some(Quadrant::SouthWest)
        } else if has('N') && has('W') {
            Some(Quadrant::NorthWest)
        } else {
            None
        }
    }

    /// Ordnet einen normalisierten Azimut [0°, 360°) seinem Quadranten zu
    /// und liefert den Winkel vom Meridian.
    fn from_azimuth(azimuth: f64) -> (Self, f64) {
        if azimuth <= 90.0 {
            (Quadrant::NorthEast, azimuth)
        } else if azimuth <= 180.0 {
            (Quadrant::SouthEast, 180.0 - azimuth)
        } else if azimuth <= 270.0 {
            (Quadrant::SouthWest, azimuth - 180.0)
        } else {
            (Quadrant::NorthWest, 360.0 - azimuth)
        }
    }

    /// Buchstabenpaar (N/S, E/W) für die Textdarstellung.
    fn letters(self) -> (char, char) {
        match self {
            Quadrant::NorthEast => ('N', 'E'),
            Quadrant::SouthEast => ('S', 'E'),
            Quadrant::SouthWest => ('S', 'W'),
            Quadrant::NorthWest => ('N', 'W'),
        }
    }
}

/// Rein numerische Token: optionales Vorzeichen, Ziffern, optionaler
/// Dezimalpunkt, optionale Nachkommaziffern.
fn numeric_token_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[+-]?\d+(\.\d*)?$").expect("Numerik-Pattern muss kompilieren")
    })
}

/// Ausgeschriebene Grad/Minuten/Sekunden-Form, wie sie der Formatter
/// erzeugt: `dd°mm'ss"`.
fn dms_text_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#"^(\d+)°(\d{1,2})'(\d{1,2})"$"#).expect("DMS-Pattern muss kompilieren")
    })
}

/// Liest ein Richtungs-Token und liefert den Azimut in Grad.
///
/// Numerische Token werden als gepackte DD.MMSS-Notation gelesen und
/// unverändert als Azimut übernommen, ohne Normalisierung und ohne
/// Quadranten-Korrektur. Token mit Quadranten-Buchstaben drehen den
/// Winkel vom Meridian in den Quadranten: NE → Winkel, SE → 180 − Winkel,
/// SW → 180 + Winkel, NW → 360 − Winkel. Jede andere Form ist ein Fehler.
///
/// Winkel vom Meridian außerhalb [0°, 90°] werden arithmetisch übernommen
/// (keine Bereichsprüfung); [`parse_bearing_strict`] weist sie zurück.
pub fn parse_bearing(token: &str) -> Result<f64, TraverseError> {
    parse_bearing_impl(token, false)
}

/// Wie [`parse_bearing`], weist aber Quadranten-Winkel außerhalb von
/// [0°, 90°] zurück (Option `strict_quadrant_angles`).
pub fn parse_bearing_strict(token: &str) -> Result<f64, TraverseError> {
    parse_bearing_impl(token, true)
}

fn parse_bearing_impl(token: &str, strict: bool) -> Result<f64, TraverseError> {
    let trimmed = token.trim();
    let upper = trimmed.to_uppercase();

    if numeric_token_pattern().is_match(&upper) {
        return dms_to_decimal(&upper);
    }

    let Some(quadrant) = Quadrant::from_letters(&upper) else {
        return Err(TraverseError::InvalidBearing(
            truncate_for_error(trimmed).to_string(),
        ));
    };

    let (ns, ew) = quadrant.letters();
    let remainder: String = upper.chars().filter(|c| *c != ns && *c != ew).collect();
    let angle = parse_meridian_angle(remainder.trim()).map_err(|_| {
        TraverseError::InvalidBearing(truncate_for_error(trimmed).to_string())
    })?;

    if strict && !(0.0..=90.0).contains(&angle) {
        return Err(TraverseError::InvalidBearing(
            truncate_for_error(trimmed).to_string(),
        ));
    }

    Ok(quadrant.azimuth_from_meridian(angle))
}

/// Winkel-Anteil einer Quadranten-Angabe: gepackte DD.MMSS-Notation oder
/// die ausgeschriebene Form `dd°mm'ss"`.
fn parse_meridian_angle(token: &str) -> Result<f64, TraverseError> {
    if let Some(caps) = dms_text_pattern().captures(token) {
        let degrees: f64 = caps[1]
            .parse()
            .map_err(|_| TraverseError::InvalidBearing(truncate_for_error(token).to_string()))?;
        let minutes: f64 = caps[2]
            .parse()
            .map_err(|_| TraverseError::InvalidBearing(truncate_for_error(token).to_string()))?;
        let seconds: f64 = caps[3]
            .parse()
            .map_err(|_| TraverseError::InvalidBearing(truncate_for_error(token).to_string()))?;
        return Ok(degrees + minutes / 60.0 + seconds / 3600.0);
    }

    dms_to_decimal(token)
}

/// Wandelt die gepackte DD.MMSS-Notation in Dezimalgrad um.
///
/// Der Ganzzahlanteil sind Grad. Die Nachkommastellen werden rechts mit
/// Nullen auf exakt 4 Ziffern aufgefüllt bzw. abgeschnitten: die ersten
/// beiden sind Minuten, die letzten beiden Sekunden. `120.3045` ergibt
/// 120° 30' 45" = 120.5125°; `45.3` ergibt 45° 30' 00" = 45.5°.
fn dms_to_decimal(token: &str) -> Result<f64, TraverseError> {
    if !numeric_token_pattern().is_match(token) {
        return Err(TraverseError::InvalidBearing(
            truncate_for_error(token).to_string(),
        ));
    }

    let (whole, fraction) = match token.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (token, ""),
    };

    let degrees: f64 = whole
        .parse()
        .map_err(|_| TraverseError::InvalidBearing(truncate_for_error(token).to_string()))?;

    if fraction.is_empty() {
        return Ok(degrees);
    }

    let mut mmss = fraction[..fraction.len().min(4)].to_string();
    while mmss.len() < 4 {
        mmss.push('0');
    }

    let minutes: f64 = mmss[..2]
        .parse()
        .map_err(|_| TraverseError::InvalidBearing(truncate_for_error(token).to_string()))?;
    let seconds: f64 = mmss[2..4]
        .parse()
        .map_err(|_| TraverseError::InvalidBearing(truncate_for_error(token).to_string()))?;

    let decimal = degrees.abs() + minutes / 60.0 + seconds / 3600.0;

    // Das Vorzeichen trägt das Grad-Feld; "-0" zählt als positiv.
    if degrees >= 0.0 {
        Ok(decimal)
    } else {
        Ok(-decimal)
    }
}

/// Formatiert einen Azimut als Quadranten-Richtung, z.B. `N 45°30'15" E`.
///
/// Der Azimut wird auf [0°, 360°) normalisiert. Grad, Minuten und
/// Sekunden werden bei der Zerlegung abgeschnitten, nicht gerundet.
pub fn format_bearing(azimuth: f64) -> String {
    let normalized = azimuth.rem_euclid(360.0);
    let (quadrant, angle) = Quadrant::from_azimuth(normalized);
    let (degrees, minutes, seconds) = decimal_to_dms(angle);
    let (ns, ew) = quadrant.letters();

    format!("{} {:02}°{:02}'{:02}\" {}", ns, degrees, minutes, seconds, ew)
}

/// Zerlegt Dezimalgrad in (Grad, Minuten, Sekunden), jeweils abgeschnitten.
fn decimal_to_dms(angle: f64) -> (u32, u32, u32) {
    let degrees = angle as u32;
    let rest_minutes = (angle - degrees as f64) * 60.0;
    let minutes = rest_minutes as u32;
    let seconds = ((rest_minutes - minutes as f64) * 60.0) as u32;

    (degrees, minutes, seconds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_parse_numerisches_token_als_dd_mmss() {
        let azimuth = parse_bearing("120.3045").expect("Token muss parsen");
        assert_relative_eq!(azimuth, 120.0 + 30.0 / 60.0 + 45.0 / 3600.0);
    }

    #[test]
    fn test_parse_kurze_nachkommastellen_werden_rechts_aufgefuellt() {
        // 45.3 = 45° 30' 00"
        assert_relative_eq!(parse_bearing("45.3").expect("Token muss parsen"), 45.5);
    }

    #[test]
    fn test_parse_lange_nachkommastellen_werden_abgeschnitten() {
        // 10.123456 → Minuten 12, Sekunden 34, Rest entfällt
        let azimuth = parse_bearing("10.123456").expect("Token muss parsen");
        assert_relative_eq!(azimuth, 10.0 + 12.0 / 60.0 + 34.0 / 3600.0);
    }

    #[test]
    fn test_parse_ganzzahl_ist_nur_grad() {
        assert_relative_eq!(parse_bearing("90").expect("Token muss parsen"), 90.0);
        assert_relative_eq!(parse_bearing("45.").expect("Token muss parsen"), 45.0);
    }

    #[test]
    fn test_parse_azimut_wird_nicht_normalisiert() {
        assert_relative_eq!(parse_bearing("450").expect("Token muss parsen"), 450.0);
    }

    #[test]
    fn test_parse_negatives_vorzeichen_bleibt_erhalten() {
        assert_relative_eq!(parse_bearing("-10.3000").expect("Token muss parsen"), -10.5);
    }

    #[test]
    fn test_parse_minus_null_grad_zaehlt_als_positiv() {
        assert_relative_eq!(parse_bearing("-0.3000").expect("Token muss parsen"), 0.5);
    }

    #[test]
    fn test_parse_quadrant_ne() {
        assert_relative_eq!(parse_bearing("N45.3000E").expect("Token muss parsen"), 45.5);
    }

    #[test]
    fn test_parse_quadrant_se() {
        assert_relative_eq!(parse_bearing("S30.0000E").expect("Token muss parsen"), 150.0);
    }

    #[test]
    fn test_parse_quadrant_sw_kleinbuchstaben() {
        assert_relative_eq!(parse_bearing("s30.0000w").expect("Token muss parsen"), 210.0);
    }

    #[test]
    fn test_parse_quadrant_nw_mit_leerzeichen() {
        let azimuth = parse_bearing("N 10.1500 W").expect("Token muss parsen");
        assert_relative_eq!(azimuth, 360.0 - (10.0 + 15.0 / 60.0));
    }

    #[test]
    fn test_parse_ausgeschriebene_dms_form() {
        let azimuth = parse_bearing("N 45°30'45\" E").expect("Token muss parsen");
        assert_relative_eq!(azimuth, 45.5125);
    }

    #[test]
    fn test_parse_uebergrosser_quadrantwinkel_bleibt_permissiv() {
        // 120° vom Meridian im SE-Quadranten: arithmetisch 180 − 120 = 60
        assert_relative_eq!(parse_bearing("S120.0000E").expect("Token muss parsen"), 60.0);
    }

    #[test]
    fn test_parse_strict_weist_uebergrossen_quadrantwinkel_zurueck() {
        assert!(matches!(
            parse_bearing_strict("S120.0000E"),
            Err(TraverseError::InvalidBearing(_))
        ));
    }

    #[test]
    fn test_parse_strict_akzeptiert_gueltigen_quadrantwinkel() {
        let azimuth = parse_bearing_strict("N45.3000E").expect("Token muss parsen");
        assert_relative_eq!(azimuth, 45.5);
    }

    #[test]
    fn test_parse_fehler_fuer_unlesbare_token() {
        assert!(parse_bearing("").is_err());
        assert!(parse_bearing("abc").is_err());
        assert!(parse_bearing("45.30.15").is_err());
        assert!(parse_bearing(".5").is_err());
        assert!(parse_bearing("45E3").is_err());
    }

    #[test]
    fn test_parse_fehler_fuer_unvollstaendigen_quadranten() {
        assert!(parse_bearing("N45.30").is_err());
        assert!(parse_bearing("45E").is_err());
        assert!(parse_bearing("NE").is_err());
    }

    #[test]
    fn test_parse_fehler_nennt_das_token() {
        let err = parse_bearing("Nordost").expect_err("Token darf nicht parsen");
        assert_eq!(err, TraverseError::InvalidBearing("Nordost".to_string()));
    }

    #[test]
    fn test_format_quadrantgrenzen() {
        assert_eq!(format_bearing(0.0), "N 00°00'00\" E");
        assert_eq!(format_bearing(90.0), "N 90°00'00\" E");
        assert_eq!(format_bearing(180.0), "S 00°00'00\" E");
        assert_eq!(format_bearing(270.0), "S 90°00'00\" W");
        assert_eq!(format_bearing(360.0), "N 00°00'00\" E");
    }

    #[test]
    fn test_format_mittlere_quadranten() {
        assert_eq!(format_bearing(45.5), "N 45°30'00\" E");
        assert_eq!(format_bearing(150.0), "S 30°00'00\" E");
        assert_eq!(format_bearing(210.0), "S 30°00'00\" W");
        assert_eq!(format_bearing(315.0), "N 45°00'00\" W");
    }

    #[test]
    fn test_format_negativer_azimut_wird_normalisiert() {
        assert_eq!(format_bearing(-45.0), "N 45°00'00\" W");
    }

    #[test]
    fn test_format_schneidet_ab_statt_zu_runden() {
        // 10.9999° = 10° 59.994' → 10° 59' 59.64" → abgeschnitten 10°59'59"
        assert_eq!(format_bearing(10.9999), "N 10°59'59\" E");
    }

    #[test]
    fn test_roundtrip_parse_format_unter_einer_bogensekunde() {
        for azimuth in [0.0, 12.3456, 45.5, 89.9999, 123.456, 200.0, 271.5, 359.9] {
            let formatted = format_bearing(azimuth);
            let reparsed = parse_bearing(&formatted).expect("Roundtrip-Parsing fehlgeschlagen");
            let delta = (reparsed - azimuth.rem_euclid(360.0)).abs();
            assert!(
                delta <= 1.0 / 3600.0 + 1e-9,
                "Azimut {}: Abweichung {} ueber einer Bogensekunde",
                azimuth,
                delta
            );
        }
    }
}
