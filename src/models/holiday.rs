use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Whether a holiday is observed on its calendar date or moved to the
/// nearest Monday. The API omits `tipo` for some entries; those are
/// treated as fixed, matching the upstream data's convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HolidayKind {
    #[default]
    #[serde(rename = "inamovible")]
    Fixed,
    #[serde(rename = "trasladable")]
    Movable,
}

impl HolidayKind {
    /// Parse the wire `tipo` value. Anything unrecognized is fixed.
    pub fn from_wire(tipo: Option<&str>) -> Self {
        match tipo {
            Some("trasladable") => HolidayKind::Movable,
            _ => HolidayKind::Fixed,
        }
    }

    /// Spanish label for display ("Inamovible" / "Trasladable").
    pub fn label(&self) -> &'static str {
        match self {
            HolidayKind::Fixed => "Inamovible",
            HolidayKind::Movable => "Trasladable",
        }
    }
}

/// A single public holiday.
///
/// `date` is a plain calendar date with no time or timezone component.
/// It must never be round-tripped through a UTC instant: Argentina sits
/// behind UTC, so midnight-UTC parsing would shift every holiday to the
/// previous local day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    #[serde(rename = "fecha")]
    pub date: NaiveDate,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "tipo", default)]
    pub kind: HolidayKind,
    #[serde(rename = "info", default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Counts of holidays by kind, shown in the header bar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HolidayStats {
    pub total: usize,
    pub fixed: usize,
    pub movable: usize,
}

pub fn stats(holidays: &[Holiday]) -> HolidayStats {
    let fixed = holidays
        .iter()
        .filter(|h| h.kind == HolidayKind::Fixed)
        .count();
    HolidayStats {
        total: holidays.len(),
        fixed,
        movable: holidays.len() - fixed,
    }
}

/// The next holiday on or after `today`. Assumes ascending date order.
pub fn next_after(holidays: &[Holiday], today: NaiveDate) -> Option<&Holiday> {
    holidays.iter().find(|h| h.date >= today)
}

/// The holiday falling exactly on `date`, if any.
pub fn on_date(holidays: &[Holiday], date: NaiveDate) -> Option<&Holiday> {
    holidays.iter().find(|h| h.date == date)
}

/// Holidays within a given month (1-12) of a year.
pub fn in_month(holidays: &[Holiday], year: i32, month: u32) -> Vec<&Holiday> {
    holidays
        .iter()
        .filter(|h| h.date.year() == year && h.date.month() == month)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn holiday(date: &str, name: &str, kind: HolidayKind) -> Holiday {
        Holiday {
            date: date.parse().unwrap(),
            name: name.to_string(),
            kind,
            note: None,
        }
    }

    fn sample() -> Vec<Holiday> {
        vec![
            holiday("2025-01-01", "Año Nuevo", HolidayKind::Fixed),
            holiday("2025-03-03", "Carnaval", HolidayKind::Fixed),
            holiday("2025-06-16", "Paso a la Inmortalidad del Gral. Güemes", HolidayKind::Movable),
            holiday("2025-12-25", "Navidad", HolidayKind::Fixed),
        ]
    }

    #[test]
    fn test_date_is_plain_calendar_date() {
        // "2025-12-25" must be December 25 in every timezone - the date
        // is parsed as calendar components, never as a UTC instant.
        let h = holiday("2025-12-25", "Navidad", HolidayKind::Fixed);
        assert_eq!(h.date.year(), 2025);
        assert_eq!(h.date.month(), 12);
        assert_eq!(h.date.day(), 25);
    }

    #[test]
    fn test_kind_from_wire_defaults_to_fixed() {
        assert_eq!(HolidayKind::from_wire(Some("trasladable")), HolidayKind::Movable);
        assert_eq!(HolidayKind::from_wire(Some("inamovible")), HolidayKind::Fixed);
        assert_eq!(HolidayKind::from_wire(Some("puente")), HolidayKind::Fixed);
        assert_eq!(HolidayKind::from_wire(None), HolidayKind::Fixed);
    }

    #[test]
    fn test_next_after_includes_today() {
        let holidays = sample();
        let today: NaiveDate = "2025-03-03".parse().unwrap();
        assert_eq!(next_after(&holidays, today).unwrap().name, "Carnaval");

        let later: NaiveDate = "2025-03-04".parse().unwrap();
        assert_eq!(
            next_after(&holidays, later).unwrap().date,
            "2025-06-16".parse::<NaiveDate>().unwrap()
        );

        let past_all: NaiveDate = "2025-12-26".parse().unwrap();
        assert!(next_after(&holidays, past_all).is_none());
    }

    #[test]
    fn test_on_date() {
        let holidays = sample();
        let navidad: NaiveDate = "2025-12-25".parse().unwrap();
        assert_eq!(on_date(&holidays, navidad).unwrap().name, "Navidad");
        assert!(on_date(&holidays, "2025-12-24".parse().unwrap()).is_none());
    }

    #[test]
    fn test_in_month() {
        let holidays = sample();
        let march = in_month(&holidays, 2025, 3);
        assert_eq!(march.len(), 1);
        assert_eq!(march[0].name, "Carnaval");
        assert!(in_month(&holidays, 2025, 2).is_empty());
        assert!(in_month(&holidays, 2024, 3).is_empty());
    }

    #[test]
    fn test_stats() {
        let s = stats(&sample());
        assert_eq!(s.total, 4);
        assert_eq!(s.fixed, 3);
        assert_eq!(s.movable, 1);
    }

    #[test]
    fn test_holiday_serde_uses_wire_names() {
        let json = r#"{"fecha":"2025-05-01","nombre":"Día del Trabajador","tipo":"inamovible"}"#;
        let h: Holiday = serde_json::from_str(json).unwrap();
        assert_eq!(h.name, "Día del Trabajador");
        assert_eq!(h.kind, HolidayKind::Fixed);
        assert!(h.note.is_none());

        let back = serde_json::to_string(&h).unwrap();
        assert!(back.contains("\"fecha\":\"2025-05-01\""));
        assert!(back.contains("\"tipo\":\"inamovible\""));
    }
}
