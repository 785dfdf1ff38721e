use chrono::{DateTime, Datelike, Local, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::error::AppError;

/// Zone used to decide what "today" (and so the current year) is
#[derive(Debug, Clone, Copy)]
pub(crate) enum Timezone {
    Local,
    Named(Tz),
}

impl Timezone {
    /// `None`, blank and `local` mean the system zone; `utc`/`z` and IANA
    /// names (`Europe/Madrid`) select a fixed zone.
    pub(crate) fn parse(value: Option<&str>) -> Result<Self, AppError> {
        let name = value.map(str::trim).unwrap_or_default();
        match name.to_ascii_lowercase().as_str() {
            "" | "local" => Ok(Timezone::Local),
            "utc" | "z" => Ok(Timezone::Named(chrono_tz::UTC)),
            _ => name
                .parse::<Tz>()
                .map(Timezone::Named)
                .map_err(|_| AppError::InvalidTimezone {
                    input: name.to_string(),
                }),
        }
    }

    /// Calendar date of `utc` in this zone
    pub(crate) fn date_of(self, utc: DateTime<Utc>) -> NaiveDate {
        match self {
            Timezone::Local => utc.with_timezone(&Local).date_naive(),
            Timezone::Named(tz) => utc.with_timezone(&tz).date_naive(),
        }
    }

    pub(crate) fn current_year(self) -> i32 {
        self.date_of(Utc::now()).year()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_and_local_mean_system_zone() {
        for input in [None, Some(""), Some("  LOCAL ")] {
            assert!(matches!(Timezone::parse(input).unwrap(), Timezone::Local));
        }
    }

    #[test]
    fn utc_aliases() {
        for s in ["utc", "UTC", "z", "Z"] {
            let tz = Timezone::parse(Some(s)).unwrap();
            assert!(matches!(tz, Timezone::Named(chrono_tz::UTC)));
        }
    }

    #[test]
    fn iana_names_resolve() {
        let tz = Timezone::parse(Some(" Europe/Madrid ")).unwrap();
        assert!(matches!(tz, Timezone::Named(chrono_tz::Europe::Madrid)));
    }

    #[test]
    fn unknown_zone_is_an_error() {
        let err = Timezone::parse(Some("Mars/Olympus")).unwrap_err();
        assert_eq!(err.to_string(), "Invalid timezone: Mars/Olympus");
    }

    #[test]
    fn new_year_depends_on_zone() {
        let utc = "2025-12-31T23:30:00Z".parse::<DateTime<Utc>>().unwrap();
        let madrid = Timezone::parse(Some("Europe/Madrid")).unwrap();
        let utc_zone = Timezone::parse(Some("UTC")).unwrap();
        assert_eq!(madrid.date_of(utc).year(), 2026);
        assert_eq!(utc_zone.date_of(utc).year(), 2025);
    }
}
