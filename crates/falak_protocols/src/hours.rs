//! Planetary days and hours.
//!
//! The day from sunrise to sunset and the night from sunset to the next
//! sunrise are each split into twelve equal hours. Hour rulers follow the
//! Chaldean round starting with the weekday ruler at sunrise.

use falak_core::{BodyId, CoreError};
use serde::Serialize;

use BodyId::{Jupiter, Mars, Mercury, Moon, Saturn, Sun, Venus};

/// Hour-ruler round starting at Sunday's sunrise.
pub const ROUND: [BodyId; 7] = [Sun, Venus, Mercury, Moon, Saturn, Jupiter, Mars];

/// Day rulers from Sunday.
pub const DAY_RULERS: [BodyId; 7] = [Sun, Moon, Mars, Mercury, Jupiter, Venus, Saturn];

/// Night rulers from Sunday.
pub const NIGHT_RULERS: [BodyId; 7] = [Jupiter, Venus, Saturn, Sun, Moon, Mars, Mercury];

/// Ruler of the `n`-th hour since sunrise on weekday `dow` (Sunday = 0).
pub const fn nth_ruler(n: usize, dow: usize) -> BodyId {
    ROUND[(dow * 24 + n) % 7]
}

/// Weekday of a Julian day, Sunday = 0.
pub fn weekday(jd: f64) -> usize {
    let jdn = (jd + 0.5).floor() as i64;
    (jdn + 1).rem_euclid(7) as usize
}

/// Weekday of the civil date at `utc_offset_hours` east of Greenwich for a
/// UT Julian day.
pub fn local_weekday(jd: f64, utc_offset_hours: f64) -> usize {
    weekday(jd + utc_offset_hours / 24.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HourMode {
    Day,
    Night,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HourEntry {
    pub start: f64,
    pub end: f64,
    pub ruler: BodyId,
}

/// Description of one planetary hour.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HourInfo {
    pub mode: HourMode,
    /// Day ruler by day, night ruler by night.
    pub ruler: BodyId,
    pub day_ruler: BodyId,
    pub night_ruler: BodyId,
    pub hour_ruler: BodyId,
    /// 1 through 12 within its day or night.
    pub hour_number: usize,
    pub table_index: usize,
    pub start: f64,
    pub end: f64,
}

/// The 24 planetary hours around a moment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourTable {
    jd: f64,
    entries: Vec<HourEntry>,
    current: usize,
}

impl HourTable {
    /// Build the table for `jd` from the surrounding sunrise, sunset and
    /// next sunrise (Julian days, UT). `dow` is the weekday of the local
    /// civil date of the sunrise, Sunday = 0 (see [`local_weekday`]).
    pub fn new(
        jd: f64,
        sunrise: f64,
        sunset: f64,
        next_sunrise: f64,
        dow: usize,
    ) -> Result<Self, CoreError> {
        if !(sunrise < sunset && sunset < next_sunrise) {
            return Err(CoreError::InvalidConfig(
                "sunrise, sunset and next sunrise must be increasing",
            ));
        }
        if dow >= 7 {
            return Err(CoreError::InvalidConfig("weekday must be in 0..7"));
        }
        let mut entries = Vec::with_capacity(24);
        for (from, to, offset) in [(sunrise, sunset, 0), (sunset, next_sunrise, 12)] {
            let length = (to - from) / 12.0;
            for i in 0..12 {
                let start = from + i as f64 * length;
                entries.push(HourEntry {
                    start,
                    end: start + length,
                    ruler: nth_ruler(i + offset, dow),
                });
            }
        }
        let current = entries
            .iter()
            .position(|e| e.start <= jd && jd <= e.end)
            .ok_or(CoreError::InvalidConfig("date outside the planetary hour table"))?;
        Ok(Self {
            jd,
            entries,
            current,
        })
    }

    pub fn jd(&self) -> f64 {
        self.jd
    }

    pub fn entries(&self) -> &[HourEntry] {
        &self.entries
    }

    /// Index of the hour containing `jd`.
    pub fn index(&self, jd: f64) -> Option<usize> {
        self.entries.iter().position(|e| e.start <= jd && jd <= e.end)
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn day_ruler(&self) -> BodyId {
        self.entries[0].ruler
    }

    pub fn night_ruler(&self) -> BodyId {
        self.entries[12].ruler
    }

    /// Day ruler during the day, night ruler during the night.
    pub fn current_ruler(&self) -> BodyId {
        if self.current < 12 {
            self.day_ruler()
        } else {
            self.night_ruler()
        }
    }

    pub fn hour_ruler(&self) -> BodyId {
        self.entries[self.current].ruler
    }

    pub fn current_info(&self) -> HourInfo {
        self.info_unchecked(self.current)
    }

    pub fn index_info(&self, index: usize) -> Option<HourInfo> {
        (index < self.entries.len()).then(|| self.info_unchecked(index))
    }

    fn info_unchecked(&self, index: usize) -> HourInfo {
        let entry = self.entries[index];
        let night = index >= 12;
        HourInfo {
            mode: if night { HourMode::Night } else { HourMode::Day },
            ruler: if night {
                self.night_ruler()
            } else {
                self.day_ruler()
            },
            day_ruler: self.day_ruler(),
            night_ruler: self.night_ruler(),
            hour_ruler: entry.ruler,
            hour_number: if night { index - 11 } else { index + 1 },
            table_index: index,
            start: entry.start,
            end: entry.end,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2015-Mar-13 (Friday) at Lisbon, rounded
    const SUNRISE: f64 = 2_457_094.79;
    const SUNSET: f64 = 2_457_095.29;
    const NEXT_SUNRISE: f64 = 2_457_095.79;
    const FRIDAY: usize = 5;

    #[test]
    fn weekday_from_jd() {
        assert_eq!(weekday(2_451_544.5), 6); // 2000-Jan-01, Saturday
        assert_eq!(weekday(2_457_095.2083), 5); // 2015-Mar-13, Friday
        assert_eq!(weekday(2_457_097.0), 0); // 2015-Mar-15, Sunday
    }

    #[test]
    fn local_date_decides_weekday() {
        // Tokyo sunrise 2015-Mar-13 05:55 JST is still Thursday in UT
        let sunrise = 2_457_094.372;
        assert_eq!(weekday(sunrise), 4);
        assert_eq!(local_weekday(sunrise, 9.0), FRIDAY);
        assert_eq!(local_weekday(sunrise, 0.0), 4);
    }

    #[test]
    fn eastern_friday() {
        let sunrise = 2_457_094.372;
        let dow = local_weekday(sunrise, 9.0);
        let table = HourTable::new(2_457_094.625, sunrise, 2_457_094.865, 2_457_095.371, dow).unwrap();
        assert_eq!(table.day_ruler(), Venus);
        assert_eq!(table.night_ruler(), Mars);
        // 0.253 days after sunrise with 0.493 / 12 day hours: seventh hour
        assert_eq!(table.current_index(), 6);
        assert_eq!(table.hour_ruler(), Sun);
    }

    #[test]
    fn day_and_night_rulers_match_round() {
        for dow in 0..7 {
            assert_eq!(nth_ruler(0, dow), DAY_RULERS[dow]);
            assert_eq!(nth_ruler(12, dow), NIGHT_RULERS[dow]);
        }
    }

    #[test]
    fn friday_afternoon() {
        let table = HourTable::new(2_457_095.2083, SUNRISE, SUNSET, NEXT_SUNRISE, FRIDAY).unwrap();
        assert_eq!(table.entries().len(), 24);
        assert_eq!(table.day_ruler(), Venus);
        assert_eq!(table.night_ruler(), Mars);
        // 0.4183 days after sunrise with 0.5 / 12 day hours: eleventh hour
        assert_eq!(table.current_index(), 10);
        assert_eq!(table.current_ruler(), Venus);
        assert_eq!(table.hour_ruler(), nth_ruler(10, 5));
        assert_eq!(table.hour_ruler(), Saturn);
    }

    #[test]
    fn night_info() {
        let table = HourTable::new(2_457_095.5, SUNRISE, SUNSET, NEXT_SUNRISE, FRIDAY).unwrap();
        let info = table.current_info();
        assert_eq!(info.mode, HourMode::Night);
        assert_eq!(info.ruler, Mars);
        assert_eq!(info.table_index, 17);
        assert_eq!(info.hour_number, 6);
        assert!(table.index_info(24).is_none());
        assert_eq!(table.index_info(12).unwrap().hour_number, 1);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(HourTable::new(2_457_095.0, SUNSET, SUNRISE, NEXT_SUNRISE, FRIDAY).is_err());
        assert!(HourTable::new(2_457_099.0, SUNRISE, SUNSET, NEXT_SUNRISE, FRIDAY).is_err());
        assert!(HourTable::new(2_457_095.0, SUNRISE, SUNSET, NEXT_SUNRISE, 7).is_err());
    }
}
