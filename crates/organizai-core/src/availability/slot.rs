//! The fixed weekly coordinate space: seven days of 48 half-hour slots.
//!
//! A [`Slot`] names a cell (`0..48`); a [`TimeOfDay`] names a boundary
//! between cells (`0..=48`, rendered `00:00`..`24:00`). Intervals are
//! half-open ranges of boundaries, so an interval ending at midnight has
//! the end boundary `24:00`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Number of half-hour slots in a day.
pub const SLOTS_PER_DAY: usize = 48;

/// Length of one slot in minutes.
pub const SLOT_MINUTES: u32 = 30;

/// Day of the week, Monday first.
///
/// Wire tokens are the lowercase Spanish day names without accents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Day {
    #[serde(rename = "lunes")]
    Monday,
    #[serde(rename = "martes")]
    Tuesday,
    #[serde(rename = "miercoles")]
    Wednesday,
    #[serde(rename = "jueves")]
    Thursday,
    #[serde(rename = "viernes")]
    Friday,
    #[serde(rename = "sabado")]
    Saturday,
    #[serde(rename = "domingo")]
    Sunday,
}

impl Day {
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    /// Position in the week, Monday = 0.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Wire token (`"lunes"`, `"martes"`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            Day::Monday => "lunes",
            Day::Tuesday => "martes",
            Day::Wednesday => "miercoles",
            Day::Thursday => "jueves",
            Day::Friday => "viernes",
            Day::Saturday => "sabado",
            Day::Sunday => "domingo",
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Day::Monday => "Lunes",
            Day::Tuesday => "Martes",
            Day::Wednesday => "Miércoles",
            Day::Thursday => "Jueves",
            Day::Friday => "Viernes",
            Day::Saturday => "Sábado",
            Day::Sunday => "Domingo",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Day {
    type Err = ValidationError;

    /// Accepts wire tokens and display labels, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Day::ALL
            .into_iter()
            .find(|d| d.as_str() == needle || d.label().to_lowercase() == needle)
            .ok_or_else(|| ValidationError::InvalidValue {
                field: "day".into(),
                message: format!("unknown day '{s}' (expected lunes..domingo)"),
            })
    }
}

/// One half-hour cell of a day, `0..48`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct Slot(u8);

impl Slot {
    /// Build a slot from an index inside the grid's own coordinate space.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 48`. Cell coordinates only ever come from the
    /// grid itself, so an out-of-range index is a coordinate-mapping bug.
    pub fn new(index: usize) -> Self {
        assert!(
            index < SLOTS_PER_DAY,
            "slot index {index} out of bounds for day (length: {SLOTS_PER_DAY})"
        );
        Self(index as u8)
    }

    /// Checked constructor for indices parsed from untrusted text.
    pub fn try_new(index: usize) -> Result<Self, ValidationError> {
        if index < SLOTS_PER_DAY {
            Ok(Self(index as u8))
        } else {
            Err(ValidationError::OutOfBounds {
                collection: "day slots".into(),
                index,
                len: SLOTS_PER_DAY,
            })
        }
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Boundary at which this slot starts.
    pub fn start(self) -> TimeOfDay {
        TimeOfDay(self.0)
    }

    /// Boundary at which this slot ends.
    pub fn end(self) -> TimeOfDay {
        TimeOfDay(self.0 + 1)
    }

    /// All slots of a day in order.
    pub fn all() -> impl Iterator<Item = Slot> {
        (0..SLOTS_PER_DAY).map(|i| Slot(i as u8))
    }
}

impl TryFrom<usize> for Slot {
    type Error = ValidationError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Slot::try_new(value)
    }
}

impl From<Slot> for usize {
    fn from(value: Slot) -> Self {
        value.index()
    }
}

/// A slot boundary on the 30-minute lattice, `00:00` through `24:00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay(u8);

impl TimeOfDay {
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(0);
    pub const END_OF_DAY: TimeOfDay = TimeOfDay(SLOTS_PER_DAY as u8);

    /// # Panics
    ///
    /// Panics if `boundary > 48`.
    pub fn from_boundary(boundary: usize) -> Self {
        assert!(
            boundary <= SLOTS_PER_DAY,
            "slot boundary {boundary} out of bounds for day (length: {SLOTS_PER_DAY})"
        );
        Self(boundary as u8)
    }

    pub fn from_hm(hour: u32, minute: u32) -> Result<Self, ValidationError> {
        let invalid = |message: String| ValidationError::InvalidValue {
            field: "time".into(),
            message,
        };
        if minute != 0 && minute != SLOT_MINUTES {
            return Err(invalid(format!(
                "minutes must be 00 or 30 (got {minute:02})"
            )));
        }
        match (hour, minute) {
            (24, 0) => Ok(Self::END_OF_DAY),
            (0..=23, _) => Ok(Self((hour * 2 + minute / SLOT_MINUTES) as u8)),
            _ => Err(invalid(format!("hour must be between 00 and 23 (got {hour:02})"))),
        }
    }

    /// Boundary index, `0..=48`.
    pub fn boundary(self) -> usize {
        self.0 as usize
    }

    pub fn hour(self) -> u32 {
        self.0 as u32 / 2
    }

    pub fn minute(self) -> u32 {
        (self.0 as u32 % 2) * SLOT_MINUTES
    }

    /// Minutes since midnight.
    pub fn minutes(self) -> u32 {
        self.0 as u32 * SLOT_MINUTES
    }

    /// The cell starting at this boundary, if any (`24:00` starts none).
    pub fn slot(self) -> Option<Slot> {
        Slot::try_new(self.boundary()).ok()
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ValidationError::InvalidValue {
            field: "time".into(),
            message: format!("'{s}' is not an HH:MM time"),
        };
        let (h, m) = s.trim().split_once(':').ok_or_else(invalid)?;
        if h.len() != 2 || m.len() != 2 {
            return Err(invalid());
        }
        let hour: u32 = h.parse().map_err(|_| invalid())?;
        let minute: u32 = m.parse().map_err(|_| invalid())?;
        Self::from_hm(hour, minute)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(value: TimeOfDay) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_tokens_round_trip() {
        for day in Day::ALL {
            assert_eq!(day.as_str().parse::<Day>().unwrap(), day);
            assert_eq!(day.label().parse::<Day>().unwrap(), day);
            assert_eq!(Day::from_index(day.index()), Some(day));
        }
        assert_eq!(
            serde_json::to_string(&Day::Wednesday).unwrap(),
            "\"miercoles\""
        );
        assert!("funday".parse::<Day>().is_err());
    }

    #[test]
    fn time_of_day_parses_lattice_values() {
        let t: TimeOfDay = "08:30".parse().unwrap();
        assert_eq!(t.boundary(), 17);
        assert_eq!(t.minutes(), 510);
        assert_eq!(t.to_string(), "08:30");
        assert_eq!("24:00".parse::<TimeOfDay>().unwrap(), TimeOfDay::END_OF_DAY);
        assert_eq!("00:00".parse::<TimeOfDay>().unwrap(), TimeOfDay::MIDNIGHT);
    }

    #[test]
    fn time_of_day_rejects_off_lattice_values() {
        assert!("08:15".parse::<TimeOfDay>().is_err());
        assert!("24:30".parse::<TimeOfDay>().is_err());
        assert!("25:00".parse::<TimeOfDay>().is_err());
        assert!("8:00".parse::<TimeOfDay>().is_err());
        assert!("noon".parse::<TimeOfDay>().is_err());
    }

    #[test]
    fn time_of_day_serializes_as_string() {
        let t = TimeOfDay::from_boundary(20);
        assert_eq!(serde_json::to_string(&t).unwrap(), "\"10:00\"");
        let back: TimeOfDay = serde_json::from_str("\"10:00\"").unwrap();
        assert_eq!(back, t);
        assert!(serde_json::from_str::<TimeOfDay>("\"10:10\"").is_err());
    }

    #[test]
    fn slot_bounds() {
        assert_eq!(Slot::new(47).end(), TimeOfDay::END_OF_DAY);
        assert_eq!(Slot::all().count(), SLOTS_PER_DAY);
        assert_eq!(
            Slot::try_new(48),
            Err(ValidationError::OutOfBounds {
                collection: "day slots".into(),
                index: 48,
                len: 48,
            })
        );
        assert_eq!(TimeOfDay::END_OF_DAY.slot(), None);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn slot_new_asserts_on_out_of_range() {
        let _ = Slot::new(48);
    }
}
