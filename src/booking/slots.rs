//! Appointment time slots: hourly, 08:00–11:00 and 14:00–17:00.

use chrono::NaiveTime;
use std::fmt;
use std::str::FromStr;

use crate::error::FormError;

/// A bookable time of day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeSlot {
    hour: u32,
}

impl TimeSlot {
    pub const ALL: [TimeSlot; 8] = [
        TimeSlot { hour: 8 },
        TimeSlot { hour: 9 },
        TimeSlot { hour: 10 },
        TimeSlot { hour: 11 },
        TimeSlot { hour: 14 },
        TimeSlot { hour: 15 },
        TimeSlot { hour: 16 },
        TimeSlot { hour: 17 },
    ];

    /// Slot starting at `hour`, if it is one of the offered ones
    pub fn at_hour(hour: u32) -> Option<TimeSlot> {
        Self::ALL.into_iter().find(|s| s.hour == hour)
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    /// Form value, `HH:MM`
    pub fn value(&self) -> String {
        format!("{:02}:00", self.hour)
    }

    /// 12-hour label, `08:00 AM` / `02:00 PM`
    pub fn label(&self) -> String {
        let (hour, suffix) = match self.hour {
            0 => (12, "AM"),
            h @ 1..=11 => (h, "AM"),
            12 => (12, "PM"),
            h => (h - 12, "PM"),
        };
        format!("{:02}:00 {}", hour, suffix)
    }

    pub fn time(&self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.hour, 0, 0).unwrap_or(NaiveTime::MIN)
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value())
    }
}

impl FromStr for TimeSlot {
    type Err = FormError;

    /// Accepts `HH:MM` (`08:00`, `8:00`) with zero minutes
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || FormError::InvalidSlot(s.to_string());

        let (hour, minute) = s.trim().split_once(':').ok_or_else(invalid)?;
        let hour: u32 = hour.parse().map_err(|_| invalid())?;
        let minute: u32 = minute.parse().map_err(|_| invalid())?;

        if minute != 0 {
            return Err(invalid());
        }
        TimeSlot::at_hour(hour).ok_or_else(invalid)
    }
}
