//! Project maintenance window (`/groups/{GROUP-ID}/maintenanceWindow`).

use serde::de::Error as _;
use serde::{Deserialize, Serialize};

/// Day of week, numbered the way Atlas does: Sunday is 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Weekday {
    Sunday = 1,
    Monday = 2,
    Tuesday = 3,
    Wednesday = 4,
    Thursday = 5,
    Friday = 6,
    Saturday = 7,
}

impl TryFrom<u8> for Weekday {
    type Error = u8;

    fn try_from(day: u8) -> Result<Self, Self::Error> {
        Ok(match day {
            1 => Self::Sunday,
            2 => Self::Monday,
            3 => Self::Tuesday,
            4 => Self::Wednesday,
            5 => Self::Thursday,
            6 => Self::Friday,
            7 => Self::Saturday,
            other => return Err(other),
        })
    }
}

impl Serialize for Weekday {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(*self as u8)
    }
}

impl<'de> Deserialize<'de> for Weekday {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let day = u8::deserialize(deserializer)?;
        Weekday::try_from(day)
            .map_err(|day| D::Error::custom(format!("day of week must be 1-7, got {day}")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceWindow {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_of_week: Option<Weekday>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hour_of_day: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_deferrals: Option<u32>,
    #[serde(rename = "startASAP", default, skip_serializing_if = "Option::is_none")]
    pub start_asap: Option<bool>,
}

impl Default for MaintenanceWindow {
    fn default() -> Self {
        Self {
            day_of_week: Some(Weekday::Sunday),
            hour_of_day: Some(23),
            number_of_deferrals: Some(1),
            start_asap: Some(false),
        }
    }
}

impl MaintenanceWindow {
    /// Body for `PATCH`: `numberOfDeferrals` is read-only and unset fields are omitted.
    pub fn as_update_body(&self) -> crate::error::Result<serde_json::Value> {
        let update = MaintenanceWindow {
            number_of_deferrals: None,
            ..self.clone()
        };
        Ok(serde_json::to_value(update)?)
    }
}
