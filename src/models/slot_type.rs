use serde::Serialize;

/// One schedulable slot kind. Weekdays carry a single night slot;
/// Saturdays and Sundays carry two independent slots (day and night).
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub enum SlotType {
    WeekdayNight,
    WeekendDay,
    WeekendNight,
}

impl SlotType {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            SlotType::WeekdayNight => "weekday_night",
            SlotType::WeekendDay => "weekend_day",
            SlotType::WeekendNight => "weekend_night",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "weekday_night" => Some(SlotType::WeekdayNight),
            "weekend_day" => Some(SlotType::WeekendDay),
            "weekend_night" => Some(SlotType::WeekendNight),
            _ => None,
        }
    }

    /// Human-readable label for table output.
    pub fn label(&self) -> &'static str {
        match self {
            SlotType::WeekdayNight => "Weekday Night",
            SlotType::WeekendDay => "Weekend Day",
            SlotType::WeekendNight => "Weekend Night",
        }
    }

    pub fn is_weekend(&self) -> bool {
        matches!(self, SlotType::WeekendDay | SlotType::WeekendNight)
    }
}
