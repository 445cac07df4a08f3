//! Lookup tables turning condition codes and wind bearings into display symbols.
//!
//! Both lookups are total: anything outside the tables lands in a catch-all bucket.

use colored::Color;
use std::ops::Range;

/// Condition groups, see <https://openweathermap.org/weather-conditions>.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionKind {
    Thunderstorm,
    Drizzle,
    Rain,
    Snow,
    Atmosphere,
    Clear,
    Cloudy,
    /// Codes the API may add later.
    Unknown,
}

impl ConditionKind {
    pub fn symbol(&self) -> &'static str {
        match self {
            ConditionKind::Thunderstorm => "⚡️",
            ConditionKind::Drizzle => "💧",
            ConditionKind::Rain => "🌧",
            ConditionKind::Snow => "❄️",
            ConditionKind::Atmosphere => "🌪",
            ConditionKind::Clear => "☀️",
            ConditionKind::Cloudy => "☁️",
            ConditionKind::Unknown => "🌈",
        }
    }

    /// `None` means the terminal's default colour.
    pub fn color(&self) -> Option<Color> {
        match self {
            ConditionKind::Thunderstorm => Some(Color::Red),
            ConditionKind::Drizzle => Some(Color::Cyan),
            ConditionKind::Rain | ConditionKind::Atmosphere => Some(Color::Blue),
            ConditionKind::Snow | ConditionKind::Cloudy => Some(Color::White),
            ConditionKind::Clear => Some(Color::Yellow),
            ConditionKind::Unknown => None,
        }
    }
}

const CONDITIONS: &[(Range<i64>, ConditionKind)] = &[
    (200..300, ConditionKind::Thunderstorm),
    (300..400, ConditionKind::Drizzle),
    (500..600, ConditionKind::Rain),
    (600..700, ConditionKind::Snow),
    (700..800, ConditionKind::Atmosphere),
    (800..801, ConditionKind::Clear),
    (801..900, ConditionKind::Cloudy),
];

pub fn classify_condition(id: i64) -> ConditionKind {
    CONDITIONS
        .iter()
        .find(|(range, _)| range.contains(&id))
        .map_or(ConditionKind::Unknown, |(_, kind)| *kind)
}

/// Where the wind blows from. Arrows point the way it blows to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compass {
    North,
    Northeast,
    East,
    Southeast,
    South,
    Southwest,
    West,
    Northwest,
    /// Bearing outside 0..361.
    Invalid,
}

impl Compass {
    pub fn name(&self) -> &'static str {
        match self {
            Compass::North => "North",
            Compass::Northeast => "Northeast",
            Compass::East => "East",
            Compass::Southeast => "Southeast",
            Compass::South => "South",
            Compass::Southwest => "Southwest",
            Compass::West => "West",
            Compass::Northwest => "Northwest",
            Compass::Invalid => "Crazy!",
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            Compass::North => "⬇️",
            Compass::Northeast => "↘️",
            Compass::East => "⬅️",
            Compass::Southeast => "↗️",
            Compass::South => "⬆️",
            Compass::Southwest => "↖️",
            Compass::West => "➡️",
            Compass::Northwest => "↙️",
            Compass::Invalid => "🔄",
        }
    }
}

// North straddles 0/360, so it gets two entries.
const BEARINGS: &[(Range<f64>, Compass)] = &[
    (23.0..68.0, Compass::Northeast),
    (68.0..113.0, Compass::East),
    (113.0..158.0, Compass::Southeast),
    (158.0..203.0, Compass::South),
    (203.0..248.0, Compass::Southwest),
    (248.0..293.0, Compass::West),
    (293.0..338.0, Compass::Northwest),
    (0.0..23.0, Compass::North),
    (338.0..361.0, Compass::North),
];

pub fn classify_bearing(deg: f64) -> Compass {
    BEARINGS
        .iter()
        .find(|(range, _)| range.contains(&deg))
        .map_or(Compass::Invalid, |(_, compass)| *compass)
}
