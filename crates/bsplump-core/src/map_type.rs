//! Closed set of BSP format identifiers.
//!
//! The container reader decides which `MapType` applies to a file; this crate
//! never infers it from record content. Canonical names are lowercase and are
//! shared by `Display`, `FromStr` and serde.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Game or engine variant whose byte layouts apply to a map file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MapType {
    Quake,
    Quake2,
    Daikatana,
    Sin,
    Sof,
    Source17,
    Source18,
    Source19,
    Source20,
    Source21,
    Source22,
    Source23,
    Source27,
    Vindictus,
    TacticalIntervention,
    Dmomam,
    Nightfire,
    Quake3,
    Fakk,
    Mohaa,
    Stef2,
    Stef2Demo,
    Raven,
    Cod,
    Cod2,
    Cod4,
}

impl MapType {
    /// Every identifier, in declaration order.
    pub const ALL: [MapType; 26] = [
        MapType::Quake,
        MapType::Quake2,
        MapType::Daikatana,
        MapType::Sin,
        MapType::Sof,
        MapType::Source17,
        MapType::Source18,
        MapType::Source19,
        MapType::Source20,
        MapType::Source21,
        MapType::Source22,
        MapType::Source23,
        MapType::Source27,
        MapType::Vindictus,
        MapType::TacticalIntervention,
        MapType::Dmomam,
        MapType::Nightfire,
        MapType::Quake3,
        MapType::Fakk,
        MapType::Mohaa,
        MapType::Stef2,
        MapType::Stef2Demo,
        MapType::Raven,
        MapType::Cod,
        MapType::Cod2,
        MapType::Cod4,
    ];

    /// Canonical lowercase name (e.g. `"stef2-demo"`).
    pub fn name(self) -> &'static str {
        match self {
            MapType::Quake => "quake",
            MapType::Quake2 => "quake2",
            MapType::Daikatana => "daikatana",
            MapType::Sin => "sin",
            MapType::Sof => "sof",
            MapType::Source17 => "source17",
            MapType::Source18 => "source18",
            MapType::Source19 => "source19",
            MapType::Source20 => "source20",
            MapType::Source21 => "source21",
            MapType::Source22 => "source22",
            MapType::Source23 => "source23",
            MapType::Source27 => "source27",
            MapType::Vindictus => "vindictus",
            MapType::TacticalIntervention => "tactical-intervention",
            MapType::Dmomam => "dmomam",
            MapType::Nightfire => "nightfire",
            MapType::Quake3 => "quake3",
            MapType::Fakk => "fakk",
            MapType::Mohaa => "mohaa",
            MapType::Stef2 => "stef2",
            MapType::Stef2Demo => "stef2-demo",
            MapType::Raven => "raven",
            MapType::Cod => "cod",
            MapType::Cod2 => "cod2",
            MapType::Cod4 => "cod4",
        }
    }
}

impl fmt::Display for MapType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown map type '{name}'")]
pub struct ParseMapTypeError {
    pub name: String,
}

impl FromStr for MapType {
    type Err = ParseMapTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        MapType::ALL
            .iter()
            .copied()
            .find(|map_type| map_type.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseMapTypeError {
                name: wanted.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_from_str() {
        for map_type in MapType::ALL {
            assert_eq!(map_type.name().parse::<MapType>(), Ok(map_type));
        }
    }

    #[test]
    fn serde_uses_canonical_names() {
        for map_type in MapType::ALL {
            let json = serde_json::to_string(&map_type).expect("serialize map type");
            assert_eq!(json, format!("\"{}\"", map_type.name()));
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("Source20".parse::<MapType>(), Ok(MapType::Source20));
        assert_eq!(" STEF2-Demo ".parse::<MapType>(), Ok(MapType::Stef2Demo));
    }

    #[test]
    fn parse_unknown_name() {
        let err = "hexen2".parse::<MapType>().unwrap_err();
        assert!(err.to_string().contains("unknown map type 'hexen2'"));
    }
}
