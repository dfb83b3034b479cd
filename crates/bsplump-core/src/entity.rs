use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::records::{Brush, Node};

/// Entity kinds with a fixed-size lump record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Brush,
    Node,
}

impl EntityKind {
    pub const ALL: [EntityKind; 2] = [EntityKind::Brush, EntityKind::Node];

    pub fn name(self) -> &'static str {
        match self {
            EntityKind::Brush => "brush",
            EntityKind::Node => "node",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown entity kind '{name}' (expected brush or node)")]
pub struct ParseEntityKindError {
    pub name: String,
}

impl FromStr for EntityKind {
    type Err = ParseEntityKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        EntityKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseEntityKindError {
                name: wanted.to_string(),
            })
    }
}

/// A decoded record of any kind.
///
/// # Examples
/// ```
/// use bsplump_core::{Entity, EntityKind, MapType, decode_entity};
///
/// let bytes = [1, 0, 0, 0, 2, 0, 0, 0, 3, 0, 0, 0];
/// let entity = decode_entity(EntityKind::Brush, Some(&bytes), MapType::Quake2)?;
/// assert_eq!(entity.kind(), EntityKind::Brush);
/// # Ok::<(), bsplump_core::DecodeError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Entity {
    Brush(Brush),
    Node(Node),
}

impl Entity {
    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Brush(_) => EntityKind::Brush,
            Entity::Node(_) => EntityKind::Node,
        }
    }

    pub fn as_brush(&self) -> Option<&Brush> {
        match self {
            Entity::Brush(brush) => Some(brush),
            Entity::Node(_) => None,
        }
    }

    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Entity::Node(node) => Some(node),
            Entity::Brush(_) => None,
        }
    }
}

impl From<Brush> for Entity {
    fn from(value: Brush) -> Self {
        Entity::Brush(value)
    }
}

impl From<Node> for Entity {
    fn from(value: Node) -> Self {
        Entity::Node(value)
    }
}
