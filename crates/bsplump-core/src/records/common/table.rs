use crate::{DecodeError, EntityKind, MapType};

/// Static lookup from map type to a value shared by a group of formats.
///
/// Each row lists the formats of one group, so formats with identical
/// layouts resolve to the same `&'static T`.
pub struct FormatTable<T: 'static> {
    kind: EntityKind,
    rows: &'static [(&'static [MapType], T)],
}

impl<T: 'static> FormatTable<T> {
    pub const fn new(kind: EntityKind, rows: &'static [(&'static [MapType], T)]) -> Self {
        Self { kind, rows }
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn get(&self, map_type: MapType) -> Option<&'static T> {
        self.rows()
            .iter()
            .find(|(formats, _)| formats.contains(&map_type))
            .map(|(_, value)| value)
    }

    pub fn lookup(&self, map_type: MapType) -> Result<&'static T, DecodeError> {
        self.get(map_type).ok_or(DecodeError::UnsupportedFormat {
            kind: self.kind(),
            map_type,
        })
    }

    pub fn rows(&self) -> &'static [(&'static [MapType], T)] {
        self.rows
    }

    pub fn supported(&self) -> impl Iterator<Item = MapType> + '_ {
        MapType::ALL
            .into_iter()
            .filter(|map_type| self.get(*map_type).is_some())
    }
}

#[cfg(test)]
pub(crate) fn assert_rows_disjoint<T>(table: &FormatTable<T>) {
    for map_type in MapType::ALL {
        let hits = table
            .rows()
            .iter()
            .filter(|(formats, _)| formats.contains(&map_type))
            .count();
        assert!(hits <= 1, "{map_type} appears in {hits} {} rows", table.kind());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static LENGTHS: FormatTable<usize> = FormatTable::new(
        EntityKind::Brush,
        &[(&[MapType::Quake2, MapType::Sin], 12), (&[MapType::Cod], 4)],
    );

    #[test]
    fn lookup_returns_group_value() {
        assert_eq!(LENGTHS.lookup(MapType::Sin), Ok(&12));
        assert_eq!(LENGTHS.lookup(MapType::Cod), Ok(&4));
    }

    #[test]
    fn grouped_formats_share_one_value() {
        let a = LENGTHS.lookup(MapType::Quake2).unwrap();
        let b = LENGTHS.lookup(MapType::Sin).unwrap();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn lookup_unknown_names_format() {
        let err = LENGTHS.lookup(MapType::Quake).unwrap_err();
        assert_eq!(
            err,
            DecodeError::UnsupportedFormat {
                kind: EntityKind::Brush,
                map_type: MapType::Quake,
            }
        );
    }

    #[test]
    fn supported_lists_in_declaration_order() {
        let formats: Vec<_> = LENGTHS.supported().collect();
        assert_eq!(formats, vec![MapType::Quake2, MapType::Sin, MapType::Cod]);
        assert_rows_disjoint(&LENGTHS);
    }
}
