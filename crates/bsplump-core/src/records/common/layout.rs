/// Width of a little-endian signed integer field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntWidth {
    I16,
    I32,
}

impl IntWidth {
    pub const fn size(self) -> usize {
        match self {
            IntWidth::I16 => 2,
            IntWidth::I32 => 4,
        }
    }
}

/// Position and width of one field inside a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub offset: usize,
    pub width: IntWidth,
}

impl Field {
    pub const fn i16(offset: usize) -> Self {
        Self {
            offset,
            width: IntWidth::I16,
        }
    }

    pub const fn i32(offset: usize) -> Self {
        Self {
            offset,
            width: IntWidth::I32,
        }
    }

    pub const fn end(self) -> usize {
        self.offset + self.width.size()
    }

    pub fn range(self) -> std::ops::Range<usize> {
        self.offset..self.end()
    }
}

/// Kind-independent view of a layout descriptor.
pub trait RecordLayout: Sync {
    /// Stable name of the format group sharing this layout.
    fn group(&self) -> &'static str;

    /// Fields in declaration order; `None` marks a field the group lacks.
    fn fields(&self) -> Vec<(&'static str, Option<Field>)>;

    /// Bytes spanned by the present fields, from offset 0.
    fn extent(&self) -> usize {
        self.fields()
            .into_iter()
            .filter_map(|(_, field)| field.map(Field::end))
            .max()
            .unwrap_or(0)
    }
}
