/// A single spreadsheet cell value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellValue {
    Empty,
    Text(String),
    Integer(i64),
}

impl CellValue {
    /// Text cell, or empty for `None`.
    #[must_use]
    pub fn text(value: Option<&str>) -> Self {
        value.map_or(Self::Empty, |v| Self::Text(v.to_string()))
    }

    /// Upper-cased text cell, or empty for `None`.
    #[must_use]
    pub fn upper(value: Option<&str>) -> Self {
        value.map_or(Self::Empty, |v| Self::Text(v.to_uppercase()))
    }

    /// Integer cell; ids beyond `i64` fall back to text.
    #[must_use]
    pub fn unsigned(value: u64) -> Self {
        i64::try_from(value).map_or_else(|_| Self::Text(value.to_string()), Self::Integer)
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl From<Option<String>> for CellValue {
    fn from(value: Option<String>) -> Self {
        value.map_or(Self::Empty, Self::Text)
    }
}

impl From<Option<i64>> for CellValue {
    fn from(value: Option<i64>) -> Self {
        value.map_or(Self::Empty, Self::Integer)
    }
}
