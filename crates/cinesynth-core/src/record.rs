use std::borrow::Cow;

/// Separator used when a multi-valued field is flattened into one cell.
pub const LIST_DELIMITER: &str = "|";

/// A single cell of a generated record.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<'a> {
    Null,
    Int(i64),
    Text(&'a str),
    List(&'a [String]),
}

impl FieldValue<'_> {
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Render the value for a CSV cell.
    ///
    /// Absent values become an empty cell, integers use plain decimal digits
    /// regardless of locale, and lists are joined with [`LIST_DELIMITER`].
    pub fn to_csv(&self) -> Cow<'_, str> {
        match self {
            FieldValue::Null => Cow::Borrowed(""),
            FieldValue::Int(value) => Cow::Owned(value.to_string()),
            FieldValue::Text(value) => Cow::Borrowed(value),
            FieldValue::List(values) => Cow::Owned(values.join(LIST_DELIMITER)),
        }
    }
}

/// A flat record that can be written as one row of a table.
pub trait Record {
    /// Column names in field declaration order.
    const COLUMNS: &'static [&'static str];

    /// One value per entry of [`Record::COLUMNS`], in the same order.
    fn values(&self) -> Vec<FieldValue<'_>>;
}
