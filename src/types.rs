use std::borrow::Cow;

//==============================================================================
// Input Format
//==============================================================================

/// Separator between fields on one input line
pub const FIELD_DELIMITER: char = ';';

/// Lines with fewer fields than this are skipped
pub const MIN_FIELDS: usize = 7;

/// Type label of the top-level nodes in the report
pub const DATABASE_TYPE: &str = "DATABASE";

/// The only `is_nullable` value that means "accepts nulls"
pub const NULLABLE_FLAG: &str = "1";

//==============================================================================
// Record
//==============================================================================

/// One imported line: a database, table or column node.
///
/// Parent links are plain strings. The tree is rebuilt from
/// `(parent_type, parent_name)` matching another record's `(record_type, name)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    /// Category label (DATABASE, TABLE, COLUMN, ...), uppercased once normalized
    pub record_type: String,
    pub name: String,
    /// Namespace qualifier, display only
    pub schema: String,
    pub parent_name: String,
    pub parent_type: String,
    /// Free-text type descriptor shown for columns
    pub data_type: String,
    /// Raw flag; only `"1"` means nullable
    pub is_nullable: String,
    /// Derived once per import from the child index
    pub number_of_children: usize,
}

impl Record {
    /// Build a record from already split fields, positionally.
    ///
    /// Returns `None` when fewer than [`MIN_FIELDS`] are present. Extra fields are ignored.
    pub fn from_fields(fields: &[&str]) -> Option<Self> {
        if fields.len() < MIN_FIELDS {
            return None;
        }

        Some(Record {
            record_type: fields[0].trim().to_string(),
            name: fields[1].trim().to_string(),
            schema: fields[2].trim().to_string(),
            parent_name: fields[3].trim().to_string(),
            parent_type: fields[4].trim().to_string(),
            data_type: fields[5].trim().to_string(),
            is_nullable: fields[6].trim().to_string(),
            number_of_children: 0,
        })
    }

    pub fn is_database(&self) -> bool {
        eq_ignore_case(&self.record_type, DATABASE_TYPE)
    }

    pub fn accepts_nulls(&self) -> bool {
        self.is_nullable == NULLABLE_FLAG
    }

    /// Whether this record's parent link resolves to `parent`
    pub fn is_child_of(&self, parent: &Record) -> bool {
        eq_ignore_case(&self.parent_type, &parent.record_type) && self.parent_name == parent.name
    }
}

/// Uppercase one character, keeping it as-is when its uppercase form is not a single character.
///
/// Length-preserving, so `ß` never matches `SS`.
fn upper_char(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// Case-insensitive key used for type comparisons.
///
/// Borrows when `value` is already in its folded form.
pub fn casefold(value: &str) -> Cow<'_, str> {
    if value.chars().all(|c| upper_char(c) == c) {
        Cow::Borrowed(value)
    } else {
        Cow::Owned(value.chars().map(upper_char).collect())
    }
}

/// Character-by-character case-insensitive equality
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars().map(upper_char).eq(b.chars().map(upper_char))
}
