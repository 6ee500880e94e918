//! Budget sections and the items they group.

/// Title of the section that can never be deleted.
pub const INCOME_TITLE: &str = "Income";

/// A single monetary line of a section, with its grid layout hints.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub value: f64,
    pub cols: i64,
    pub rows: i64,
    pub color: String,
}

impl Item {
    pub fn new(name: &str, value: f64, cols: i64, rows: i64, color: &str) -> Self {
        Self {
            id: 0,
            name: name.to_string(),
            value,
            cols,
            rows,
            color: color.to_string(),
        }
    }

    pub(crate) fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }
}

/// A titled group of budget items.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Section {
    pub id: i64,
    pub title: String,
    pub items: Vec<Item>,
}

impl Section {
    pub fn new(title: &str, items: Vec<Item>) -> Self {
        Self {
            id: 0,
            title: title.to_string(),
            items,
        }
    }

    pub(crate) fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    /// `true` when the section is the protected Income section.
    ///
    /// Only the current title counts, not the id the section was seeded with.
    pub fn is_income(&self) -> bool {
        self.title == INCOME_TITLE
    }
}
