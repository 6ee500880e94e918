use serde::{Deserialize, Deserializer, Serialize};

/// Treats an explicit JSON `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

pub mod budget {
    use super::*;

    /// A single line of a budget section.
    ///
    /// Every field is optional on input: missing fields (and `null`) decode
    /// to their zero value, so a body always replaces the whole record.
    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase", default)]
    pub struct Item {
        #[serde(deserialize_with = "null_as_default")]
        pub id: i64,
        #[serde(deserialize_with = "null_as_default")]
        pub item_name: String,
        #[serde(deserialize_with = "null_as_default")]
        pub item_value: f64,
        /// Columns spanned by the item in the planner grid.
        #[serde(deserialize_with = "null_as_default")]
        pub cols: i64,
        /// Rows spanned by the item in the planner grid.
        #[serde(deserialize_with = "null_as_default")]
        pub rows: i64,
        #[serde(deserialize_with = "null_as_default")]
        pub color: String,
    }

    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase", default)]
    pub struct Section {
        #[serde(deserialize_with = "null_as_default")]
        pub id: i64,
        #[serde(deserialize_with = "null_as_default")]
        pub title: String,
        #[serde(deserialize_with = "null_as_default")]
        pub items: Vec<Item>,
    }
}
