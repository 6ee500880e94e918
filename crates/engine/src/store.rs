//! In-memory list of sections and the id counter shared by sections and items.

use crate::{
    ResultEngine,
    error::EngineError,
    section::{INCOME_TITLE, Item, Section},
};

/// Ordered sections plus a single id counter.
///
/// Sections and items draw their ids from the same counter, so every id the
/// store hands out is unique across both kinds. Ids are never reused.
#[derive(Debug, Default)]
pub struct Store {
    sections: Vec<Section>,
    last_id: i64,
}

impl Store {
    /// Build the startup state: an empty Income section followed by Housing
    /// with two items.
    ///
    /// The counter starts at the highest seeded id, so the first entity
    /// created afterwards gets id 5.
    pub fn seeded() -> Self {
        let income = Section::new(INCOME_TITLE, Vec::new()).with_id(4);
        let housing = Section::new(
            "Housing",
            vec![
                Item::new("Mortgage", 3000.69, 1, 1, "lightblue").with_id(2),
                Item::new("Internet", 70.99, 1, 1, "lightgreen").with_id(3),
            ],
        )
        .with_id(1);

        Self::with_sections(vec![income, housing])
    }

    /// Wrap existing sections; the counter resumes after the highest id among
    /// them and their items.
    pub fn with_sections(sections: Vec<Section>) -> Self {
        let last_id = sections
            .iter()
            .flat_map(|section| {
                std::iter::once(section.id).chain(section.items.iter().map(|item| item.id))
            })
            .max()
            .unwrap_or(0)
            .max(0);

        Self { sections, last_id }
    }

    fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }

    pub fn list_sections(&self) -> &[Section] {
        &self.sections
    }

    /// Index of the section with `id`, by linear scan.
    pub fn find_index_by_id(&self, id: i64) -> Option<usize> {
        self.sections.iter().position(|section| section.id == id)
    }

    fn index_of(&self, id: i64) -> ResultEngine<usize> {
        self.find_index_by_id(id)
            .ok_or(EngineError::SectionNotFound(id))
    }

    /// Append a new section with a fresh id. Any id already set on `section`
    /// is discarded.
    pub fn create_section(&mut self, section: Section) -> &Section {
        let id = self.next_id();
        self.sections.push(section.with_id(id));
        &self.sections[self.sections.len() - 1]
    }

    /// Replace the whole record at `id`, including its id and title.
    pub fn replace_section(&mut self, id: i64, section: Section) -> ResultEngine<()> {
        let index = self.index_of(id)?;
        self.sections[index] = section;
        Ok(())
    }

    /// Remove the section at `id` unless it is currently titled "Income".
    pub fn delete_section(&mut self, id: i64) -> ResultEngine<Section> {
        let index = self.index_of(id)?;
        if self.sections[index].is_income() {
            return Err(EngineError::IncomeProtected(id));
        }
        Ok(self.sections.remove(index))
    }

    /// Append `item` to the section at `section_id` with a fresh id.
    pub fn create_item(&mut self, section_id: i64, item: Item) -> ResultEngine<&Item> {
        let index = self.index_of(section_id)?;
        let id = self.next_id();
        let items = &mut self.sections[index].items;
        items.push(item.with_id(id));
        Ok(&items[items.len() - 1])
    }

    /// The first section currently titled "Income".
    pub fn income(&self) -> Option<&Section> {
        self.sections.iter().find(|section| section.is_income())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(store: &Store) -> Vec<i64> {
        store.list_sections().iter().map(|s| s.id).collect()
    }

    #[test]
    fn seeded_store_has_income_then_housing() {
        let store = Store::seeded();
        let sections = store.list_sections();

        assert_eq!(ids(&store), vec![4, 1]);
        assert_eq!(sections[0].title, "Income");
        assert!(sections[0].items.is_empty());
        assert_eq!(sections[1].title, "Housing");
        let item_ids: Vec<i64> = sections[1].items.iter().map(|i| i.id).collect();
        assert_eq!(item_ids, vec![2, 3]);
        assert_eq!(sections[1].items[0].name, "Mortgage");
        assert_eq!(sections[1].items[0].value, 3000.69);
    }

    #[test]
    fn first_created_id_does_not_collide_with_seed() {
        let mut store = Store::seeded();
        let created = store.create_section(Section::new("Savings", Vec::new()));
        assert_eq!(created.id, 5);
    }

    #[test]
    fn create_section_ignores_caller_id_and_appends() {
        let mut store = Store::seeded();
        let mut section = Section::new("Savings", Vec::new());
        section.id = 1;

        let id = store.create_section(section).id;
        assert_eq!(id, 5);
        assert_eq!(ids(&store), vec![4, 1, 5]);

        let id = store.create_section(Section::new("Transport", Vec::new())).id;
        assert_eq!(id, 6);
        assert_eq!(ids(&store), vec![4, 1, 5, 6]);
    }

    #[test]
    fn sections_and_items_share_the_counter() {
        let mut store = Store::seeded();
        let section_id = store.create_section(Section::new("Food", Vec::new())).id;
        let item_id = store
            .create_item(section_id, Item::new("Groceries", 250.0, 1, 1, "pink"))
            .unwrap()
            .id;
        let next_section = store.create_section(Section::new("Fun", Vec::new())).id;

        assert_eq!((section_id, item_id, next_section), (5, 6, 7));
    }

    #[test]
    fn create_item_touches_only_its_section() {
        let mut store = Store::seeded();
        let mut item = Item::new("Water", 40.0, 2, 1, "blue");
        item.id = 3;

        let created = store.create_item(1, item).unwrap().clone();
        assert_eq!(created.id, 5);
        assert_eq!(created.name, "Water");

        let sections = store.list_sections();
        assert!(sections[0].items.is_empty());
        let housing: Vec<i64> = sections[1].items.iter().map(|i| i.id).collect();
        assert_eq!(housing, vec![2, 3, 5]);
    }

    #[test]
    fn create_item_in_missing_section_fails_without_consuming_an_id() {
        let mut store = Store::seeded();
        assert_eq!(
            store.create_item(77, Item::default()).unwrap_err(),
            EngineError::SectionNotFound(77)
        );
        assert_eq!(store.create_section(Section::default()).id, 5);
    }

    #[test]
    fn replace_section_overwrites_the_whole_record() {
        let mut store = Store::seeded();
        let replacement = Section {
            id: 42,
            title: "Home".to_string(),
            items: Vec::new(),
        };

        store.replace_section(1, replacement.clone()).unwrap();
        assert_eq!(store.list_sections()[1], replacement);
        assert_eq!(store.find_index_by_id(1), None);
        assert_eq!(store.find_index_by_id(42), Some(1));
    }

    #[test]
    fn replace_missing_section_fails() {
        let mut store = Store::seeded();
        assert_eq!(
            store.replace_section(999, Section::default()).unwrap_err(),
            EngineError::SectionNotFound(999)
        );
    }

    #[test]
    fn income_section_cannot_be_deleted() {
        let mut store = Store::seeded();
        assert_eq!(
            store.delete_section(4).unwrap_err(),
            EngineError::IncomeProtected(4)
        );
        assert_eq!(ids(&store), vec![4, 1]);
    }

    #[test]
    fn delete_guard_follows_the_current_title() {
        let mut store = Store::seeded();
        store
            .replace_section(1, Section::new("Income", Vec::new()).with_id(1))
            .unwrap();
        assert_eq!(
            store.delete_section(1).unwrap_err(),
            EngineError::IncomeProtected(1)
        );

        store
            .replace_section(4, Section::new("Salary", Vec::new()).with_id(4))
            .unwrap();
        let removed = store.delete_section(4).unwrap();
        assert_eq!(removed.title, "Salary");
        assert_eq!(ids(&store), vec![1]);
    }

    #[test]
    fn delete_keeps_relative_order() {
        let mut store = Store::seeded();
        for title in ["A", "B", "C"] {
            store.create_section(Section::new(title, Vec::new()));
        }

        store.delete_section(6).unwrap();
        assert_eq!(ids(&store), vec![4, 1, 5, 7]);
    }

    #[test]
    fn delete_missing_section_fails() {
        let mut store = Store::seeded();
        assert_eq!(
            store.delete_section(999).unwrap_err(),
            EngineError::SectionNotFound(999)
        );
    }

    #[test]
    fn income_is_looked_up_by_title() {
        let mut store = Store::seeded();
        store
            .create_item(4, Item::new("Salary", 4200.0, 2, 1, "gold"))
            .unwrap();
        let income = store.income().unwrap();
        assert_eq!(income.id, 4);
        assert_eq!(income.items.len(), 1);

        store
            .replace_section(4, Section::new("Wages", Vec::new()).with_id(4))
            .unwrap();
        assert!(store.income().is_none());
    }

    #[test]
    fn with_sections_resumes_after_highest_id() {
        let mut store = Store::with_sections(vec![
            Section::new("A", vec![Item::default().with_id(10)]).with_id(3),
        ]);
        assert_eq!(store.create_section(Section::default()).id, 11);

        let mut empty = Store::default();
        assert_eq!(empty.create_section(Section::default()).id, 1);
    }
}
