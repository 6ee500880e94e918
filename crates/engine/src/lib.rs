use tokio::sync::Mutex;

pub use error::EngineError;
pub use section::{INCOME_TITLE, Item, Section};
pub use store::Store;

mod error;
mod section;
mod store;

type ResultEngine<T> = Result<T, EngineError>;

/// Shared owner of the budget [`Store`].
///
/// Every operation holds the lock for its whole read or mutation, so
/// concurrent requests never race on the id counter or the section list.
/// Results are owned snapshots taken while the lock is held.
#[derive(Debug)]
pub struct Engine {
    store: Mutex<Store>,
}

impl Engine {
    /// Return a builder for `Engine`. Help to build the struct.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    /// All sections, in order.
    pub async fn sections(&self) -> Vec<Section> {
        self.store.lock().await.list_sections().to_vec()
    }

    /// Whether a section currently has `id`.
    pub async fn section_exists(&self, id: i64) -> bool {
        self.store.lock().await.find_index_by_id(id).is_some()
    }

    /// Append a new section and return the updated list.
    pub async fn create_section(&self, section: Section) -> Vec<Section> {
        let mut store = self.store.lock().await;
        let created = store.create_section(section);
        tracing::info!("created section {} \"{}\"", created.id, created.title);
        store.list_sections().to_vec()
    }

    /// Replace the section at `id` and return the updated list.
    pub async fn replace_section(&self, id: i64, section: Section) -> ResultEngine<Vec<Section>> {
        let mut store = self.store.lock().await;
        store.replace_section(id, section)?;
        tracing::info!("replaced section {id}");
        Ok(store.list_sections().to_vec())
    }

    /// Delete the section at `id` and return the updated list.
    pub async fn delete_section(&self, id: i64) -> ResultEngine<Vec<Section>> {
        let mut store = self.store.lock().await;
        let removed = store.delete_section(id)?;
        tracing::info!("deleted section {} \"{}\"", removed.id, removed.title);
        Ok(store.list_sections().to_vec())
    }

    /// Append `item` to the section at `section_id` and return the updated
    /// list.
    pub async fn create_item(&self, section_id: i64, item: Item) -> ResultEngine<Vec<Section>> {
        let mut store = self.store.lock().await;
        let created = store.create_item(section_id, item)?;
        tracing::info!("created item {} in section {section_id}", created.id);
        Ok(store.list_sections().to_vec())
    }

    /// The section currently titled "Income".
    pub async fn income(&self) -> ResultEngine<Section> {
        self.store
            .lock()
            .await
            .income()
            .cloned()
            .ok_or(EngineError::IncomeMissing)
    }
}

#[derive(Debug, Default)]
pub struct EngineBuilder {
    store: Option<Store>,
}

impl EngineBuilder {
    /// Start from `store` instead of the seeded state.
    pub fn store(mut self, store: Store) -> EngineBuilder {
        self.store = Some(store);
        self
    }

    /// Construct `Engine`
    pub fn build(self) -> Engine {
        Engine {
            store: Mutex::new(self.store.unwrap_or_else(Store::seeded)),
        }
    }
}
