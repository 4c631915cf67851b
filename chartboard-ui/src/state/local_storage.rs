//! Browser `localStorage` backend for the chart snapshot

use chartboard::persist::{KeyValueStore, StorageError, StorageResult};

/// `window.localStorage` as a key-value store
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> StorageResult<web_sys::Storage> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;

        window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        // Browsers raise QuotaExceededError here when storage is full
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))
    }

    fn remove(&mut self, key: &str) -> StorageResult<()> {
        Self::storage()?
            .remove_item(key)
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chartboard::persist::{load_dataset, save_dataset};
    use chartboard::store::ChartEntry;
    use chartboard::ChartDataset;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_local_storage_roundtrip() {
        let mut backend = LocalStorage;
        let key = "chartboard-test";
        let dataset: ChartDataset = vec![ChartEntry::new("A", 10.0, "#ff0000")]
            .into_iter()
            .collect();

        save_dataset(&mut backend, key, &dataset).unwrap();
        assert_eq!(load_dataset(&backend, key), dataset);

        backend.remove(key).unwrap();
        assert!(load_dataset(&backend, key).is_empty());
    }
}
