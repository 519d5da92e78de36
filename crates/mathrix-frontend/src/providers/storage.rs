use gloo_storage::{LocalStorage, Storage};

use mathrix::errors::StoreError;
use mathrix::store::KeyValueStore;

/// [`KeyValueStore`] over the browser's `localStorage`.
///
/// Values are stored as plain strings so the records stay readable from the
/// devtools and compatible with what other tabs wrote.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|err| StoreError::Write {
                key: key.to_string(),
                reason: format!("{err:?}"),
            })
    }

    fn remove(&self, key: &str) {
        if let Err(err) = LocalStorage::raw().remove_item(key) {
            mathrix::log::warn!("Failed to remove {key} from storage: {err:?}");
        }
    }
}
