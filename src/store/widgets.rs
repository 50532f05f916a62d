//! Widget repository
//!
//! Widgets are indexed twice: by numeric id and by their public key.

use std::collections::{BTreeMap, HashMap};
use std::sync::RwLock;

use super::{StoreError, StoreResult};
use crate::models::Widget;

/// Storage for embeddable widgets
pub trait WidgetRepository: Send + Sync {
    fn get_by_id(&self, id: i64) -> StoreResult<Option<Widget>>;

    fn get_by_key(&self, key: &str) -> StoreResult<Option<Widget>>;

    /// Assigns an id when the widget has none, then indexes it by id and key
    fn save(&self, widget: Widget) -> StoreResult<Widget>;

    /// All widgets ordered by id
    fn get_all(&self) -> StoreResult<Vec<Widget>>;

    /// Returns true if a widget was removed
    fn delete(&self, id: i64) -> StoreResult<bool>;
}

#[derive(Debug, Default)]
struct WidgetIndex {
    by_id: BTreeMap<i64, Widget>,
    id_by_key: HashMap<String, i64>,
}

/// Process-local widget store
#[derive(Debug, Default)]
pub struct InMemoryWidgetRepository {
    index: RwLock<WidgetIndex>,
}

impl InMemoryWidgetRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl WidgetRepository for InMemoryWidgetRepository {
    fn get_by_id(&self, id: i64) -> StoreResult<Option<Widget>> {
        Ok(self.index.read()?.by_id.get(&id).cloned())
    }

    fn get_by_key(&self, key: &str) -> StoreResult<Option<Widget>> {
        let index = self.index.read()?;
        Ok(index.id_by_key.get(key).and_then(|id| index.by_id.get(id)).cloned())
    }

    fn save(&self, mut widget: Widget) -> StoreResult<Widget> {
        let mut guard = self.index.write()?;
        let index = &mut *guard;

        let id = match widget.id {
            Some(id) => id,
            None => index.by_id.keys().next_back().map_or(1, |max| max + 1),
        };

        if let Some(&owner) = index.id_by_key.get(&widget.key) {
            if owner != id {
                return Err(StoreError::DuplicateKey(widget.key));
            }
        }

        // Re-keying an existing widget drops its old key
        if let Some(previous) = index.by_id.get(&id) {
            index.id_by_key.remove(&previous.key);
        }

        widget.id = Some(id);
        index.id_by_key.insert(widget.key.clone(), id);
        index.by_id.insert(id, widget.clone());
        Ok(widget)
    }

    fn get_all(&self) -> StoreResult<Vec<Widget>> {
        Ok(self.index.read()?.by_id.values().cloned().collect())
    }

    fn delete(&self, id: i64) -> StoreResult<bool> {
        let mut guard = self.index.write()?;
        let index = &mut *guard;
        match index.by_id.remove(&id) {
            Some(widget) => {
                index.id_by_key.remove(&widget.key);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_assigns_sequential_ids() {
        let repo = InMemoryWidgetRepository::new();
        let a = repo.save(Widget::new("a", "A")).unwrap();
        let b = repo.save(Widget::new("b", "B")).unwrap();
        assert_eq!(a.id, Some(1));
        assert_eq!(b.id, Some(2));
        assert_eq!(repo.get_by_key("b").unwrap().and_then(|w| w.id), Some(2));
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let repo = InMemoryWidgetRepository::new();
        repo.save(Widget::new("a", "A")).unwrap();
        repo.save(Widget::new("b", "B")).unwrap();
        assert!(repo.delete(1).unwrap());
        let c = repo.save(Widget::new("c", "C")).unwrap();
        assert_eq!(c.id, Some(3));
    }

    #[test]
    fn test_delete_removes_both_indices() {
        let repo = InMemoryWidgetRepository::new();
        let saved = repo.save(Widget::new("calc", "Calculator")).unwrap();
        let id = saved.id.unwrap();

        assert!(repo.delete(id).unwrap());
        assert!(repo.get_by_id(id).unwrap().is_none());
        assert!(repo.get_by_key("calc").unwrap().is_none());
        assert!(!repo.delete(id).unwrap());
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let repo = InMemoryWidgetRepository::new();
        repo.save(Widget::new("calc", "First")).unwrap();
        let err = repo.save(Widget::new("calc", "Second")).unwrap_err();
        assert!(matches!(err, StoreError::DuplicateKey(key) if key == "calc"));
    }

    #[test]
    fn test_resave_updates_in_place() {
        let repo = InMemoryWidgetRepository::new();
        let mut saved = repo.save(Widget::new("calc", "Calculator")).unwrap();
        saved.key = "calc-v2".to_string();
        repo.save(saved).unwrap();

        assert!(repo.get_by_key("calc").unwrap().is_none());
        assert_eq!(repo.get_by_key("calc-v2").unwrap().and_then(|w| w.id), Some(1));
        assert_eq!(repo.get_all().unwrap().len(), 1);
    }
}
