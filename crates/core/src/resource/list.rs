use super::error::EditError;
use super::traits::Resource;

/// A change applied optimistically to an [`EditableList`].
#[derive(Debug, Clone)]
pub enum Change<R: Resource> {
    /// Adds a new item at the top of the list.
    Create(R),
    /// Replaces an existing item with the same id.
    Replace(R),
    /// Replaces the item with the same id, or appends it.
    Upsert(R),
    Delete(R::Id),
}

/// Receipt for an applied change, used to commit or roll it back.
#[derive(Debug, Clone)]
pub struct PendingChange<R: Resource> {
    id: R::Id,
    /// Position and value before the change; `None` when the item is new.
    previous: Option<(usize, R)>,
}

impl<R: Resource> PendingChange<R> {
    pub fn id(&self) -> R::Id {
        self.id
    }

    pub fn is_create(&self) -> bool {
        self.previous.is_none()
    }
}

/// Client-side state of a resource collection with optimistic edits.
///
/// `items` is what the user sees, `baseline` the last state the server
/// confirmed. A change is applied to `items` right away; it is later either
/// committed with the server's copy or rolled back.
#[derive(Debug, Clone)]
pub struct EditableList<R: Resource> {
    items: Vec<R>,
    baseline: Vec<R>,
}

impl<R: Resource> Default for EditableList<R> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<R: Resource> EditableList<R> {
    pub fn new(items: Vec<R>) -> Self {
        Self {
            baseline: items.clone(),
            items,
        }
    }

    pub fn items(&self) -> &[R] {
        &self.items
    }

    pub fn baseline(&self) -> &[R] {
        &self.baseline
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: R::Id) -> Option<&R> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Replaces both the items and the baseline, e.g. after a reload.
    pub fn reset(&mut self, items: Vec<R>) {
        self.baseline = items.clone();
        self.items = items;
    }

    fn position(&self, id: R::Id) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    fn not_found(id: R::Id) -> EditError {
        EditError::NotFound {
            entity: R::ENTITY,
            id: id.to_string(),
        }
    }

    fn validate(&self, item: &R) -> Result<(), EditError> {
        let id = item.id();
        let others: Vec<R> = self
            .items
            .iter()
            .filter(|other| other.id() != id)
            .cloned()
            .collect();
        item.validate(&others)?;
        Ok(())
    }

    /// Validates and applies a change to the visible items.
    pub fn apply(&mut self, change: Change<R>) -> Result<PendingChange<R>, EditError> {
        match change {
            Change::Create(item) => {
                self.validate(&item)?;
                let id = item.id();
                self.items.insert(0, item);
                Ok(PendingChange { id, previous: None })
            }
            Change::Replace(item) => {
                let id = item.id();
                let index = self.position(id).ok_or_else(|| Self::not_found(id))?;
                self.validate(&item)?;
                let previous = std::mem::replace(&mut self.items[index], item);
                Ok(PendingChange {
                    id,
                    previous: Some((index, previous)),
                })
            }
            Change::Upsert(item) => {
                self.validate(&item)?;
                let id = item.id();
                match self.position(id) {
                    Some(index) => {
                        let previous = std::mem::replace(&mut self.items[index], item);
                        Ok(PendingChange {
                            id,
                            previous: Some((index, previous)),
                        })
                    }
                    None => {
                        self.items.push(item);
                        Ok(PendingChange { id, previous: None })
                    }
                }
            }
            Change::Delete(id) => {
                let index = self.position(id).ok_or_else(|| Self::not_found(id))?;
                let previous = self.items.remove(index);
                Ok(PendingChange {
                    id,
                    previous: Some((index, previous)),
                })
            }
        }
    }

    /// Confirms a change. `saved` is the server's copy of the item, if it returned one;
    /// it replaces the provisional item (the server may assign a different id).
    pub fn commit(&mut self, pending: PendingChange<R>, saved: Option<R>) {
        if let Some(saved) = saved {
            match self.position(pending.id) {
                Some(index) => self.items[index] = saved,
                None => self.items.insert(0, saved),
            }
        }
        self.baseline = self.items.clone();
    }

    /// Undoes a change that the server rejected.
    pub fn rollback(&mut self, pending: PendingChange<R>) {
        let current = self.position(pending.id);
        match (pending.previous, current) {
            (Some((_, previous)), Some(index)) => self.items[index] = previous,
            (Some((index, previous)), None) => {
                let index = index.min(self.items.len());
                self.items.insert(index, previous);
            }
            (None, Some(index)) => {
                self.items.remove(index);
            }
            (None, None) => {}
        }
    }
}

impl<R: Resource + PartialEq> EditableList<R> {
    /// Whether the visible items differ from the last confirmed state.
    pub fn is_dirty(&self) -> bool {
        self.items != self.baseline
    }
}
