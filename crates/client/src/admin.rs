//! Back-office editing with optimistic updates.
//!
//! Every change is validated and applied to the local [`EditableList`] first,
//! then sent to the server. A server failure rolls the local change back and
//! is returned to the caller; a success replaces the provisional item with the
//! server's copy.

use cuehall_core::resource::{Change, EditError, Editable, EditableList, Resource, Upsertable};

use crate::client::CuehallClient;
use crate::error::Result;

/// An admin editing session over one resource collection.
#[derive(Debug, Clone)]
pub struct AdminSession<R: Resource> {
    client: CuehallClient,
    list: EditableList<R>,
}

impl<R: Resource> AdminSession<R> {
    /// Start a session on an already loaded list.
    pub fn new(client: CuehallClient, items: Vec<R>) -> Self {
        Self {
            client,
            list: EditableList::new(items),
        }
    }

    /// Start a session with the collection as the server has it now.
    pub async fn load(client: CuehallClient) -> Result<Self> {
        let items = client.list::<R>().await?;
        Ok(Self::new(client, items))
    }

    pub fn list(&self) -> &EditableList<R> {
        &self.list
    }

    pub fn items(&self) -> &[R] {
        self.list.items()
    }

    pub async fn reload(&mut self) -> Result<()> {
        let items = self.client.list::<R>().await?;
        self.list.reset(items);
        Ok(())
    }

    pub async fn delete(&mut self, id: R::Id) -> Result<()> {
        let pending = self.list.apply(Change::Delete(id))?;
        match self.client.delete::<R>(id).await {
            Ok(()) => {
                self.list.commit(pending, None);
                Ok(())
            }
            Err(e) => {
                self.list.rollback(pending);
                Err(e)
            }
        }
    }
}

impl<R: Editable> AdminSession<R> {
    pub async fn create(&mut self, request: R::Create) -> Result<R> {
        let provisional = R::from_create(request.clone());
        let pending = self.list.apply(Change::Create(provisional))?;

        match self.client.create::<R>(&request).await {
            Ok(saved) => {
                self.list.commit(pending, Some(saved.clone()));
                Ok(saved)
            }
            Err(e) => {
                self.list.rollback(pending);
                Err(e)
            }
        }
    }

    pub async fn update(&mut self, id: R::Id, request: R::Update) -> Result<R> {
        let mut edited = self
            .list
            .get(id)
            .cloned()
            .ok_or_else(|| EditError::NotFound {
                entity: R::ENTITY,
                id: id.to_string(),
            })?;
        edited.apply_update(request.clone());
        let pending = self.list.apply(Change::Replace(edited))?;

        match self.client.update::<R>(id, &request).await {
            Ok(saved) => {
                self.list.commit(pending, Some(saved.clone()));
                Ok(saved)
            }
            Err(e) => {
                self.list.rollback(pending);
                Err(e)
            }
        }
    }
}

impl<R: Upsertable> AdminSession<R> {
    /// Write an item under its key. The server answers without a body, so the
    /// local copy becomes the confirmed one.
    pub async fn upsert(&mut self, key: R::Id, request: R::Upsert) -> Result<R> {
        let item = R::from_upsert(key, request.clone());
        let pending = self.list.apply(Change::Upsert(item.clone()))?;

        match self.client.upsert::<R>(key, &request).await {
            Ok(()) => {
                self.list.commit(pending, Some(item.clone()));
                Ok(item)
            }
            Err(e) => {
                self.list.rollback(pending);
                Err(e)
            }
        }
    }
}
