use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use cuehall_core::booking::{Booking, ContactInfo, ValidationError};
use cuehall_core::resource::Resource;
use cuehall_core::storage::{
    BookingRepository, ContactInfoRepository, Edit, RepositoryError, ResourceRepository,
    Result, TimeRange,
};

fn not_found<R: Resource>(id: R::Id) -> RepositoryError {
    RepositoryError::NotFound {
        entity_type: R::ENTITY,
        id: id.to_string(),
    }
}

/// Validates `item` against every stored item except itself.
fn check<R: Resource>(items: &[R], item: &R) -> Result<()> {
    let id = item.id();
    let others: Vec<R> = items.iter().filter(|o| o.id() != id).cloned().collect();
    item.validate(&others).map_err(RepositoryError::Rejected)
}

/// One resource collection. Created items keep insertion order; upserted
/// items are kept sorted by key.
#[derive(Debug)]
pub struct InMemoryCollection<R: Resource> {
    items: Arc<RwLock<Vec<R>>>,
}

impl<R: Resource> Clone for InMemoryCollection<R> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
        }
    }
}

impl<R: Resource> Default for InMemoryCollection<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Resource> InMemoryCollection<R> {
    pub fn new() -> Self {
        Self {
            items: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

#[async_trait]
impl<R: Resource> ResourceRepository<R> for InMemoryCollection<R> {
    async fn list(&self) -> Result<Vec<R>> {
        Ok(self.items.read().await.clone())
    }

    async fn get(&self, id: R::Id) -> Result<Option<R>> {
        let items = self.items.read().await;
        Ok(items.iter().find(|item| item.id() == id).cloned())
    }

    async fn create(&self, item: &R) -> Result<()> {
        let mut items = self.items.write().await;
        let id = item.id();
        if items.iter().any(|existing| existing.id() == id) {
            return Err(RepositoryError::AlreadyExists {
                entity_type: R::ENTITY,
                id: id.to_string(),
            });
        }
        check(&items, item)?;
        items.push(item.clone());
        Ok(())
    }

    async fn update(&self, id: R::Id, edit: Edit<R>) -> Result<R> {
        let mut items = self.items.write().await;
        let index = items
            .iter()
            .position(|existing| existing.id() == id)
            .ok_or_else(|| not_found::<R>(id))?;
        let mut item = items[index].clone();
        edit(&mut item);
        check(&items, &item)?;
        items[index] = item.clone();
        Ok(item)
    }

    async fn upsert(&self, item: &R) -> Result<()> {
        let mut items = self.items.write().await;
        check(&items, item)?;
        let id = item.id();
        match items.iter().position(|existing| existing.id() == id) {
            Some(index) => items[index] = item.clone(),
            None => {
                let index = items.partition_point(|existing| existing.id() < id);
                items.insert(index, item.clone());
            }
        }
        Ok(())
    }

    async fn delete(&self, id: R::Id) -> Result<()> {
        let mut items = self.items.write().await;
        let index = items
            .iter()
            .position(|existing| existing.id() == id)
            .ok_or_else(|| not_found::<R>(id))?;
        items.remove(index);
        Ok(())
    }
}

/// Bookings of all calendars.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBookings {
    bookings: Arc<RwLock<Vec<Booking>>>,
}

impl InMemoryBookings {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookingRepository for InMemoryBookings {
    async fn get_booking(&self, id: Uuid) -> Result<Option<Booking>> {
        let bookings = self.bookings.read().await;
        Ok(bookings.iter().find(|b| b.id == id).cloned())
    }

    async fn list_bookings(
        &self,
        calendar_id: Uuid,
        range: Option<TimeRange>,
    ) -> Result<Vec<Booking>> {
        let bookings = self.bookings.read().await;
        let mut matching: Vec<Booking> = bookings
            .iter()
            .filter(|b| b.calendar_id == calendar_id)
            .filter(|b| range.is_none_or(|r| r.overlaps(b.start, b.end)))
            .cloned()
            .collect();
        matching.sort_by_key(|b| b.start);
        Ok(matching)
    }

    async fn create_booking(&self, booking: &Booking) -> Result<()> {
        let mut bookings = self.bookings.write().await;
        if bookings.iter().any(|b| b.id == booking.id) {
            return Err(RepositoryError::AlreadyExists {
                entity_type: Booking::ENTITY,
                id: booking.id.to_string(),
            });
        }
        check(&bookings, booking)?;
        bookings.push(booking.clone());
        Ok(())
    }

    async fn delete_booking(&self, id: Uuid) -> Result<()> {
        let mut bookings = self.bookings.write().await;
        let index = bookings
            .iter()
            .position(|b| b.id == id)
            .ok_or_else(|| not_found::<Booking>(id))?;
        bookings.remove(index);
        Ok(())
    }

    async fn delete_bookings_for_calendar(&self, calendar_id: Uuid) -> Result<usize> {
        let mut bookings = self.bookings.write().await;
        let before = bookings.len();
        bookings.retain(|b| b.calendar_id != calendar_id);
        Ok(before - bookings.len())
    }
}

/// The singleton contact info. Empty until first written.
#[derive(Debug, Clone, Default)]
pub struct InMemoryContactInfo {
    info: Arc<RwLock<Option<ContactInfo>>>,
}

impl InMemoryContactInfo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContactInfoRepository for InMemoryContactInfo {
    async fn get_contact_info(&self) -> Result<Option<ContactInfo>> {
        Ok(self.info.read().await.clone())
    }

    async fn put_contact_info(&self, info: &ContactInfo) -> Result<()> {
        cuehall_core::booking::validate_contact_info(info).map_err(RepositoryError::Rejected)?;
        *self.info.write().await = Some(info.clone());
        Ok(())
    }
}
