use async_trait::async_trait;
use uuid::Uuid;

use crate::booking::{Booking, ContactInfo};
use crate::resource::Resource;

use super::{Result, TimeRange};

/// An in-place change applied by [`ResourceRepository::update`].
pub type Edit<R> = Box<dyn FnOnce(&mut R) + Send>;

/// Storage for one back-office collection.
///
/// `create`, `update` and `upsert` run [`Resource::validate`] against the
/// stored collection atomically, failing with [`RepositoryError::Rejected`].
///
/// [`RepositoryError::Rejected`]: super::RepositoryError::Rejected
#[async_trait]
pub trait ResourceRepository<R: Resource>: Send + Sync {
    /// Lists all items in storage order.
    async fn list(&self) -> Result<Vec<R>>;

    async fn get(&self, id: R::Id) -> Result<Option<R>>;

    /// Inserts a new item; fails with `AlreadyExists` if the id is taken.
    async fn create(&self, item: &R) -> Result<()>;

    /// Applies `edit` to the stored item and returns the result. Reading,
    /// editing and writing back happen under one lock, so concurrent updates
    /// of different fields all persist. Fails with `NotFound` if it is missing.
    async fn update(&self, id: R::Id, edit: Edit<R>) -> Result<R>;

    /// Inserts or replaces the item under its id.
    async fn upsert(&self, item: &R) -> Result<()>;

    /// Removes an item; fails with `NotFound` if it is missing.
    async fn delete(&self, id: R::Id) -> Result<()>;
}

/// Repository for bookings, which are always scoped to a calendar.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn get_booking(&self, id: Uuid) -> Result<Option<Booking>>;

    /// Bookings of a calendar ordered by start, optionally only those
    /// overlapping `range`.
    async fn list_bookings(
        &self,
        calendar_id: Uuid,
        range: Option<TimeRange>,
    ) -> Result<Vec<Booking>>;

    /// Stores a booking unless it overlaps another booking of the same calendar.
    async fn create_booking(&self, booking: &Booking) -> Result<()>;

    async fn delete_booking(&self, id: Uuid) -> Result<()>;

    /// Removes every booking of a calendar, returning how many were removed.
    async fn delete_bookings_for_calendar(&self, calendar_id: Uuid) -> Result<usize>;
}

/// Repository for the singleton contact info.
#[async_trait]
pub trait ContactInfoRepository: Send + Sync {
    async fn get_contact_info(&self) -> Result<Option<ContactInfo>>;

    async fn put_contact_info(&self, info: &ContactInfo) -> Result<()>;
}
