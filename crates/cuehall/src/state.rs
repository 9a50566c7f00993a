//! Shared application state.
//!
//! Handlers reach storage only through the repository trait objects held
//! here, so a persistent backend can replace the in-memory one without
//! touching them.

use std::sync::Arc;

use cuehall_core::booking::{Calendar, Notice, OpeningException, OpeningHours};
use cuehall_core::resource::Resource;
use cuehall_core::slots::{HallClock, SlotDuration};
use cuehall_core::storage::{BookingRepository, ContactInfoRepository, ResourceRepository};

use crate::config::Config;
use crate::storage::inmemory::{InMemoryBookings, InMemoryCollection, InMemoryContactInfo};

#[derive(Clone)]
pub struct AppState {
    pub calendar_repo: Arc<dyn ResourceRepository<Calendar>>,
    pub notice_repo: Arc<dyn ResourceRepository<Notice>>,
    pub hours_repo: Arc<dyn ResourceRepository<OpeningHours>>,
    pub exception_repo: Arc<dyn ResourceRepository<OpeningException>>,
    pub booking_repo: Arc<dyn BookingRepository>,
    pub contact_repo: Arc<dyn ContactInfoRepository>,
    /// Converts between stored instants and the hall's wall clock.
    pub clock: HallClock,
    /// Slot length used when a request does not ask for one.
    pub default_slot: SlotDuration,
}

impl AppState {
    /// Creates empty in-memory storage with the given clock settings.
    pub fn new(clock: HallClock, default_slot: SlotDuration) -> Self {
        Self {
            calendar_repo: Arc::new(InMemoryCollection::<Calendar>::new()),
            notice_repo: Arc::new(InMemoryCollection::<Notice>::new()),
            hours_repo: Arc::new(InMemoryCollection::<OpeningHours>::new()),
            exception_repo: Arc::new(InMemoryCollection::<OpeningException>::new()),
            booking_repo: Arc::new(InMemoryBookings::new()),
            contact_repo: Arc::new(InMemoryContactInfo::new()),
            clock,
            default_slot,
        }
    }

    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        Ok(Self::new(config.clock()?, config.default_slot()))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(HallClock::default(), SlotDuration::default())
    }
}

/// Gives generic handlers the repository of one resource type.
pub trait RepositoryFor<R: Resource> {
    fn repository(&self) -> &Arc<dyn ResourceRepository<R>>;
}

impl RepositoryFor<Calendar> for AppState {
    fn repository(&self) -> &Arc<dyn ResourceRepository<Calendar>> {
        &self.calendar_repo
    }
}

impl RepositoryFor<Notice> for AppState {
    fn repository(&self) -> &Arc<dyn ResourceRepository<Notice>> {
        &self.notice_repo
    }
}

impl RepositoryFor<OpeningHours> for AppState {
    fn repository(&self) -> &Arc<dyn ResourceRepository<OpeningHours>> {
        &self.hours_repo
    }
}

impl RepositoryFor<OpeningException> for AppState {
    fn repository(&self) -> &Arc<dyn ResourceRepository<OpeningException>> {
        &self.exception_repo
    }
}
