use std::fmt::{Debug, Display};
use std::hash::Hash;

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use crate::booking::{
    check_active_notice_limit, find_conflict, validate_booking, validate_calendar,
    validate_notice, validate_opening_exception, validate_opening_hours, Booking, Calendar,
    CreateCalendarRequest, CreateNoticeRequest, Notice, OpeningException, OpeningHours,
    UpdateCalendarRequest, UpdateNoticeRequest, UpsertOpeningExceptionRequest,
    UpsertOpeningHoursRequest, ValidationError,
};

/// A collection item managed through the REST API.
pub trait Resource: Clone + Debug + Send + Sync + Serialize + DeserializeOwned + 'static {
    type Id: Copy
        + Ord
        + Hash
        + Display
        + Debug
        + Send
        + Sync
        + Serialize
        + DeserializeOwned
        + 'static;

    /// Name used in error messages and logs.
    const ENTITY: &'static str;
    /// Path under `/api`.
    const ENDPOINT: &'static str;

    fn id(&self) -> Self::Id;

    /// Checks the item against its own rules and the rest of the collection.
    /// `others` never contains the item itself.
    fn validate(&self, _others: &[Self]) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// A resource created from a request and edited with partial updates.
pub trait Editable: Resource {
    type Create: Clone + Debug + Send + Sync + Serialize + DeserializeOwned + 'static;
    type Update: Clone + Debug + Send + Sync + Serialize + DeserializeOwned + 'static;

    fn from_create(request: Self::Create) -> Self;
    fn apply_update(&mut self, request: Self::Update);
}

/// A resource written in place under a natural key.
pub trait Upsertable: Resource {
    type Upsert: Clone + Debug + Send + Sync + Serialize + DeserializeOwned + 'static;

    fn from_upsert(key: Self::Id, request: Self::Upsert) -> Self;
}

impl Resource for Calendar {
    type Id = Uuid;
    const ENTITY: &'static str = "Calendar";
    const ENDPOINT: &'static str = "calendars";

    fn id(&self) -> Uuid {
        self.id
    }

    fn validate(&self, _others: &[Self]) -> Result<(), ValidationError> {
        validate_calendar(self)
    }
}

impl Editable for Calendar {
    type Create = CreateCalendarRequest;
    type Update = UpdateCalendarRequest;

    fn from_create(request: CreateCalendarRequest) -> Self {
        request.into_calendar()
    }

    fn apply_update(&mut self, request: UpdateCalendarRequest) {
        request.apply_to(self);
    }
}

impl Resource for Notice {
    type Id = Uuid;
    const ENTITY: &'static str = "Notice";
    const ENDPOINT: &'static str = "notices";

    fn id(&self) -> Uuid {
        self.id
    }

    fn validate(&self, others: &[Self]) -> Result<(), ValidationError> {
        validate_notice(self)?;
        check_active_notice_limit(others, self)
    }
}

impl Editable for Notice {
    type Create = CreateNoticeRequest;
    type Update = UpdateNoticeRequest;

    fn from_create(request: CreateNoticeRequest) -> Self {
        request.into_notice()
    }

    fn apply_update(&mut self, request: UpdateNoticeRequest) {
        request.apply_to(self);
    }
}

impl Resource for Booking {
    type Id = Uuid;
    const ENTITY: &'static str = "Booking";
    const ENDPOINT: &'static str = "bookings";

    fn id(&self) -> Uuid {
        self.id
    }

    fn validate(&self, others: &[Self]) -> Result<(), ValidationError> {
        validate_booking(self)?;
        match find_conflict(others, self) {
            Some(existing) => Err(ValidationError::BookingConflict(existing.id)),
            None => Ok(()),
        }
    }
}

impl Resource for OpeningHours {
    type Id = u8;
    const ENTITY: &'static str = "OpeningHours";
    const ENDPOINT: &'static str = "opening-hours";

    fn id(&self) -> u8 {
        self.weekday
    }

    fn validate(&self, _others: &[Self]) -> Result<(), ValidationError> {
        validate_opening_hours(self)
    }
}

impl Upsertable for OpeningHours {
    type Upsert = UpsertOpeningHoursRequest;

    fn from_upsert(weekday: u8, request: UpsertOpeningHoursRequest) -> Self {
        request.into_hours(weekday)
    }
}

impl Resource for OpeningException {
    type Id = NaiveDate;
    const ENTITY: &'static str = "OpeningException";
    const ENDPOINT: &'static str = "opening-hours/exceptions";

    fn id(&self) -> NaiveDate {
        self.date
    }

    fn validate(&self, _others: &[Self]) -> Result<(), ValidationError> {
        validate_opening_exception(self)
    }
}

impl Upsertable for OpeningException {
    type Upsert = UpsertOpeningExceptionRequest;

    fn from_upsert(date: NaiveDate, request: UpsertOpeningExceptionRequest) -> Self {
        request.into_exception(date)
    }
}
