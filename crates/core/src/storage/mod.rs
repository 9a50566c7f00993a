//! Repository traits and the errors storage backends report.

mod error;
mod http_mapping;
mod traits;
mod types;

pub use error::{RangeError, RepositoryError, Result};
pub use http_mapping::{
    clock_error_to_status_code, repository_error_to_status_code, slot_error_to_status_code,
    validation_error_to_status_code,
};
pub use traits::{BookingRepository, ContactInfoRepository, Edit, ResourceRepository};
pub use types::{DateRange, TimeRange};
