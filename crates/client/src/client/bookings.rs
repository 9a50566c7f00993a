//! Booking API operations.

use chrono::NaiveDate;
use cuehall_core::booking::{Booking, CreateBookingRequest, DayQuery};
use uuid::Uuid;

use super::CuehallClient;
use crate::error::Result;

impl CuehallClient {
    /// List a calendar's bookings, optionally only those touching one local day.
    pub async fn list_bookings(
        &self,
        calendar_id: Uuid,
        date: Option<NaiveDate>,
    ) -> Result<Vec<Booking>> {
        let query = DayQuery { date };
        let response = self
            .client
            .get(self.api_url(&format!("calendars/{}/bookings", calendar_id)))
            .query(&query)
            .send()
            .await?;
        self.handle_response(response, &format!("Calendar {}", calendar_id))
            .await
    }

    /// Book a calendar. Overlapping an existing booking yields [`ClientError::Conflict`].
    ///
    /// [`ClientError::Conflict`]: crate::error::ClientError::Conflict
    pub async fn create_booking(
        &self,
        calendar_id: Uuid,
        request: &CreateBookingRequest,
    ) -> Result<Booking> {
        let response = self
            .client
            .post(self.api_url(&format!("calendars/{}/bookings", calendar_id)))
            .json(request)
            .send()
            .await?;
        self.handle_response(response, &format!("Calendar {}", calendar_id))
            .await
    }
}
