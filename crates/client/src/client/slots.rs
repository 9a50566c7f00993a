//! Day view of a calendar.

use cuehall_core::booking::{DaySchedule, SlotsQuery};
use uuid::Uuid;

use super::CuehallClient;
use crate::error::Result;

impl CuehallClient {
    /// Fetch the slot grid of a calendar for one day.
    pub async fn get_slots(&self, calendar_id: Uuid, query: &SlotsQuery) -> Result<DaySchedule> {
        let response = self
            .client
            .get(self.api_url(&format!("calendars/{}/slots", calendar_id)))
            .query(query)
            .send()
            .await?;
        self.handle_response(response, &format!("Calendar {}", calendar_id))
            .await
    }
}
