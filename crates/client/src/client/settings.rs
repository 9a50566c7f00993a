//! Hall settings: contact details and opening exceptions by date range.

use cuehall_core::booking::{ContactInfo, ListExceptionsQuery, OpeningException};

use super::CuehallClient;
use crate::error::Result;

impl CuehallClient {
    pub async fn get_contact_info(&self) -> Result<ContactInfo> {
        let response = self.client.get(self.api_url("contact-info")).send().await?;
        self.handle_response(response, "ContactInfo").await
    }

    pub async fn put_contact_info(&self, info: &ContactInfo) -> Result<ContactInfo> {
        let response = self
            .client
            .put(self.api_url("contact-info"))
            .json(info)
            .send()
            .await?;
        self.handle_response(response, "ContactInfo").await
    }

    /// List opening exceptions, both bounds inclusive.
    pub async fn list_exceptions(
        &self,
        query: &ListExceptionsQuery,
    ) -> Result<Vec<OpeningException>> {
        let response = self
            .client
            .get(self.api_url("opening-hours/exceptions"))
            .query(query)
            .send()
            .await?;
        self.handle_response(response, "OpeningException").await
    }
}
