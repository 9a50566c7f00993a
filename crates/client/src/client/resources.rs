//! Generic collection operations, addressed through [`Resource::ENDPOINT`].

use cuehall_core::resource::{Editable, Resource, Upsertable};

use super::CuehallClient;
use crate::error::Result;

fn item_path<R: Resource>(id: R::Id) -> String {
    format!("{}/{}", R::ENDPOINT, id)
}

fn describe<R: Resource>(id: R::Id) -> String {
    format!("{} {}", R::ENTITY, id)
}

impl CuehallClient {
    /// List every item of a collection.
    pub async fn list<R: Resource>(&self) -> Result<Vec<R>> {
        let response = self.client.get(self.api_url(R::ENDPOINT)).send().await?;
        self.handle_response(response, R::ENTITY).await
    }

    pub async fn get<R: Resource>(&self, id: R::Id) -> Result<R> {
        let response = self
            .client
            .get(self.api_url(&item_path::<R>(id)))
            .send()
            .await?;
        self.handle_response(response, &describe::<R>(id)).await
    }

    /// Create an item; the server assigns the id.
    pub async fn create<R: Editable>(&self, request: &R::Create) -> Result<R> {
        let response = self
            .client
            .post(self.api_url(R::ENDPOINT))
            .json(request)
            .send()
            .await?;
        self.handle_response(response, R::ENTITY).await
    }

    pub async fn update<R: Editable>(&self, id: R::Id, request: &R::Update) -> Result<R> {
        let response = self
            .client
            .put(self.api_url(&item_path::<R>(id)))
            .json(request)
            .send()
            .await?;
        self.handle_response(response, &describe::<R>(id)).await
    }

    /// Write an item under its natural key (weekday or date).
    pub async fn upsert<R: Upsertable>(&self, key: R::Id, request: &R::Upsert) -> Result<()> {
        let response = self
            .client
            .put(self.api_url(&item_path::<R>(key)))
            .json(request)
            .send()
            .await?;
        self.handle_empty_response(response, &describe::<R>(key))
            .await
    }

    pub async fn delete<R: Resource>(&self, id: R::Id) -> Result<()> {
        let response = self
            .client
            .delete(self.api_url(&item_path::<R>(id)))
            .send()
            .await?;
        self.handle_empty_response(response, &describe::<R>(id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use cuehall_core::booking::{Calendar, OpeningException, OpeningHours};
    use uuid::Uuid;

    #[test]
    fn test_item_paths() {
        let id = Uuid::nil();
        assert_eq!(
            item_path::<Calendar>(id),
            "calendars/00000000-0000-0000-0000-000000000000"
        );
        assert_eq!(item_path::<OpeningHours>(5), "opening-hours/5");

        let date = NaiveDate::from_ymd_opt(2025, 12, 24).unwrap();
        assert_eq!(
            item_path::<OpeningException>(date),
            "opening-hours/exceptions/2025-12-24"
        );
        assert_eq!(describe::<OpeningHours>(5), "OpeningHours 5");
    }
}
