//! `cats` table

use reqwest::Method;

use super::{check_status, ApiError, SupabaseClient};
use crate::models::Cat;

const CAT_COLUMNS: &str = "id,name,breed,description,image_url";

impl SupabaseClient {
    pub(super) async fn fetch_cats(&self) -> Result<Vec<Cat>, ApiError> {
        let response = self
            .request(Method::GET, "cats")?
            .query(&[("select", CAT_COLUMNS), ("order", "id.asc")])
            .send()
            .await?;
        let cats: Vec<Cat> = check_status(response).await?.json().await?;
        tracing::debug!("fetched {} cats", cats.len());
        Ok(cats)
    }
}
