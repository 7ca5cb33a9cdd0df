use crate::error::Result;
use crate::query::QueryString;
use crate::rest::RmHttpClient;
use crate::types::page::ApiPage;
use crate::types::*;

impl RmHttpClient {
    // --- Lists ---

    /// GET /{resource}?{query} - One page of a filtered list.
    ///
    /// Errors are returned as-is; [`crate::RickAndMorty::list_page`] is the
    /// caller that degrades them to an empty page.
    pub async fn fetch_list<T: Resource>(&self, query: &QueryString) -> Result<ListResult<T>> {
        let page: ApiPage<T> = self
            .get(&format!("/{}", T::KIND.path()), Some(query))
            .await?;
        Ok(page.into())
    }

    // --- Details ---

    /// GET /{resource}/{id} - A single entity.
    pub async fn fetch_detail<T: Resource>(&self, id: u32) -> Result<T> {
        self.get(&format!("/{}/{id}", T::KIND.path()), None).await
    }

    /// GET /character/{id}
    pub async fn get_character(&self, id: u32) -> Result<Character> {
        self.fetch_detail(id).await
    }

    /// GET /location/{id}
    pub async fn get_location(&self, id: u32) -> Result<Location> {
        self.fetch_detail(id).await
    }

    /// GET /episode/{id}
    pub async fn get_episode(&self, id: u32) -> Result<Episode> {
        self.fetch_detail(id).await
    }
}
