use crate::{
    client::Client,
    config::Config,
    error::NaverError,
    types::news::{NewsSearchRequest, NewsSearchResponse},
};

/// API resource for the `/news.json` search endpoint
pub struct News<'c, C: Config> {
    client: &'c Client<C>,
}

impl<'c, C: Config> News<'c, C> {
    /// Creates a new News resource
    #[must_use]
    pub const fn new(client: &'c Client<C>) -> Self {
        Self { client }
    }

    /// Execute a news search
    ///
    /// The request is validated locally first; an invalid request is never sent.
    /// The returned items keep upstream order and never exceed `display`.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails, the request fails, or the API returns an error.
    pub async fn search(&self, req: NewsSearchRequest) -> Result<NewsSearchResponse, NaverError> {
        req.validate()?;
        let mut resp: NewsSearchResponse = self.client.get("news.json", &req).await?;
        resp.items.truncate(req.display as usize);
        Ok(resp)
    }
}

impl<C: Config> crate::Client<C> {
    /// Returns the News API resource
    #[must_use]
    pub const fn news(&self) -> News<'_, C> {
        News::new(self)
    }
}
