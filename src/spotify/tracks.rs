use serde::de::DeserializeOwned;

use crate::{
    Res, info,
    types::{SpotifyProfile, TopTracksResponse, Track},
};

use super::SpotifyClient;

impl SpotifyClient {
    /// Issues a GET against `url` with `Authorization: Bearer <access_token>`.
    ///
    /// The HTTP status is logged and the body is decoded into `T` whatever the
    /// status was. A Spotify error object such as
    /// `{"error": {"status": 401, ...}}` therefore only fails if it does not
    /// fit `T`.
    ///
    /// # Example
    ///
    /// ```
    /// let me: SpotifyProfile = client
    ///     .use_access_token(&client.api_endpoint("/me"), token)
    ///     .await?;
    /// ```
    pub async fn use_access_token<T: DeserializeOwned>(
        &self,
        url: &str,
        access_token: &str,
    ) -> Res<T> {
        let res = self
            .http
            .get(url)
            .bearer_auth(access_token)
            .send()
            .await?;

        info!("GET {} -> {}", url, res.status().as_u16());
        Ok(res.json::<T>().await?)
    }

    /// The current user's top tracks (`GET /me/top/tracks`).
    pub async fn top_tracks(&self, access_token: &str) -> Res<Vec<Track>> {
        let url = self.api_endpoint("/me/top/tracks");
        let res: TopTracksResponse = self.use_access_token(&url, access_token).await?;
        Ok(res.items)
    }

    /// The current user's profile (`GET /me`).
    pub async fn current_profile(&self, access_token: &str) -> Res<SpotifyProfile> {
        let url = self.api_endpoint("/me");
        self.use_access_token(&url, access_token).await
    }
}
