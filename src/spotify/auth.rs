use reqwest::{Response, Url, header::AUTHORIZATION};
use serde::Deserialize;

use crate::{Error, Res, types::TokenResponse, utils};

use super::SpotifyClient;

/// Error body of the Spotify Accounts service.
#[derive(Debug, Deserialize)]
struct TokenError {
    error: String,
    error_description: Option<String>,
}

impl SpotifyClient {
    /// Builds the URL the user is redirected to in order to grant access.
    ///
    /// # Arguments
    ///
    /// * `state` - Opaque value echoed back to the callback, compared there
    ///   against the one stored in the session
    pub fn authorize_url(&self, state: &str) -> Res<String> {
        let url = Url::parse_with_params(
            &self.auth_url,
            &[
                ("client_id", self.client_id.as_str()),
                ("response_type", "code"),
                ("redirect_uri", self.redirect_uri.as_str()),
                ("scope", self.scope.as_str()),
                ("state", state),
            ],
        )
        .map_err(|e| Error::Config(format!("invalid SPOTIFY_API_AUTH_URL: {}", e)))?;

        Ok(url.into())
    }

    /// Exchanges an authorization code for an access token.
    ///
    /// Sends `grant_type=authorization_code` together with the code and the
    /// configured redirect URI. The redirect URI must be identical to the one
    /// used when the user was sent to [`SpotifyClient::authorize_url`].
    ///
    /// # Errors
    ///
    /// - [`Error::Http`] on network failures or an undecodable body
    /// - [`Error::OAuthProvider`] if Spotify rejects the grant, e.g. an
    ///   expired or already used code
    pub async fn get_token(&self, code: &str) -> Res<TokenResponse> {
        let res = self
            .http
            .post(&self.token_url)
            .header(
                AUTHORIZATION,
                utils::basic_auth_header(&self.client_id, &self.client_secret),
            )
            .form(&[
                ("grant_type", "authorization_code"),
                ("code", code),
                ("redirect_uri", self.redirect_uri.as_str()),
            ])
            .send()
            .await?;

        token_from_response(res).await
    }

    /// Exchanges a refresh token for a fresh access token.
    ///
    /// Spotify only includes a new `refresh_token` in the response when it
    /// rotates it; callers should keep using the old one otherwise.
    ///
    /// # Errors
    ///
    /// Same as [`SpotifyClient::get_token`].
    pub async fn get_token_with_refresh(&self, refresh_token: &str) -> Res<TokenResponse> {
        let res = self
            .http
            .post(&self.token_url)
            .header(
                AUTHORIZATION,
                utils::basic_auth_header(&self.client_id, &self.client_secret),
            )
            .form(&[
                ("grant_type", "refresh_token"),
                ("refresh_token", refresh_token),
            ])
            .send()
            .await?;

        token_from_response(res).await
    }
}

async fn token_from_response(res: Response) -> Res<TokenResponse> {
    if res.status().is_success() {
        return Ok(res.json::<TokenResponse>().await?);
    }

    let status = res.status();
    let message = match res.json::<TokenError>().await {
        Ok(TokenError {
            error,
            error_description: Some(description),
        }) => format!("{} ({})", error, description),
        Ok(TokenError { error, .. }) => error,
        Err(_) => format!("token endpoint answered {}", status),
    };
    Err(Error::OAuthProvider(message))
}
