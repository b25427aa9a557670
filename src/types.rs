use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tabled::Tabled;
use uuid::Uuid;

/// Body returned by the Spotify token endpoint for both grant types.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    #[serde(default)]
    pub scope: String,
    pub expires_in: u64,
    /// Absent on refresh responses unless Spotify rotates the token.
    pub refresh_token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    pub popularity: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopTracksResponse {
    pub items: Vec<Track>,
}

/// Subset of `GET /me` used to identify a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpotifyProfile {
    pub id: String,
    pub display_name: Option<String>,
}

impl SpotifyProfile {
    /// The username a profile logs in as: the display name, or the Spotify id
    /// for accounts without one.
    pub fn username(&self) -> &str {
        match self.display_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.id,
        }
    }
}

/// Mean normalized popularity of a set of tracks, rounded to two decimals.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Obscurity(f64);

impl Obscurity {
    /// Rounds `value` to two decimals.
    ///
    /// Rounding looks at the exact binary value, so `0.695` (stored just below
    /// it) becomes `0.69`. Exact midpoints round up.
    pub fn new(value: f64) -> Self {
        // Two-decimal midpoints representable in binary are odd multiples of 1/8
        let eighths = value * 8.0;
        if eighths.fract() == 0.0 && eighths % 2.0 != 0.0 {
            return Obscurity((value * 100.0).ceil() / 100.0);
        }

        let rounded = format!("{:.2}", value);
        Obscurity(rounded.parse().unwrap_or(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Obscurity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SummaryKind {
    ZeroTaste,
    Average,
    AlmostSnob,
    MusicSnob,
}

impl SummaryKind {
    pub const ALL: [SummaryKind; 4] = [
        SummaryKind::ZeroTaste,
        SummaryKind::Average,
        SummaryKind::AlmostSnob,
        SummaryKind::MusicSnob,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SummaryKind::ZeroTaste => "zeroTaste",
            SummaryKind::Average => "average",
            SummaryKind::AlmostSnob => "almostSnob",
            SummaryKind::MusicSnob => "musicSnob",
        }
    }
}

impl fmt::Display for SummaryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub id: Uuid,
    pub name: SummaryKind,
    pub text: String,
}

impl Summary {
    pub fn new(name: SummaryKind, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub obscurity: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub auth_token: String,
    #[serde(default)]
    pub stats: Stats,
    /// Id of the selected [`Summary`].
    pub summary: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(username: impl Into<String>, auth_token: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            username: username.into(),
            auth_token: auth_token.into(),
            stats: Stats::default(),
            summary: None,
            created_at: now,
            updated_at: now,
        }
    }
}

/// What the session remembers about the logged-in user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: Uuid,
    pub username: String,
}

impl From<&User> for SessionUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
        }
    }
}

/// Payload of `GET /stats`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserStats {
    pub username: String,
    pub obscurity: Option<f64>,
    pub summary: Option<Summary>,
}

#[derive(Tabled)]
pub struct UserTableRow {
    pub username: String,
    pub obscurity: String,
    pub summary: String,
    pub updated: String,
}

#[derive(Tabled)]
pub struct SummaryTableRow {
    pub name: String,
    pub text: String,
}
