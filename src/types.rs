use serde::Deserialize;

/// A status as returned by the hashtag timeline endpoint.
///
/// Only the posting account is consumed; every other field of the payload
/// is ignored on deserialization.
#[derive(Debug, Deserialize, Clone)]
pub struct Status {
    pub account: Account,
}

/// The account attached to a status. The id is an opaque server-side
/// identifier, no local structure is assumed.
#[derive(Debug, Deserialize, Clone)]
pub struct Account {
    pub id: String,
}

/// A list owned by the authenticated user.
#[derive(Debug, Deserialize, Clone)]
pub struct List {
    pub id: String,
    pub title: String,
}

/// Aggregate outcome of a hashtag follow run.
///
/// Per-account failures do not abort the run; they are collected here and
/// the caller decides the exit status.
#[derive(Debug, Default)]
pub struct FollowReport {
    pub followed: Vec<String>,
    pub failed: Vec<(String, String)>,
}

impl FollowReport {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}
