//! Loading the notice list shown on the info page.
//!
//! The browser app and the command line tool plug their own HTTP client in through [`Transport`];
//! everything else (URL building, status handling, state tracking, ignoring late results) lives
//! here so it behaves the same everywhere.

mod board;
mod feed;
mod state;

pub use board::{Banner, Board};
pub use feed::{Feed, Liveness};
pub use state::FetchState;

use async_trait::async_trait;
use log::{debug, warn};
use models::Notice;

/// Media type requested from the notices endpoint.
pub const ACCEPT_JSON: &str = "application/json";

const NOTICES_PATH: &str = "/notices";

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("HTTP {0}")]
    Status(u16),
    #[error("{0}")]
    Transport(String),
    #[error("{0}")]
    Parse(#[from] serde_json::Error),
}

/// Raw answer of a GET request.
#[derive(Clone, Debug)]
pub struct Reply {
    pub status: u16,
    pub body: String,
}

impl Reply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// HTTP client used to reach the notices endpoint.
#[async_trait(?Send)]
pub trait Transport {
    /// Issue a GET request for `url`, sending `accept` as the `Accept` header.
    ///
    /// Only network level failures are errors, any HTTP status is a [`Reply`].
    async fn get(&self, url: &str, accept: &str) -> Result<Reply, Error>;
}

/// URL of the notice list below `base`.
pub fn endpoint(base: &str) -> String {
    let base = base.strip_suffix('/').unwrap_or(base);
    format!("{base}{NOTICES_PATH}")
}

/// Read the notice list from `url`, keeping the order the server sent.
pub async fn fetch<T>(transport: &T, url: &str) -> Result<Vec<Notice>, Error>
where
    T: Transport + ?Sized,
{
    debug!("Fetching notices from {url}");

    let result = async {
        let reply = transport.get(url, ACCEPT_JSON).await?;

        if !reply.is_success() {
            return Err(Error::Status(reply.status));
        }

        Ok(serde_json::from_str(&reply.body)?)
    }
    .await;

    if let Err(err) = &result {
        warn!("Could not load notices from {url}: {err}");
    }

    result
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::RefCell;

    /// Transport answering every request with the same canned result.
    pub struct Canned {
        reply: std::result::Result<Reply, String>,
        pub requests: RefCell<Vec<String>>,
        pub accepts: RefCell<Vec<String>>,
    }

    impl Canned {
        pub fn status(status: u16, body: &str) -> Self {
            Self {
                reply: Ok(Reply {
                    status,
                    body: body.to_string(),
                }),
                requests: RefCell::default(),
                accepts: RefCell::default(),
            }
        }

        pub fn failing(message: &str) -> Self {
            Self {
                reply: Err(message.to_string()),
                requests: RefCell::default(),
                accepts: RefCell::default(),
            }
        }
    }

    #[async_trait(?Send)]
    impl Transport for Canned {
        async fn get(&self, url: &str, accept: &str) -> Result<Reply, Error> {
            self.requests.borrow_mut().push(url.to_string());
            self.accepts.borrow_mut().push(accept.to_string());
            self.reply.clone().map_err(Error::Transport)
        }
    }

    pub const TWO_NOTICES: &str = r#"[
        {"id": 2, "title": "주차 안내", "content": "대중교통 이용", "pinned": true, "created_at": "2025-10-20T09:00:00+09:00"},
        {"id": 1, "title": "자료 배포", "content": "현장 배포", "pinned": false, "created_at": "2025-10-10T09:00:00+09:00"}
    ]"#;
}
