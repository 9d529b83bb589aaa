use async_trait::async_trait;
use gloo_net::http::Request;
use notices::{Error, Reply, Transport};

/// `fetch()` based transport of the browser.
pub struct Browser;

fn message(err: gloo_net::Error) -> String {
    match err {
        // Keep what the browser reported, without the JS error class in front.
        gloo_net::Error::JsError(err) => err.message,
        other => other.to_string(),
    }
}

#[async_trait(?Send)]
impl Transport for Browser {
    async fn get(&self, url: &str, accept: &str) -> Result<Reply, Error> {
        let response = Request::get(url)
            .header("Accept", accept)
            .send()
            .await
            .map_err(|err| Error::Transport(message(err)))?;

        let status = response.status();

        let body = response
            .text()
            .await
            .map_err(|err| Error::Transport(message(err)))?;

        Ok(Reply { status, body })
    }
}
