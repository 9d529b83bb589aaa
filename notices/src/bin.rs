use anyhow::{anyhow, Result};
use async_trait::async_trait;
use clap::Parser;
use notices::{Error, Reply, Transport};
use reqwest::header::ACCEPT;

#[derive(Parser)]
struct Opt {
    /// Base URL of the notices API, e.g. http://localhost:3000/api
    #[arg(long, env = "VITE_API_BASE")]
    base: String,

    /// Print the raw JSON instead of a listing
    #[arg(long)]
    json: bool,
}

struct Http(reqwest::Client);

#[async_trait(?Send)]
impl Transport for Http {
    async fn get(&self, url: &str, accept: &str) -> Result<Reply, Error> {
        let response = self
            .0
            .get(url)
            .header(ACCEPT, accept)
            .send()
            .await
            .map_err(|err| Error::Transport(err.to_string()))?;

        let status = response.status().as_u16();

        let body = response
            .text()
            .await
            .map_err(|err| Error::Transport(err.to_string()))?;

        Ok(Reply { status, body })
    }
}

fn print_listing(notices: &[models::Notice]) {
    if notices.is_empty() {
        println!("no notices");
        return;
    }

    for notice in notices {
        let marker = if notice.pinned { "*" } else { " " };

        println!(
            "{marker} [{}] {} {}",
            notice.id,
            notice.created_at_local(),
            notice.title
        );

        for line in notice.content.lines() {
            println!("      {line}");
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let opts = Opt::parse();
    let client = Http(reqwest::Client::new());
    let url = notices::endpoint(&opts.base);

    let notices = notices::fetch(&client, &url)
        .await
        .map_err(|err| anyhow!("{url}: {err}"))?;

    if opts.json {
        println!("{}", serde_json::to_string_pretty(&notices)?);
    } else {
        print_listing(&notices);
    }

    Ok(())
}
