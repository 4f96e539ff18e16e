use std::env::set_var;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use dotenvy::dotenv;

use fedifollow_client::cli;
use fedifollow_client::cli::add_list_from_hashtag::execute_add_list_from_hashtag;
use fedifollow_client::cli::follow_from_hashtag::execute_follow_from_hashtag;
use fedifollow_client::cli::get_lists::execute_get_lists;
use fedifollow_client::client::MastodonClient;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let cli = cli::Cli::parse();

    //Init logger
    if cli.verbose {
        set_var("RUST_LOG", "info");
    }
    pretty_env_logger::init();

    let timeout = Duration::from_secs(cli.timeout);

    match &cli.command {
        Some(cli::Commands::GetLists { token, domain }) => {
            let client = MastodonClient::new(token, domain, timeout)?;
            execute_get_lists(&client).await?;
        }
        Some(cli::Commands::AddListFromHashtag {
            token,
            hashtag,
            list_id,
            domain,
        }) => {
            let client = MastodonClient::new(token, domain, timeout)?;
            execute_add_list_from_hashtag(&client, hashtag, list_id).await?;
        }
        Some(cli::Commands::FollowFromHashtag {
            token,
            hashtag,
            domain,
        }) => {
            let client = MastodonClient::new(token, domain, timeout)?;
            execute_follow_from_hashtag(&client, hashtag).await?;
        }
        None => {}
    }

    Ok(())
}
