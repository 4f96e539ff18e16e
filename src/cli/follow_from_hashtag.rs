use anyhow::{bail, Result};

use crate::client::MastodonClient;

pub async fn execute_follow_from_hashtag(client: &MastodonClient, hashtag: &str) -> Result<()> {
    println!("Searching accounts posting under #{hashtag}");

    let report = client.run_hashtag_follow(hashtag).await?;
    println!(
        "Followed {} accounts, {} failures",
        report.followed.len(),
        report.failed.len()
    );
    for (account_id, reason) in &report.failed {
        println!("  could not follow {account_id}: {reason}");
    }

    if !report.is_clean() {
        bail!("{} accounts could not be followed", report.failed.len());
    }

    Ok(())
}
