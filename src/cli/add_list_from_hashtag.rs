use anyhow::Result;

use crate::client::MastodonClient;

pub async fn execute_add_list_from_hashtag(
    client: &MastodonClient,
    hashtag: &str,
    list_id: &str,
) -> Result<()> {
    println!("Searching accounts posting under #{hashtag}");

    let added = client.run_hashtag_follow_list(hashtag, list_id).await?;
    println!("Added {added} accounts to list {list_id}");

    Ok(())
}
