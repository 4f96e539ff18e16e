use anyhow::Result;

use crate::client::MastodonClient;
use crate::pretty_table::print_lists_table;

pub async fn execute_get_lists(client: &MastodonClient) -> Result<()> {
    let lists = client.get_lists().await?;
    let table = print_lists_table(lists)?;
    println!("{table}");

    Ok(())
}
