use clap::{Parser, Subcommand};

use crate::client::{DEFAULT_DOMAIN, DEFAULT_TIMEOUT};

pub mod add_list_from_hashtag;
pub mod follow_from_hashtag;
pub mod get_lists;

#[derive(Parser)]
#[command(
    name = "fedifollow-cli",
    about = "A simple CLI to follow Mastodon accounts by hashtag",
    author,
    help_template = "\
{before-help}{name}

{about-with-newline}
{author-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
",
    version
)]
#[command(propagate_version = true)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
    #[arg(short, long)]
    pub verbose: bool,
    /// Request timeout in seconds
    #[arg(long, global = true)]
    #[clap(default_value_t = DEFAULT_TIMEOUT.as_secs())]
    pub timeout: u64,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the authenticated user's lists
    GetLists {
        /// Bearer token for the Mastodon API
        token: String,
        /// Mastodon server
        #[clap(default_value = DEFAULT_DOMAIN)]
        domain: String,
    },
    /// Add every account posting under a hashtag to a list
    AddListFromHashtag {
        /// Bearer token for the Mastodon API
        token: String,
        /// The hashtag to find the accounts
        hashtag: String,
        /// The id of the list to add the accounts
        list_id: String,
        /// Mastodon server
        #[clap(default_value = DEFAULT_DOMAIN)]
        domain: String,
    },
    /// Follow every account posting under a hashtag
    FollowFromHashtag {
        /// Bearer token for the Mastodon API
        token: String,
        /// The hashtag to find the accounts
        hashtag: String,
        /// Mastodon server
        #[clap(default_value = DEFAULT_DOMAIN)]
        domain: String,
    },
}
