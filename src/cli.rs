//! Command-line arguments.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "treehole", version, about = "Terminal client for the Treehole forum", long_about = None)]
pub struct Cli {
    /// Configuration file to use instead of the discovered one
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// API base URL, overriding the configuration
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub cmd: Option<Cmd>,
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// Open a client location, e.g. "/", "/post/42" or "/search-results?q=考试".
    Open(OpenArgs),
    /// Publish a new post.
    Post(PostArgs),
    /// Reply to a post.
    Reply(ReplyArgs),
    /// Show the backend's last synchronization status.
    SyncStatus,
    /// List the client routes.
    Routes,
    /// Write a default configuration file.
    InitConfig(InitConfigArgs),
}

#[derive(Args, Debug)]
pub struct OpenArgs {
    #[arg(default_value = "/")]
    pub location: String,
}

#[derive(Args, Debug)]
pub struct PostArgs {
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub content: String,
    #[arg(long)]
    pub username: String,
}

#[derive(Args, Debug)]
pub struct ReplyArgs {
    pub post_id: String,
    #[arg(long)]
    pub content: String,
    #[arg(long)]
    pub username: String,
    /// Reply being answered; 0 answers the post itself
    #[arg(long, default_value_t = 0)]
    pub parent_id: i64,
}

#[derive(Args, Debug)]
pub struct InitConfigArgs {
    /// Where to write; defaults to the XDG config location
    pub path: Option<PathBuf>,
}
