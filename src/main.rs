use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;

use treehole::api::{CreatePost, CreateReply, PostService};
use treehole::app::App;
use treehole::cli::{Cli, Cmd, OpenArgs};
use treehole::config::Config;
use treehole::logger;
use treehole::router::{NoTitle, TerminalTitle, TitleSink};
use treehole::utils::datetime::DateFormatter;

/// Load configuration, start logging, and build the client.
fn build_app(config_path: Option<&Path>, base_url: Option<String>) -> Result<App> {
    let mut config = Config::load_from(config_path)?;
    if let Some(base_url) = base_url {
        config.api.base_url = base_url;
        config.validate()?;
    }

    logger::init(&config.logging)?;

    let api = Arc::new(PostService::new(&config.api.base_url)?);
    let titles: Arc<dyn TitleSink> = if config.display.set_terminal_title {
        Arc::new(TerminalTitle)
    } else {
        Arc::new(NoTitle)
    };
    Ok(App::new(&config, api, DateFormatter::system(), titles))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config.as_deref();
    let base_url = cli.base_url.clone();
    let cmd = cli.cmd.unwrap_or(Cmd::Open(OpenArgs {
        location: "/".to_string(),
    }));

    let output = match cmd {
        Cmd::InitConfig(args) => {
            let path = match args.path {
                Some(path) => path,
                None => Config::get_default_config_path()?,
            };
            return Config::generate_default_config(path);
        }
        Cmd::Open(args) => build_app(config_path, base_url)?.open(&args.location).await?,
        Cmd::Post(args) => {
            let post = CreatePost {
                title: args.title,
                content: args.content,
                username: args.username,
            };
            build_app(config_path, base_url)?.create_post(&post).await?
        }
        Cmd::Reply(args) => {
            let reply = CreateReply {
                content: args.content,
                username: args.username,
                parent_id: args.parent_id,
            };
            build_app(config_path, base_url)?
                .create_reply(&args.post_id, &reply)
                .await?
        }
        Cmd::SyncStatus => build_app(config_path, base_url)?.sync_status().await?,
        Cmd::Routes => build_app(config_path, base_url)?.describe_routes(),
    };

    println!("{}", output.trim_end());
    Ok(())
}
