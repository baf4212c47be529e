#![deny(clippy::implicit_return)]
#![allow(clippy::needless_return)]

mod application;
mod configuration;
mod domain;
mod infrastructure;

use std::env;
use std::process;

use anyhow::Error;
use tokio::sync::mpsc;
use yansi::Paint;

use crate::application::cli;
use crate::application::repl;
use crate::domain::models::Event;
use crate::domain::services::ConversationStore;
use crate::domain::services::MessageDispatcher;
use crate::domain::services::SessionManager;
use crate::infrastructure::api::auth::HttpAuthClient;
use crate::infrastructure::api::chat::HttpChatClient;
use crate::infrastructure::api::documents::HttpDocumentClient;
use crate::infrastructure::storage::token_file::TokenFile;

fn handle_error(err: Error) {
    eprintln!(
        "{}",
        Paint::red(format!(
            "Oh no! Parley has failed with the following app version and error.\n\nVersion: {}\nError: {}",
            env!("CARGO_PKG_VERSION"),
            err
        ))
    );

    let backtrace = err.backtrace();
    if backtrace.to_string() == "disabled backtrace" {
        let args = env::args().collect::<Vec<String>>().join(" ");
        eprintln!("\nRunning the following can help explain further what the issue is:");
        eprintln!("\nRUST_BACKTRACE=1 {args}");
    } else {
        eprintln!("\n{}", backtrace);
    }

    process::exit(1);
}

#[tokio::main]
async fn main() {
    std::panic::set_hook(Box::new(|panic_info| {
        better_panic::Settings::auto().create_panic_handler()(panic_info);
    }));

    let debug_log_dir = env::var("PARLEY_LOG_DIR").unwrap_or_else(|_| {
        return dirs::cache_dir()
            .unwrap()
            .join("parley")
            .to_string_lossy()
            .to_string();
    });

    let file_appender = tracing_appender::rolling::never(debug_log_dir, "debug.log");
    let (writer, _guard) = tracing_appender::non_blocking(file_appender);
    if env::var("RUST_LOG")
        .unwrap_or_else(|_| return "".to_string())
        .contains("parley")
    {
        tracing_subscriber::fmt()
            .json()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(writer)
            .init();
    }

    let ready_res = cli::parse().await;
    if let Err(ready_err) = ready_res {
        handle_error(ready_err);
        return;
    }
    if !ready_res.unwrap() {
        process::exit(0);
    }

    let (tx, rx) = mpsc::unbounded_channel::<Event>();

    let mut session = SessionManager::new(
        Box::<HttpAuthClient>::default(),
        Box::<TokenFile>::default(),
        tx.clone(),
    );
    session.restore().await;

    let store = ConversationStore::new(Box::<HttpChatClient>::default(), tx);
    let dispatcher = MessageDispatcher::new(Box::<HttpChatClient>::default());

    let res = repl::start(
        session,
        store,
        dispatcher,
        Box::<HttpDocumentClient>::default(),
        rx,
    )
    .await;

    if res.is_err() {
        handle_error(res.unwrap_err());
    }

    process::exit(0);
}
