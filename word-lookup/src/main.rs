use clap::Parser;
use config::Args;
use dictionary::{Dictionary, DICTIONARY_API_URL};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use utilities::{input, is_quit_command, prompt};
use widget::Widget;

mod config;
mod render;
mod utilities;
mod view;
mod widget;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let dictionary = Dictionary::with_timeout(
        args.api_url.as_deref().unwrap_or(DICTIONARY_API_URL),
        args.timeout(),
    )?;
    let mut widget = Widget::new(dictionary, args.widget_config());

    println!("Type a word to look it up, or :q to leave.");
    while let Some(line) = input(&prompt(widget.input().value()))? {
        if is_quit_command(&line) {
            break;
        }
        widget.input_mut().set(line);
        let outcome = widget.submit().await;
        debug!(?outcome, nodes = widget.results().nodes().len(), "submission handled");
        if widget.error().is_visible() {
            println!("{}", widget.error());
        }
        if !widget.results().is_empty() {
            print!("{}", widget.results());
        }
    }
    Ok(())
}
