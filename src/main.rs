mod logging;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use discohook::{Color, Embed, Message, Webhook};
use reqwest::Url;

/// Send a message to a Discord webhook
#[derive(Parser)]
struct Args {
    /// The Discord WebHook URL the message should be sent to
    #[arg(short, long)]
    url: Url,

    /// Text content of the message
    #[arg(short, long)]
    content: Option<String>,

    /// Override the webhook's display name
    #[arg(long)]
    username: Option<String>,

    /// Override the webhook's avatar
    #[arg(long)]
    avatar_url: Option<String>,

    /// Read the message aloud
    #[arg(long)]
    tts: bool,

    /// Don't ask Discord to confirm the message was created.
    /// Discord then answers 204, which is reported as a failure.
    #[arg(long)]
    no_wait: bool,

    /// Title of an embed attached to the message
    #[arg(short, long)]
    title: Option<String>,

    /// Description of an embed attached to the message
    #[arg(short, long)]
    description: Option<String>,

    /// Embed color as #rrggbb
    #[arg(long, value_parser = Color::from_hex)]
    color: Option<Color>,

    /// Log debug output
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn embed(&self) -> Option<Embed> {
        if self.title.is_none() && self.description.is_none() && self.color.is_none() {
            return None;
        }
        let mut embed = Embed::new().with_timestamp(Utc::now());
        embed.title.clone_from(&self.title);
        embed.description.clone_from(&self.description);
        embed.color = self.color;
        Some(embed)
    }

    fn message(&self) -> Message {
        let mut message = Message {
            content: self.content.clone(),
            username: self.username.clone(),
            avatar_url: self.avatar_url.clone(),
            tts: self.tts,
            ..Message::default()
        };
        message.embeds.extend(self.embed());
        message
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let message = args.message();
    if message.content.is_none() && message.embeds.is_empty() {
        log::warn!("Message has neither content nor embeds; Discord will likely reject it.");
    }

    let webhook = Webhook::new(args.url).context("Could not create Discord Webhook Client")?;
    webhook
        .execute(&message, !args.no_wait)
        .context("Could not send webhook message")?;

    log::info!("Message sent.");
    Ok(())
}
