#![deny(unexpected_cfgs)]
//
#![warn(clippy::cargo)]
#![warn(clippy::nursery)]
//
// https://github.com/rust-lang/rust-clippy/issues/16440
#![allow(clippy::multiple_crate_versions)]

//! Send messages and rich embeds to Discord webhooks.
//!
//! ```no_run
//! use discohook::{Color, Embed, Message};
//!
//! let message = Message::new("Deployment finished")
//!     .with_embed(Embed::new().with_title("prod").with_color(Color::GREEN));
//! discohook::send("https://discord.com/api/webhooks/1/token", &message, false)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

mod json_util;
mod validate;

pub mod embed;
pub mod message;
pub mod webhook;

pub use embed::{
    Color, Embed, EmbedAuthor, EmbedField, EmbedFooter, EmbedImage, EmbedMedia, EmbedProvider,
    EmbedThumbnail, EmbedVideo,
};
pub use message::Message;
pub use validate::webhook_url;
pub use webhook::{ServerError, USER_AGENT_VALUE, Webhook, send, send_with};
