mod color;
mod field;
mod media;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

pub use color::Color;
pub use field::EmbedField;
pub use media::{
    EmbedAuthor, EmbedFooter, EmbedImage, EmbedMedia, EmbedProvider, EmbedThumbnail, EmbedVideo,
};

/// A rich content block attached to a message.
///
/// Every attribute is optional; unset ones are left out of the JSON entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Embed {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// ISO-8601 timestamp shown in the embed footer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<EmbedFooter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<EmbedImage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<EmbedThumbnail>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<EmbedVideo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<EmbedProvider>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<EmbedAuthor>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<EmbedField>,
}

impl Embed {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    #[must_use]
    pub const fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp.to_rfc3339_opts(SecondsFormat::Millis, true));
        self
    }

    #[must_use]
    pub fn with_footer(mut self, footer: EmbedFooter) -> Self {
        self.footer = Some(footer);
        self
    }

    #[must_use]
    pub fn with_image(mut self, image: EmbedImage) -> Self {
        self.image = Some(image);
        self
    }

    #[must_use]
    pub fn with_thumbnail(mut self, thumbnail: EmbedThumbnail) -> Self {
        self.thumbnail = Some(thumbnail);
        self
    }

    #[must_use]
    pub fn with_author(mut self, author: EmbedAuthor) -> Self {
        self.author = Some(author);
        self
    }

    #[must_use]
    pub fn with_field(mut self, field: EmbedField) -> Self {
        self.fields.push(field);
        self
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use serde_json::{Value, json};

    use super::*;

    #[test]
    fn empty_embed_is_an_empty_object() {
        let json = serde_json::to_string(&Embed::new()).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn color_is_a_plain_number() {
        let embed = Embed::new().with_color(Color::new(255, 0, 0));
        let json: Value = serde_json::to_value(&embed).unwrap();
        assert_eq!(json, json!({ "color": 16_711_680 }));
    }

    #[test]
    fn nested_groups_use_snake_case() {
        let embed = Embed::new()
            .with_title("Deploy")
            .with_footer(EmbedFooter {
                icon_url: Some("https://cdn.example/i.png".into()),
                ..EmbedFooter::new("ci")
            })
            .with_image(EmbedMedia {
                width: Some(640),
                ..EmbedMedia::new("https://cdn.example/a.png")
            })
            .with_author(EmbedAuthor {
                proxy_icon_url: Some("https://proxy.example/p.png".into()),
                ..EmbedAuthor::new("bot")
            })
            .with_field(EmbedField::inline("Branch", "main"))
            .with_field(EmbedField::new("Commit", "abc123"));

        let json: Value = serde_json::to_value(&embed).unwrap();
        assert_eq!(
            json,
            json!({
                "title": "Deploy",
                "footer": { "text": "ci", "icon_url": "https://cdn.example/i.png" },
                "image": { "url": "https://cdn.example/a.png", "width": 640 },
                "author": { "name": "bot", "proxy_icon_url": "https://proxy.example/p.png" },
                "fields": [
                    { "name": "Branch", "value": "main", "inline": true },
                    { "name": "Commit", "value": "abc123" }
                ]
            })
        );
    }

    #[test]
    fn kind_is_sent_as_type() {
        let embed = Embed {
            kind: Some("rich".into()),
            ..Embed::new()
        };
        let json = serde_json::to_string(&embed).unwrap();
        assert_eq!(json, r#"{"type":"rich"}"#);
    }

    #[test]
    fn timestamp_is_iso_8601() {
        let time = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 0).unwrap();
        let embed = Embed::new().with_timestamp(time);
        assert_eq!(embed.timestamp.as_deref(), Some("2024-03-09T14:05:00.000Z"));
    }

    #[test]
    fn reads_back_what_discord_returns() {
        let json = r#"{"title":"t","color":255,"provider":{"name":"YouTube"},"fields":[]}"#;
        let embed: Embed = serde_json::from_str(json).unwrap();
        assert_eq!(embed.color, Some(Color::BLUE));
        assert_eq!(embed.provider.unwrap().name.as_deref(), Some("YouTube"));
        assert!(embed.fields.is_empty());
    }
}
