//! The data model hosts feed into the transcript.
//!
//! Everything here is plain serde data: constructed per message, passed to
//! widgets as props, never mutated by the kit. The shapes mirror common
//! messaging-provider payloads so hosts can deserialize wire messages
//! directly.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Author {
    User,
    Bot,
    System,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSource {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

impl ImageSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            alt: None,
        }
    }

    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = Some(alt.into());
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlButton {
    pub label: CompactString,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<ImageSource>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostBackButton {
    pub label: CompactString,
    /// Opaque action identifier handed back to the host on activation.
    pub action: CompactString,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<ImageSource>,
}

/// The closed set of button variants a card can carry. One render site
/// matches exhaustively on this; there is no open-ended extension point.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Button {
    Url(UrlButton),
    PostBack(PostBackButton),
}

impl Button {
    pub fn url(label: impl Into<CompactString>, url: impl Into<String>) -> Self {
        Self::Url(UrlButton {
            label: label.into(),
            url: url.into(),
            icon: None,
        })
    }

    pub fn post_back(label: impl Into<CompactString>, action: impl Into<CompactString>) -> Self {
        Self::PostBack(PostBackButton {
            label: label.into(),
            action: action.into(),
            icon: None,
        })
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Url(b) => &b.label,
            Self::PostBack(b) => &b.label,
        }
    }

    pub fn icon(&self) -> Option<&ImageSource> {
        match self {
            Self::Url(b) => b.icon.as_ref(),
            Self::PostBack(b) => b.icon.as_ref(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardData {
    pub title: CompactString,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover: Option<ImageSource>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub buttons: Vec<Button>,
}

impl CardData {
    pub fn new(title: impl Into<CompactString>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn with_cover(mut self, cover: ImageSource) -> Self {
        self.cover = Some(cover);
        self
    }

    pub fn with_button(mut self, button: Button) -> Self {
        self.buttons.push(button);
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickReply {
    pub label: CompactString,
    pub action: CompactString,
}

impl QuickReply {
    pub fn new(label: impl Into<CompactString>, action: impl Into<CompactString>) -> Self {
        Self {
            label: label.into(),
            action: action.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MessageBody {
    Text {
        text: String,
    },
    Markdown {
        text: String,
    },
    Image {
        image: ImageSource,
    },
    Card {
        card: CardData,
    },
    QuickReplies {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        prompt: Option<String>,
        replies: Vec<QuickReply>,
    },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub author: Author,
    #[serde(flatten)]
    pub body: MessageBody,
    /// Host-formatted display timestamp; the kit does no time handling.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<CompactString>,
}

impl Message {
    pub fn text(author: Author, text: impl Into<String>) -> Self {
        Self {
            author,
            body: MessageBody::Text { text: text.into() },
            timestamp: None,
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::text(Author::User, text)
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self::text(Author::Bot, text)
    }

    pub fn system(text: impl Into<String>) -> Self {
        Self::text(Author::System, text)
    }

    pub fn bot_markdown(text: impl Into<String>) -> Self {
        Self {
            author: Author::Bot,
            body: MessageBody::Markdown { text: text.into() },
            timestamp: None,
        }
    }

    pub fn bot_image(image: ImageSource) -> Self {
        Self {
            author: Author::Bot,
            body: MessageBody::Image { image },
            timestamp: None,
        }
    }

    pub fn bot_card(card: CardData) -> Self {
        Self {
            author: Author::Bot,
            body: MessageBody::Card { card },
            timestamp: None,
        }
    }

    pub fn quick_replies(prompt: Option<String>, replies: Vec<QuickReply>) -> Self {
        Self {
            author: Author::Bot,
            body: MessageBody::QuickReplies { prompt, replies },
            timestamp: None,
        }
    }

    pub fn with_timestamp(mut self, ts: impl Into<CompactString>) -> Self {
        self.timestamp = Some(ts.into());
        self
    }

    pub fn author_label(&self) -> &'static str {
        match self.author {
            Author::User => "You",
            Author::Bot => "Bot",
            Author::System => "System",
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/message.rs"]
mod tests;
