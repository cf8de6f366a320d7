//! Article document model.
//!
//! An article is an ordered list of blocks, decoded from the JSON shape the
//! upstream document parser produces. `null` entries are kept as `None` so
//! positions survive a round trip through the renderer.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::fmt;

use crate::error::ParseError;

mod decode;

/// A whole article as handed to the renderer.
pub type Article = Vec<Option<Block>>;

/// Decode an article from its JSON form.
pub fn from_json(input: &str) -> Result<Article, ParseError> {
    from_json_named("article.json", input)
}

/// Decode an article, naming the source for diagnostics.
pub fn from_json_named(name: &str, input: &str) -> Result<Article, ParseError> {
    tracing::debug!(source = name, bytes = input.len(), "decoding article");
    serde_json::from_str(input).map_err(|err| ParseError::json(err, name, input))
}

/// One structural unit of an article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase", try_from = "decode::RawNode")]
pub enum Block {
    Paragraph(Container),
    Header1(Heading),
    Header2(Heading),
    Header3(Heading),
    Header4(Heading),
    Header5(Heading),
    Header6(Heading),
    Blockquote(Container),
    Embed(EmbedBlock),
}

impl Block {
    pub fn paragraph(children: impl IntoIterator<Item = Child>) -> Self {
        Block::Paragraph(Container {
            children: children.into_iter().collect(),
        })
    }

    pub fn blockquote(children: impl IntoIterator<Item = Child>) -> Self {
        Block::Blockquote(Container {
            children: children.into_iter().collect(),
        })
    }

    /// Build a header block, clamping `level` into `1..=6`.
    pub fn header(level: u8, children: impl IntoIterator<Item = Inline>) -> Self {
        let heading = Heading {
            children: children.into_iter().collect(),
        };
        match level.clamp(1, 6) {
            1 => Block::Header1(heading),
            2 => Block::Header2(heading),
            3 => Block::Header3(heading),
            4 => Block::Header4(heading),
            5 => Block::Header5(heading),
            _ => Block::Header6(heading),
        }
    }

    /// Heading level and content, if this is one of the header blocks.
    pub fn as_heading(&self) -> Option<(u8, &Heading)> {
        match self {
            Block::Header1(h) => Some((1, h)),
            Block::Header2(h) => Some((2, h)),
            Block::Header3(h) => Some((3, h)),
            Block::Header4(h) => Some((4, h)),
            Block::Header5(h) => Some((5, h)),
            Block::Header6(h) => Some((6, h)),
            _ => None,
        }
    }

    pub fn as_embed(&self) -> Option<&EmbedBlock> {
        match self {
            Block::Embed(embed) => Some(embed),
            _ => None,
        }
    }
}

impl From<EmbedBlock> for Block {
    fn from(embed: EmbedBlock) -> Self {
        Block::Embed(embed)
    }
}

/// Paragraphs and blockquotes hold inline runs or nested blocks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Container {
    #[serde(default)]
    pub children: Vec<Child>,
}

/// Headers only hold inline runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Heading {
    #[serde(default)]
    pub children: Vec<Inline>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged, try_from = "decode::RawNode")]
pub enum Child {
    Inline(Inline),
    Block(Block),
}

impl From<Inline> for Child {
    fn from(inline: Inline) -> Self {
        Child::Inline(inline)
    }
}

impl From<TextRun> for Child {
    fn from(run: TextRun) -> Self {
        Child::Inline(Inline::Text(run))
    }
}

impl From<Block> for Child {
    fn from(block: Block) -> Self {
        Child::Block(block)
    }
}

/// An inline node. A run without a `type` key decodes as text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase", try_from = "decode::RawNode")]
pub enum Inline {
    Text(TextRun),
    Linebreak,
}

impl From<TextRun> for Inline {
    fn from(run: TextRun) -> Self {
        Inline::Text(run)
    }
}

/// A styled run of inline text.
///
/// `href`, `bold` and `italic` may all be present at once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRun {
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
}

impl TextRun {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Default::default()
        }
    }

    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn with_bold(mut self) -> Self {
        self.bold = Some(true);
        self
    }

    pub fn with_italic(mut self) -> Self {
        self.italic = Some(true);
        self
    }

    /// Link target; an empty string counts as no link.
    pub fn href(&self) -> Option<&str> {
        self.href.as_deref().filter(|href| !href.is_empty())
    }

    pub fn is_bold(&self) -> bool {
        self.bold.unwrap_or(false)
    }

    pub fn is_italic(&self) -> bool {
        self.italic.unwrap_or(false)
    }
}

/// An embed block: third-party media plus an optional caption.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "decode::RawNode")]
pub struct EmbedBlock {
    #[serde(flatten)]
    pub embed: Embed,
    /// Caption runs; line breaks are allowed as in body text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<Vec<Inline>>,
    /// Attributes for the wrapping `<figure>`. Explicit values here win over
    /// the defaults the renderer derives from the embed kind.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub figure_props: Option<FigureProps>,
}

impl EmbedBlock {
    pub fn new(embed: impl Into<Embed>) -> Self {
        Self {
            embed: embed.into(),
            caption: None,
            figure_props: None,
        }
    }

    pub fn with_caption<I: Into<Inline>>(mut self, caption: impl IntoIterator<Item = I>) -> Self {
        self.caption = Some(caption.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_figure_props(mut self, props: FigureProps) -> Self {
        self.figure_props = Some(props);
        self
    }

    pub fn kind(&self) -> EmbedKind {
        self.embed.kind()
    }

    /// Caption runs, if there are any.
    pub fn caption(&self) -> Option<&[Inline]> {
        self.caption.as_deref().filter(|runs| !runs.is_empty())
    }
}

/// Presentation attributes for an embed's `<figure>` container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FigureProps {
    #[serde(
        rename = "data-feedback",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub feedback: Option<SmolStr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<SmolStr>,
}

impl FigureProps {
    pub fn new(feedback: Option<&'static str>, class: Option<&'static str>) -> Self {
        Self {
            feedback: feedback.map(SmolStr::new_static),
            class: class.map(SmolStr::new_static),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.feedback.is_none() && self.class.is_none()
    }

    /// Attribute pairs in output order.
    pub fn attributes(&self) -> impl Iterator<Item = (&'static str, &SmolStr)> {
        [("data-feedback", &self.feedback), ("class", &self.class)]
            .into_iter()
            .filter_map(|(name, value)| value.as_ref().map(|value| (name, value)))
    }
}

/// Embed payload, discriminated by `embedType`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "embedType", rename_all = "lowercase")]
pub enum Embed {
    Youtube(YoutubeEmbed),
    Giphy(GiphyEmbed),
    Vimeo(VimeoEmbed),
    Vine(VineEmbed),
    Image(ImageEmbed),
    Video(VideoEmbed),
    Facebook(FacebookEmbed),
    Twitter(TwitterEmbed),
    Instagram(InstagramEmbed),
    Spotify(SpotifyEmbed),
    Tumblr(TumblrEmbed),
    Custom(CustomEmbed),
}

impl Embed {
    pub fn kind(&self) -> EmbedKind {
        match self {
            Embed::Youtube(_) => EmbedKind::Youtube,
            Embed::Giphy(_) => EmbedKind::Giphy,
            Embed::Vimeo(_) => EmbedKind::Vimeo,
            Embed::Vine(_) => EmbedKind::Vine,
            Embed::Image(_) => EmbedKind::Image,
            Embed::Video(_) => EmbedKind::Video,
            Embed::Facebook(_) => EmbedKind::Facebook,
            Embed::Twitter(_) => EmbedKind::Twitter,
            Embed::Instagram(_) => EmbedKind::Instagram,
            Embed::Spotify(_) => EmbedKind::Spotify,
            Embed::Tumblr(_) => EmbedKind::Tumblr,
            Embed::Custom(_) => EmbedKind::Custom,
        }
    }
}

macro_rules! embed_from {
    ($($variant:ident($payload:ty)),* $(,)?) => {
        $(
            impl From<$payload> for Embed {
                fn from(payload: $payload) -> Self {
                    Embed::$variant(payload)
                }
            }
        )*
    };
}

embed_from!(
    Youtube(YoutubeEmbed),
    Giphy(GiphyEmbed),
    Vimeo(VimeoEmbed),
    Vine(VineEmbed),
    Image(ImageEmbed),
    Video(VideoEmbed),
    Facebook(FacebookEmbed),
    Twitter(TwitterEmbed),
    Instagram(InstagramEmbed),
    Spotify(SpotifyEmbed),
    Tumblr(TumblrEmbed),
    Custom(CustomEmbed),
);

/// Field-less mirror of [`Embed`], used for table lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmbedKind {
    Youtube,
    Giphy,
    Vimeo,
    Vine,
    Image,
    Video,
    Facebook,
    Twitter,
    Instagram,
    Spotify,
    Tumblr,
    Custom,
}

impl EmbedKind {
    pub const ALL: [EmbedKind; 12] = [
        EmbedKind::Youtube,
        EmbedKind::Giphy,
        EmbedKind::Vimeo,
        EmbedKind::Vine,
        EmbedKind::Image,
        EmbedKind::Video,
        EmbedKind::Facebook,
        EmbedKind::Twitter,
        EmbedKind::Instagram,
        EmbedKind::Spotify,
        EmbedKind::Tumblr,
        EmbedKind::Custom,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            EmbedKind::Youtube => "youtube",
            EmbedKind::Giphy => "giphy",
            EmbedKind::Vimeo => "vimeo",
            EmbedKind::Vine => "vine",
            EmbedKind::Image => "image",
            EmbedKind::Video => "video",
            EmbedKind::Facebook => "facebook",
            EmbedKind::Twitter => "twitter",
            EmbedKind::Instagram => "instagram",
            EmbedKind::Spotify => "spotify",
            EmbedKind::Tumblr => "tumblr",
            EmbedKind::Custom => "custom",
        }
    }
}

impl fmt::Display for EmbedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YoutubeEmbed {
    #[serde(default)]
    pub youtube_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GiphyEmbed {
    #[serde(default)]
    pub id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VimeoEmbed {
    #[serde(default)]
    pub id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VineEmbed {
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageEmbed {
    #[serde(default)]
    pub src: String,
    #[serde(
        default,
        deserialize_with = "decode::dimension",
        skip_serializing_if = "Option::is_none"
    )]
    pub width: Option<u32>,
    #[serde(
        default,
        deserialize_with = "decode::dimension",
        skip_serializing_if = "Option::is_none"
    )]
    pub height: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoEmbed {
    #[serde(default)]
    pub sources: Vec<VideoSource>,
    #[serde(
        default,
        deserialize_with = "decode::dimension",
        skip_serializing_if = "Option::is_none"
    )]
    pub width: Option<u32>,
    #[serde(
        default,
        deserialize_with = "decode::dimension",
        skip_serializing_if = "Option::is_none"
    )]
    pub height: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoSource {
    #[serde(default)]
    pub src: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
}

/// Author of a social post.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacebookEmbed {
    #[serde(default)]
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<Vec<TextRun>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TweetKind {
    #[default]
    Tweet,
    Video,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TwitterEmbed {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embed_as: Option<TweetKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<Vec<TextRun>>,
    #[serde(default)]
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstagramEmbed {
    #[serde(default)]
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotifyEmbed {
    #[serde(default)]
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spotify_uri: Option<String>,
    #[serde(
        default,
        deserialize_with = "decode::dimension",
        skip_serializing_if = "Option::is_none"
    )]
    pub width: Option<u32>,
    #[serde(
        default,
        deserialize_with = "decode::dimension",
        skip_serializing_if = "Option::is_none"
    )]
    pub height: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TumblrEmbed {
    #[serde(default)]
    pub did: String,
    #[serde(default)]
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<Vec<TextRun>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomEmbed {
    #[serde(default)]
    pub src: String,
    #[serde(
        default,
        deserialize_with = "decode::dimension",
        skip_serializing_if = "Option::is_none"
    )]
    pub width: Option<u32>,
    #[serde(
        default,
        deserialize_with = "decode::dimension",
        skip_serializing_if = "Option::is_none"
    )]
    pub height: Option<u32>,
    /// Only secure custom embeds are rendered; a missing flag counts as insecure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secure: Option<bool>,
}

impl CustomEmbed {
    pub fn is_secure(&self) -> bool {
        self.secure.unwrap_or(false)
    }
}
