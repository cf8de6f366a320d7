//! Streaming decode for the block tree.
//!
//! Every block and inline node is read into one flat [`RawNode`] and then
//! checked against its `type`. Nothing is buffered, so serde_json reports
//! decode errors at the offending value rather than at the end of the
//! enclosing object.

use serde::Deserialize;
use serde::de::{self, Deserializer, SeqAccess, Unexpected, Visitor};
use std::fmt;

use super::{
    Block, Child, Container, CustomEmbed, Embed, EmbedBlock, EmbedKind, FacebookEmbed,
    FigureProps, GiphyEmbed, ImageEmbed, Inline, InstagramEmbed, SpotifyEmbed, TextRun,
    TumblrEmbed, TweetKind, TwitterEmbed, User, VideoEmbed, VideoSource, VimeoEmbed, VineEmbed,
    YoutubeEmbed,
};

/// A node that has the right JSON types but the wrong shape for its place.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct ShapeError(String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Text,
    Linebreak,
    Paragraph,
    Header1,
    Header2,
    Header3,
    Header4,
    Header5,
    Header6,
    Blockquote,
    Embed,
}

impl NodeKind {
    fn as_str(self) -> &'static str {
        match self {
            NodeKind::Text => "text",
            NodeKind::Linebreak => "linebreak",
            NodeKind::Paragraph => "paragraph",
            NodeKind::Header1 => "header1",
            NodeKind::Header2 => "header2",
            NodeKind::Header3 => "header3",
            NodeKind::Header4 => "header4",
            NodeKind::Header5 => "header5",
            NodeKind::Header6 => "header6",
            NodeKind::Blockquote => "blockquote",
            NodeKind::Embed => "embed",
        }
    }
}

/// Union of every key a block, inline run or embed may carry.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawNode {
    #[serde(rename = "type")]
    kind: Option<NodeKind>,

    content: Option<String>,
    href: Option<String>,
    bold: Option<bool>,
    italic: Option<bool>,

    children: Option<Vec<Child>>,

    embed_type: Option<EmbedKind>,
    caption: Option<Vec<Inline>>,
    figure_props: Option<FigureProps>,
    youtube_id: Option<String>,
    id: Option<String>,
    url: Option<String>,
    src: Option<String>,
    #[serde(deserialize_with = "dimension")]
    width: Option<u32>,
    #[serde(deserialize_with = "dimension")]
    height: Option<u32>,
    sources: Option<Vec<VideoSource>>,
    user: Option<User>,
    text: Option<PostText>,
    headline: Option<String>,
    date: Option<String>,
    embed_as: Option<TweetKind>,
    spotify_uri: Option<String>,
    did: Option<String>,
    secure: Option<bool>,
}

impl RawNode {
    fn into_container(self) -> Container {
        Container {
            children: self.children.unwrap_or_default(),
        }
    }

    fn into_inlines(self, kind: NodeKind) -> Result<Vec<Inline>, ShapeError> {
        self.children
            .unwrap_or_default()
            .into_iter()
            .map(|child| match child {
                Child::Inline(inline) => Ok(inline),
                Child::Block(_) => Err(ShapeError(format!(
                    "`{}` only holds text runs and line breaks",
                    kind.as_str()
                ))),
            })
            .collect()
    }
}

impl TryFrom<RawNode> for Block {
    type Error = ShapeError;

    fn try_from(raw: RawNode) -> Result<Self, ShapeError> {
        let kind = raw
            .kind
            .ok_or_else(|| ShapeError("missing field `type`".to_owned()))?;
        let block = match kind {
            NodeKind::Paragraph => Block::Paragraph(raw.into_container()),
            NodeKind::Blockquote => Block::Blockquote(raw.into_container()),
            NodeKind::Header1 => Block::header(1, raw.into_inlines(kind)?),
            NodeKind::Header2 => Block::header(2, raw.into_inlines(kind)?),
            NodeKind::Header3 => Block::header(3, raw.into_inlines(kind)?),
            NodeKind::Header4 => Block::header(4, raw.into_inlines(kind)?),
            NodeKind::Header5 => Block::header(5, raw.into_inlines(kind)?),
            NodeKind::Header6 => Block::header(6, raw.into_inlines(kind)?),
            NodeKind::Embed => Block::Embed(EmbedBlock::try_from(raw)?),
            NodeKind::Text | NodeKind::Linebreak => {
                return Err(ShapeError(format!(
                    "expected a block, found inline `{}`",
                    kind.as_str()
                )));
            }
        };
        Ok(block)
    }
}

impl TryFrom<RawNode> for Child {
    type Error = ShapeError;

    fn try_from(raw: RawNode) -> Result<Self, ShapeError> {
        match raw.kind {
            None | Some(NodeKind::Text) | Some(NodeKind::Linebreak) => {
                Inline::try_from(raw).map(Child::Inline)
            }
            Some(_) => Block::try_from(raw).map(Child::Block),
        }
    }
}

/// A run without a `type` key is text.
impl TryFrom<RawNode> for Inline {
    type Error = ShapeError;

    fn try_from(raw: RawNode) -> Result<Self, ShapeError> {
        match raw.kind {
            None | Some(NodeKind::Text) => Ok(Inline::Text(TextRun {
                content: raw.content.unwrap_or_default(),
                href: raw.href,
                bold: raw.bold,
                italic: raw.italic,
            })),
            Some(NodeKind::Linebreak) => Ok(Inline::Linebreak),
            Some(kind) => Err(ShapeError(format!(
                "a `{}` block cannot appear inline",
                kind.as_str()
            ))),
        }
    }
}

impl TryFrom<RawNode> for EmbedBlock {
    type Error = ShapeError;

    fn try_from(raw: RawNode) -> Result<Self, ShapeError> {
        let kind = raw
            .embed_type
            .ok_or_else(|| ShapeError("missing field `embedType`".to_owned()))?;
        let url = raw.url.unwrap_or_default();
        let embed = match kind {
            EmbedKind::Youtube => Embed::from(YoutubeEmbed {
                youtube_id: raw.youtube_id.unwrap_or_default(),
            }),
            EmbedKind::Giphy => Embed::from(GiphyEmbed {
                id: raw.id.unwrap_or_default(),
            }),
            EmbedKind::Vimeo => Embed::from(VimeoEmbed {
                id: raw.id.unwrap_or_default(),
            }),
            EmbedKind::Vine => Embed::from(VineEmbed { url }),
            EmbedKind::Image => Embed::from(ImageEmbed {
                src: raw.src.unwrap_or_default(),
                width: raw.width,
                height: raw.height,
            }),
            EmbedKind::Video => Embed::from(VideoEmbed {
                sources: raw.sources.unwrap_or_default(),
                width: raw.width,
                height: raw.height,
            }),
            EmbedKind::Facebook => Embed::from(FacebookEmbed {
                url,
                user: raw.user,
                text: raw.text.map(PostText::into_runs),
                headline: raw.headline,
                date: raw.date,
            }),
            EmbedKind::Twitter => Embed::from(TwitterEmbed {
                embed_as: raw.embed_as,
                text: raw.text.map(PostText::into_runs),
                url,
                date: raw.date,
                user: raw.user,
                id: raw.id,
            }),
            EmbedKind::Instagram => Embed::from(InstagramEmbed {
                url,
                text: raw.text.map(PostText::into_plain),
                user: raw.user,
                date: raw.date,
            }),
            EmbedKind::Spotify => Embed::from(SpotifyEmbed {
                url,
                spotify_uri: raw.spotify_uri,
                width: raw.width,
                height: raw.height,
            }),
            EmbedKind::Tumblr => Embed::from(TumblrEmbed {
                did: raw.did.unwrap_or_default(),
                url,
                text: raw.text.map(PostText::into_runs),
            }),
            EmbedKind::Custom => Embed::from(CustomEmbed {
                src: raw.src.unwrap_or_default(),
                width: raw.width,
                height: raw.height,
                secure: raw.secure,
            }),
        };
        Ok(EmbedBlock {
            embed,
            caption: raw.caption,
            figure_props: raw.figure_props,
        })
    }
}

/// Post text: Instagram sends a plain string, the others send runs.
#[derive(Debug)]
enum PostText {
    Plain(String),
    Runs(Vec<TextRun>),
}

impl PostText {
    fn into_runs(self) -> Vec<TextRun> {
        match self {
            PostText::Plain(text) => vec![TextRun::new(text)],
            PostText::Runs(runs) => runs,
        }
    }

    fn into_plain(self) -> String {
        match self {
            PostText::Plain(text) => text,
            PostText::Runs(runs) => runs.into_iter().map(|run| run.content).collect(),
        }
    }
}

impl<'de> Deserialize<'de> for PostText {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PostTextVisitor;

        impl<'de> Visitor<'de> for PostTextVisitor {
            type Value = PostText;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a string or a list of text runs")
            }

            fn visit_str<E: de::Error>(self, text: &str) -> Result<PostText, E> {
                Ok(PostText::Plain(text.to_owned()))
            }

            fn visit_string<E: de::Error>(self, text: String) -> Result<PostText, E> {
                Ok(PostText::Plain(text))
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<PostText, A::Error> {
                let mut runs = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(run) = seq.next_element()? {
                    runs.push(run);
                }
                Ok(PostText::Runs(runs))
            }
        }

        deserializer.deserialize_any(PostTextVisitor)
    }
}

/// A pixel size. Fractions round up and negatives clamp to zero, which keeps
/// `size <= n` comparisons the same as on the raw number.
pub fn dimension<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u32>, D::Error> {
    struct DimensionVisitor;

    impl<'de> Visitor<'de> for DimensionVisitor {
        type Value = Option<u32>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a pixel size")
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D: Deserializer<'de>>(self, inner: D) -> Result<Self::Value, D::Error> {
            inner.deserialize_any(DimensionVisitor)
        }

        fn visit_u64<E: de::Error>(self, size: u64) -> Result<Self::Value, E> {
            Ok(Some(u32::try_from(size).unwrap_or(u32::MAX)))
        }

        fn visit_i64<E: de::Error>(self, size: i64) -> Result<Self::Value, E> {
            Ok(Some(u32::try_from(size.max(0)).unwrap_or(u32::MAX)))
        }

        fn visit_f64<E: de::Error>(self, size: f64) -> Result<Self::Value, E> {
            if !size.is_finite() {
                return Err(E::invalid_value(Unexpected::Float(size), &self));
            }
            // float to int casts saturate
            Ok(Some(size.ceil().max(0.0) as u32))
        }
    }

    deserializer.deserialize_any(DimensionVisitor)
}
