//! Social post embeds.
//!
//! These produce the blockquote-style fallback markup each platform's
//! script upgrades into a live widget. The script include itself is the
//! caller's business.

use fbia_common::article::{TextRun, TweetKind, User};
use fbia_common::{Element, Node};
use smol_str::{SmolStr, format_smolstr};

/// Post text as plain runs, keeping links and nothing else.
fn runs(text: Option<&[TextRun]>) -> impl Iterator<Item = Node> + '_ {
    text.unwrap_or_default().iter().map(|run| {
        let content = Node::text(run.content.as_str());
        match run.href() {
            Some(href) => Element::new("a").attr("href", href).child(content).into(),
            None => content,
        }
    })
}

pub fn twitter(
    kind: TweetKind,
    text: Option<&[TextRun]>,
    url: &str,
    date: Option<&str>,
    user: Option<&User>,
    id: Option<&str>,
) -> Node {
    let class = match kind {
        TweetKind::Tweet => "twitter-tweet",
        TweetKind::Video => "twitter-video",
    };
    // Older documents only carry the status id.
    let permalink: SmolStr = match (url, id) {
        ("", Some(id)) => format_smolstr!("https://twitter.com/i/web/status/{id}"),
        (url, _) => url.into(),
    };
    let attribution = match user {
        Some(user) => format!(" {} (@{}) ", user.name, user.slug),
        None => " ".to_owned(),
    };
    let date = date
        .filter(|date| !date.is_empty())
        .unwrap_or(permalink.as_str())
        .to_owned();

    Element::new("blockquote")
        .attr("class", class)
        .attr("data-lang", "en")
        .child(
            Element::new("p")
                .attr("lang", "en")
                .attr("dir", "ltr")
                .children(runs(text)),
        )
        .child(Node::raw("&mdash;"))
        .child(attribution)
        .child(Element::new("a").attr("href", permalink).child(date))
        .into()
}

pub fn instagram(
    url: &str,
    text: Option<&str>,
    user: Option<&User>,
    date: Option<&str>,
) -> Node {
    let post_link = || Element::new("a").attr("href", url).attr("target", "_blank");

    let mut body = Element::new("div");
    if let Some(text) = text.filter(|text| !text.is_empty()) {
        body = body.child(Element::new("p").child(post_link().child(text)));
    }

    let shared_by = match user {
        Some(user) => format!("A post shared by {} (@{})", user.name, user.slug),
        None => "A post shared on Instagram".to_owned(),
    };
    let mut attribution = Element::new("p").child(post_link().child(shared_by));
    if let Some(date) = date.filter(|date| !date.is_empty()) {
        attribution = attribution
            .child(" on ")
            .child(Element::new("time").child(date));
    }

    Element::new("blockquote")
        .attr("class", "instagram-media")
        .attr("data-instgrm-permalink", url)
        .attr("data-instgrm-version", "8")
        .child(body.child(attribution))
        .into()
}

pub fn tumblr(did: &str, url: &str, text: Option<&[TextRun]>) -> Node {
    Element::new("div")
        .attr("class", "tumblr-post")
        .attr("data-href", url)
        .attr("data-did", did)
        .children(runs(text))
        .into()
}

pub fn facebook(
    url: &str,
    user: Option<&User>,
    text: Option<&[TextRun]>,
    headline: Option<&str>,
    date: Option<&str>,
) -> Node {
    let mut quote = Element::new("blockquote")
        .attr("cite", url)
        .attr("class", "fb-xfbml-parse-ignore");

    if let Some(headline) = headline.filter(|headline| !headline.is_empty()) {
        quote = quote.child(Element::new("p").child(Node::text(headline).wrap("b")));
    }
    if let Some(text) = text.filter(|text| !text.is_empty()) {
        quote = quote.child(Element::new("p").children(runs(Some(text))));
    }

    let date = date.filter(|date| !date.is_empty());
    match user {
        Some(user) => {
            quote = quote.child("Posted by ").child(
                Element::new("a")
                    .attr("href", format_smolstr!("https://www.facebook.com/{}", user.slug))
                    .child(user.name.as_str()),
            );
            if let Some(date) = date {
                quote = quote
                    .child(" on ")
                    .child(Element::new("a").attr("href", url).child(date));
            }
        }
        None => {
            let label = date.unwrap_or("View on Facebook");
            quote = quote.child(Element::new("a").attr("href", url).child(label));
        }
    }

    Element::new("div")
        .attr("class", "fb-post")
        .attr("data-href", url)
        .child(quote)
        .into()
}
