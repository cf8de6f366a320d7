//! Generic article walker.
//!
//! Knows how paragraphs, headers, blockquotes and inline runs turn into
//! markup. Embeds are handed to an [`EmbedRenderer`], and the result is
//! wrapped in a `<figure>` along with the caption.

use fbia_common::article::{Child, Container, Heading, Inline};
use fbia_common::{Block, Element, Embed, EmbedBlock, Node, TextRun};
use smol_str::format_smolstr;

/// Plugin that supplies embed bodies to the walker.
pub trait EmbedRenderer {
    /// Markup for an embed's body. An empty node leaves the figure empty.
    fn render_embed(&self, embed: &Embed) -> Node;

    /// Wrap an embed's rendered caption runs.
    fn render_caption(&self, caption: Vec<Node>) -> Node {
        Element::new("figcaption").children(caption).into()
    }
}

pub struct ArticleComposer<'r, R: ?Sized> {
    renderer: &'r R,
}

impl<'r, R: EmbedRenderer + ?Sized> ArticleComposer<'r, R> {
    pub fn new(renderer: &'r R) -> Self {
        Self { renderer }
    }

    /// The `<article>` root with one child per present block, in order.
    pub fn compose(&self, blocks: &[Option<Block>]) -> Node {
        Element::new("article")
            .children(blocks.iter().flatten().map(|block| self.render_block(block)))
            .into()
    }

    pub fn render_block(&self, block: &Block) -> Node {
        match block {
            Block::Paragraph(container) => self.render_container("p", container),
            Block::Blockquote(container) => self.render_container("blockquote", container),
            Block::Header1(heading) => render_heading(1, heading),
            Block::Header2(heading) => render_heading(2, heading),
            Block::Header3(heading) => render_heading(3, heading),
            Block::Header4(heading) => render_heading(4, heading),
            Block::Header5(heading) => render_heading(5, heading),
            Block::Header6(heading) => render_heading(6, heading),
            Block::Embed(embed) => self.render_figure(embed),
        }
    }

    fn render_container(&self, tag: &'static str, container: &Container) -> Node {
        let children = container.children.iter().map(|child| match child {
            Child::Inline(inline) => render_inline(inline),
            Child::Block(block) => self.render_block(block),
        });
        Element::new(tag).children(children).into()
    }

    /// An embed inside its figure. Attributes come from the (already
    /// normalized) `figure_props` and nowhere else.
    pub fn render_figure(&self, embed: &EmbedBlock) -> Node {
        let mut figure = Element::new("figure");
        if let Some(props) = &embed.figure_props {
            for (name, value) in props.attributes() {
                figure = figure.attr(name, value.clone());
            }
        }

        figure = figure.child(self.renderer.render_embed(&embed.embed));

        if let Some(caption) = embed.caption() {
            let runs = caption.iter().map(render_inline).collect();
            figure = figure.child(self.renderer.render_caption(runs));
        }

        figure.into()
    }
}

fn render_heading(level: u8, heading: &Heading) -> Node {
    Element::new(format_smolstr!("h{level}"))
        .children(heading.children.iter().map(render_inline))
        .into()
}

pub fn render_inline(inline: &Inline) -> Node {
    match inline {
        Inline::Text(run) => render_text_run(run),
        Inline::Linebreak => Element::new("br").into(),
    }
}

/// A text run with its styles applied.
///
/// The link sits innermost, then bold, then italic.
pub fn render_text_run(run: &TextRun) -> Node {
    let mut node = Node::text(run.content.as_str());
    if let Some(href) = run.href() {
        node = Element::new("a").attr("href", href).child(node).into();
    }
    if run.is_bold() {
        node = node.wrap("b");
    }
    if run.is_italic() {
        node = node.wrap("i");
    }
    node
}

#[cfg(test)]
mod tests {
    use super::*;
    use fbia_common::FigureProps;
    use fbia_common::article::ImageEmbed;

    /// Renders every embed as a bare `<embed>` naming its kind.
    struct Placeholder;

    impl EmbedRenderer for Placeholder {
        fn render_embed(&self, embed: &Embed) -> Node {
            Element::new("embed")
                .attr("type", embed.kind().as_str())
                .into()
        }
    }

    fn compose(blocks: &[Option<Block>]) -> String {
        ArticleComposer::new(&Placeholder).compose(blocks).to_string()
    }

    #[test]
    fn test_text_run_nesting() {
        let run = TextRun::new("x")
            .with_href("http://x")
            .with_bold()
            .with_italic();
        assert_eq!(
            render_text_run(&run).to_string(),
            r#"<i><b><a href="http://x">x</a></b></i>"#
        );
    }

    #[test]
    fn test_plain_run_is_bare_text() {
        assert_eq!(render_text_run(&TextRun::new("plain")), Node::text("plain"));
    }

    #[test]
    fn test_paragraph_link_then_text() {
        let blocks = vec![Some(Block::paragraph([
            Child::from(TextRun::new("a").with_href("http://x")),
            Child::from(TextRun::new("b")),
        ]))];
        assert_eq!(
            compose(&blocks),
            r#"<article><p><a href="http://x">a</a>b</p></article>"#
        );
    }

    #[test]
    fn test_headers_and_nulls() {
        let blocks = vec![
            None,
            Some(Block::header(1, [Inline::from(TextRun::new("one"))])),
            None,
            Some(Block::header(6, [Inline::from(TextRun::new("six"))])),
        ];
        assert_eq!(compose(&blocks), "<article><h1>one</h1><h6>six</h6></article>");
    }

    #[test]
    fn test_nested_blocks_in_blockquote() {
        let blocks = vec![Some(Block::blockquote([
            Child::from(Block::paragraph([Child::from(TextRun::new("abc"))])),
            Child::from(Block::paragraph([Child::from(TextRun::new("def").with_bold())])),
        ]))];
        assert_eq!(
            compose(&blocks),
            "<article><blockquote><p>abc</p><p><b>def</b></p></blockquote></article>"
        );
    }

    #[test]
    fn test_figure_uses_props_and_default_caption() {
        let embed = EmbedBlock::new(ImageEmbed::default())
            .with_figure_props(FigureProps::new(Some("fb:likes"), Some("wide")))
            .with_caption([TextRun::new("by "), TextRun::new("me").with_italic()]);
        let figure = ArticleComposer::new(&Placeholder).render_figure(&embed);
        insta::assert_snapshot!(figure, @r#"<figure data-feedback="fb:likes" class="wide"><embed type="image"></embed><figcaption>by <i>me</i></figcaption></figure>"#);
    }

    #[test]
    fn test_caption_keeps_line_breaks() {
        let embed = EmbedBlock::new(ImageEmbed::default()).with_caption([
            Inline::from(TextRun::new("a")),
            Inline::Linebreak,
            Inline::from(TextRun::new("b")),
        ]);
        assert_eq!(
            ArticleComposer::new(&Placeholder).render_figure(&embed).to_string(),
            r#"<figure><embed type="image"></embed><figcaption>a<br></br>b</figcaption></figure>"#
        );
    }

    #[test]
    fn test_figure_without_props_is_bare() {
        let embed = EmbedBlock::new(ImageEmbed::default());
        assert_eq!(
            ArticleComposer::new(&Placeholder).render_figure(&embed).to_string(),
            r#"<figure><embed type="image"></embed></figure>"#
        );
    }

    #[test]
    fn test_empty_article() {
        assert_eq!(compose(&[]), "<article></article>");
    }
}
