use fbia_common::Node;
use fbia_common::markup::render_string;

use crate::RenderOptions;

/// Serialize a composed tree, then repair line breaks if enabled.
pub fn serialize(tree: &Node, options: &RenderOptions) -> String {
    let html = render_string(tree);
    if options.repair_line_breaks {
        repair_line_breaks(&html)
    } else {
        html
    }
}

/// The serializer closes void elements explicitly; `<br>` is the one that
/// matters downstream.
pub fn repair_line_breaks(html: &str) -> String {
    html.replace("<br></br>", "<br/>")
}
