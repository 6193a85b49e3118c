use std::fmt::Write;

use crate::models::chart::ChartSeries;
use crate::views::{escape_html, page_shell};

/// The graph page: the rendered SVG plus a link that toggles the
/// secondary volume axis on or off.
pub fn render(series: &ChartSeries, svg: &str, show_volume: bool) -> String {
    let mut body = String::new();
    let _ = write!(body, "<h1>{}</h1>\n", escape_html(&series.title()));

    let encoded = urlencoding::encode(&series.item_name);
    body.push_str("<nav><a href=\"/item-search\">Pick another item</a>");
    if show_volume {
        let _ = write!(
            body,
            "<a href=\"/display-graph?item_name={}\">Hide volume</a>",
            encoded
        );
    } else {
        let _ = write!(
            body,
            "<a href=\"/display-graph?item_name={}&amp;volume=1\">Show volume</a>",
            encoded
        );
    }
    body.push_str("</nav>\n");

    // The SVG comes from our own renderer, not from user input.
    body.push_str(svg);
    body.push('\n');

    page_shell(&series.title(), &body)
}
