use std::fmt::Write;

use crate::views::{escape_html, page_shell};

/// The item-selection form. Submitting redirects to the graph view.
pub fn render(items: &[String]) -> String {
    let mut body = String::new();
    body.push_str("<h1>Item Search</h1>\n");
    body.push_str("<nav><a href=\"/\">Back to table</a></nav>\n");
    body.push_str("<form method=\"post\" action=\"/item-search\">\n");
    body.push_str("<label>Item <select name=\"item_name\">\n");
    for item in items {
        let name = escape_html(item);
        let _ = write!(body, "<option value=\"{name}\">{name}</option>\n");
    }
    body.push_str(
        "</select></label>\n\
         <button type=\"submit\">View graph</button>\n\
         </form>\n",
    );
    page_shell("Item Search", &body)
}
