use std::fmt::Write;

use crate::models::dataset::Column;
use crate::models::table::TablePage;
use crate::services::query::PAGE_SIZE;
use crate::views::{escape_html, page_shell};

/// The main table page: per-column filter inputs, sort controls, the page
/// of rows, and pagination links. Submitting the form re-queries from page
/// 1; the page links themselves are plain GETs.
pub fn render(table: &TablePage<'_>) -> String {
    let mut body = String::new();
    body.push_str("<h1>Market Price History</h1>\n");
    body.push_str("<nav><a href=\"/item-search\">Item search</a></nav>\n");

    body.push_str("<form class=\"filters\" method=\"post\" action=\"/?page=1\">\n");
    for column in &table.columns {
        let name = escape_html(column);
        let _ = write!(
            body,
            "<label>{name} <input type=\"text\" name=\"{name}\"></label>\n",
        );
    }
    body.push_str("<label>Sort by <select name=\"sort_column\">\n<option value=\"\"></option>\n");
    for column in Column::ALL {
        let name = escape_html(column.name());
        let _ = write!(body, "<option value=\"{name}\">{name}</option>\n");
    }
    body.push_str(
        "</select></label>\n\
         <label>Order <select name=\"sort_order\">\n\
         <option value=\"asc\">asc</option>\n\
         <option value=\"desc\">desc</option>\n\
         </select></label>\n\
         <button type=\"submit\">Apply</button>\n\
         </form>\n",
    );

    body.push_str("<table class=\"data\">\n<thead><tr>");
    for column in &table.columns {
        let _ = write!(body, "<th>{}</th>", escape_html(column));
    }
    body.push_str("</tr></thead>\n<tbody>\n");
    for row in &table.rows {
        body.push_str("<tr>");
        for column in Column::ALL {
            let _ = write!(body, "<td>{}</td>", escape_html(&row.value(column).to_string()));
        }
        body.push_str("</tr>\n");
    }
    body.push_str("</tbody>\n</table>\n");

    let _ = write!(
        body,
        "<p>Page {} &middot; {} rows</p>\n<nav>",
        table.page, table.total_rows
    );
    if table.page > 1 {
        let _ = write!(body, "<a href=\"/?page={}\">Previous</a>", table.page - 1);
    }
    if table.page * PAGE_SIZE < table.total_rows {
        let _ = write!(body, "<a href=\"/?page={}\">Next</a>", table.page + 1);
    }
    body.push_str("</nav>\n");

    page_shell("Market Price History", &body)
}
