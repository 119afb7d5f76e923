//! HTML page rendering
//!
//! Templates live under `web/` and are embedded at compile time. Placeholders
//! look like `{{name}}` and are filled in a single pass, so substituted text is
//! never scanned again.

use crate::store::Warehouse;

const LAYOUT: &str = include_str!("../../web/layout.html");
const INDEX: &str = include_str!("../../web/index.html");
const CREATE: &str = include_str!("../../web/create_warehouse.html");
const VIEW: &str = include_str!("../../web/view_warehouse.html");
const EDIT: &str = include_str!("../../web/edit_warehouse.html");

/// Escape text for use inside HTML content and attribute values
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Fill `{{key}}` placeholders. Unknown keys are left untouched.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];

        let Some(end) = after.find("}}") else {
            out.push_str(&rest[start..]);
            return out;
        };

        let key = after[..end].trim();
        match vars.iter().find(|(k, _)| *k == key) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[start..start + end + 4]),
        }
        rest = &after[end + 2..];
    }

    out.push_str(rest);
    out
}

fn page(title: &str, content: &str) -> String {
    let title = escape_html(title);
    render(LAYOUT, &[("title", title.as_str()), ("content", content)])
}

// ============================================================================
// PAGES
// ============================================================================

/// GET / - all warehouses, or a placeholder when there are none
pub fn index_page<'a>(warehouses: impl IntoIterator<Item = &'a Warehouse>) -> String {
    let rows: Vec<String> = warehouses
        .into_iter()
        .map(|w| {
            format!(
                "<tr><td><a href=\"/warehouse/{id}\">{name}</a></td><td>{level}</td><td>{capacity}</td><td>{remaining}</td></tr>",
                id = w.id,
                name = escape_html(&w.name),
                level = w.varasto.level(),
                capacity = w.varasto.capacity(),
                remaining = w.varasto.remaining_capacity(),
            )
        })
        .collect();

    let listing = if rows.is_empty() {
        "<p class=\"empty\">No warehouses yet. Create one to get started.</p>".to_string()
    } else {
        format!(
            "<table>\n<thead><tr><th>Name</th><th>Stock</th><th>Capacity</th><th>Free space</th></tr></thead>\n<tbody>\n{}\n</tbody>\n</table>",
            rows.join("\n")
        )
    };

    page("Warehouses", &render(INDEX, &[("warehouses", listing.as_str())]))
}

/// GET /warehouse/create
pub fn create_page() -> String {
    page("Create New Warehouse", CREATE)
}

/// GET /warehouse/:id
pub fn warehouse_page(warehouse: &Warehouse) -> String {
    let varasto = &warehouse.varasto;
    let id = warehouse.id.to_string();
    let name = escape_html(&warehouse.name);
    let capacity = varasto.capacity().to_string();
    let level = varasto.level().to_string();
    let remaining = varasto.remaining_capacity().to_string();
    let fill_percent = format!("{:.0}", varasto.fill_ratio() * 100.0);
    let summary = escape_html(&varasto.describe());

    let content = render(
        VIEW,
        &[
            ("id", id.as_str()),
            ("name", name.as_str()),
            ("capacity", capacity.as_str()),
            ("level", level.as_str()),
            ("remaining", remaining.as_str()),
            ("fill_percent", fill_percent.as_str()),
            ("summary", summary.as_str()),
        ],
    );

    page(&warehouse.name, &content)
}

/// GET /warehouse/:id/edit
pub fn edit_page(warehouse: &Warehouse) -> String {
    let id = warehouse.id.to_string();
    let name = escape_html(&warehouse.name);
    let capacity = warehouse.varasto.capacity().to_string();
    let level = warehouse.varasto.level().to_string();

    let content = render(
        EDIT,
        &[
            ("id", id.as_str()),
            ("name", name.as_str()),
            ("capacity", capacity.as_str()),
            ("level", level.as_str()),
        ],
    );

    page("Edit Warehouse", &content)
}
