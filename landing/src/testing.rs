//! Helpers for asserting on rendered markup, shared by unit and
//! integration tests.

/// Text content of an HTML string with every tag and marker comment removed.
pub fn visible_text(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}

/// Trimmed visible text of every element carrying exactly `class`, in
/// document order.
pub fn items_in(html: &str, class: &str) -> Vec<String> {
    let marker = format!("class=\"{class}\"");
    let mut items = Vec::new();
    let mut rest = html;
    while let Some(pos) = rest.find(&marker) {
        let Some(open) = rest[..pos].rfind('<') else {
            break;
        };
        let tag: String = rest[open + 1..]
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric())
            .collect();
        let close = format!("</{tag}>");
        let Some(tag_end) = rest[pos..].find('>') else {
            break;
        };
        let body_start = pos + tag_end + 1;
        let Some(body_len) = rest[body_start..].find(&close) else {
            break;
        };
        let body_end = body_start + body_len;
        items.push(visible_text(&rest[body_start..body_end]).trim().to_string());
        rest = &rest[body_end..];
    }
    items
}
