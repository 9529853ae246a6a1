use web_sys::{DomParser, SupportedType};

/// Parse a full HTML page and return the inner HTML of the element with `id`.
pub fn extract_fragment(html: &str, id: &str) -> Result<String, String> {
    let parser = DomParser::new().map_err(|e| format!("DOMParser unavailable: {:?}", e))?;
    let doc = parser
        .parse_from_string(html, SupportedType::TextHtml)
        .map_err(|e| format!("Failed to parse page: {:?}", e))?;

    doc.get_element_by_id(id)
        .map(|el| el.inner_html())
        .ok_or_else(|| format!("Fragment #{} not found in page", id))
}
