use crate::shared::fragment::extract_fragment;
use contracts::dashboards::d001_ticket_widgets::TICKET_TABLE_ID;
use gloo_net::http::Request;

/// Fetch a full page as HTML text
pub async fn fetch_page(url: &str) -> Result<String, String> {
    let response = Request::get(url)
        .header("Accept", "text/html")
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))
}

/// Fetch `url` and return the inner HTML of its ticket table region
pub async fn fetch_ticket_table(url: &str) -> Result<String, String> {
    let page = fetch_page(url).await?;
    extract_fragment(&page, TICKET_TABLE_ID)
}
