use crate::shared::api_utils::url_with_query;
use contracts::domain::a001_category::SubcategoriesResponse;
use contracts::shared::ids::ObjectId;
use gloo_net::http::Request;

/// `<endpoint>?category_id=<id>`
pub fn subcategories_url(endpoint: &str, category_id: &ObjectId) -> String {
    url_with_query(endpoint, &[("category_id", category_id.as_str())])
}

/// Fetch the subcategories of one category
pub async fn fetch_subcategories(
    endpoint: &str,
    category_id: &ObjectId,
) -> Result<SubcategoriesResponse, String> {
    let url = subcategories_url(endpoint, category_id);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json::<SubcategoriesResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
