//! Mounting of the independent UI islands.
//!
//! Every behavior owns one host element in the server-rendered page. The
//! host carries its initial data as JSON in `data-props`; a missing host
//! simply means the current page does not use that island.

use crate::dashboards::{DashboardWidgets, TicketTrends};
use crate::domain::a002_support_ticket::ui::create::TicketForm;
use crate::layout::Navbar;
use crate::shared::config::UiConfig;
use crate::shared::{dom, form_validator};
use contracts::dashboards::d001_ticket_widgets::{DashboardWidgetsData, TICKET_TABLE_ID};
use contracts::dashboards::d002_ticket_trends::TicketTrendsData;
use contracts::domain::a002_support_ticket::TicketFormData;
use contracts::shared::navigation::NavbarData;
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

pub const TICKET_FORM_HOST: &str = "ticket-form-root";
pub const DASHBOARD_WIDGETS_HOST: &str = "dashboard-widgets-root";
pub const NAVBAR_HOST: &str = "navbar-root";
pub const TICKET_TRENDS_HOST: &str = "ticket-trends-root";
pub const PROPS_ATTRIBUTE: &str = "data-props";

/// Decode a host's `data-props`; an absent attribute yields the defaults.
pub fn parse_props<T>(raw: Option<&str>) -> Result<T, String>
where
    T: DeserializeOwned + Default,
{
    match raw.map(str::trim) {
        None | Some("") => Ok(T::default()),
        Some(json) => {
            serde_json::from_str(json).map_err(|e| format!("Invalid {}: {}", PROPS_ATTRIBUTE, e))
        }
    }
}

fn host<T>(id: &str) -> Option<(HtmlElement, T)>
where
    T: DeserializeOwned + Default,
{
    let element = dom::element_by_id(id)?.dyn_into::<HtmlElement>().ok()?;
    match parse_props(element.get_attribute(PROPS_ATTRIBUTE).as_deref()) {
        Ok(props) => Some((element, props)),
        Err(e) => {
            log::error!("Skipping island #{}: {}", id, e);
            None
        }
    }
}

/// Table markup the widgets island starts from. The table region has to
/// live inside the widgets host, otherwise the island owns a second,
/// empty region and the page's own table is never swapped.
pub fn initial_table_html(found_in_host: Option<String>) -> String {
    found_in_host.unwrap_or_else(|| {
        log::warn!(
            "#{} contains no #{}; the server-rendered ticket table will not be updated",
            DASHBOARD_WIDGETS_HOST,
            TICKET_TABLE_ID
        );
        String::new()
    })
}

fn mount<F, N>(id: &str, element: HtmlElement, view: F)
where
    F: FnOnce() -> N + 'static,
    N: IntoView,
{
    element.set_inner_html("");
    leptos::mount::mount_to(element, view).forget();
    log::info!("Mounted island #{}", id);
}

/// Bind plain forms, then mount every island present on the page.
pub fn mount_islands(config: UiConfig) {
    let forms = form_validator::attach_to_document();
    log::debug!("Validity gating attached to {} form(s)", forms);

    if let Some((element, props)) = host::<NavbarData>(NAVBAR_HOST) {
        mount(NAVBAR_HOST, element, move || view! { <Navbar props=props /> });
    }

    if let Some((element, props)) = host::<TicketFormData>(TICKET_FORM_HOST) {
        let config = config.clone();
        mount(TICKET_FORM_HOST, element, move || {
            view! { <TicketForm config=config props=props /> }
        });
    }

    if let Some((element, props)) = host::<DashboardWidgetsData>(DASHBOARD_WIDGETS_HOST) {
        let initial_table_html = initial_table_html(
            element
                .query_selector(&format!("#{}", TICKET_TABLE_ID))
                .ok()
                .flatten()
                .map(|el| el.inner_html()),
        );
        mount(DASHBOARD_WIDGETS_HOST, element, move || {
            view! { <DashboardWidgets props=props initial_table_html=initial_table_html /> }
        });
    }

    if let Some((element, props)) = host::<TicketTrendsData>(TICKET_TRENDS_HOST) {
        mount(TICKET_TRENDS_HOST, element, move || {
            view! { <TicketTrends props=props /> }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_props_use_defaults() {
        let props: DashboardWidgetsData = parse_props(None).unwrap();
        assert!(props.cards.is_empty());
        let props: NavbarData = parse_props(Some("  ")).unwrap();
        assert!(props.links.is_empty());
    }

    #[test]
    fn test_props_are_decoded() {
        let props: TicketFormData = parse_props(Some(
            r#"{"categories":[{"id":3,"name":"Accounts"}],"selected_category":3}"#,
        ))
        .unwrap();
        assert_eq!(props.categories[0].name, "Accounts");
        assert_eq!(props.selected_category.unwrap().as_str(), "3");
    }

    #[test]
    fn test_trends_props_with_numeric_ticket_ids() {
        let props: TicketTrendsData = parse_props(Some(
            r#"{"tickets":[{"id":5,"title":"Printer","category":"Hardware","status":"open"}]}"#,
        ))
        .unwrap();
        assert_eq!(props.tickets.len(), 1);
        assert_eq!(props.tickets[0].id.as_str(), "5");
    }

    #[test]
    fn test_initial_table_html() {
        assert_eq!(
            initial_table_html(Some("<table><tr><td>1</td></tr></table>".into())),
            "<table><tr><td>1</td></tr></table>"
        );
        assert_eq!(initial_table_html(None), "");
    }

    #[test]
    fn test_malformed_props_are_rejected() {
        let err = parse_props::<TicketTrendsData>(Some("{not json")).unwrap_err();
        assert!(err.starts_with("Invalid data-props"));
    }
}
