use crate::dashboards::d001_ticket_widgets::api;
use crate::dashboards::d001_ticket_widgets::table_state::{TableUpdate, TicketTableLoader};
use crate::shared::components::summary_card::SummaryCard;
use contracts::dashboards::d001_ticket_widgets::{DashboardWidgetsData, TICKET_TABLE_ID};
use leptos::prelude::*;

/// Ticket table region swapped by the summary cards
#[derive(Clone, Copy)]
pub struct TicketTableRegion {
    pub html: RwSignal<String>,
    pub loading: RwSignal<bool>,
}

impl TicketTableRegion {
    pub fn new(initial_html: String) -> Self {
        Self {
            html: RwSignal::new(initial_html),
            loading: RwSignal::new(false),
        }
    }
}

/// Summary cards plus the ticket table they filter.
///
/// `initial_table_html` is the table the server rendered before the island
/// was mounted.
#[component]
pub fn DashboardWidgets(props: DashboardWidgetsData, initial_table_html: String) -> impl IntoView {
    let table = TicketTableRegion::new(initial_table_html);
    let (active_card, set_active_card) = signal(None::<String>);
    let loader = TicketTableLoader::new();

    let load_table = Callback::new(move |href: String| {
        set_active_card.set(Some(href.clone()));
        let ticket = loader.begin();
        table.loading.set(true);

        let loader = loader.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let result = api::fetch_ticket_table(&href).await;
            let Some(update) = loader.complete(ticket, &href, result) else {
                return;
            };
            table.loading.set(false);
            if let TableUpdate::Replace(html) = update {
                table.html.set(html);
            }
        });
    });

    view! {
        <div class="row g-3 dashboard-widgets">
            {props.cards.into_iter().map(|card| {
                let href = card.href.clone();
                let active = Signal::derive(move || active_card.get().as_deref() == Some(href.as_str()));
                view! {
                    <div class="col-sm-6 col-lg-3">
                        <SummaryCard card=card active=active on_select=load_table />
                    </div>
                }
            }).collect_view()}
        </div>
        <div
            id=TICKET_TABLE_ID
            class="ticket-table"
            class:loading=move || table.loading.get()
            inner_html=move || table.html.get()
        ></div>
    }
}
