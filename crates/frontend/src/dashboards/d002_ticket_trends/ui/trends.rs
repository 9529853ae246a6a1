use crate::dashboards::d002_ticket_trends::filter::TrendFilter;
use crate::shared::components::ui::{PriorityBadge, StatusBadge};
use contracts::dashboards::d002_ticket_trends::TicketTrendsData;
use leptos::prelude::*;

/// Trend labels per category and the ticket list they filter
#[component]
pub fn TicketTrends(props: TicketTrendsData) -> impl IntoView {
    let filter = RwSignal::new(TrendFilter::default());

    let trends = if props.trends.is_empty() {
        TicketTrendsData::buckets_from_tickets(&props.tickets)
    } else {
        props.trends
    };

    view! {
        <div class="ticket-trends">
            <ul class="list-inline ticket-trends__labels">
                {trends.into_iter().map(|bucket| {
                    let category = bucket.category.clone();
                    let data_category = bucket.category.clone();
                    let is_selected = {
                        let category = category.clone();
                        move || filter.with(|f| f.selected() == Some(category.as_str()))
                    };
                    view! {
                        <li
                            class="list-inline-item ticket-trend"
                            class:active=is_selected
                            data-category=data_category
                            on:click=move |_| filter.set(TrendFilter::category(category.clone()))
                        >
                            {bucket.category}
                            " "
                            <span class="badge text-bg-light">{bucket.count.to_string()}</span>
                        </li>
                    }
                }).collect_view()}
            </ul>
            <ul class="list-group ticket-trends__items">
                {props.tickets.into_iter().map(|ticket| {
                    let category = ticket.category.clone();
                    let data_category = ticket.category.clone();
                    let hidden = move || filter.with(|f| !f.shows(&category));
                    let submitted = ticket
                        .submitted_at
                        .map(|at| at.format("%d.%m.%Y %H:%M").to_string())
                        .unwrap_or_default();
                    view! {
                        <li
                            class="list-group-item ticket-item"
                            class:d-none=hidden
                            data-category=data_category
                        >
                            {match ticket.href {
                                Some(href) => view! { <a href=href>{ticket.title}</a> }.into_any(),
                                None => view! { <span>{ticket.title}</span> }.into_any(),
                            }}
                            " "
                            <StatusBadge status=ticket.status />
                            " "
                            <PriorityBadge priority=ticket.priority />
                            <small class="text-muted ms-2">{submitted}</small>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </div>
    }
}
