use contracts::dashboards::d001_ticket_widgets::SummaryCard as SummaryCardData;
use leptos::prelude::*;

/// Group digits by thousands: 12345 -> "12 345"
fn format_count(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('\u{00a0}');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Dashboard summary card. Clicking anywhere on it (including its link)
/// hands the link target to `on_select` instead of navigating.
#[component]
pub fn SummaryCard(
    card: SummaryCardData,
    /// Highlight as the card whose table is shown
    #[prop(into)]
    active: Signal<bool>,
    /// Receives the card's href
    on_select: Callback<String>,
) -> impl IntoView {
    let href = card.href.clone();
    let icon_class = format!("bi {}", card.icon.as_deref().unwrap_or("bi-ticket"));

    view! {
        <div
            class="card summary-card"
            class:border-primary=move || active.get()
            on:click=move |ev| {
                ev.prevent_default();
                on_select.run(href.clone());
            }
        >
            <div class="card-body">
                <i class=icon_class></i>
                <h5 class="card-title">{card.title}</h5>
                <p class="card-text summary-card__count">{format_count(card.count)}</p>
                <a href=card.href class="stretched-link">"View"</a>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1234), "1\u{00a0}234");
        assert_eq!(format_count(1234567), "1\u{00a0}234\u{00a0}567");
    }
}
