use super::state::{NavState, NAV_ID, TOGGLE_ID};
use crate::shared::dom;
use contracts::shared::navigation::NavbarData;
use leptos::prelude::*;

/// Collapsible side navigation.
///
/// The panel and toggle icon belong to the island; body and header padding
/// are applied to the server-rendered elements by id when they exist.
#[component]
pub fn Navbar(props: NavbarData) -> impl IntoView {
    let state = RwSignal::new(NavState::new(props.expanded, props.active.clone()));

    Effect::new(move |_| {
        let classes = state.with(|s| s.page_classes());
        for (id, class, on) in classes {
            if let Some(el) = dom::element_by_id(id) {
                dom::set_class(&el, class, on);
            }
        }
    });

    let expanded = move || state.with(|s| s.expanded);

    view! {
        <i
            id=TOGGLE_ID
            class="bi bi-list header_toggle"
            class:bi-x=expanded
            on:click=move |_| state.update(|s| s.toggle())
        ></i>
        <div id=NAV_ID class="l-navbar" class:show=expanded>
            <nav class="nav">
                <div>
                    <span class="nav_logo">
                        <i class="bi bi-life-preserver nav_logo-icon"></i>
                        <span class="nav_logo-name">{props.brand}</span>
                    </span>
                    <div class="nav_list">
                        {props.links.into_iter().map(|link| {
                            let key = link.key.clone();
                            let is_active = move || state.with(|s| s.is_active(&key));
                            let key = link.key.clone();
                            let icon_class = format!("bi {} nav_icon", link.icon.as_deref().unwrap_or("bi-circle"));
                            view! {
                                <a
                                    href=link.href
                                    class="nav_link"
                                    class:active=is_active
                                    on:click=move |_| state.update(|s| s.activate(&key))
                                >
                                    <i class=icon_class></i>
                                    <span class="nav_name">{link.title}</span>
                                </a>
                            }
                        }).collect_view()}
                    </div>
                </div>
            </nav>
        </div>
    }
}
