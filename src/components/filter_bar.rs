//! Status Selectors
//!
//! The list filter and the per-row status select.

use leptos::prelude::*;

use crate::models::{Status, StatusFilter};
use crate::store::{store_filter, store_set_filter, use_app_store};

/// Filter select above the list
#[component]
pub fn FilterBar() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="filter">
            <label>"Filter"</label>
            <select
                prop:value=move || store_filter(&store).as_str()
                on:change=move |ev| {
                    store_set_filter(&store, StatusFilter::parse(&event_target_value(&ev)));
                }
            >
                {StatusFilter::options().into_iter().map(|filter| view! {
                    <option value=filter.as_str()>{filter.label()}</option>
                }).collect_view()}
            </select>
        </div>
    }
}

/// Status select for a single item
///
/// `current` follows the view state, and `node_ref` lets the caller put the
/// DOM value back when a change is rejected.
#[component]
pub fn StatusSelect(
    #[prop(into)] current: Signal<Status>,
    node_ref: NodeRef<leptos::html::Select>,
    on_change: impl Fn(Status) + Copy + 'static,
) -> impl IntoView {
    view! {
        <select
            class="status-select"
            node_ref=node_ref
            prop:value=move || current.get().as_str()
            on:change=move |ev| {
                if let Some(status) = Status::parse(&event_target_value(&ev)) {
                    on_change(status);
                }
            }
        >
            {Status::ALL.into_iter().map(|status| view! {
                <option value=status.as_str() selected=move || current.get() == status>{status.label()}</option>
            }).collect_view()}
        </select>
    }
}
