//! Todo Row Component
//!
//! One item: status select, title, and the edit / delete / details actions.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::StatusSelect;
use crate::context::AppContext;
use crate::models::{EditTarget, Item, LocalPatch, Status};
use crate::store::{
    store_config, store_item_status, store_patch_item, store_replace_items, store_set_editing,
    use_app_store,
};

/// A single item row in the list
#[component]
pub fn TodoRow(item: Item) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let id = StoredValue::new(item.id.clone());
    let edit_target = EditTarget::from_item(&item);
    let expanded = item.display_expanded;
    let detail_text = item.detail_text.clone();
    let fallback_status = item.status;

    let select_ref = NodeRef::<leptos::html::Select>::new();
    let stored_status = Signal::derive(move || {
        store_item_status(&store, &id.get_value()).unwrap_or(fallback_status)
    });

    let change_status = move |status: Status| {
        let Some(config) = store_config(&store) else {
            ctx.open_config();
            return;
        };
        let id = id.get_value();
        spawn_local(async move {
            match commands::update_todo_status(&config, &id, status).await {
                Ok(items) => store_replace_items(&store, items),
                Err(e) => {
                    log::error!("Status update for {} failed: {}", id, e);
                    // store is unchanged, so put the select back by hand
                    if let Some(select) = select_ref.get_untracked() {
                        select.set_value(stored_status.get_untracked().as_str());
                    }
                }
            }
        });
    };

    let delete = move |_| {
        let Some(config) = store_config(&store) else {
            ctx.open_config();
            return;
        };
        let id = id.get_value();
        spawn_local(async move {
            match commands::delete_todo(&config, &id).await {
                Ok(items) => store_replace_items(&store, items),
                Err(e) => log::error!("Delete of {} failed: {}", id, e),
            }
        });
    };

    view! {
        <li class=move || if expanded { "todo-row expanded" } else { "todo-row" }>
            <StatusSelect current=stored_status node_ref=select_ref on_change=change_status />

            <span class="todo-title">{item.title.clone()}</span>

            <button class="edit-btn" on:click=move |_| store_set_editing(&store, Some(edit_target.clone()))>
                "Edit"
            </button>

            <button class="delete-btn" on:click=delete>"Delete"</button>

            <button
                class="detail-btn"
                on:click=move |_| {
                    store_patch_item(&store, &id.get_value(), LocalPatch::ToggleExpanded);
                }
            >
                "Details"
            </button>

            {expanded.then(|| view! {
                <p class="todo-detail">
                    <input
                        type="text"
                        value=detail_text.clone()
                        on:input=move |ev| {
                            store_patch_item(&store, &id.get_value(), LocalPatch::SetDetailText(event_target_value(&ev)));
                        }
                    />
                </p>
            })}
        </li>
    }
}
