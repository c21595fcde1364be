//! Todo Board App
//!
//! Main application component: filter, list, entry form and config modal.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands;
use crate::components::{ConfigModal, FilterBar, TodoForm, TodoList};
use crate::context::AppContext;
use crate::store::{store_all_items, store_config, store_replace_items, AppState};

#[component]
pub fn App() -> impl IntoView {
    // State
    let config = commands::load_remote_config();
    let needs_config = config.is_none();
    let store = Store::new(AppState::new(config));
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (config_open, set_config_open) = signal(needs_config);

    // Provide context to all children
    provide_context(store);
    let ctx = AppContext::new((reload_trigger, set_reload_trigger), (config_open, set_config_open));
    provide_context(ctx);

    // Refetch on mount and whenever a reload is triggered
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        let Some(config) = untrack(|| store_config(&store)) else {
            log::info!("No remote config yet, skipping load");
            return;
        };
        log::debug!("[APP] Loading items, trigger={}", trigger);
        spawn_local(async move {
            match commands::list_todos(&config).await {
                Ok(items) => store_replace_items(&store, items),
                Err(e) => log::error!("Failed to load items: {}", e),
            }
        });
    });

    view! {
        <main class="main-content">
            <header class="app-header">
                <h1>"Todo Board"</h1>
                <button class="config-btn" title="Remote collection" on:click=move |_| ctx.open_config()>
                    "⚙"
                </button>
            </header>

            <FilterBar />

            <TodoList />

            <TodoForm />

            <p class="item-count">{move || format!("{} items", store_all_items(&store).len())}</p>

            <ConfigModal />
        </main>
    }
}
