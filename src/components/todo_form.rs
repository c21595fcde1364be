//! Todo Form Component
//!
//! Entry input below the list. Creates items, or edits a title when an edit
//! is in progress.

use leptos::prelude::*;
use leptos::task::spawn_local;

use todo_core::TodoResult;

use crate::commands;
use crate::context::AppContext;
use crate::models::Item;
use crate::store::{
    store_all_items, store_config, store_editing, store_replace_items, store_set_edit_title,
    store_set_editing, use_app_store,
};

const EMPTY_TITLE_MESSAGE: &str = "Please enter something first";

/// Result of a create attempt as the form handles it
#[derive(Debug, PartialEq)]
enum CreateOutcome {
    Reloaded(Vec<Item>),
    RejectedTitle,
    ReloadFailed(String),
}

impl CreateOutcome {
    fn from_result(result: TodoResult<Vec<Item>>) -> Self {
        match result {
            Ok(items) => CreateOutcome::Reloaded(items),
            Err(e) if e.is_validation() => CreateOutcome::RejectedTitle,
            Err(e) => CreateOutcome::ReloadFailed(e.to_string()),
        }
    }

    /// Every non-empty attempt clears the input, even if the reload failed
    fn clears_input(&self) -> bool {
        !matches!(self, CreateOutcome::RejectedTitle)
    }
}

/// Create / edit form
#[component]
pub fn TodoForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (new_title, set_new_title) = signal(String::new());

    let create_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(config) = store_config(&store) else {
            ctx.open_config();
            return;
        };
        let title = new_title.get_untracked();

        spawn_local(async move {
            let outcome = CreateOutcome::from_result(commands::create_todo(&config, &title).await);
            if outcome.clears_input() {
                set_new_title.set(String::new());
            }
            match outcome {
                CreateOutcome::Reloaded(items) => store_replace_items(&store, items),
                CreateOutcome::RejectedTitle => commands::alert(EMPTY_TITLE_MESSAGE),
                CreateOutcome::ReloadFailed(e) => log::error!("Reload after create failed: {}", e),
            }
        });
    };

    let save_edit = move |_| {
        let Some(target) = store_editing(&store) else { return };
        let Some(config) = store_config(&store) else {
            ctx.open_config();
            return;
        };

        spawn_local(async move {
            match commands::update_todo_title(&config, &target.id, &target.title).await {
                Ok(items) => {
                    store_set_editing(&store, None);
                    store_replace_items(&store, items);
                }
                Err(e) => log::error!("Title update for {} failed: {}", target.id, e),
            }
        });
    };

    let log_state = move |_| {
        match serde_json::to_string_pretty(&store_all_items(&store)) {
            Ok(json) => log::info!("Current items: {}", json),
            Err(e) => log::error!("Failed to serialize items: {}", e),
        }
    };

    let is_editing = move || store_editing(&store).is_some();

    view! {
        <Show
            when=is_editing
            fallback=move || view! {
                <form class="todo-form" on:submit=create_item>
                    <input
                        type="text"
                        placeholder="Add a task"
                        prop:value=move || new_title.get()
                        on:input=move |ev| set_new_title.set(event_target_value(&ev))
                    />
                    <button type="submit">"Add"</button>
                    <div>
                        <button type="button" class="log-btn" on:click=log_state>"Log state"</button>
                    </div>
                </form>
            }
        >
            <div class="todo-form editing">
                <input
                    type="text"
                    placeholder="Add a task"
                    prop:value=move || store_editing(&store).map(|t| t.title).unwrap_or_default()
                    on:input=move |ev| store_set_edit_title(&store, event_target_value(&ev))
                />
                <button type="button" on:click=save_edit>"Save edit"</button>
                <button type="button" class="cancel-btn" on:click=move |_| store_set_editing(&store, None)>
                    "Cancel"
                </button>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use todo_core::{RemoteError, TodoError};

    #[test]
    fn test_empty_title_keeps_input() {
        let outcome = CreateOutcome::from_result(Err(TodoError::EmptyTitle));
        assert_eq!(outcome, CreateOutcome::RejectedTitle);
        assert!(!outcome.clears_input());
    }

    #[test]
    fn test_failed_reload_still_clears_input() {
        let outcome = CreateOutcome::from_result(Err(TodoError::Remote(RemoteError::Injected("list"))));
        assert!(matches!(outcome, CreateOutcome::ReloadFailed(_)));
        assert!(outcome.clears_input());
    }

    #[test]
    fn test_reload_clears_input() {
        let outcome = CreateOutcome::from_result(Ok(vec![Item::new("a", "Buy milk")]));
        assert!(outcome.clears_input());
        assert_eq!(outcome, CreateOutcome::Reloaded(vec![Item::new("a", "Buy milk")]));
    }
}
