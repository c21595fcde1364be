//! Remote Config Modal
//!
//! Edits the Firestore project, API key and collection name.

use leptos::prelude::*;

use crate::commands;
use crate::context::AppContext;
use crate::models::RemoteConfig;
use crate::store::{store_config, store_set_config, use_app_store};

#[component]
pub fn ConfigModal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let initial = store_config(&store);
    let (project_id, set_project_id) =
        signal(initial.as_ref().map(|c| c.project_id.clone()).unwrap_or_default());
    let (api_key, set_api_key) = signal(initial.as_ref().map(|c| c.api_key.clone()).unwrap_or_default());
    let (collection, set_collection) = signal(
        initial
            .as_ref()
            .map(|c| c.collection.clone())
            .unwrap_or_else(|| todo_core::config::DEFAULT_COLLECTION.to_string()),
    );
    let (error, set_error) = signal::<Option<String>>(None);

    let save = move |_| {
        let mut config = store_config(&store)
            .unwrap_or_else(|| RemoteConfig::new(String::new(), String::new()));
        config.project_id = project_id.get_untracked().trim().to_string();
        config.api_key = api_key.get_untracked().trim().to_string();
        config.collection = collection.get_untracked().trim().to_string();

        match commands::save_remote_config(&config) {
            Ok(()) => {
                log::info!("Remote config saved for project {}", config.project_id);
                store_set_config(&store, config);
                set_error.set(None);
                ctx.close_config();
                ctx.reload();
            }
            Err(e) => set_error.set(Some(e.to_string())),
        }
    };

    view! {
        <Show when=move || ctx.config_open.get()>
            <div class="modal-backdrop">
                <div class="modal">
                    <h2>"Remote collection"</h2>
                    <label>"Project ID"</label>
                    <input
                        type="text"
                        prop:value=move || project_id.get()
                        on:input=move |ev| set_project_id.set(event_target_value(&ev))
                    />
                    <label>"API key"</label>
                    <input
                        type="password"
                        prop:value=move || api_key.get()
                        on:input=move |ev| set_api_key.set(event_target_value(&ev))
                    />
                    <label>"Collection"</label>
                    <input
                        type="text"
                        prop:value=move || collection.get()
                        on:input=move |ev| set_collection.set(event_target_value(&ev))
                    />
                    {move || error.get().map(|msg| view! { <p class="modal-error">{msg}</p> })}
                    <div class="modal-actions">
                        <button on:click=save>"Save"</button>
                        <Show when=move || store_config(&store).is_some()>
                            <button class="cancel-btn" on:click=move |_| ctx.close_config()>"Cancel"</button>
                        </Show>
                    </div>
                </div>
            </div>
        </Show>
    }
}
