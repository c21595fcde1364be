//! Todo List Component
//!
//! Renders the filtered items.

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::store::{store_visible_items, use_app_store};

#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_app_store();

    view! {
        <ul class="todo-list">
            <For
                each=move || store_visible_items(&store)
                key=|item| {
                    // detail_text is left out so typing in the detail input keeps the row
                    (item.id.clone(), item.status, item.title.clone(), item.display_expanded)
                }
                children=move |item| view! { <TodoRow item=item /> }
            />
        </ul>
    }
}
