//! Todo Frontend App
//!
//! Main application component: owns the store, loads the collection once on
//! mount, and renders the form plus the derived active/completed sections.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{NewTodoForm, TodoSection};
use crate::store::{
    active_todos, completed_todos, store_replace_todos, AppState, AppStateStoreFields,
};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());

    // Provide context to all children
    provide_context(store);

    // Load the full collection once on mount. No retry, no polling; on
    // failure the list stays empty.
    Effect::new(move |_| {
        spawn_local(async move {
            match api::fetch_all_todos().await {
                Ok(todos) => store_replace_todos(&store, todos),
                Err(e) => {
                    web_sys::console::error_1(&format!("failed to fetch todos: {}", e).into())
                }
            }
        });
    });

    // Derived views, recomputed from the list on every change
    let active = Memo::new(move |_| active_todos(&store.todos().get()));
    let completed = Memo::new(move |_| completed_todos(&store.todos().get()));

    view! {
        <div id="app">
            <header>
                <div class="container">
                    <h1>"Todo"</h1>
                    <h2>"Have something to do? List it here and never get it done!"</h2>
                </div>
            </header>
            <main>
                <NewTodoForm />
                <TodoSection
                    title="To-do"
                    todos=active
                    empty_message="No active todos"
                    show_complete=true
                />
                <TodoSection
                    title="Completed"
                    todos=completed
                    empty_message="No completed todos"
                />
            </main>
        </div>
    }
}
