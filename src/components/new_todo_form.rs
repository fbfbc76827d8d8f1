//! New Todo Form Component
//!
//! Form for staging and submitting a new todo.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::store::{store_append_todo, use_app_store, AppStateStoreFields};

/// Form for creating new todos
///
/// The submit button is disabled only while the staged input is empty, not
/// while a request is outstanding. The staged value is cleared on a
/// confirmed add and retained on failure.
#[component]
pub fn NewTodoForm() -> impl IntoView {
    let store = use_app_store();

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let value = store.staged_value().get();
        if value.is_empty() { return; }

        spawn_local(async move {
            match api::add_todo(&value).await {
                Ok(new_todo) => {
                    store.staged_value().set(String::new());
                    store_append_todo(&store, new_todo);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("failed to add todo: {}", e).into())
                }
            }
        });
    };

    view! {
        <form class="new-todo" on:submit=submit>
            <label>"Add todo"</label>
            <input
                type="text"
                placeholder="Enter your new todo"
                prop:value=move || store.staged_value().get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    store.staged_value().set(input.value());
                }
            />
            <button type="submit" prop:disabled=move || store.staged_value().get().is_empty()>
                "Submit"
            </button>
        </form>
    }
}
