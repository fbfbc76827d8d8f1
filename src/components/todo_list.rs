//! Todo Section Component
//!
//! One derived subset of the list (active or completed) with empty-state
//! messaging and per-row complete/delete actions.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::models::Todo;
use crate::store::{store_mark_complete, store_remove_todo, use_app_store};

/// Section of the todo list
///
/// Local state is only touched after the server confirms; a failed call is
/// logged and leaves the list as it was.
#[component]
pub fn TodoSection(
    title: &'static str,
    todos: Memo<Vec<Todo>>,
    empty_message: &'static str,
    #[prop(optional)] show_complete: bool,
) -> impl IntoView {
    let store = use_app_store();

    let complete = move |id: u32| {
        spawn_local(async move {
            match api::complete_todo(id).await {
                Ok(()) => store_mark_complete(&store, id),
                Err(e) => web_sys::console::error_1(
                    &format!("failed to complete todo {}: {}", id, e).into(),
                ),
            }
        });
    };

    let remove = move |id: u32| {
        spawn_local(async move {
            match api::delete_todo(id).await {
                Ok(()) => store_remove_todo(&store, id),
                Err(e) => web_sys::console::error_1(
                    &format!("failed to delete todo {}: {}", id, e).into(),
                ),
            }
        });
    };

    view! {
        <div class="todos-list-container">
            <p>{title}</p>
            <ul>
                <Show when=move || todos.get().is_empty()>
                    <li>
                        <p class="none-message">{empty_message}</p>
                    </li>
                </Show>
                <For
                    each=move || todos.get()
                    key=|todo| todo.id
                    children=move |todo| {
                        let id = todo.id;
                        view! {
                            <li>
                                <p>{todo.value.clone()}</p>
                                <div class="buttons">
                                    <Show when=move || show_complete>
                                        <button
                                            type="button"
                                            class="complete"
                                            on:click=move |_| complete(id)
                                        >
                                            "Complete"
                                        </button>
                                    </Show>
                                    <button
                                        type="button"
                                        class="delete"
                                        on:click=move |_| remove(id)
                                    >
                                        "×"
                                    </button>
                                </div>
                            </li>
                        }
                    }
                />
            </ul>
        </div>
    }
}
