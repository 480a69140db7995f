use crate::auth::AuthContext;
use crate::storage;
use shared::{Conversation, Message, User};
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Two-pane messaging view: the signed-in user's conversations on the left,
/// the selected thread on the right. Messages are append-only.
#[function_component(Messages)]
pub fn messages() -> Html {
    let auth = use_context::<AuthContext>().expect("Auth context not found");
    let conversations = use_state(Vec::<Conversation>::new);
    let selected = use_state(|| Option::<String>::None);
    let draft = use_state(String::new);
    let error = use_state(|| Option::<String>::None);

    let user_id = auth
        .state
        .user
        .as_ref()
        .map(|u| u.id.clone())
        .unwrap_or_default();

    let reload = {
        let conversations = conversations.clone();
        let selected = selected.clone();
        let error = error.clone();
        let user_id = user_id.clone();
        Callback::from(move |_: ()| match storage::conversations_for(&user_id) {
            Ok(items) => {
                if selected.is_none() {
                    selected.set(items.first().map(|c| c.id.clone()));
                }
                conversations.set(items);
                error.set(None);
            }
            Err(e) => error.set(Some(e.to_string())),
        })
    };

    {
        let reload = reload.clone();
        use_effect_with(user_id.clone(), move |_| {
            reload.emit(());
        });
    }

    // Pick up messages written by another tab.
    {
        let reload = reload.clone();
        use_effect_with((), move |_| {
            let listener = storage::on_storage_change(move || reload.emit(()));
            move || drop(listener)
        });
    }

    let current = selected
        .as_ref()
        .and_then(|id| conversations.iter().find(|c| c.id == *id))
        .cloned();

    let on_send = {
        let draft = draft.clone();
        let error = error.clone();
        let reload = reload.clone();
        let user_id = user_id.clone();
        let conversation_id = current.as_ref().map(|c| c.id.clone());
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(conversation_id) = conversation_id.as_ref() else {
                return;
            };
            let body = draft.trim().to_string();
            if body.is_empty() {
                return;
            }
            let message = Message {
                id: uuid::Uuid::new_v4().to_string(),
                sender_id: user_id.clone(),
                body,
                sent_at: chrono::Utc::now(),
            };
            match storage::append_message(conversation_id, message) {
                Ok(_) => {
                    draft.set(String::new());
                    error.set(None);
                    reload.emit(());
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        })
    };

    // Participant ids are opaque; resolve a display name from the user
    // collection, falling back to the raw id for seed data.
    let display_name = |id: &str| -> String {
        storage::find_user(id)
            .ok()
            .flatten()
            .map(|u: User| u.club_name.unwrap_or(u.name))
            .unwrap_or_else(|| id.to_string())
    };

    html! {
        <div class="messages-page min-h-screen bg-gradient-to-br from-blue-50 via-white to-indigo-50 py-8">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8 max-w-5xl">
                <h1 class="text-2xl sm:text-3xl font-bold text-gray-900 mb-8">{"Messages"}</h1>

                if let Some(error) = (*error).as_ref() {
                    <div class="mb-6 bg-red-50 border border-red-200 rounded-xl p-4">
                        <p class="text-sm text-red-600">{error}</p>
                    </div>
                }

                if conversations.is_empty() {
                    <div class="bg-white rounded-2xl shadow p-12 text-center">
                        <p class="text-gray-600">
                            {"No conversations yet. Open a tournament and message the organizing club to start one."}
                        </p>
                    </div>
                } else {
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                        // Conversation list
                        <div class="bg-white rounded-2xl shadow overflow-hidden md:col-span-1">
                            {for conversations.iter().map(|conversation| {
                                let id = conversation.id.clone();
                                let active = selected.as_deref() == Some(id.as_str());
                                let counterpart = conversation
                                    .counterpart(&user_id)
                                    .map(&display_name)
                                    .unwrap_or_default();
                                let preview = conversation
                                    .last_message()
                                    .map(|m| m.body.clone())
                                    .unwrap_or_else(|| "No messages yet".to_string());
                                let on_select = {
                                    let selected = selected.clone();
                                    Callback::from(move |_| selected.set(Some(id.clone())))
                                };
                                html! {
                                    <button
                                        onclick={on_select}
                                        class={classes!(
                                            "w-full", "text-left", "px-5", "py-4", "border-b",
                                            "border-gray-100", "hover:bg-blue-50", "transition-colors",
                                            active.then_some("bg-blue-50")
                                        )}
                                    >
                                        <p class="text-sm font-semibold text-gray-900">{counterpart}</p>
                                        <p class="text-sm text-gray-500 truncate">{preview}</p>
                                    </button>
                                }
                            })}
                        </div>

                        // Thread
                        <div class="bg-white rounded-2xl shadow md:col-span-2 flex flex-col">
                            if let Some(conversation) = current.as_ref() {
                                <div class="px-6 py-4 border-b border-gray-100">
                                    <p class="font-semibold text-gray-900">
                                        {conversation
                                            .counterpart(&user_id)
                                            .map(&display_name)
                                            .unwrap_or_default()}
                                    </p>
                                </div>
                                <div class="flex-1 p-6 space-y-3 overflow-y-auto">
                                    if conversation.messages.is_empty() {
                                        <p class="text-sm text-gray-400 text-center">{"Say hello!"}</p>
                                    }
                                    {for conversation.messages.iter().map(|message| {
                                        let mine = message.sender_id == user_id;
                                        html! {
                                            <div class={classes!("flex", mine.then_some("justify-end"))}>
                                                <div class={classes!(
                                                    "max-w-xs", "sm:max-w-md", "px-4", "py-2",
                                                    "rounded-2xl", "text-sm",
                                                    if mine {
                                                        classes!("bg-blue-600", "text-white")
                                                    } else {
                                                        classes!("bg-gray-100", "text-gray-900")
                                                    }
                                                )}>
                                                    <p>{&message.body}</p>
                                                    <p class={classes!(
                                                        "text-xs", "mt-1",
                                                        if mine { "text-blue-200" } else { "text-gray-400" }
                                                    )}>
                                                        {message.sent_at.format("%b %d, %H:%M").to_string()}
                                                    </p>
                                                </div>
                                            </div>
                                        }
                                    })}
                                </div>
                                <form onsubmit={on_send} class="p-4 border-t border-gray-100 flex gap-3">
                                    <input
                                        type="text"
                                        class="flex-1 px-4 py-2 border border-gray-300 rounded-xl focus:ring-2 focus:ring-blue-500 focus:border-transparent"
                                        placeholder="Type a message..."
                                        value={(*draft).clone()}
                                        oninput={{
                                            let draft = draft.clone();
                                            Callback::from(move |e: InputEvent| {
                                                let input: HtmlInputElement = e.target_unchecked_into();
                                                draft.set(input.value());
                                            })
                                        }}
                                    />
                                    <button
                                        type="submit"
                                        class="px-5 py-2 text-sm font-semibold text-white bg-blue-600 rounded-xl hover:bg-blue-700 transition-colors"
                                    >
                                        {"Send"}
                                    </button>
                                </form>
                            } else {
                                <div class="flex-1 flex items-center justify-center p-12">
                                    <p class="text-gray-400">{"Select a conversation"}</p>
                                </div>
                            }
                        </div>
                    </div>
                }
            </div>
        </div>
    }
}
