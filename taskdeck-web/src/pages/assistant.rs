use shared::models::chat::ChatRequest;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api::TaskDeckClient;
use crate::components::Toast;

#[derive(Clone, PartialEq, Eq)]
enum Speaker {
    User,
    Assistant,
}

#[derive(Clone, PartialEq, Eq)]
struct TranscriptEntry {
    speaker: Speaker,
    content: String,
}

/// Assistant page: proxies free-text messages to the backend chat endpoint
/// and threads the conversation id through follow-up turns.
#[function_component(AssistantPage)]
pub fn assistant_page() -> Html {
    let transcript = use_state(Vec::<TranscriptEntry>::new);
    let conversation_id = use_state(|| None::<String>);
    let draft = use_state(String::new);
    let busy = use_state(|| false);
    let error = use_state(|| None::<String>);

    let onsubmit = {
        let transcript_handle = transcript.clone();
        let conversation_handle = conversation_id.clone();
        let draft_handle = draft.clone();
        let busy_handle = busy.clone();
        let error_handle = error.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *busy_handle {
                return;
            }
            let message = (*draft_handle).trim().to_string();
            if message.is_empty() {
                return;
            }

            busy_handle.set(true);
            draft_handle.set(String::new());
            transcript_handle.set({
                let mut next = (*transcript_handle).clone();
                next.push(TranscriptEntry {
                    speaker: Speaker::User,
                    content: message.clone(),
                });
                next
            });

            let transcript = transcript_handle.clone();
            let conversation = conversation_handle.clone();
            let busy = busy_handle.clone();
            let error = error_handle.clone();
            spawn_local(async move {
                let client = TaskDeckClient::shared();
                let request = ChatRequest {
                    message,
                    conversation_id: (*conversation).clone(),
                };
                match client.chat(&request).await {
                    Ok(response) => {
                        conversation.set(Some(response.conversation_id));
                        transcript.set({
                            let mut next = (*transcript).clone();
                            next.push(TranscriptEntry {
                                speaker: Speaker::Assistant,
                                content: response.response,
                            });
                            next
                        });
                        error.set(None);
                    }
                    Err(err) => {
                        error.set(Some(format!("Failed to reach the assistant: {err}")));
                    }
                }
                busy.set(false);
            });
        })
    };

    let on_draft_change = {
        let draft = draft.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                draft.set(input.value());
            }
        })
    };

    let on_dismiss = {
        let error = error.clone();
        Callback::from(move |()| error.set(None))
    };

    let bubbles = transcript.iter().map(|entry| match entry.speaker {
        Speaker::User => html! {
            <div class="chat chat-end">
                <div class="chat-bubble chat-bubble-primary">{ &entry.content }</div>
            </div>
        },
        Speaker::Assistant => html! {
            <div class="chat chat-start">
                <div class="chat-bubble">{ &entry.content }</div>
            </div>
        },
    });

    let is_busy = *busy;
    let disable_submit = is_busy || (*draft).trim().is_empty();

    html! {
        <div class="p-4 flex flex-col h-full space-y-4">
            <h1 class="text-2xl font-bold">{"Assistant"}</h1>

            <div class="flex-1 overflow-y-auto space-y-2 bg-base-200 rounded-box p-4">
                {
                    if transcript.is_empty() {
                        html! {
                            <p class="text-base-content/60">
                                {"Ask anything about your tasks to get started."}
                            </p>
                        }
                    } else {
                        html! { <>{ for bubbles }</> }
                    }
                }
                {
                    if is_busy {
                        html! {
                            <div class="chat chat-start">
                                <div class="chat-bubble">
                                    <span class="loading loading-dots loading-sm"></span>
                                </div>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>

            <form class="flex gap-2" onsubmit={onsubmit}>
                <input
                    class="input input-bordered flex-1"
                    type="text"
                    placeholder="Type a message..."
                    value={(*draft).clone()}
                    oninput={on_draft_change}
                />
                <button class="btn btn-primary" type="submit" disabled={disable_submit}>
                    {"Send"}
                </button>
            </form>

            <Toast message={(*error).clone()} on_dismiss={on_dismiss} />
        </div>
    }
}
