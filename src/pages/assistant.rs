//! Natural-language assistant page: a chat flow against the backend's
//! LLM → SQL endpoint, with suggestion chips and per-answer SQL/result
//! rendering.

use crate::components::{AssistantMessageView, ChatMessage, ChatResults};
use crate::config::ASSISTANT_SUGGESTIONS;
use gloo_timers::callback::Timeout;
use intentmeter::api;
use web_sys::HtmlInputElement;
use yew::prelude::*;

const GREETING: &str = "Hi! I'm the Intentmeter AI assistant. Ask me anything about cricket — \
    I'll convert your question into a SQL query and fetch the results from the database. \
    Try one of the suggestions below.";

#[function_component(AssistantPage)]
pub fn assistant_page() -> Html {
    let messages = use_state(|| vec![ChatMessage::assistant(1, GREETING)]);
    let input = use_state(String::new);
    let loading = use_state(|| false);
    let bottom_ref = use_node_ref();

    let send = {
        let messages = messages.clone();
        let input = input.clone();
        let loading = loading.clone();
        Callback::from(move |text: String| {
            let question = text.trim().to_string();
            if question.is_empty() || *loading {
                return;
            }
            input.set(String::new());

            let mut history = (*messages).clone();
            let id = history.last().map(|m| m.id).unwrap_or(0) + 1;
            history.push(ChatMessage::user(id, question.clone()));
            messages.set(history.clone());
            loading.set(true);

            let messages = messages.clone();
            let loading = loading.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let reply = match api::ask_assistant(&question).await {
                    Ok(resp) => {
                        if let Some(err) = resp.error {
                            let mut message = ChatMessage::assistant(
                                id + 1,
                                format!("Sorry, I ran into an issue: {err}"),
                            );
                            message.sql = resp.sql;
                            message
                        } else {
                            let has_rows = !resp.rows.is_empty();
                            let mut message = ChatMessage::assistant(
                                id + 1,
                                if has_rows {
                                    "Here are the results for your query:"
                                } else {
                                    "The query ran successfully but returned no data. \
                                     Try broadening your criteria."
                                },
                            );
                            message.sql = resp.sql;
                            if has_rows {
                                message.results = Some(ChatResults {
                                    columns: resp.columns,
                                    rows: resp.rows,
                                });
                            }
                            message
                        }
                    }
                    Err(err) => {
                        log::warn!("assistant request failed: {err}");
                        ChatMessage::assistant(
                            id + 1,
                            format!(
                                "Connection error: {err}. Make sure the backend server is \
                                 running on port 8000."
                            ),
                        )
                    }
                };
                history.push(reply);
                messages.set(history);
                loading.set(false);
            });
        })
    };

    // Keep the latest bubble in view. Deferred a tick so the new node is
    // laid out before scrolling.
    {
        let bottom_ref = bottom_ref.clone();
        use_effect_with(messages.len(), move |_| {
            Timeout::new(0, move || {
                if let Some(el) = bottom_ref.cast::<web_sys::Element>() {
                    el.scroll_into_view();
                }
            })
            .forget();
        });
    }

    let oninput = {
        let input = input.clone();
        Callback::from(move |e: InputEvent| {
            let field: HtmlInputElement = e.target_unchecked_into();
            input.set(field.value());
        })
    };

    let onsubmit = {
        let send = send.clone();
        let input = input.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            send.emit((*input).clone());
        })
    };

    html! {
        <div class="assistant-layout">
            <div class="assistant-header">
                <div>
                    <h1>{ "Cricket AI Assistant" }</h1>
                    <p>{ "Ask in plain English · Powered by a fine-tuned LLM + SQL" }</p>
                </div>
            </div>

            <div class="assistant-scroll">
                <div class="assistant-thread">
                    { for messages.iter().map(|message| html! {
                        <AssistantMessageView key={message.id} message={message.clone()} />
                    }) }
                    if *loading {
                        <div class="chat-row">
                            <div class="chat-avatar">{ "AI" }</div>
                            <div class="chat-bubble chat-typing">
                                <span /><span /><span />
                            </div>
                        </div>
                    }
                    <div ref={bottom_ref} />
                </div>
            </div>

            <div class="assistant-footer">
                <div class="chip-row">
                    { for ASSISTANT_SUGGESTIONS.iter().map(|&suggestion| {
                        let onclick = {
                            let send = send.clone();
                            Callback::from(move |_: MouseEvent| send.emit(suggestion.to_string()))
                        };
                        html! {
                            <button
                                type="button"
                                key={suggestion}
                                class="suggestion-chip"
                                disabled={*loading}
                                {onclick}
                            >{ suggestion }</button>
                        }
                    }) }
                </div>

                <form {onsubmit}>
                    <div class="assistant-input-row">
                        <input
                            type="text"
                            class="assistant-input"
                            value={(*input).clone()}
                            placeholder="Ask about any cricket stat…"
                            disabled={*loading}
                            {oninput}
                        />
                        <button
                            type="submit"
                            class="button-primary"
                            disabled={*loading || input.trim().is_empty()}
                        >{ "Send" }</button>
                    </div>
                </form>
            </div>
        </div>
    }
}
