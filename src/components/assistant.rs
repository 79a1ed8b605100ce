//! Chat bubbles for the assistant page: message text, a collapsible block
//! showing the generated SQL, and a result table when the query returned
//! rows.

use intentmeter::metrics::MISSING;
use serde_json::Value;
use std::collections::HashMap;
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Clone, PartialEq)]
pub struct ChatResults {
    pub columns: Vec<String>,
    pub rows: Vec<HashMap<String, Value>>,
}

/// One entry of the conversation, request-scoped like everything else.
#[derive(Clone, PartialEq)]
pub struct ChatMessage {
    pub id: usize,
    pub role: ChatRole,
    pub content: String,
    pub sql: Option<String>,
    pub results: Option<ChatResults>,
}

impl ChatMessage {
    pub fn assistant(id: usize, content: impl Into<String>) -> Self {
        ChatMessage {
            id,
            role: ChatRole::Assistant,
            content: content.into(),
            sql: None,
            results: None,
        }
    }

    pub fn user(id: usize, content: impl Into<String>) -> Self {
        ChatMessage {
            id,
            role: ChatRole::User,
            content: content.into(),
            sql: None,
            results: None,
        }
    }
}

/// Render one result cell. The generated query can return anything, so this
/// is a plain JSON-value formatter with the usual missing-value placeholder.
fn format_cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => MISSING.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(other) => other.to_string(),
    }
}

#[derive(Properties, PartialEq)]
struct SqlBlockProps {
    sql: AttrValue,
}

#[function_component(SqlBlock)]
fn sql_block(props: &SqlBlockProps) -> Html {
    let open = use_state(|| false);
    let toggle = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(!*open))
    };
    html! {
        <div class="sql-block">
            <button type="button" class="sql-toggle" onclick={toggle}>
                <span>{ "SQL Query" }</span>
                <span class={classes!("sql-chevron", open.then_some("is-open"))}>{ "▾" }</span>
            </button>
            if *open {
                <pre class="sql-body">{ &props.sql }</pre>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ResultsTableProps {
    results: ChatResults,
}

#[function_component(ResultsTable)]
fn results_table(props: &ResultsTableProps) -> Html {
    let ChatResults { columns, rows } = &props.results;
    if rows.is_empty() {
        return html! {};
    }
    html! {
        <div class="chat-results">
            <table>
                <thead>
                    <tr>
                        { for columns.iter().map(|col| html! { <th key={col.clone()}>{ col }</th> }) }
                    </tr>
                </thead>
                <tbody>
                    { for rows.iter().enumerate().map(|(i, row)| html! {
                        <tr key={i}>
                            { for columns.iter().map(|col| html! {
                                <td key={col.clone()}>{ format_cell(row.get(col)) }</td>
                            }) }
                        </tr>
                    }) }
                </tbody>
            </table>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct AssistantMessageProps {
    pub message: ChatMessage,
}

#[function_component(AssistantMessageView)]
pub fn assistant_message(props: &AssistantMessageProps) -> Html {
    let message = &props.message;
    let is_user = message.role == ChatRole::User;
    html! {
        <div class={classes!("chat-row", is_user.then_some("is-user"))}>
            <div class="chat-avatar">{ if is_user { "U" } else { "AI" } }</div>
            <div class="chat-bubble-stack">
                <div class="chat-bubble">{ &message.content }</div>
                if let Some(sql) = &message.sql {
                    <SqlBlock sql={AttrValue::from(sql.clone())} />
                }
                if let Some(results) = &message.results {
                    <ResultsTable results={results.clone()} />
                }
            </div>
        </div>
    }
}
