//! Small form controls shared by the query-builder pages.

use yew::prelude::*;

/// `(wire key, label)` pair used by the option-table controls.
pub type OptionPair = (&'static str, &'static str);

#[derive(Properties, PartialEq)]
pub struct SegmentedControlProps {
    pub options: Vec<(AttrValue, AttrValue)>,
    pub value: AttrValue,
    pub on_change: Callback<String>,
}

/// A row of mutually exclusive buttons (mode toggles, subject pickers).
#[function_component(SegmentedControl)]
pub fn segmented_control(props: &SegmentedControlProps) -> Html {
    html! {
        <div class="segmented">
            { for props.options.iter().map(|(key, label)| {
                let active = *key == props.value;
                let onclick = {
                    let on_change = props.on_change.clone();
                    let key = key.clone();
                    Callback::from(move |_: MouseEvent| on_change.emit(key.to_string()))
                };
                html! {
                    <button
                        type="button"
                        key={key.as_str()}
                        class={classes!("segmented-option", active.then_some("is-active"))}
                        {onclick}
                    >{ label }</button>
                }
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ToggleChipProps {
    pub label: AttrValue,
    pub active: bool,
    pub onclick: Callback<MouseEvent>,
}

/// A checkbox-style chip for multi-select filters (tournaments, phases).
#[function_component(ToggleChip)]
pub fn toggle_chip(props: &ToggleChipProps) -> Html {
    html! {
        <button
            type="button"
            class={classes!("chip", props.active.then_some("is-active"))}
            onclick={props.onclick.clone()}
        >
            <span class="chip-box" aria-hidden="true">
                if props.active {
                    { "✓" }
                }
            </span>
            { &props.label }
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct SelectFieldProps {
    #[prop_or_default]
    pub label: Option<AttrValue>,
    pub value: AttrValue,
    pub options: Vec<(AttrValue, AttrValue)>,
    pub on_change: Callback<String>,
}

/// A labelled native select over a `(key, label)` option table.
#[function_component(SelectField)]
pub fn select_field(props: &SelectFieldProps) -> Html {
    let onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            on_change.emit(select.value());
        })
    };
    html! {
        <div class="field">
            if let Some(label) = &props.label {
                <label class="field-label">{ label }</label>
            }
            <select class="field-select" value={props.value.clone()} {onchange}>
                { for props.options.iter().map(|(key, label)| html! {
                    <option key={key.as_str()} value={key.clone()} selected={*key == props.value}>
                        { label }
                    </option>
                }) }
            </select>
        </div>
    }
}

/// Lift a `&[(&str, &str)]` option table into component props.
pub fn option_pairs(options: &[OptionPair]) -> Vec<(AttrValue, AttrValue)> {
    options
        .iter()
        .map(|&(key, label)| (AttrValue::Static(key), AttrValue::Static(label)))
        .collect()
}
