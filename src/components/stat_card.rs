//! Single-statistic display card.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub label: AttrValue,
    pub value: AttrValue,
    #[prop_or_default]
    pub sub: Option<AttrValue>,
    #[prop_or(false)]
    pub highlight: bool,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class={classes!("stat-card", props.highlight.then_some("is-highlight"))}>
            <div class="stat-card-label">{ &props.label }</div>
            <div class="stat-card-value">{ &props.value }</div>
            if let Some(sub) = &props.sub {
                <div class="stat-card-sub">{ sub }</div>
            }
        </div>
    }
}
