//! Per-phase breakdown card for the comparison page.

use intentmeter::metrics::{Advantage, PhaseCardData};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PhaseCardProps {
    pub card: PhaseCardData,
    pub p1_name: AttrValue,
    pub p2_name: AttrValue,
}

/// Bar width as a share of the larger side's value, in percent.
fn bar_width(value: Option<f64>, other: Option<f64>) -> f64 {
    let v = value.unwrap_or(0.0).max(0.0);
    let max = v.max(other.unwrap_or(0.0));
    if max <= 0.0 {
        0.0
    } else {
        (v / max * 100.0).min(100.0)
    }
}

#[function_component(PhaseCard)]
pub fn phase_card(props: &PhaseCardProps) -> Html {
    let phase = props.card.phase;
    html! {
        <div class="phase-card">
            <div class="phase-card-header">
                <h3>{ phase.label() }</h3>
                <p class="phase-card-overs">{ phase.overs() }</p>
            </div>
            <div class="phase-card-stats">
                { for props.card.stats.iter().map(|stat| {
                    let advantage = stat.advantage();
                    let p1_better = advantage == Advantage::SideA;
                    let p2_better = advantage == Advantage::SideB;
                    let w1 = bar_width(stat.raw_a, stat.raw_b);
                    let w2 = bar_width(stat.raw_b, stat.raw_a);
                    html! {
                        <div key={stat.metric.clone()} class="phase-stat">
                            <p class="phase-stat-label">{ &stat.metric }</p>
                            <div class="phase-stat-sides">
                                <div class="phase-stat-side side-p1">
                                    <span class={classes!("phase-stat-value", p1_better.then_some("is-better"))}>
                                        { &stat.text_a }
                                    </span>
                                    <div class="phase-bar-track">
                                        <div
                                            class={classes!("phase-bar", "bar-p1", p1_better.then_some("is-better"))}
                                            style={format!("width: {w1:.0}%")}
                                        />
                                    </div>
                                    <p class="phase-stat-name">{ &props.p1_name }</p>
                                </div>
                                <div class="phase-stat-vs">{ "vs" }</div>
                                <div class="phase-stat-side side-p2">
                                    <span class={classes!("phase-stat-value", p2_better.then_some("is-better"))}>
                                        { &stat.text_b }
                                    </span>
                                    <div class="phase-bar-track">
                                        <div
                                            class={classes!("phase-bar", "bar-p2", p2_better.then_some("is-better"))}
                                            style={format!("width: {w2:.0}%")}
                                        />
                                    </div>
                                    <p class="phase-stat-name">{ &props.p2_name }</p>
                                </div>
                            </div>
                        </div>
                    }
                }) }
            </div>
        </div>
    }
}
