//! Head-to-head stat table for the comparison page.

use intentmeter::metrics::{Advantage, TableRow};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CompareTableProps {
    pub rows: Vec<TableRow>,
    pub p1_name: AttrValue,
    pub p2_name: AttrValue,
}

#[function_component(CompareTable)]
pub fn compare_table(props: &CompareTableProps) -> Html {
    html! {
        <div class="compare-table-wrap">
            <table class="compare-table">
                <thead>
                    <tr>
                        <th class="col-metric">{ "Stat" }</th>
                        <th class="col-p1">{ &props.p1_name }</th>
                        <th class="col-p2">{ &props.p2_name }</th>
                    </tr>
                </thead>
                <tbody>
                    { for props.rows.iter().enumerate().map(|(index, row)| match row {
                        TableRow::Divider(label) => html! {
                            <tr key={format!("divider-{index}")} class="row-divider">
                                <td colspan="3">{ label }</td>
                            </tr>
                        },
                        TableRow::Stat(stat) => {
                            let advantage = stat.advantage();
                            let p1_better = advantage == Advantage::SideA;
                            let p2_better = advantage == Advantage::SideB;
                            html! {
                                <tr key={stat.metric.clone()}>
                                    <td class="col-metric">{ &stat.metric }</td>
                                    <td class={classes!("col-p1", p1_better.then_some("is-better"))}>
                                        { &stat.text_a }
                                        if p1_better {
                                            <span class="better-mark">{ "✓" }</span>
                                        }
                                    </td>
                                    <td class={classes!("col-p2", p2_better.then_some("is-better"))}>
                                        { &stat.text_b }
                                        if p2_better {
                                            <span class="better-mark">{ "✓" }</span>
                                        }
                                    </td>
                                </tr>
                            }
                        }
                    }) }
                </tbody>
            </table>
        </div>
    }
}
