use leptos::html::Section;
use leptos::prelude::*;

use crate::format::{bar_heights, change_label, stat_value_label};
use crate::hooks::use_reveal;
use crate::models::{GrowthChart, Stat};
use crate::motion::reveal::{reveal_class, stagger_delay};
use crate::motion::Threshold;
use crate::server_fns::{get_growth_chart, get_stats};

const CARD_STAGGER_MS: u32 = 100;

#[component]
fn StatCard(stat: Stat, index: usize, visible: ReadSignal<bool>) -> impl IntoView {
    let value = stat_value_label(&stat);
    let change = change_label(&stat);
    let change_class = format!("stat-change {}", stat.change_type.css_class());

    view! {
        <div
            class=move || format!("stat-card glass-card {}", reveal_class(visible.get()))
            style=stagger_delay(index, CARD_STAGGER_MS)
        >
            <div class="stat-name">{stat.name}</div>
            <div class="stat-value">{value}</div>
            <div class=change_class>
                <span>{change}</span>
                <span class="stat-period">" vs last month"</span>
            </div>
        </div>
    }
}

fn growth_bars(chart: GrowthChart) -> impl IntoView {
    let max = chart.max_value();
    let columns: Vec<Vec<f64>> = chart.series.iter().map(|s| bar_heights(&s.data, max)).collect();

    view! {
        <div class="chart-legend">
            {chart
                .series
                .iter()
                .enumerate()
                .map(|(i, s)| view! { <span class=format!("legend series-{}", i)>{s.label.clone()}</span> })
                .collect_view()}
        </div>
        <div class="chart-bars">
            {chart
                .labels
                .into_iter()
                .enumerate()
                .map(|(month, label)| {
                    view! {
                        <div class="chart-month">
                            <div class="chart-stack">
                                {columns
                                    .iter()
                                    .enumerate()
                                    .map(|(i, heights)| {
                                        let height = heights.get(month).copied().unwrap_or(0.0);
                                        view! {
                                            <div
                                                class=format!("chart-bar series-{}", i)
                                                style=format!("height: {:.1}%", height)
                                            ></div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                            <span class="chart-label">{label}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn StatSection() -> impl IntoView {
    let section_ref = NodeRef::<Section>::new();
    let visible = use_reveal(section_ref, Threshold::MEDIUM);

    let stats = Resource::new(|| (), |_| get_stats());
    let chart = Resource::new(|| (), |_| get_growth_chart());

    let skeleton = || (0..4).map(|_| view! { <div class="stat-card skeleton"></div> }).collect_view();

    view! {
        <section node_ref=section_ref id="stats" class="stat-section">
            <div class=move || format!("section-header {}", reveal_class(visible.get()))>
                <span class="pill">"Powerful Analytics"</span>
                <h2>"Real-time insights to drive growth"</h2>
                <p>
                    "Monitor your performance with our advanced analytics dashboard. "
                    "Make data-driven decisions quickly and effectively."
                </p>
            </div>

            <div class="stat-grid">
                <Suspense fallback=skeleton>
                    {move || {
                        stats
                            .get()
                            .map(|result| match result {
                                Ok(list) => list
                                    .into_iter()
                                    .enumerate()
                                    .map(|(index, stat)| view! { <StatCard stat=stat index=index visible=visible/> })
                                    .collect_view()
                                    .into_any(),
                                Err(e) => view! { <p class="error">{e.to_string()}</p> }.into_any(),
                            })
                    }}
                </Suspense>
            </div>

            <div class=move || format!("chart-card glass-card {}", reveal_class(visible.get()))>
                <h3>"Growth Trends"</h3>
                <p class="hint">"6-month user acquisition metrics"</p>
                <Suspense fallback=|| view! { <div class="chart-skeleton skeleton"></div> }>
                    {move || {
                        chart
                            .get()
                            .map(|result| match result {
                                Ok(data) => growth_bars(data).into_any(),
                                Err(e) => view! { <p class="error">{e.to_string()}</p> }.into_any(),
                            })
                    }}
                </Suspense>
            </div>
        </section>
    }
}
