use crate::admin::ListingStats;
use leptos::*;

#[component]
pub fn StatsPanel(#[prop(into)] stats: Signal<ListingStats>) -> impl IntoView {
    view! {
        <div class="stats-grid">
            <div class="card stat-card">
                <h3>{ "Всего объявлений" }</h3>
                <div class="stat-number" data-stat="total">{ move || stats.get().total }</div>
            </div>
            <div class="card stat-card">
                <h3>{ "Активных" }</h3>
                <div class="stat-number" data-stat="active">{ move || stats.get().active }</div>
            </div>
            <div class="card stat-card">
                <h3>{ "Продано" }</h3>
                <div class="stat-number" data-stat="sold">{ move || stats.get().sold }</div>
            </div>
        </div>
    }
}
