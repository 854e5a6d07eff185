use crate::models::listing::{Listing, ListingStatus};
use crate::utils::format::format_rubles;
use leptos::*;

/// Admin table of loaded listings with the status toggle per row.
#[component]
pub fn ListingsTable(
    #[prop(into)] listings: Signal<Vec<Listing>>,
    on_toggle: Callback<Listing>,
) -> impl IntoView {
    view! {
        <div class="card">
            <h2 class="card-title">{ "Все объявления" }</h2>
            <table class="listings-table">
                <thead>
                    <tr>
                        <th>{ "Название" }</th>
                        <th>{ "Уровень" }</th>
                        <th>{ "Цена" }</th>
                        <th>{ "Редкость" }</th>
                        <th>{ "Продавец" }</th>
                        <th>{ "Статус" }</th>
                        <th>{ "Действия" }</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || listings.get()
                        key=|listing| (listing.id, listing.status)
                        children=move |listing| {
                            let action = listing.status.toggled().map(|next| {
                                let label = if next == ListingStatus::Sold { "Продано" } else { "Активировать" };
                                let row = listing.clone();
                                view! {
                                    <button
                                        type="button"
                                        class="button small"
                                        data-action="toggle-status"
                                        on:click=move |_| on_toggle.call(row.clone())
                                    >
                                        { label }
                                    </button>
                                }
                            });
                            view! {
                                <tr data-id=listing.id>
                                    <td class="strong">{ listing.title.clone() }</td>
                                    <td>{ listing.level }</td>
                                    <td class="gold-text">{ format_rubles(listing.price) }</td>
                                    <td><span class="badge outline">{ listing.rarity.as_str() }</span></td>
                                    <td>{ listing.seller_name.clone().unwrap_or_else(|| "Admin".to_string()) }</td>
                                    <td><span class=listing.status.badge_class()>{ listing.status.as_str() }</span></td>
                                    <td>{ action }</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}
