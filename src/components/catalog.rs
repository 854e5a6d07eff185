use crate::catalog::{catalog_accounts, visible_listings, RarityFilter, SortKey};
use crate::components::account_card::AccountCard;
use leptos::logging::log;
use leptos::*;

#[component]
pub fn Catalog() -> impl IntoView {
    let accounts = catalog_accounts();
    let (filter, set_filter) = create_signal(RarityFilter::default());
    let (sort, set_sort) = create_signal(SortKey::default());

    let visible = create_memo(move |_| visible_listings(&accounts, filter.get(), sort.get()));

    let on_sort_change = move |event: ev::Event| {
        let value = event_target_value(&event);
        match value.parse::<SortKey>() {
            Ok(key) => set_sort.set(key),
            Err(err) => log!("[CATALOG] Ignoring sort selection: {}", err),
        }
    };

    view! {
        <section id="catalog" class="catalog">
            <div class="container">
                <div class="section-heading">
                    <h2>{ "Каталог аккаунтов" }</h2>
                    <p>{ "Выбери аккаунт своей мечты среди сотен предложений от проверенных продавцов" }</p>
                </div>

                <div class="catalog-controls">
                    <div class="catalog-filters">
                        {RarityFilter::BUTTONS.into_iter().map(|option| view! {
                            <button
                                type="button"
                                class="button filter"
                                class:selected=move || filter.get() == option
                                data-filter=option.as_str()
                                on:click=move |_| set_filter.set(option)
                            >
                                { option.label() }
                            </button>
                        }).collect::<Vec<_>>()}
                    </div>
                    <label class="catalog-sort">
                        <span>{ "Сортировка:" }</span>
                        <select on:change=on_sort_change>
                            {SortKey::ALL.into_iter().map(|key| view! {
                                <option value=key.as_str() selected=move || sort.get() == key>
                                    { key.label() }
                                </option>
                            }).collect::<Vec<_>>()}
                        </select>
                    </label>
                </div>

                <div class="catalog-grid">
                    <For
                        each=move || visible.get()
                        key=|listing| listing.id
                        children=move |listing| view! { <AccountCard listing=listing/> }
                    />
                </div>

                <div class="catalog-more">
                    <button type="button" class="button outline">{ "Загрузить ещё" }</button>
                </div>
            </div>
        </section>
    }
}
