use crate::models::listing::Listing;
use crate::utils::format::format_rubles;
use leptos::*;

/// Storefront card for one account.
#[component]
pub fn AccountCard(listing: Listing) -> impl IntoView {
    let image = listing.image_url.clone().unwrap_or_default();
    let seller = listing.seller_name.clone().unwrap_or_else(|| "Admin".to_string());
    let rating = listing.seller_rating.map(|r| format!("{r:.1}"));

    view! {
        <article class="account-card" data-rarity=listing.rarity.as_str() data-id=listing.id>
            <div class="account-card-media">
                <img src=image alt=listing.title.clone()/>
                <span class=listing.rarity.badge_class()>{ listing.rarity.label() }</span>
                {rating.map(|r| view! { <span class="account-card-rating">{ "★ " }{ r }</span> })}
            </div>
            <div class="account-card-body">
                <h3>{ listing.title.clone() }</h3>
                <div class="account-card-stats">
                    <div>
                        <div class="stat-label">{ "Уровень" }</div>
                        <div class="stat-value">{ listing.level }</div>
                    </div>
                    <div>
                        <div class="stat-label">{ "Мощность" }</div>
                        <div class="stat-value">{ listing.power.clone() }</div>
                    </div>
                </div>
                <div class="account-card-seller">{ seller }</div>
                <div class="account-card-price gold-text">{ format_rubles(listing.price) }</div>
            </div>
            <div class="account-card-footer">
                <button type="button" class="button primary wide">{ "Купить" }</button>
            </div>
        </article>
    }
}
