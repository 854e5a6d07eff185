use crate::api::HttpMarketplace;
use crate::config::ApiConfig;
use crate::models::review::Review;
use crate::reviews::{featured_reviews, load_reviews, AVERAGE_RATING, HAPPY_CUSTOMERS};
use crate::utils::fetch_guard::FetchGuard;
use crate::utils::format::format_date;
use crate::utils::leptos_owner::with_owner_safe;
use leptos::logging::log;
use leptos::*;
use wasm_bindgen_futures::spawn_local;

fn stars(filled: usize) -> impl IntoView {
    (0..5)
        .map(|i| {
            let class = if i < filled { "star filled" } else { "star" };
            view! { <span class=class>{ "★" }</span> }
        })
        .collect::<Vec<_>>()
}

#[component]
pub fn ReviewCard(review: Review) -> impl IntoView {
    let verified = review.is_verified;
    view! {
        <article class="review-card" data-id=review.id>
            <div class="review-head">
                <div class="avatar">{ review.initial() }</div>
                <div class="review-meta">
                    <div class="review-author">
                        <h4>{ review.author().to_string() }</h4>
                        <Show when=move || verified>
                            <span class="verified">{ "Проверено" }</span>
                        </Show>
                    </div>
                    <div class="review-rating">
                        { stars(review.stars()) }
                        <span class="review-date">{ format_date(&review.created_at) }</span>
                    </div>
                </div>
            </div>
            <p class="review-comment">{ review.comment.clone() }</p>
        </article>
    }
}

/// Fetches reviews once per mount and shows the first few.
#[component]
pub fn ReviewsPanel() -> impl IntoView {
    let config = use_context::<ApiConfig>().unwrap_or_default();
    let (reviews, set_reviews) = create_signal(Vec::<Review>::new());
    let (loading, set_loading) = create_signal(true);

    let guard = FetchGuard::new();
    on_cleanup({
        let guard = guard.clone();
        move || guard.invalidate()
    });

    create_effect(move |_| {
        let api = HttpMarketplace::new(config.clone());
        let ticket = guard.begin();
        let owner = Owner::current();
        spawn_local(async move {
            let fetched = load_reviews(&api).await;
            if !ticket.is_current() {
                log!("[REVIEWS] Discarding stale review fetch");
                return;
            }
            log!("[REVIEWS] Loaded {} reviews", fetched.len());
            with_owner_safe(owner, "reviews fetch completion", move || {
                set_reviews.set(fetched);
                set_loading.set(false);
            });
        });
    });

    view! {
        <section id="reviews" class="reviews">
            <div class="container">
                <Show
                    when=move || !loading.get()
                    fallback=|| view! { <div class="reviews-loading">{ "Загрузка отзывов..." }</div> }
                >
                    <div class="section-heading">
                        <h2>{ "Отзывы наших клиентов" }</h2>
                        <p>
                            { "Более 1000 довольных покупателей и продавцов. Читай реальные отзывы от пользователей платформы" }
                        </p>
                    </div>
                    <div class="reviews-grid">
                        {move || reviews.with(|all| {
                            featured_reviews(all)
                                .iter()
                                .cloned()
                                .map(|review| view! { <ReviewCard review=review/> })
                                .collect::<Vec<_>>()
                        })}
                    </div>
                    <div class="reviews-summary">
                        <div class="summary-block">
                            <div class="summary-value gold-text">{ AVERAGE_RATING }</div>
                            { stars(5) }
                            <div class="summary-label">{ "Средний рейтинг" }</div>
                        </div>
                        <div class="summary-block">
                            <div class="summary-value">{ HAPPY_CUSTOMERS }</div>
                            <div class="summary-label">{ "Довольных клиентов" }</div>
                        </div>
                    </div>
                </Show>
            </div>
        </section>
    }
}
