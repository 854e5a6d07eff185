use crate::admin::{
    load_active_listings, submit_listing, toggle_listing_status, AdminState, LoadSequence,
    MutationOutcome,
};
use crate::api::HttpMarketplace;
use crate::components::{
    listing_form::ListingFormPanel, listings_table::ListingsTable, notice::NoticeBanner,
    stats_panel::StatsPanel,
};
use crate::config::ApiConfig;
use crate::models::listing::Listing;
use crate::utils::fetch_guard::{FetchGuard, FetchTicket};
use crate::utils::leptos_owner::with_owner_safe;
use leptos::logging::log;
use leptos::*;
use leptos_meta::Title;
use leptos_router::A;
use wasm_bindgen_futures::spawn_local;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AdminTab {
    Listings,
    Create,
    Stats,
}

impl AdminTab {
    const ALL: [AdminTab; 3] = [AdminTab::Listings, AdminTab::Create, AdminTab::Stats];

    fn label(self) -> &'static str {
        match self {
            AdminTab::Listings => "Объявления",
            AdminTab::Create => "Создать",
            AdminTab::Stats => "Статистика",
        }
    }
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let config = use_context::<ApiConfig>().unwrap_or_default();
    let api = store_value(HttpMarketplace::new(config));
    let state = create_rw_signal(AdminState::default());
    let (tab, set_tab) = create_signal(AdminTab::Listings);
    let owner = Owner::current();

    // `lifetime` is invalidated on teardown; `loads` orders table fetches.
    let lifetime = FetchGuard::new();
    let mounted = store_value(lifetime.begin());
    let loads = store_value(LoadSequence::default());
    on_cleanup(move || lifetime.invalidate());

    let run_load = move |ticket: FetchTicket| {
        let api = api.get_value();
        let mounted = mounted.get_value();
        spawn_local(async move {
            let result = load_active_listings(&api).await;
            if !mounted.is_current() {
                log!("[ADMIN] Page unmounted, dropping listings load");
                return;
            }
            with_owner_safe(owner, "admin listings load", move || {
                state.update(|s| {
                    s.apply_load(&ticket, result);
                })
            });
        });
    };

    // Applies a finished mutation and starts its reload, if it asks for one.
    let finish = move |mounted: FetchTicket, outcome: MutationOutcome| {
        if !mounted.is_current() {
            log!("[ADMIN] Page unmounted, dropping mutation result");
            return;
        }
        let reload = loads.with_value(|l| l.after_mutation(&outcome));
        with_owner_safe(owner, "admin mutation completion", move || {
            state.update(|s| s.apply_mutation(outcome))
        });
        if let Some(ticket) = reload {
            run_load(ticket);
        }
    };

    create_effect(move |_| run_load(loads.with_value(LoadSequence::start)));

    let on_submit = Callback::new(move |()| {
        if state.with_untracked(|s| s.submitting) {
            return;
        }
        let form = state.with_untracked(|s| s.form.clone());
        state.update(|s| {
            s.submitting = true;
            s.notice = None;
        });
        let api = api.get_value();
        let mounted = mounted.get_value();
        spawn_local(async move {
            let outcome = submit_listing(&api, &form).await;
            finish(mounted, outcome);
        });
    });

    let on_toggle = Callback::new(move |listing: Listing| {
        let api = api.get_value();
        let mounted = mounted.get_value();
        spawn_local(async move {
            match toggle_listing_status(&api, &listing).await {
                Some(outcome) => finish(mounted, outcome),
                None => log!("[ADMIN] Listing {} has status {}, not toggleable", listing.id, listing.status),
            }
        });
    });

    let listings = create_memo(move |_| state.with(|s| s.listings.clone()));
    let stats = create_memo(move |_| state.with(AdminState::stats));
    let notice = create_memo(move |_| state.with(|s| s.notice.clone()));
    let dismiss = Callback::new(move |()| state.update(|s| s.notice = None));

    view! {
        <Title text="Админ-панель"/>
        <div class="page admin">
            <div class="container">
                <div class="admin-header">
                    <div>
                        <h1>{ "Админ-панель" }</h1>
                        <p>{ "Управление контентом маркетплейса" }</p>
                    </div>
                    <A href="/" class="button outline">{ "На главную" }</A>
                </div>

                <NoticeBanner notice=notice on_dismiss=dismiss/>

                <div class="tabs" role="tablist">
                    {AdminTab::ALL.into_iter().map(|t| view! {
                        <button
                            type="button"
                            role="tab"
                            class="tab"
                            class:selected=move || tab.get() == t
                            on:click=move |_| set_tab.set(t)
                        >
                            { t.label() }
                        </button>
                    }).collect::<Vec<_>>()}
                </div>

                {move || match tab.get() {
                    AdminTab::Listings => view! { <ListingsTable listings=listings on_toggle=on_toggle/> }.into_view(),
                    AdminTab::Create => view! { <ListingFormPanel state=state on_submit=on_submit/> }.into_view(),
                    AdminTab::Stats => view! { <StatsPanel stats=stats/> }.into_view(),
                }}
            </div>
        </div>
    }
}
