use gamevault::admin::{
    load_active_listings, submit_listing, toggle_listing_status, AdminState, ListingForm,
    ListingStats, LoadSequence, MutationOutcome, NoticeKind,
};
use gamevault::api::ApiError;
use gamevault::models::listing::{ListingStatus, Rarity, StatusUpdate};
use leptos::logging::log;

mod mocks;
use mocks::mock_marketplace::{listing, Call, MockMarketplace};

/// Applies a finished mutation the way the admin page does, running its
/// reload to completion.
async fn settle(
    api: &MockMarketplace,
    loads: &LoadSequence,
    state: &mut AdminState,
    outcome: MutationOutcome,
) {
    let reload = loads.after_mutation(&outcome);
    state.apply_mutation(outcome);
    if let Some(ticket) = reload {
        let result = load_active_listings(api).await;
        state.apply_load(&ticket, result);
    }
}

fn ids(state: &AdminState) -> Vec<i64> {
    state.listings.iter().map(|l| l.id).collect()
}

fn filled_form() -> ListingForm {
    ListingForm {
        title: "Test".into(),
        level: "50".into(),
        power: "500K".into(),
        price: "5000".into(),
        ..ListingForm::default()
    }
}

#[tokio::test]
async fn create_with_a_missing_field_sends_nothing() {
    log!("[TEST] Starting create_with_a_missing_field_sends_nothing");
    let clears: [fn(&mut ListingForm); 4] = [
        |f| f.title.clear(),
        |f| f.level.clear(),
        |f| f.power.clear(),
        |f| f.price.clear(),
    ];

    for clear in clears {
        let api = MockMarketplace::default();
        let mut form = filled_form();
        clear(&mut form);

        let outcome = submit_listing(&api, &form).await;

        assert!(api.calls().is_empty(), "validation failure must not reach the network");
        assert_eq!(outcome.notice.kind, NoticeKind::Error);
        assert!(!outcome.reset_form);
        assert!(!outcome.reload);
    }
}

#[tokio::test]
async fn create_parses_numbers_then_reloads_once() {
    log!("[TEST] Starting create_parses_numbers_then_reloads_once");
    let api = MockMarketplace::default();

    let outcome = submit_listing(&api, &filled_form()).await;
    assert_eq!(outcome.notice.kind, NoticeKind::Success);
    assert!(outcome.reset_form && outcome.reload);

    let mut state = AdminState { form: filled_form(), ..AdminState::default() };
    settle(&api, &LoadSequence::default(), &mut state, outcome).await;

    let calls = api.calls();
    assert_eq!(calls.len(), 2);
    match &calls[0] {
        Call::Create(body) => {
            assert_eq!(body.level, 50);
            assert_eq!(body.price, 5000.0);
            assert_eq!(body.title, "Test");
            assert_eq!(body.power, "500K");
            assert_eq!(body.rarity, Rarity::Rare);
            assert_eq!(body.status, ListingStatus::Active);
        }
        other => panic!("expected a create request first, got {other:?}"),
    }
    assert_eq!(calls[1], Call::FetchListings(ListingStatus::Active));

    assert_eq!(state.form, ListingForm::default());
    assert_eq!(state.listings.len(), 1);
    assert_eq!(state.listings[0].title, "Test");
    log!("[TEST] Create and reload - PASSED");
}

#[tokio::test]
async fn create_body_matches_wire_contract() {
    let api = MockMarketplace::default();
    submit_listing(&api, &filled_form()).await;

    let Call::Create(body) = &api.calls()[0] else {
        panic!("expected a create request");
    };
    let json = serde_json::to_value(body).unwrap();
    assert_eq!(json["level"], serde_json::json!(50));
    assert_eq!(json["price"], serde_json::json!(5000.0));
    assert_eq!(json["status"], "active");
    assert_eq!(json["rarity"], "rare");
    for key in ["title", "description", "power", "image_url"] {
        assert!(json.get(key).is_some(), "missing {key}");
    }
}

#[tokio::test]
async fn failed_create_keeps_form_and_skips_reload() {
    for err in [ApiError::Status(500), ApiError::Network("offline".into())] {
        let api = MockMarketplace { create_error: Some(err), ..MockMarketplace::default() };

        let outcome = submit_listing(&api, &filled_form()).await;
        assert_eq!(outcome.notice.kind, NoticeKind::Error);

        let mut state = AdminState { form: filled_form(), ..AdminState::default() };
        settle(&api, &LoadSequence::default(), &mut state, outcome).await;
        assert_eq!(api.calls().len(), 1);
        assert_eq!(state.form, filled_form());
    }
}

#[tokio::test]
async fn toggling_active_sends_sold_and_reloads() {
    let api = MockMarketplace::with_listings(vec![
        listing(1, Rarity::Epic, ListingStatus::Active),
        listing(2, Rarity::Rare, ListingStatus::Active),
    ]);
    let target = listing(1, Rarity::Epic, ListingStatus::Active);

    let outcome = toggle_listing_status(&api, &target).await.expect("active is toggleable");
    assert_eq!(outcome.notice.kind, NoticeKind::Success);

    let mut state = AdminState::default();
    settle(&api, &LoadSequence::default(), &mut state, outcome).await;

    assert_eq!(
        api.calls(),
        vec![
            Call::UpdateStatus(StatusUpdate { id: 1, status: ListingStatus::Sold }),
            Call::FetchListings(ListingStatus::Active),
        ]
    );
    // The table only holds active listings, so the sold one drops out.
    assert_eq!(ids(&state), vec![2]);
}

#[tokio::test]
async fn toggling_sold_sends_active() {
    let api = MockMarketplace::with_listings(vec![listing(4, Rarity::Common, ListingStatus::Sold)]);
    let target = listing(4, Rarity::Common, ListingStatus::Sold);

    toggle_listing_status(&api, &target).await;

    assert_eq!(
        api.calls()[0],
        Call::UpdateStatus(StatusUpdate { id: 4, status: ListingStatus::Active })
    );
}

#[tokio::test]
async fn pending_and_unknown_are_not_toggleable() {
    for status in [ListingStatus::Pending, ListingStatus::Unknown] {
        let api = MockMarketplace::default();
        let outcome = toggle_listing_status(&api, &listing(9, Rarity::Rare, status)).await;
        assert!(outcome.is_none());
        assert!(api.calls().is_empty());
    }
}

#[tokio::test]
async fn failed_status_update_only_notifies() {
    let api = MockMarketplace {
        update_error: Some(ApiError::Status(502)),
        ..MockMarketplace::with_listings(vec![listing(1, Rarity::Epic, ListingStatus::Active)])
    };
    let before = AdminState {
        listings: vec![listing(1, Rarity::Epic, ListingStatus::Active)],
        ..AdminState::default()
    };

    let outcome = toggle_listing_status(&api, &before.listings[0]).await.unwrap();

    let mut after = before.clone();
    settle(&api, &LoadSequence::default(), &mut after, outcome).await;
    assert_eq!(api.calls().len(), 1, "no reload after a failed update");
    assert_eq!(after.listings, before.listings);
    assert!(after.notice.is_some_and(|n| n.kind == NoticeKind::Error));
}

#[tokio::test]
async fn reload_failure_after_successful_create_reports_load_error() {
    let api = MockMarketplace {
        fetch_error: Some(ApiError::Decode("not json".into())),
        ..MockMarketplace::default()
    };

    let outcome = submit_listing(&api, &filled_form()).await;
    let mut state = AdminState { form: filled_form(), ..AdminState::default() };
    settle(&api, &LoadSequence::default(), &mut state, outcome).await;

    assert_eq!(state.form, ListingForm::default());
    assert!(state.listings.is_empty());
    assert!(state.notice.is_some_and(|n| n.kind == NoticeKind::Error));
}

#[tokio::test]
async fn rejected_create_does_not_drop_an_earlier_toggle_reload() {
    log!("[TEST] Starting rejected_create_does_not_drop_an_earlier_toggle_reload");
    let api = MockMarketplace::with_listings(vec![
        listing(1, Rarity::Epic, ListingStatus::Active),
        listing(2, Rarity::Rare, ListingStatus::Active),
    ]);
    let loads = LoadSequence::default();
    let mut state = AdminState { listings: api.store.borrow().clone(), ..AdminState::default() };

    // The toggle lands and its reload is started but has not answered yet.
    let toggled = toggle_listing_status(&api, &state.listings[0]).await.unwrap();
    let toggle_reload = loads.after_mutation(&toggled).expect("successful toggle reloads");
    state.apply_mutation(toggled);
    let toggle_result = load_active_listings(&api).await;

    // An empty create is rejected meanwhile.
    let rejected = submit_listing(&api, &ListingForm::default()).await;
    settle(&api, &loads, &mut state, rejected).await;
    assert!(state.notice.as_ref().is_some_and(|n| n.kind == NoticeKind::Error));

    assert!(state.apply_load(&toggle_reload, toggle_result));
    assert_eq!(ids(&state), vec![2]);
}

#[tokio::test]
async fn rejected_create_during_mount_load_keeps_that_load() {
    let api = MockMarketplace::with_listings(vec![listing(1, Rarity::Epic, ListingStatus::Active)]);
    let loads = LoadSequence::default();
    let mut state = AdminState::default();
    let mount = loads.start();

    let rejected = submit_listing(&api, &ListingForm::default()).await;
    settle(&api, &loads, &mut state, rejected).await;

    let result = load_active_listings(&api).await;
    assert!(state.apply_load(&mount, result));
    assert_eq!(ids(&state), vec![1]);
}

#[tokio::test]
async fn failed_toggle_does_not_drop_a_successful_toggle_reload() {
    let api = MockMarketplace::with_listings(vec![
        listing(1, Rarity::Epic, ListingStatus::Active),
        listing(2, Rarity::Rare, ListingStatus::Active),
    ]);
    let loads = LoadSequence::default();
    let mut state = AdminState { listings: api.store.borrow().clone(), ..AdminState::default() };

    let toggled = toggle_listing_status(&api, &state.listings[0]).await.unwrap();
    let toggle_reload = loads.after_mutation(&toggled).expect("successful toggle reloads");
    state.apply_mutation(toggled);
    let toggle_result = load_active_listings(&api).await;

    let failing = MockMarketplace {
        update_error: Some(ApiError::Status(500)),
        ..MockMarketplace::default()
    };
    let failed = toggle_listing_status(&failing, &listing(2, Rarity::Rare, ListingStatus::Active))
        .await
        .unwrap();
    settle(&failing, &loads, &mut state, failed).await;
    assert_eq!(failing.calls().len(), 1);

    assert!(state.apply_load(&toggle_reload, toggle_result));
    assert_eq!(ids(&state), vec![2]);
}

#[tokio::test]
async fn newer_load_supersedes_an_older_one() {
    let api = MockMarketplace::with_listings(vec![
        listing(1, Rarity::Epic, ListingStatus::Active),
        listing(2, Rarity::Rare, ListingStatus::Active),
    ]);
    let loads = LoadSequence::default();
    let mut state = AdminState::default();

    let mount = loads.start();
    let stale = load_active_listings(&api).await;

    let toggled = toggle_listing_status(&api, &listing(1, Rarity::Epic, ListingStatus::Active))
        .await
        .unwrap();
    settle(&api, &loads, &mut state, toggled).await;
    assert_eq!(ids(&state), vec![2]);

    // The mount load answers last with rows from before the toggle.
    assert!(!state.apply_load(&mount, stale));
    assert_eq!(ids(&state), vec![2]);
}

#[test]
fn stats_count_loaded_rows_only() {
    let listings = vec![
        listing(1, Rarity::Epic, ListingStatus::Active),
        listing(2, Rarity::Epic, ListingStatus::Active),
        listing(3, Rarity::Rare, ListingStatus::Sold),
        listing(4, Rarity::Rare, ListingStatus::Pending),
    ];
    assert_eq!(
        ListingStats::from_listings(&listings),
        ListingStats { total: 4, active: 2, sold: 1 }
    );
}

#[test]
fn fetched_listing_round_trips_through_create_fields() {
    let mut fetched = listing(3, Rarity::Legendary, ListingStatus::Active);
    fetched.price = 9500.5;

    let body = ListingForm::from(&fetched).validate().expect("fetched listing is valid input");

    assert_eq!(body.level, fetched.level);
    assert_eq!(body.price, fetched.price);
    assert_eq!(body.title, fetched.title);
    assert_eq!(body.power, fetched.power);
    assert_eq!(body.rarity, fetched.rarity);
    assert_eq!(Some(body.image_url), fetched.image_url);
}
