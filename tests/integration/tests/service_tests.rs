//! Service layer integration tests
//!
//! Exercise the confession lifecycle, reaction aggregation and feed
//! polling end to end over in-memory stores.
//!
//! Run with: cargo test -p integration-tests --test service_tests

use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration as StdDuration;

use chrono::Duration;
use uuid::Uuid;

use ember_core::DomainError;
use ember_narration::{NarrationController, PlaybackState};
use ember_service::services::{ConfessionService, FeedPoller, ReactionService, ServiceError};
use integration_tests::{
    long_lived_confession, test_context, text_confession, CountingSink, FakeSynthesizer,
};

// ============================================================================
// Confession Lifecycle Tests
// ============================================================================

#[tokio::test]
async fn test_create_returns_stored_row() {
    let stores = test_context();
    let service = ConfessionService::new(&stores.ctx);
    let user = Uuid::new_v4();

    let request = long_lived_confession();
    let confession = service.create(user, request.clone()).await.unwrap();

    assert_eq!(confession.user_id, user);
    assert_eq!(confession.title, request.title);
    assert_eq!(confession.burn_after, request.burn_after);
    assert!(!confession.is_burned);
    assert_eq!(confession.view_count, 0);
}

#[tokio::test]
async fn test_create_rejects_past_expiry() {
    let stores = test_context();
    let service = ConfessionService::new(&stores.ctx);

    let mut request = long_lived_confession();
    request.burn_after = chrono::Utc::now() - Duration::seconds(1);

    let err = service.create(Uuid::new_v4(), request).await.unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Domain(DomainError::ExpiryInPast)
    ));
}

#[tokio::test]
async fn test_create_rejects_overlong_content() {
    let stores = test_context();
    let service = ConfessionService::new(&stores.ctx);

    let mut request = long_lived_confession();
    request.content = Some("x".repeat(2001));

    let err = service.create(Uuid::new_v4(), request).await.unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));
}

#[tokio::test]
async fn test_get_returns_stored_confession() {
    let stores = test_context();
    let service = ConfessionService::new(&stores.ctx);
    let user = Uuid::new_v4();

    let created = service.create(user, long_lived_confession()).await.unwrap();
    let fetched = service.get(created.id).await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_get_unknown_id_reports_not_found() {
    let stores = test_context();
    let service = ConfessionService::new(&stores.ctx);

    let err = service.get(Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Domain(DomainError::ConfessionNotFound(_))
    ));
}

#[tokio::test]
async fn test_list_active_never_returns_burned_rows() {
    let stores = test_context();
    let service = ConfessionService::new(&stores.ctx);
    let user = Uuid::new_v4();

    service.create(user, long_lived_confession()).await.unwrap();
    let expiring = service
        .create(user, text_confession(Duration::milliseconds(100)))
        .await
        .unwrap();

    tokio::time::sleep(StdDuration::from_millis(200)).await;

    // list_active runs the sweep before the read.
    let active = service.list_active().await;
    assert_eq!(active.len(), 1);
    assert!(active.iter().all(|c| !c.is_burned));
    assert!(!active.iter().any(|c| c.id == expiring.id));
}

#[tokio::test]
async fn test_burned_confession_still_visible_to_owner() {
    let stores = test_context();
    let service = ConfessionService::new(&stores.ctx);
    let user = Uuid::new_v4();

    let confession = service
        .create(user, text_confession(Duration::milliseconds(100)))
        .await
        .unwrap();

    tokio::time::sleep(StdDuration::from_millis(200)).await;
    assert!(service.list_active().await.is_empty());

    // Self-review keeps burned confessions, flagged as burned by the sweep.
    let mine = service.list_for_user(user).await;
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].id, confession.id);
    assert!(mine[0].is_burned);
}

#[tokio::test]
async fn test_listings_are_newest_first() {
    let stores = test_context();
    let service = ConfessionService::new(&stores.ctx);
    let user = Uuid::new_v4();

    let first = service.create(user, long_lived_confession()).await.unwrap();
    tokio::time::sleep(StdDuration::from_millis(10)).await;
    let second = service.create(user, long_lived_confession()).await.unwrap();

    let active = service.list_active().await;
    assert_eq!(active[0].id, second.id);
    assert_eq!(active[1].id, first.id);

    let mine = service.list_for_user(user).await;
    assert_eq!(mine[0].id, second.id);
}

#[tokio::test]
async fn test_record_view_counts_sequential_views() {
    let stores = test_context();
    let service = ConfessionService::new(&stores.ctx);
    let user = Uuid::new_v4();

    let confession = service.create(user, long_lived_confession()).await.unwrap();

    for _ in 0..5 {
        service.record_view(confession.id).await;
    }

    let mine = service.list_for_user(user).await;
    assert_eq!(mine[0].view_count, 5);
}

#[tokio::test]
async fn test_delete_by_owner_succeeds() {
    let stores = test_context();
    let service = ConfessionService::new(&stores.ctx);
    let user = Uuid::new_v4();

    let confession = service.create(user, long_lived_confession()).await.unwrap();
    assert!(service.delete(confession.id, user).await);
    assert!(service.list_for_user(user).await.is_empty());
}

#[tokio::test]
async fn test_delete_by_non_owner_fails() {
    let stores = test_context();
    let service = ConfessionService::new(&stores.ctx);
    let owner = Uuid::new_v4();
    let stranger = Uuid::new_v4();

    let confession = service.create(owner, long_lived_confession()).await.unwrap();

    // Ownership is enforced at the store boundary, not client-side.
    assert!(!service.delete(confession.id, stranger).await);
    assert_eq!(service.list_for_user(owner).await.len(), 1);
}

#[tokio::test]
async fn test_reads_degrade_to_empty_on_store_failure() {
    let stores = test_context();
    let service = ConfessionService::new(&stores.ctx);
    let user = Uuid::new_v4();

    service.create(user, long_lived_confession()).await.unwrap();
    stores.confessions.set_failing(true);

    assert!(service.list_active().await.is_empty());
    assert!(service.list_for_user(user).await.is_empty());
}

#[tokio::test]
async fn test_create_propagates_store_failure() {
    let stores = test_context();
    let service = ConfessionService::new(&stores.ctx);

    stores.confessions.set_failing(true);
    let err = service
        .create(Uuid::new_v4(), long_lived_confession())
        .await
        .unwrap_err();
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_sweep_failure_does_not_abort_read() {
    let stores = test_context();
    let service = ConfessionService::new(&stores.ctx);
    let user = Uuid::new_v4();

    let confession = service.create(user, long_lived_confession()).await.unwrap();

    // Only the sweep fails; the follow-up fetch must still return rows.
    stores.confessions.set_sweep_failing(true);
    let active = service.list_active().await;
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].id, confession.id);

    stores.confessions.set_sweep_failing(false);
    assert_eq!(service.list_active().await.len(), 1);
}

#[tokio::test]
async fn test_profile_overview_stats() {
    let stores = test_context();
    let service = ConfessionService::new(&stores.ctx);
    let user = Uuid::new_v4();

    let viewed = service.create(user, long_lived_confession()).await.unwrap();
    service
        .create(user, text_confession(Duration::milliseconds(50)))
        .await
        .unwrap();
    service.record_view(viewed.id).await;
    service.record_view(viewed.id).await;

    tokio::time::sleep(StdDuration::from_millis(150)).await;

    let overview = service.profile_overview(user).await;
    assert_eq!(overview.stats.total, 2);
    assert_eq!(overview.stats.active, 1);
    assert_eq!(overview.stats.burned, 1);
    assert_eq!(overview.stats.total_views, 2);
}

// ============================================================================
// Reaction Tests
// ============================================================================

#[tokio::test]
async fn test_toggle_adds_then_removes() {
    let stores = test_context();
    let confessions = ConfessionService::new(&stores.ctx);
    let reactions = ReactionService::new(&stores.ctx);
    let user = Uuid::new_v4();

    let confession = confessions
        .create(user, long_lived_confession())
        .await
        .unwrap();

    let before = reactions.aggregate(confession.id, user).await;
    assert!(before.is_empty());

    let after_add = reactions.toggle(confession.id, user, "😱").await.unwrap();
    assert_eq!(after_add.count("😱"), 1);
    assert!(after_add.viewer_reacted("😱"));

    // Double-toggle returns the aggregate to its pre-toggle state.
    let after_remove = reactions.toggle(confession.id, user, "😱").await.unwrap();
    assert_eq!(after_remove, before);
}

#[tokio::test]
async fn test_two_viewers_reacting() {
    let stores = test_context();
    let confessions = ConfessionService::new(&stores.ctx);
    let reactions = ReactionService::new(&stores.ctx);
    let author = Uuid::new_v4();
    let viewer1 = Uuid::new_v4();
    let viewer2 = Uuid::new_v4();

    let confession = confessions
        .create(author, long_lived_confession())
        .await
        .unwrap();

    let agg = reactions.toggle(confession.id, viewer1, "😱").await.unwrap();
    assert_eq!(agg.count("😱"), 1);
    assert!(agg.viewer_reacted("😱"));

    let agg = reactions.toggle(confession.id, viewer2, "😱").await.unwrap();
    assert_eq!(agg.count("😱"), 2);
    assert!(agg.viewer_reacted("😱"));

    // Each viewer sees their own membership flag.
    let viewer1_view = reactions.aggregate(confession.id, viewer1).await;
    assert!(viewer1_view.viewer_reacted("😱"));
    let viewer2_view = reactions.aggregate(confession.id, viewer2).await;
    assert!(viewer2_view.viewer_reacted("😱"));

    let agg = reactions.toggle(confession.id, viewer1, "😱").await.unwrap();
    assert_eq!(agg.count("😱"), 1);
    assert!(!agg.viewer_reacted("😱"));
    let viewer2_view = reactions.aggregate(confession.id, viewer2).await;
    assert!(viewer2_view.viewer_reacted("😱"));
}

#[tokio::test]
async fn test_toggle_rejects_unknown_emoji() {
    let stores = test_context();
    let reactions = ReactionService::new(&stores.ctx);

    let err = reactions
        .toggle(Uuid::new_v4(), Uuid::new_v4(), "👍")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Domain(DomainError::UnknownEmoji(_))
    ));
}

#[tokio::test]
async fn test_toggle_propagates_store_failure() {
    let stores = test_context();
    let reactions = ReactionService::new(&stores.ctx);

    stores.reactions.set_failing(true);
    let err = reactions
        .toggle(Uuid::new_v4(), Uuid::new_v4(), "❤️")
        .await
        .unwrap_err();
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_aggregate_degrades_to_empty_on_failure() {
    let stores = test_context();
    let reactions = ReactionService::new(&stores.ctx);

    stores.reactions.set_failing(true);
    let agg = reactions.aggregate(Uuid::new_v4(), Uuid::new_v4()).await;
    assert!(agg.is_empty());
}

// ============================================================================
// Feed Poller Tests
// ============================================================================

#[tokio::test]
async fn test_feed_poller_publishes_snapshots() {
    let stores = test_context();
    let service = ConfessionService::new(&stores.ctx);
    let user = Uuid::new_v4();

    let confession = service.create(user, long_lived_confession()).await.unwrap();

    let poller = FeedPoller::new(stores.ctx.clone(), StdDuration::from_millis(50));
    let (mut rx, handle) = poller.spawn();

    // The first refresh happens immediately on spawn.
    rx.changed().await.unwrap();
    let snapshot = rx.borrow().clone();
    assert!(snapshot.is_fresh());
    assert_eq!(snapshot.confessions.len(), 1);
    assert_eq!(snapshot.confessions[0].id, confession.id);

    handle.abort();
}

#[tokio::test]
async fn test_feed_poller_drops_burned_confessions() {
    let stores = test_context();
    let service = ConfessionService::new(&stores.ctx);
    let user = Uuid::new_v4();

    service
        .create(user, text_confession(Duration::milliseconds(80)))
        .await
        .unwrap();

    let poller = FeedPoller::new(stores.ctx.clone(), StdDuration::from_millis(50));
    let (mut rx, handle) = poller.spawn();

    rx.changed().await.unwrap();
    assert_eq!(rx.borrow().confessions.len(), 1);

    // After the expiry passes, a later poll (which sweeps) drops it.
    tokio::time::sleep(StdDuration::from_millis(200)).await;
    rx.changed().await.unwrap();
    assert!(rx.borrow().confessions.is_empty());

    handle.abort();
}

#[tokio::test]
async fn test_feed_poller_stops_when_subscribers_drop() {
    let stores = test_context();
    let poller = FeedPoller::new(stores.ctx.clone(), StdDuration::from_millis(10));
    let (rx, handle) = poller.spawn();

    drop(rx);
    tokio::time::timeout(StdDuration::from_secs(1), handle)
        .await
        .expect("poller should stop once receivers are gone")
        .unwrap();
}

// ============================================================================
// Narration Tests
// ============================================================================

#[tokio::test]
async fn test_second_narration_never_overlaps_first() {
    let synth = Arc::new(FakeSynthesizer::new());
    let sink = CountingSink::new();
    let live = Arc::clone(&sink.live);
    let max_live = Arc::clone(&sink.max_live);

    let mut controller = NarrationController::new(synth, sink);

    controller
        .generate_and_play(Some("first"), Some("one"))
        .await
        .unwrap();
    assert_eq!(controller.state(), PlaybackState::Playing);

    controller
        .generate_and_play(Some("second"), Some("two"))
        .await
        .unwrap();
    assert_eq!(controller.state(), PlaybackState::Playing);

    // At no point were two audio handles simultaneously live.
    assert_eq!(max_live.load(Ordering::SeqCst), 1);
    assert_eq!(live.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_narration_failure_leaves_no_handle() {
    let synth = Arc::new(FakeSynthesizer::new());
    synth.set_failing(true);
    let sink = CountingSink::new();
    let live = Arc::clone(&sink.live);

    let mut controller = NarrationController::new(synth, sink);
    let err = controller.generate_and_play(None, Some("x")).await.unwrap_err();
    assert!(matches!(err, DomainError::NarrationError(_)));
    assert_eq!(controller.state(), PlaybackState::Idle);
    assert_eq!(live.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_narration_end_releases_resources() {
    let synth = Arc::new(FakeSynthesizer::new());
    let sink = CountingSink::new();
    let live = Arc::clone(&sink.live);
    let finished = Arc::clone(&sink.finished);

    let mut controller = NarrationController::new(synth, sink);
    controller.generate_and_play(None, Some("x")).await.unwrap();

    finished.store(true, Ordering::SeqCst);
    controller.poll();

    assert_eq!(controller.state(), PlaybackState::Idle);
    assert!(!controller.has_live_handle());
    assert_eq!(live.load(Ordering::SeqCst), 0);
}
