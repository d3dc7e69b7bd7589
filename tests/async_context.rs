mod common;

use scopestate::async_state::{AsyncContext, AsyncState, FetchError};
use scopestate::config::OverlapPolicy;
use scopestate::context::Provide;
use scopestate::Scope;
use tokio::sync::oneshot;

type Gate = oneshot::Receiver<Result<u32, String>>;

fn gated_context() -> AsyncContext<Gate, u32, String> {
    AsyncContext::new(|gate: Gate| async move {
        gate.await.unwrap_or_else(|_| Err("gate dropped".to_string()))
    })
}

fn idle() -> AsyncState<u32, String> {
    AsyncState::default()
}

#[tokio::test]
async fn success_goes_idle_loading_loaded() {
    let ctx = gated_context();
    let scope = ctx.provider().mount(&Scope::root());
    let state = ctx.use_state(&scope).unwrap();
    assert_eq!(state.get(), idle());

    let (tx, gate) = oneshot::channel();
    let handle = ctx.use_trigger(&scope).unwrap().spawn(gate);

    let mut rx = state.subscribe();
    rx.wait_for(|s| s.loading).await.unwrap();
    assert_eq!(
        state.get(),
        AsyncState {
            data: None,
            loading: true,
            error: None,
        }
    );

    tx.send(Ok(7)).unwrap();
    handle.await.unwrap();
    assert_eq!(
        state.get(),
        AsyncState {
            data: Some(7),
            loading: false,
            error: None,
        }
    );
}

#[tokio::test]
async fn failure_keeps_previous_data() {
    let ctx = gated_context();
    let scope = ctx.provider().mount(&Scope::root());
    let trigger = ctx.use_trigger(&scope).unwrap();
    let state = ctx.use_state(&scope).unwrap();

    let (tx, gate) = oneshot::channel();
    tx.send(Ok(1)).unwrap();
    trigger.call(gate).await;

    let (tx, gate) = oneshot::channel();
    let handle = trigger.spawn(gate);
    let mut rx = state.subscribe();
    rx.wait_for(|s| s.loading).await.unwrap();
    assert_eq!(state.get().data, Some(1));
    assert_eq!(state.get().error, None);

    tx.send(Err("timeout".to_string())).unwrap();
    handle.await.unwrap();
    assert_eq!(
        state.get(),
        AsyncState {
            data: Some(1),
            loading: false,
            error: Some("timeout".to_string()),
        }
    );
}

#[tokio::test]
async fn retry_after_failure_clears_error() {
    let ctx = gated_context();
    let scope = ctx.provider().mount(&Scope::root());
    let trigger = ctx.use_trigger(&scope).unwrap();

    let (tx, gate) = oneshot::channel();
    tx.send(Err("first".to_string())).unwrap();
    trigger.call(gate).await;
    assert!(ctx.use_state(&scope).unwrap().get().error.is_some());

    let (tx, gate) = oneshot::channel();
    tx.send(Ok(2)).unwrap();
    trigger.call(gate).await;

    let state = ctx.use_state(&scope).unwrap().get();
    assert_eq!(state.error, None);
    assert_eq!(state.data, Some(2));
}

/// Issue two overlapping requests, resolve the newer one first, then the
/// older one, and return the final data.
async fn resolve_out_of_order(ctx: &AsyncContext<Gate, u32, String>) -> Option<u32> {
    let scope = ctx.provider().mount(&Scope::root());
    let trigger = ctx.use_trigger(&scope).unwrap();
    let state = ctx.use_state(&scope).unwrap();
    let mut rx = state.subscribe();

    let (older_tx, older_gate) = oneshot::channel();
    let older = trigger.spawn(older_gate);
    rx.changed().await.unwrap();

    let (newer_tx, newer_gate) = oneshot::channel();
    let newer = trigger.spawn(newer_gate);
    rx.changed().await.unwrap();

    newer_tx.send(Ok(2)).unwrap();
    newer.await.unwrap();
    assert_eq!(state.get().data, Some(2));

    older_tx.send(Ok(1)).unwrap();
    older.await.unwrap();
    state.get().data
}

#[tokio::test]
async fn overlapping_triggers_are_last_write_wins_by_default() {
    let ctx = gated_context();
    assert_eq!(resolve_out_of_order(&ctx).await, Some(1));
}

#[tokio::test]
async fn latest_only_drops_superseded_results() {
    let ctx = gated_context().with_overlap(OverlapPolicy::LatestOnly);
    assert_eq!(resolve_out_of_order(&ctx).await, Some(2));
}

#[tokio::test]
async fn providers_keep_separate_request_counters() {
    let ctx = gated_context().with_overlap(OverlapPolicy::LatestOnly);
    let root = Scope::root();
    let left = ctx.provider().mount(&root);
    let right = ctx.provider().mount(&root);

    let (left_tx, left_gate) = oneshot::channel();
    let pending = ctx.use_trigger(&left).unwrap().spawn(left_gate);
    let mut rx = ctx.use_state(&left).unwrap().subscribe();
    rx.wait_for(|s| s.loading).await.unwrap();

    let (right_tx, right_gate) = oneshot::channel();
    right_tx.send(Ok(9)).unwrap();
    ctx.use_trigger(&right).unwrap().call(right_gate).await;

    left_tx.send(Ok(3)).unwrap();
    pending.await.unwrap();

    assert_eq!(ctx.use_state(&left).unwrap().get().data, Some(3));
    assert_eq!(ctx.use_state(&right).unwrap().get().data, Some(9));
}

#[tokio::test]
async fn anyhow_fetcher_surfaces_fetch_error() {
    let ctx = AsyncContext::new(|id: u64| async move {
        if id == 0 {
            return Err(FetchError::from(anyhow::anyhow!("no profile for id {}", id)));
        }
        Ok(format!("user-{}", id))
    });
    let scope = ctx.provider().mount(&Scope::root());
    let trigger = ctx.use_trigger(&scope).unwrap();

    trigger.call(0).await;
    let state = ctx.use_state(&scope).unwrap().get();
    assert_eq!(
        state.error.map(|e| e.to_string()).as_deref(),
        Some("no profile for id 0")
    );

    trigger.call(5).await;
    let state = ctx.use_state(&scope).unwrap().get();
    assert_eq!(state.data.as_deref(), Some("user-5"));
    assert!(state.error.is_none());
}

#[tokio::test]
async fn panicking_fetcher_leaves_loading_until_next_call() {
    let ctx = AsyncContext::new(|n: u32| async move {
        if n == 0 {
            panic!("fetcher bug");
        }
        Ok::<u32, String>(n)
    });
    let scope = ctx.provider().mount(&Scope::root());
    let trigger = ctx.use_trigger(&scope).unwrap();
    let state = ctx.use_state(&scope).unwrap();

    let err = trigger.spawn(0).await.unwrap_err();
    assert!(err.is_panic());
    assert!(state.get().loading);
    assert!(state.get().error.is_none());

    trigger.call(4).await;
    assert_eq!(
        state.get(),
        AsyncState {
            data: Some(4),
            loading: false,
            error: None,
        }
    );
}
