use std::collections::HashSet;

use checkmate::ui::mvi::EffectChannel;
use checkmate::ui::navigation::{run_navigation, BackStack, MainEffect, Route};

fn navigate(route: &str) -> MainEffect {
    MainEffect::Navigate {
        route: Route::new(route.to_string()),
    }
}

#[test]
fn effects_during_host_gap_are_lost() {
    let channel = EffectChannel::new();
    let mut before = channel.attach();
    channel.emit(navigate("items"));
    assert_eq!(before.try_recv(), Some(navigate("items")));

    // Host goes away (e.g. recreated); nothing is queued meanwhile.
    channel.detach();
    channel.emit(navigate("settings"));

    let mut after = channel.attach();
    assert_eq!(after.try_recv(), None);
    channel.emit(navigate("home"));
    assert_eq!(after.try_recv(), Some(navigate("home")));
}

#[tokio::test]
async fn concurrent_emitters_deliver_each_effect_once() {
    let channel = EffectChannel::new();
    let mut rx = channel.attach();

    let mut tasks = Vec::new();
    for worker in 0..8 {
        let emitter = channel.clone();
        tasks.push(tokio::spawn(async move {
            for i in 0..25 {
                emitter.emit(navigate(&format!("w{}-{}", worker, i)));
            }
        }));
    }
    for task in tasks {
        task.await.unwrap();
    }
    channel.detach();

    let mut seen = HashSet::new();
    while let Some(MainEffect::Navigate { route }) = rx.recv().await {
        assert!(seen.insert(route.to_string()), "duplicate {}", route);
    }
    assert_eq!(seen.len(), 200);
}

#[tokio::test]
async fn navigation_host_follows_emitted_routes() {
    let channel = EffectChannel::new();
    let rx = channel.attach();
    channel.emit(navigate("items"));
    channel.emit(navigate("items"));
    channel.emit(navigate("settings"));
    channel.detach();

    let mut stack = BackStack::new(Route::new("home"));
    run_navigation(rx, &mut stack).await;
    assert_eq!(stack.current(), Some(&Route::new("settings")));
    assert_eq!(stack.routes().len(), 3);
}
