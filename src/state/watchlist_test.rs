use super::*;

fn reply(state: &str) -> Result<WatchlistReply, ApiError> {
    Ok(WatchlistReply { state: state.to_owned() })
}

// =============================================================
// WatchState
// =============================================================

#[test]
fn from_stored_empty_is_not_watching() {
    assert_eq!(WatchState::from_stored(""), WatchState::NotWatching);
}

#[test]
fn from_stored_any_value_is_watching() {
    assert_eq!(WatchState::from_stored("in_watchlist"), WatchState::Watching);
    assert_eq!(WatchState::from_stored("True"), WatchState::Watching);
}

#[test]
fn stored_value_round_trips_through_from_stored() {
    for state in [WatchState::Watching, WatchState::NotWatching] {
        assert_eq!(WatchState::from_stored(state.stored_value()), state);
    }
}

#[test]
fn views_swap_the_same_two_classes() {
    let on = WatchState::Watching.view();
    let off = WatchState::NotWatching.view();
    assert_eq!(on.add_class, off.remove_class);
    assert_eq!(on.remove_class, off.add_class);
}

#[test]
fn watchlist_request_sends_stored_value() {
    assert_eq!(watchlist_request("in_watchlist").watchlist, "in_watchlist");
    assert_eq!(watchlist_request("").watchlist, "");
}

#[test]
fn watchlist_request_normalizes_any_non_empty_value() {
    assert_eq!(watchlist_request("True").watchlist, WATCHING_VALUE);
    assert_eq!(watchlist_request("1").watchlist, WATCHING_VALUE);
}

// =============================================================
// watchlist_patches
// =============================================================

#[test]
fn add_reply_switches_to_remove_button() {
    let patches = watchlist_patches(reply("add"), &PageConfig::default());
    let Patch::Watchlist(view) = &patches[0] else {
        panic!("expected watchlist patch, got {patches:?}");
    };
    assert_eq!(view.value, WATCHING_VALUE);
    assert_eq!(view.label, "Remove from watchlist");
    assert_eq!(view.add_class, "btn-primary");
    assert_eq!(view.remove_class, "btn-outline-primary");
    assert_eq!(patches[1], Patch::Flash(Flash::success("Added to watchlist", 3000)));
}

#[test]
fn other_reply_switches_to_add_button() {
    for state in ["remove", "", "deleted"] {
        let patches = watchlist_patches(reply(state), &PageConfig::default());
        let Patch::Watchlist(view) = &patches[0] else {
            panic!("expected watchlist patch, got {patches:?}");
        };
        assert_eq!(view.value, "");
        assert_eq!(view.label, "Add to watchlist");
        assert_eq!(patches[1], Patch::Flash(Flash::danger("Deleted from watchlist", 3000)));
    }
}

#[test]
fn rejection_shows_error_without_flipping() {
    let result = Err(ApiError::Rejected { status: 404, message: "Listing not found".to_owned() });
    let patches = watchlist_patches(result, &PageConfig::default());
    assert_eq!(patches, vec![Patch::Flash(Flash::danger("Listing not found", 3000))]);
}

#[test]
fn transport_failure_changes_nothing() {
    let patches = watchlist_patches(Err(ApiError::Transport("offline".to_owned())), &PageConfig::default());
    assert!(patches.is_empty());
}

#[test]
fn flash_lifetime_follows_config() {
    let config = PageConfig { flash_lifetime_ms: 5000, ..PageConfig::default() };
    let patches = watchlist_patches(reply("add"), &config);
    assert_eq!(patches[1], Patch::Flash(Flash::success(ADDED_MESSAGE, 5000)));
}
