use std::cell::RefCell;
use std::rc::Rc;

use lifestore_frontend::models::{NavigationSnapshot, Quote};
use lifestore_frontend::router::{
    GuardOutcome, MountedViews, Navigation, NavigationGuard, Route, RouteName, SnapshotSource,
};
use lifestore_frontend::services::NoopReporter;
use lifestore_frontend::stores::{HomeStore, NavigationStore};

const ROUTES: [RouteName; 3] = [RouteName::Home, RouteName::LearnMore, RouteName::NotFound];

fn quote(text: &str, philosopher: &str) -> Quote {
    Quote {
        text: text.to_string(),
        philosopher: philosopher.to_string(),
        source: "Collected Works".to_string(),
        year: None,
    }
}

fn live_home(quotes: Vec<Quote>, question: &str) -> Rc<RefCell<HomeStore>> {
    Rc::new(RefCell::new(HomeStore::restored(NavigationSnapshot::new(quotes, question))))
}

fn detail_route() -> Route {
    Route::LearnMore {
        author_info: "Seneca, Letters".to_string(),
        user_question: "why".to_string(),
        quote: "time".to_string(),
    }
}

#[test]
fn non_qualifying_transitions_leave_snapshot_unchanged() {
    let store = NavigationStore::new();
    let before = NavigationSnapshot::new(vec![quote("kept", "Hume")], "before");
    store.replace(before.clone());
    let guard = NavigationGuard::new(store.clone());
    let home = live_home(vec![quote("new", "Kant")], "after");

    for from in ROUTES {
        for to in ROUTES {
            if from == RouteName::Home && to == RouteName::LearnMore {
                continue;
            }
            guard.before_each(from, to, Some(&*home));
        }
    }

    assert_eq!(store.snapshot(), Some(before));
}

#[test]
fn home_to_learn_more_copies_quotes_and_question() {
    let store = NavigationStore::new();
    let guard = NavigationGuard::new(store.clone());
    let q1 = quote("The owl of Minerva spreads its wings only with the falling of the dusk.", "Hegel");
    let q2 = quote("He who has a why to live can bear almost any how.", "Nietzsche");
    let home = live_home(vec![q1.clone(), q2.clone()], "Why?");

    guard.before_each(RouteName::Home, RouteName::LearnMore, Some(&*home));

    assert_eq!(store.snapshot(), Some(NavigationSnapshot::new(vec![q1, q2], "Why?")));
}

#[test]
fn unreachable_home_leaves_snapshot_unchanged() {
    let store = NavigationStore::new();
    let navigation = Navigation::new(store.clone(), MountedViews::new(), Rc::new(NoopReporter));

    let home: Rc<dyn SnapshotSource> = live_home(vec![quote("gone", "Hume")], "gone");
    let mounted = navigation.views().mount(RouteName::Home, &home);
    drop(home);

    let outcome = navigation.transition(Some(&Route::Home), &detail_route());
    assert_eq!(outcome, GuardOutcome::Proceed);
    assert!(!store.is_present());

    drop(mounted);
    navigation.transition(Some(&Route::Home), &detail_route());
    assert!(!store.is_present());
}

#[test]
fn repeating_the_same_transition_is_idempotent() {
    let store = NavigationStore::new();
    let guard = NavigationGuard::new(store.clone());
    let home = live_home(vec![quote("a", "Arendt")], "Q");

    guard.before_each(RouteName::Home, RouteName::LearnMore, Some(&*home));
    let first = store.snapshot();
    guard.before_each(RouteName::Home, RouteName::LearnMore, Some(&*home));

    assert_eq!(store.snapshot(), first);
}

#[test]
fn later_transition_overwrites_never_merges() {
    let store = NavigationStore::new();
    let navigation = Navigation::new(store.clone(), MountedViews::new(), Rc::new(NoopReporter));
    let a = quote("a", "Spinoza");
    let b = quote("b", "Leibniz");

    let first: Rc<dyn SnapshotSource> = live_home(vec![a], "Q1");
    let mounted = navigation.views().mount(RouteName::Home, &first);
    navigation.transition(Some(&Route::Home), &detail_route());
    drop(mounted);

    let second: Rc<dyn SnapshotSource> = live_home(vec![b.clone()], "Q2");
    let _mounted = navigation.views().mount(RouteName::Home, &second);
    navigation.transition(Some(&detail_route()), &Route::Home);
    navigation.transition(Some(&Route::Home), &detail_route());

    assert_eq!(store.snapshot(), Some(NavigationSnapshot::new(vec![b], "Q2")));
}

#[test]
fn navigation_always_proceeds() {
    let routes = [Route::Home, detail_route(), Route::NotFound];
    for reachable in [true, false] {
        let store = NavigationStore::new();
        let navigation = Navigation::new(store, MountedViews::new(), Rc::new(NoopReporter));
        let home: Rc<dyn SnapshotSource> = live_home(Vec::new(), "");
        let _mounted = reachable.then(|| navigation.views().mount(RouteName::Home, &home));

        assert_eq!(navigation.transition(None, &Route::Home), GuardOutcome::Proceed);
        for from in &routes {
            for to in &routes {
                assert_eq!(navigation.transition(Some(from), to), GuardOutcome::Proceed);
            }
        }
    }
}

#[test]
fn restored_home_reads_without_consuming() {
    let store = NavigationStore::new();
    let guard = NavigationGuard::new(store.clone());
    let home = live_home(vec![quote("a", "Du Bois")], "Who?");
    guard.before_each(RouteName::Home, RouteName::LearnMore, Some(&*home));

    let restored = HomeStore::restored(store.snapshot().unwrap());
    assert_eq!(restored.question, "Who?");
    assert!(store.is_present());
}
