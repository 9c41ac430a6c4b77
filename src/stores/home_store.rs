// ============================================================================
// HOME STORE - State of the home view (question + quotes list)
// ============================================================================
// Reducer-driven so async completions apply on top of the latest state
// instead of a stale clone.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use yew::Reducible;

use crate::models::{NavigationSnapshot, Quote};
use crate::router::SnapshotSource;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct HomeStore {
    pub quotes: Vec<Quote>,
    pub question: String,
    pub loading: bool,
    pub error: Option<String>,
    /// Question that produced the latest quote; the input may have moved on
    pub last_asked: Option<String>,
}

pub enum HomeAction {
    SetQuestion(String),
    AskStarted,
    QuoteReceived { question: String, quote: Quote },
    AskFailed(String),
    DismissError,
}

impl HomeStore {
    /// State rebuilt from a snapshot taken when the user left for learn-more
    pub fn restored(snapshot: NavigationSnapshot) -> Self {
        let last_asked = non_empty(&snapshot.question);
        Self {
            quotes: snapshot.quotes,
            question: snapshot.question,
            last_asked,
            ..Self::default()
        }
    }

    pub fn snapshot(&self) -> NavigationSnapshot {
        NavigationSnapshot::new(self.quotes.clone(), self.question.clone())
    }

    pub fn can_ask(&self) -> bool {
        !self.loading && !self.question.trim().is_empty()
    }

    /// Question to explain quotes against. `None` when nothing usable is known.
    pub fn learn_more_question(&self) -> Option<String> {
        self.last_asked
            .clone()
            .or_else(|| non_empty(&self.question))
    }
}

fn non_empty(question: &str) -> Option<String> {
    let question = question.trim();
    (!question.is_empty()).then(|| question.to_string())
}

impl Reducible for HomeStore {
    type Action = HomeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            HomeAction::SetQuestion(question) => next.question = question,
            HomeAction::AskStarted => {
                next.loading = true;
                next.error = None;
            }
            HomeAction::QuoteReceived { question, quote } => {
                next.loading = false;
                next.last_asked = non_empty(&question);
                next.quotes.push(quote);
            }
            HomeAction::AskFailed(message) => {
                next.loading = false;
                next.error = Some(message);
            }
            HomeAction::DismissError => next.error = None,
        }
        Rc::new(next)
    }
}

/// Live mirror kept by the mounted home view. A borrow conflict means there
/// is nothing consistent to capture right now.
impl SnapshotSource for RefCell<HomeStore> {
    fn capture(&self) -> Option<NavigationSnapshot> {
        self.try_borrow().ok().map(|store| store.snapshot())
    }
}
