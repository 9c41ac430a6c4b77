use std::rc::Rc;

use yew::Reducible;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LearnMoreStore {
    /// HTML fragment from the backend
    pub content: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
    /// Id of the request whose completion is still wanted
    pub request: u64,
}

/// Completions carry the id they were started with; any other id is stale.
pub enum LearnMoreAction {
    Started(u64),
    Loaded { request: u64, content: String },
    Failed { request: u64, message: String },
}

impl Reducible for LearnMoreStore {
    type Action = LearnMoreAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            LearnMoreAction::Started(request) => Self {
                loading: true,
                request,
                ..Self::default()
            },
            LearnMoreAction::Loaded { request, content } if request == self.request => Self {
                content: Some(content),
                request,
                ..Self::default()
            },
            LearnMoreAction::Failed { request, message } if request == self.request => Self {
                error: Some(message),
                request,
                ..Self::default()
            },
            LearnMoreAction::Loaded { request, .. } | LearnMoreAction::Failed { request, .. } => {
                log::debug!("Dropping stale learn-more response #{}", request);
                return self;
            }
        };
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_cycle() {
        let state = Rc::new(LearnMoreStore::default()).reduce(LearnMoreAction::Started(1));
        assert!(state.loading);
        let state = state.reduce(LearnMoreAction::Loaded {
            request: 1,
            content: "<p>hi</p>".to_string(),
        });
        assert_eq!(state.content.as_deref(), Some("<p>hi</p>"));
        assert!(!state.loading);
    }

    #[test]
    fn failure_clears_previous_content() {
        let state = Rc::new(LearnMoreStore {
            content: Some("<p>old</p>".to_string()),
            request: 3,
            ..LearnMoreStore::default()
        })
        .reduce(LearnMoreAction::Failed {
            request: 3,
            message: "nope".to_string(),
        });
        assert_eq!(state.content, None);
        assert_eq!(state.error.as_deref(), Some("nope"));
    }

    #[test]
    fn late_response_for_old_params_is_ignored() {
        let state = Rc::new(LearnMoreStore::default())
            .reduce(LearnMoreAction::Started(1))
            .reduce(LearnMoreAction::Started(2))
            .reduce(LearnMoreAction::Loaded {
                request: 2,
                content: "<p>second</p>".to_string(),
            })
            .reduce(LearnMoreAction::Loaded {
                request: 1,
                content: "<p>first</p>".to_string(),
            });
        assert_eq!(state.content.as_deref(), Some("<p>second</p>"));

        let state = state
            .reduce(LearnMoreAction::Started(3))
            .reduce(LearnMoreAction::Failed {
                request: 2,
                message: "late".to_string(),
            });
        assert!(state.loading);
        assert_eq!(state.error, None);
    }
}
