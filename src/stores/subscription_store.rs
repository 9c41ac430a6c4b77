use std::rc::Rc;

use yew::Reducible;

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub message: String,
    pub is_error: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SubscriptionStore {
    pub email: String,
    pub submitting: bool,
    pub notice: Option<Notice>,
    /// Id of the latest submit; a dismissal for an older one is ignored
    pub attempt: u64,
}

pub enum SubscriptionAction {
    SetEmail(String),
    Started(u64),
    Succeeded(String),
    Failed(String),
    DismissNotice(u64),
}

impl Reducible for SubscriptionStore {
    type Action = SubscriptionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            SubscriptionAction::SetEmail(email) => next.email = email,
            SubscriptionAction::Started(attempt) => {
                next.attempt = attempt;
                next.submitting = true;
                next.notice = None;
            }
            SubscriptionAction::Succeeded(message) => {
                next.submitting = false;
                next.email.clear();
                next.notice = Some(Notice { message, is_error: false });
            }
            SubscriptionAction::Failed(message) => {
                next.submitting = false;
                next.notice = Some(Notice { message, is_error: true });
            }
            SubscriptionAction::DismissNotice(attempt) if attempt == self.attempt => next.notice = None,
            SubscriptionAction::DismissNotice(_) => return self,
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_clears_email() {
        let state = Rc::new(SubscriptionStore::default())
            .reduce(SubscriptionAction::SetEmail("a@b.co".to_string()))
            .reduce(SubscriptionAction::Started(1))
            .reduce(SubscriptionAction::Succeeded("Subscription successful!".to_string()));
        assert!(state.email.is_empty());
        assert!(!state.submitting);
        assert_eq!(
            state.notice,
            Some(Notice { message: "Subscription successful!".to_string(), is_error: false })
        );
    }

    #[test]
    fn failure_keeps_email_for_retry() {
        let state = Rc::new(SubscriptionStore::default())
            .reduce(SubscriptionAction::SetEmail("a@b.co".to_string()))
            .reduce(SubscriptionAction::Failed("Email is required".to_string()));
        assert_eq!(state.email, "a@b.co");
        assert!(state.notice.as_ref().unwrap().is_error);
        let state = state.reduce(SubscriptionAction::DismissNotice(0));
        assert_eq!(state.notice, None);
    }

    #[test]
    fn earlier_timer_keeps_newer_notice() {
        let state = Rc::new(SubscriptionStore::default())
            .reduce(SubscriptionAction::Started(1))
            .reduce(SubscriptionAction::Failed("Email is required".to_string()))
            .reduce(SubscriptionAction::Started(2))
            .reduce(SubscriptionAction::Succeeded("Subscription successful!".to_string()))
            .reduce(SubscriptionAction::DismissNotice(1));
        assert_eq!(
            state.notice,
            Some(Notice { message: "Subscription successful!".to_string(), is_error: false })
        );

        let state = state.reduce(SubscriptionAction::DismissNotice(2));
        assert_eq!(state.notice, None);
    }
}
