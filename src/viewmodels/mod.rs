pub mod learn_more_viewmodel;
pub mod quote_viewmodel;
pub mod subscription_viewmodel;

pub use learn_more_viewmodel::LearnMoreViewModel;
pub use quote_viewmodel::{validate_question, QuoteViewModel, EMPTY_QUESTION_MESSAGE};
pub use subscription_viewmodel::{validate_email, SubscriptionViewModel};
