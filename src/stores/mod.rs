pub mod home_store;
pub mod learn_more_store;
pub mod navigation_store;
pub mod subscription_store;

pub use home_store::{HomeAction, HomeStore};
pub use learn_more_store::{LearnMoreAction, LearnMoreStore};
pub use navigation_store::NavigationStore;
pub use subscription_store::{Notice, SubscriptionAction, SubscriptionStore};
