pub mod use_home;
pub mod use_learn_more;
pub mod use_subscription;

pub use use_home::{use_home, UseHomeHandle};
pub use use_learn_more::use_learn_more;
pub use use_subscription::{use_subscription, UseSubscriptionHandle};
