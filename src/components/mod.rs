pub mod app;
pub mod home;
pub mod icon;
pub mod learn_more;
pub mod not_found;
pub mod quote_card;
pub mod subscribe_form;

pub use app::{App, AppProps};
pub use home::Home;
pub use icon::Icon;
pub use learn_more::LearnMore;
pub use not_found::NotFound;
pub use quote_card::QuoteCard;
pub use subscribe_form::SubscribeForm;
