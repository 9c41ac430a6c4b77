// Shared helpers

pub mod constants;
pub mod icons;
pub mod mixpanel_ffi;

pub use constants::*;
pub use icons::IconRegistry;
