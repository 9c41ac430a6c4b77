// ============================================================================
// ROUTER - Route table, navigation guard and the outlet that runs it
// ============================================================================

pub mod guard;
pub mod mounted;
pub mod navigation;
pub mod outlet;
pub mod routes;

pub use guard::{GuardOutcome, NavigationGuard};
pub use mounted::{Mounted, MountedViews, SnapshotSource};
pub use navigation::{Navigation, PageView};
pub use outlet::RouterOutlet;
pub use routes::{switch, LearnMoreParams, Route, RouteName};
