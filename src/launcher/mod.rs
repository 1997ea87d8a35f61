//! Hand-off of URIs to the host's registered handlers

mod system;
mod traits;

pub use system::SystemNavigator;
pub use traits::Navigator;

#[cfg(test)]
pub use traits::{LaunchError, MockNavigator};
