//! Session layer: explicit session object plus a swappable async provider
//! interface in place of ambient auth state.

pub mod google;
pub mod mock;
pub mod provider;
pub mod types;

pub use mock::MockSessionProvider;
pub use provider::SessionProvider;
pub use types::{Session, SessionError, UserRecord};
