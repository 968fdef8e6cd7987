/// Session Module
///
/// Identity lifecycle for the current device: Anonymous until a credential
/// check succeeds, Authenticated until an explicit logout. The active user
/// id selects which persisted history/favorites partitions are visible.
pub mod store;
pub mod user;

pub use store::{SessionError, SessionStore};
pub use user::{Credential, User, UserRole, demo_credentials};
