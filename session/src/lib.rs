//! Session lifecycle and GraphQL boundary shared by the terminal and browser clients.
//!
//! This crate owns everything that is not presentation: the user/session data
//! model, the GraphQL request contract, durable session persistence, the
//! login/signup form state machines, the dashboard projection, and the root
//! controller that decides which screen is shown.
//!
//! ARCHITECTURE
//! ============
//! Platform glue stays outside. Callers supply a [`graphql::Transport`] (reqwest
//! natively, `gloo-net` in the browser) and a [`storage::Storage`] (a JSON file
//! natively, `localStorage` in the browser). Everything here is synchronous
//! except the transport call itself.

pub mod controller;
pub mod dashboard;
pub mod error;
pub mod form;
pub mod graphql;
pub mod storage;
pub mod store;
pub mod types;

#[cfg(test)]
mod testing;

pub use controller::{AuthView, RootController, Screen};
pub use error::{GraphqlError, StorageError, ValidationError};
pub use graphql::Transport;
pub use storage::{MemoryStorage, Storage};
pub use store::SessionStore;
pub use types::{AuthPayload, Role, Session, User, UserSummary};
