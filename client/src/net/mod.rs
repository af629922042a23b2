//! Networking for the browser client.
//!
//! SYSTEM CONTEXT
//! ==============
//! `graphql` is the only network path: a `gloo-net` implementation of the
//! shared `session::Transport` contract.

pub mod graphql;
