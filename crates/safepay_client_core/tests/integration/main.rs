//! Single integration test binary: all client scenarios as modules against an
//! in-process stub of the Safepay service.
//!
//! Run: `cargo test -p safepay_client_core --test integration`

mod common;
mod account;
mod auth_flow;
mod search;
mod session;
mod transfer_flow;
