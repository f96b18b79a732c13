//! Safepay frontend library: routes, screens and widgets on top of `safepay_client_core`.

pub mod app;
pub mod refresh;
pub mod routes;
pub mod theme;
pub mod widgets;
pub mod screens;
