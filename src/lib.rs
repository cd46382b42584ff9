//! gadgetry - a small token-gated inventory API for gadget lifecycle tracking

pub mod auth;
pub mod cli;
pub mod gadget;
pub mod http_server;
pub mod observability;
