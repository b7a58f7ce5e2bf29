//! Messaging API access
//!
//! One blocking GET against `/api/v1/messages`; the body is treated as opaque JSON.

mod client;
mod query;

pub(crate) use client::fetch_messages;
pub(crate) use query::MessageQuery;
