//! Client side of the expense tracker API.
//!
//! A [`Client`] is stateless: the logged-in identity lives in a [`Session`]
//! returned by [`Client::login`] and handed back to every protected call.

pub use client::{Client, Session};
pub use error::{ClientError, Result};

mod client;
mod error;
