//! Contact message delivery: optional HTTP endpoint, mail client fallback.

pub mod client;
pub mod error;
pub mod mailto;
pub mod payload;

pub use client::{ContactClient, Delivery, MailClient, Submission, SystemMailClient};
pub use error::{ContactError, ValidationError};
pub use mailto::{encode_uri_component, mailto_url};
pub use payload::ContactPayload;
