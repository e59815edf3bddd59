//! `mailto:` links for the mail client handoff.

use super::payload::ContactPayload;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

pub const SUBJECT: &str = "Portfolio Contact";

/// Bytes `encodeURIComponent` escapes: everything except
/// `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn encode_uri_component(input: &str) -> String {
    utf8_percent_encode(input, URI_COMPONENT).to_string()
}

/// Link that opens a pre-filled message to `recipient`.
pub fn mailto_url(recipient: &str, payload: &ContactPayload) -> String {
    let body = format!(
        "Name: {}\nEmail: {}\nMessage:\n{}",
        payload.name, payload.email, payload.message
    );
    format!(
        "mailto:{}?subject={}&body={}",
        recipient,
        encode_uri_component(SUBJECT),
        encode_uri_component(&body)
    )
}
