//! Fixtures shared by the tests of the other crates.

use std::sync::LazyLock;

use hnf_models::email_address::EmailAddressWithName;

pub mod contact;

pub static CONTACT_INBOX: LazyLock<EmailAddressWithName> =
    LazyLock::new(|| "contact@huntersandfarmers.com".parse().unwrap());
