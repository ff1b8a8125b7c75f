//! Basic usage example for precept-guard
//!
//! Rejections are logged at DEBUG level:
//! `cargo run -p precept-guard --example basic_usage`

use precept_guard::{GuardError, StringComparison, requires};

struct Account {
    owner: String,
    balance: i64,
}

fn open_account(owner: Option<&str>, deposit: i64) -> Result<Account, GuardError> {
    let owner = requires(owner, "owner")
        .is_not_null_or_empty_or_white_space()?
        .into_value()
        .unwrap_or_default();
    let balance = requires(deposit, "deposit")
        .is_greater_than_or_equal_to(100)?
        .into_value();
    Ok(Account {
        owner: owner.to_string(),
        balance,
    })
}

fn set_endpoint(url: &str) -> Result<&str, GuardError> {
    let url = requires!(url)
        .starts_with_using("HTTPS://", StringComparison::OrdinalIgnoreCase)?
        .into_value();
    Ok(url)
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    match open_account(Some("Ada"), 250) {
        Ok(account) => println!("✓ opened account for {} with {}", account.owner, account.balance),
        Err(e) => println!("✗ {e}"),
    }

    for (owner, deposit) in [(None, 250), (Some("  "), 250), (Some("Ada"), 5)] {
        match open_account(owner, deposit) {
            Ok(_) => println!("✓ unexpected success"),
            Err(e) => println!("✗ [{}] {e}", e.kind()),
        }
    }

    for url in ["https://example.com", "ftp://example.com"] {
        match set_endpoint(url) {
            Ok(url) => println!("✓ endpoint {url}"),
            Err(e) => println!("✗ [{}] {e}", e.code()),
        }
    }
}
