//! Demonstrates tracing output from chains
//!
//! Run with: cargo run --example tracing_demo --features tracing

use typo::prelude::*;

fn main() {
    // Set up tracing subscriber
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    tracing::info!("Starting tracing demo");

    let request = Value::object(
        Object::new()
            .with("user", "ada")
            .with("limit", 250)
            .with("ids", [4, 8, 15]),
    );
    let field = |name: &str| request.get(name).cloned().unwrap_or_default();

    let user = Typo::new(field("user")).string().not_empty();
    match user.map(|chain| chain.or()) {
        Ok(Ok(user)) => tracing::info!("user accepted: {}", user),
        Ok(Err(e)) | Err(e) => tracing::error!("user rejected: {}", e),
    }

    let limit = Typo::new(field("limit")).int().gt(0).lte(100).or_value(100);
    tracing::info!("effective limit: {}", limit);

    let page = Typo::new(field("page")).int().with_default(1);
    match page.and_then(|chain| chain.or()) {
        Ok(page) => tracing::info!("page: {}", page),
        Err(e) => tracing::error!("page rejected: {}", e),
    }

    match TypoAll::new(field("ids")) {
        Ok(ids) => tracing::info!("all ids positive: {}", ids.int().gt(0).end()),
        Err(e) => tracing::error!("ids rejected: {}", e),
    }
}
