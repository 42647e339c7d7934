//! EventHub demo client.
//!
//! Drives the view model through a short session against the configured
//! backend: browse and filter the catalog, hit the auth gate, sign in, and
//! register for an event. State is printed the way a renderer would read it.

use anyhow::Context;
use eventhub::{
    Category, CategoryFilter, Config, EventHubAction, EventHubEnvironment, EventHubReducer,
    EventHubState, EventId, forms::LoginEdit,
};
use eventhub_core::environment::SystemClock;
use eventhub_runtime::Store;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

type AppStore = Store<EventHubState, EventHubAction, EventHubEnvironment, EventHubReducer>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log.filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        api_url = %config.api.url,
        catalog = ?config.catalog.path,
        "Configuration loaded"
    );

    let catalog = config.load_catalog().context("loading event catalog")?;
    let backend = config.backend().context("building backend client")?;
    let env = EventHubEnvironment::new(Arc::new(SystemClock), Arc::new(backend));
    let store: AppStore = Store::new(EventHubState::new(catalog), EventHubReducer::new(), env);

    print_catalog(&store, "All events").await;

    store
        .send(EventHubAction::SetCategory {
            category: CategoryFilter::Only(Category::Technology),
        })
        .await?;
    print_catalog(&store, "Technology").await;
    store.send(EventHubAction::ClearFilters).await?;

    // Signed out: registering opens the login modal instead
    let first = EventId::new(1);
    store.send(EventHubAction::RegisterForEvent { event_id: first }).await?;
    let modal_open = store.state(|s| s.auth_modal.open).await;
    println!("\nRegister while signed out -> login modal open: {modal_open}");

    for edit in [
        LoginEdit::Email(config.demo.email.clone()),
        LoginEdit::Password(config.demo.password.clone()),
    ] {
        store.send(EventHubAction::EditLogin(edit)).await?;
    }
    settle(&store, EventHubAction::SubmitLogin, config.wait_timeout()).await?;

    let signed_in = store.state(|s| s.session.as_ref().map(|u| u.name.clone())).await;
    match signed_in {
        Some(name) => {
            println!("Signed in as {name}");
            store.send(EventHubAction::RegisterForEvent { event_id: first }).await?;
            let mine: Vec<String> = store
                .state(|s| {
                    s.registered_catalog_events()
                        .iter()
                        .map(|e| e.title.clone())
                        .collect()
                })
                .await;
            println!("My events: {}", mine.join(", "));
        },
        None => {
            let errors: Vec<String> = store
                .state(|s| s.login_errors.iter().map(|(f, m)| format!("{f:?}: {m}")).collect())
                .await;
            if !errors.is_empty() {
                println!("Login form invalid: {}", errors.join("; "));
            }
        },
    }

    print_notifications(&store).await;
    store.send(EventHubAction::OpenNotifications).await?;

    store.shutdown(Duration::from_secs(5)).await?;
    Ok(())
}

/// Send `action` and wait until every effect it started has fed back
async fn settle(store: &AppStore, action: EventHubAction, timeout: Duration) -> anyhow::Result<()> {
    let mut handle = store.send(action).await?;
    if let Err(error) = handle.wait_with_timeout(timeout).await {
        warn!(%error, "Backend did not answer in time");
    }
    Ok(())
}

async fn print_catalog(store: &AppStore, heading: &str) {
    let lines: Vec<String> = store
        .state(|s| {
            s.visible_events()
                .iter()
                .map(|e| {
                    let seats = if e.is_full() {
                        "full".to_string()
                    } else {
                        format!("{} seats left", e.remaining_capacity())
                    };
                    format!("  [{}] {} | {} | {} | {seats}", e.id, e.title, e.category, e.date)
                })
                .collect()
        })
        .await;

    println!("\n{heading} ({} found)", lines.len());
    for line in lines {
        println!("{line}");
    }
}

async fn print_notifications(store: &AppStore) {
    let lines: Vec<String> = store
        .state(|s| {
            s.notifications
                .iter()
                .map(|n| format!("  {:?}: {}", n.severity, n.message))
                .collect()
        })
        .await;

    println!("\nNotifications (newest first)");
    for line in lines {
        println!("{line}");
    }
}
