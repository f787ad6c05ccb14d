use std::sync::Arc;

use tls_profile_watch::MemResourceStore;
use tls_profile_watch::Settings;
use tls_profile_watch::TlsPolicyResource;
use tls_profile_watch::WatchControllerBuilder;
use tls_profile_watch::register_custom_metrics;
use tls_profile_watch::REGISTRY;
use tls_profile_watch::{Error, Result};
use tokio::signal::unix::{signal, SignalKind};
use tokio::sync::watch;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> Result<()> {
    let settings = Settings::load(std::env::var("CONFIG_PATH").ok().as_deref())?;

    // Initializing Logs
    init_observability();
    register_custom_metrics(&REGISTRY);

    // Initializing Shutdown Signal
    let (graceful_tx, graceful_rx) = watch::channel(());

    // An in-process store seeded with an empty policy resource; a real
    // deployment would wire a remote object store client here instead.
    let store = Arc::new(MemResourceStore::new());
    store.put(TlsPolicyResource::new(&settings.watcher.resource_name));

    let trigger = store.subscribe();
    let initial_profile = tls_profile_watch::resolve(None)?;
    let controller = WatchControllerBuilder::new(settings, graceful_rx)
        .client(store.clone())
        .trigger(trigger)
        .initial_profile(initial_profile)
        .on_change(|change| {
            info!(
                "TLS profile transition: {} -> {} ({} -> {} ciphers)",
                change.previous.min_version,
                change.current.min_version,
                change.previous.ciphers.len(),
                change.current.ciphers.len(),
            );
            Ok(())
        })
        .build()?;

    info!("TLS profile watcher started. Waiting for CTRL+C signal...");
    // Listen on Shutdown Signal
    tokio::spawn(async {
        if let Err(e) = graceful_shutdown(graceful_tx).await {
            error!("Failed to shutdown: {:?}", e);
        }
    });

    if let Err(e) = controller.run().await {
        error!("watch loop stopped: {:?}", e);
    }

    println!("Exiting program.");
    Ok(())
}

async fn graceful_shutdown(graceful_tx: watch::Sender<()>) -> Result<()> {
    info!("Shutdown server..");
    let mut sigint = signal(SignalKind::interrupt()).unwrap();
    let mut sigterm = signal(SignalKind::terminate()).unwrap();
    tokio::select! {
        _ = sigint.recv() => {
            info!("SIGINT detected.");
        },
        _ = sigterm.recv() => {
            info!("SIGTERM detected.");
        },
        _ = tokio::signal::ctrl_c() => {
            info!("Ctrl+C detected.");
        },
    }

    graceful_tx.send(()).map_err(|e| {
        error!("Failed to send shutdown signal: {}", e);
        Error::SignalSendFailed(format!("Failed to send shutdown signal: {}", e))
    })?;

    info!("Shutdown completed");
    Ok(())
}

fn init_observability() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
}
