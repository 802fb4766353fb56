//! FOMC stance service — binary entrypoint.
//! Boots the Axum HTTP server with the configured lexicon and `/metrics`.

use fomc_stance_classifier::{api, metrics::Metrics};
use shuttle_axum::ShuttleAxum;
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Filter used when `RUST_LOG` is unset. Verbose mode opens up the
/// per-document targets; otherwise only lexicon/api lifecycle lines.
fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "classifier=debug,loader=debug,lexicon=debug,api=info,warn"
    } else {
        "lexicon=info,api=info,warn"
    }
}

fn verbose_requested(flag: Option<&str>) -> bool {
    matches!(
        flag.map(|v| v.trim().to_ascii_lowercase()).as_deref(),
        Some("1" | "true" | "yes")
    )
}

/// Compact stdout logs. `RUST_LOG` wins; `FOMC_DEV_LOG=1` selects the verbose default.
fn init_tracing() {
    let verbose = verbose_requested(std::env::var("FOMC_DEV_LOG").ok().as_deref());
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .try_init();
    if installed.is_err() {
        // the runtime already set a global subscriber; keep it
        debug!("tracing subscriber already installed");
    }
}

#[shuttle_runtime::main]
async fn axum() -> ShuttleAxum {
    // .env may carry FOMC_LEXICON_PATH / FOMC_DEV_LOG locally; absent in prod.
    let _ = dotenvy::dotenv();

    init_tracing();

    let state = api::AppState::from_env()?;
    let metrics = Metrics::init(state.classifier().lexicons())?;
    info!(
        mode = ?state.classifier().lexicons().match_mode(),
        "lexicon ready"
    );

    let router = api::router(state).merge(metrics.router());
    Ok(router.into())
}
