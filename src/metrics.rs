use axum::{routing::get, Router};
use metrics::{describe_counter, gauge};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

use crate::lexicon::LexiconSet;

pub struct Metrics {
    pub handle: PrometheusHandle,
}

impl Metrics {
    /// Install the Prometheus recorder and publish lexicon sizes as static gauges.
    pub fn init(lexicons: &LexiconSet) -> anyhow::Result<Self> {
        let handle = PrometheusBuilder::new().install_recorder()?;

        describe_counter!("classify_total", "Documents classified, by label.");
        describe_counter!(
            "classify_refused_total",
            "Documents refused before classification, by reason."
        );

        gauge!("lexicon_terms", "polarity" => "hawkish").set(lexicons.hawkish().len() as f64);
        gauge!("lexicon_terms", "polarity" => "dovish").set(lexicons.dovish().len() as f64);

        Ok(Self { handle })
    }

    /// Returns a router exposing `/metrics` with the Prometheus exposition format.
    pub fn router(&self) -> Router {
        let handle = self.handle.clone();
        Router::new().route(
            "/metrics",
            get(move || {
                let h = handle.clone();
                async move { h.render() }
            }),
        )
    }
}
