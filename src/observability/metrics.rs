use prometheus::{
    Encoder, Histogram, HistogramOpts, IntCounter, IntCounterVec, Opts, Registry, TextEncoder,
};

use crate::zones::ZONE_THRESHOLDS;

#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    pub resolutions_total: IntCounterVec,
    pub resolution_distance_km: Histogram,
    pub rejected_requests_total: IntCounterVec,
    pub zone_overrides_total: IntCounter,
}

impl Metrics {
    pub fn new() -> Self {
        let registry = Registry::new();

        let resolutions_total = IntCounterVec::new(
            Opts::new("resolutions_total", "Resolved addresses by suggested zone"),
            &["zone"],
        )
        .expect("valid resolutions_total metric");

        let buckets: Vec<f64> = ZONE_THRESHOLDS.iter().map(|(bound, _)| *bound).collect();
        let resolution_distance_km = Histogram::with_opts(
            HistogramOpts::new(
                "resolution_distance_km",
                "Distance from the origin of resolved addresses in kilometres",
            )
            .buckets(buckets),
        )
        .expect("valid resolution_distance_km metric");

        let rejected_requests_total = IntCounterVec::new(
            Opts::new("rejected_requests_total", "Requests rejected by input validation"),
            &["reason"],
        )
        .expect("valid rejected_requests_total metric");

        let zone_overrides_total =
            IntCounter::new("zone_overrides_total", "Manual zone overrides applied")
                .expect("valid zone_overrides_total metric");

        registry
            .register(Box::new(resolutions_total.clone()))
            .expect("register resolutions_total");
        registry
            .register(Box::new(resolution_distance_km.clone()))
            .expect("register resolution_distance_km");
        registry
            .register(Box::new(rejected_requests_total.clone()))
            .expect("register rejected_requests_total");
        registry
            .register(Box::new(zone_overrides_total.clone()))
            .expect("register zone_overrides_total");

        Self {
            registry,
            resolutions_total,
            resolution_distance_km,
            rejected_requests_total,
            zone_overrides_total,
        }
    }

    pub fn encode(&self) -> Result<String, String> {
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();

        TextEncoder::new()
            .encode(&metric_families, &mut buffer)
            .map_err(|err| format!("failed to encode metrics: {err}"))?;

        String::from_utf8(buffer).map_err(|err| format!("metrics are not valid utf8: {err}"))
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
