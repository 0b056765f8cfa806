//! Tracing support for graph operations.
//!
//! When the `tracing` feature is enabled, graph operations open spans and
//! emit events through the `tracing` crate, and [`init_tracing`] installs a
//! subscriber that formats events for test output and accumulates per-span
//! timings.  When the feature is disabled, this module provides no-op
//! replacements so call sites compile unchanged.

#[cfg(feature = "tracing")]
mod enabled {
    use std::{
        collections::BTreeMap,
        sync::{Mutex, Once},
        time::{Duration, Instant},
    };

    use tracing_subscriber::{
        Layer, Registry, filter::LevelFilter, fmt, layer::Context, layer::SubscriberExt,
        registry::LookupSpan, util::SubscriberInitExt,
    };

    static SPAN_TIMINGS: Mutex<BTreeMap<&'static str, (Duration, usize)>> =
        Mutex::new(BTreeMap::new());

    struct TimingLayer;

    impl<S> Layer<S> for TimingLayer
    where
        S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    {
        fn on_new_span(
            &self,
            _attrs: &tracing::span::Attributes<'_>,
            id: &tracing::Id,
            ctx: Context<'_, S>,
        ) {
            if let Some(span) = ctx.span(id) {
                span.extensions_mut().insert(Instant::now());
            }
        }

        fn on_close(&self, id: tracing::Id, ctx: Context<'_, S>) {
            if let Some(span) = ctx.span(&id) {
                let name = span.metadata().name();
                if let Some(start) = span.extensions().get::<Instant>() {
                    let elapsed = start.elapsed();
                    if let Ok(mut totals) = SPAN_TIMINGS.lock() {
                        let entry = totals.entry(name).or_insert((Duration::ZERO, 0));
                        entry.0 += elapsed;
                        entry.1 += 1;
                    }
                }
            }
        }
    }

    /// Installs the global subscriber, once per process.  Does nothing if
    /// another subscriber is already installed.  Span timings are recorded
    /// for every span; only events at `INFO` and above are printed.
    pub fn init_tracing() {
        static INIT: Once = Once::new();
        INIT.call_once(|| {
            let _ = Registry::default()
                .with(TimingLayer)
                .with(
                    fmt::layer()
                        .with_test_writer()
                        .with_filter(LevelFilter::INFO),
                )
                .try_init();
        });
    }

    /// Gets the accumulated `(total duration, count)` of every closed span,
    /// keyed by span name.
    pub fn method_timings() -> BTreeMap<&'static str, (Duration, usize)> {
        SPAN_TIMINGS
            .lock()
            .map(|totals| totals.clone())
            .unwrap_or_default()
    }

    #[doc(hidden)]
    pub fn dump_method_timings() {
        let mut entries: Vec<_> = method_timings().into_iter().collect();
        entries.sort_by(|a, b| b.1.0.cmp(&a.1.0));
        eprintln!("Span timings (desc):");
        for (name, (duration, count)) in entries {
            eprintln!("  {name}: {:?} ({}x)", duration, count);
        }
    }

    // Re-export tracing macros for convenience
    pub use tracing::{debug, info_span};
}

#[cfg(not(feature = "tracing"))]
mod disabled {
    use std::{collections::BTreeMap, time::Duration};

    pub fn init_tracing() {
        // No-op when tracing is disabled
    }

    pub fn method_timings() -> BTreeMap<&'static str, (Duration, usize)> {
        BTreeMap::new()
    }

    #[doc(hidden)]
    pub fn dump_method_timings() {
        // No-op when tracing is disabled
    }

    // Provide no-op macro replacements for info_span and debug
    #[doc(hidden)]
    #[macro_export]
    macro_rules! __adjgraph_info_span {
        ($name:expr) => {{ $crate::tracing_support::NoOpSpan }};
        ($name:expr, $($fields:tt)*) => {{ $crate::tracing_support::NoOpSpan }};
    }

    #[doc(hidden)]
    #[macro_export]
    macro_rules! __adjgraph_debug {
        ($($args:tt)*) => {{}};
    }

    pub use crate::__adjgraph_debug as debug;
    pub use crate::__adjgraph_info_span as info_span;

    pub struct NoOpSpan;

    impl NoOpSpan {
        pub fn entered(self) -> NoOpSpanGuard {
            NoOpSpanGuard
        }
    }

    pub struct NoOpSpanGuard;
}

// Re-export the appropriate implementation
#[cfg(feature = "tracing")]
pub use enabled::*;

#[cfg(not(feature = "tracing"))]
pub use disabled::*;
