// Sampling pipeline - timer-invalidated, memoized snapshot of the history
use crate::application::reading_source::ReadingSource;
use crate::domain::history::{HistoryBuffer, HistoryError};
use crate::domain::snapshot::Snapshot;
use chrono::{Local, NaiveDateTime, SubsecRound};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::Instant;

// Same horizon tokio uses for an effectively unbounded sleep
const FAR_FUTURE: Duration = Duration::from_secs(86_400 * 365 * 30);

struct PipelineState {
    history: HistoryBuffer,
    generation: u64,
    cached: Option<Arc<Snapshot>>,
    valid_until: Instant,
}

/// Owns the history buffer. All appends go through [`SamplingPipeline::snapshot`],
/// which recomputes at most once per interval and otherwise hands back the
/// cached snapshot.
pub struct SamplingPipeline {
    source: Arc<dyn ReadingSource>,
    interval: Duration,
    state: Mutex<PipelineState>,
}

impl SamplingPipeline {
    pub fn new(
        source: Arc<dyn ReadingSource>,
        capacity: usize,
        interval: Duration,
    ) -> Result<Self, HistoryError> {
        let history = HistoryBuffer::new(capacity)?;
        Ok(Self {
            source,
            interval,
            state: Mutex::new(PipelineState {
                history,
                generation: 0,
                cached: None,
                valid_until: Instant::now(),
            }),
        })
    }

    /// Current snapshot. The first read after the interval elapses (or after
    /// [`invalidate`](Self::invalidate)) samples one new reading.
    pub fn snapshot(&self) -> Arc<Snapshot> {
        let now = Instant::now();
        let mut state = self.lock();

        if let Some(cached) = &state.cached {
            if now < state.valid_until {
                return cached.clone();
            }
        }

        let reading = self.source.sample(wall_clock());
        state.history.append(reading.clone());
        state.generation += 1;
        state.valid_until = now
            .checked_add(self.interval)
            .unwrap_or_else(|| now + FAR_FUTURE);

        let snapshot = Arc::new(Snapshot::new(
            state.generation,
            state.history.snapshot(),
            reading,
        ));
        state.cached = Some(snapshot.clone());

        tracing::debug!(
            "Sampled generation {}: antarctic={} arctic={} ({} of {} readings)",
            snapshot.generation,
            snapshot.latest.temp_antarctic,
            snapshot.latest.temp_arctic,
            state.history.len(),
            state.history.capacity()
        );

        snapshot
    }

    /// Expire the cached snapshot so the next read samples again.
    pub fn invalidate(&self) {
        self.lock().valid_until = Instant::now();
    }

    pub fn next_refresh(&self) -> Instant {
        self.lock().valid_until
    }

    /// Keep sampling on schedule and publish every new snapshot.
    ///
    /// Returns once every receiver of `tx` has been dropped.
    pub async fn drive(self: Arc<Self>, tx: watch::Sender<Arc<Snapshot>>) {
        tracing::info!("Sampling every {}s", self.interval.as_secs());

        loop {
            let snapshot = self.snapshot();
            tx.send_if_modified(|current| {
                if current.generation == snapshot.generation {
                    false
                } else {
                    *current = snapshot;
                    true
                }
            });

            let deadline = self.next_refresh();
            tokio::select! {
                _ = tokio::time::sleep_until(deadline) => {}
                _ = tx.closed() => break,
            }
        }

        tracing::info!("Sampling stopped, no subscribers left");
    }

    fn lock(&self) -> MutexGuard<'_, PipelineState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn wall_clock() -> NaiveDateTime {
    Local::now().naive_local().trunc_subsecs(0)
}
