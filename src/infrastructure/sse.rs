// Server-sent event streaming of dashboard updates
use crate::application::dashboard_service::DashboardService;
use crate::domain::snapshot::Snapshot;
use axum::response::sse::{Event, KeepAlive, Sse};
use futures::stream::Stream;
use std::convert::Infallible;
use std::sync::Arc;
use tokio::sync::watch;
use tokio_stream::StreamExt;
use tokio_stream::wrappers::WatchStream;

/// One `dashboard` event for the current snapshot, then one per published snapshot.
pub fn dashboard_event_stream(
    rx: watch::Receiver<Arc<Snapshot>>,
    service: DashboardService,
) -> impl Stream<Item = Result<Event, Infallible>> {
    async_stream::stream! {
        let mut updates = WatchStream::new(rx);
        while let Some(snapshot) = updates.next().await {
            match dashboard_event(&service, &snapshot) {
                Ok(event) => yield Ok(event),
                Err(e) => tracing::warn!("Dropping dashboard event {}: {}", snapshot.generation, e),
            }
        }
    }
}

pub fn sse_from_receiver(
    rx: watch::Receiver<Arc<Snapshot>>,
    service: DashboardService,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    Sse::new(dashboard_event_stream(rx, service)).keep_alive(KeepAlive::default())
}

fn dashboard_event(service: &DashboardService, snapshot: &Snapshot) -> Result<Event, axum::Error> {
    Event::default()
        .event("dashboard")
        .id(snapshot.generation.to_string())
        .json_data(service.render(snapshot))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::reading::Reading;
    use chrono::NaiveDateTime;

    fn snapshot(generation: u64) -> Arc<Snapshot> {
        let r = Reading::new(-17.0, -18.0, NaiveDateTime::default());
        Arc::new(Snapshot::new(generation, vec![r.clone()], r))
    }

    #[tokio::test]
    async fn test_stream_yields_current_then_updates() {
        let (tx, rx) = watch::channel(snapshot(1));
        let stream = dashboard_event_stream(rx, DashboardService::new(3));
        tokio::pin!(stream);

        assert!(stream.next().await.unwrap().is_ok());

        tx.send(snapshot(2)).unwrap();
        assert!(stream.next().await.unwrap().is_ok());

        drop(tx);
        assert!(stream.next().await.is_none());
    }
}
