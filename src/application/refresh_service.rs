// Chart refresh service - Latest-wins workout selection driving series refreshes
use crate::application::series_mapper::map_to_points;
use crate::application::statistics_repository::{Aggregation, StatisticsRepository};
use crate::domain::telemetry::{Channel, ChartPoint, SeriesSnapshot};
use crate::domain::workout::WorkoutRef;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_stream::wrappers::WatchStream;

/// Refresh pipeline for one chart view. Selection changes land in a
/// capacity-1 latest-wins slot; a single consumer task drains the slot one
/// workout at a time, fetches the three channel series sequentially, and
/// publishes them as an atomic snapshot.
pub struct ChartRefreshService {
    selection_tx: watch::Sender<Option<WorkoutRef>>,
    snapshot_tx: Arc<watch::Sender<SeriesSnapshot>>,
    consumer: JoinHandle<()>,
}

impl ChartRefreshService {
    /// Create the selection slot and start the consumer task. One instance
    /// per view; dropping the service stops the consumer. Must be called
    /// from within a tokio runtime.
    pub fn spawn(repository: Arc<dyn StatisticsRepository>) -> Self {
        let (selection_tx, selection_rx) = watch::channel(None);
        let (snapshot_tx, _) = watch::channel(SeriesSnapshot::empty());
        let snapshot_tx = Arc::new(snapshot_tx);
        let consumer = tokio::spawn(consume_selections(
            repository,
            selection_rx,
            snapshot_tx.clone(),
        ));
        Self {
            selection_tx,
            snapshot_tx,
            consumer,
        }
    }

    /// Handle a workout selection change. An absent workout clears the
    /// published series immediately. A present workout overwrites any
    /// selection still pending in the slot and returns without waiting for
    /// the refresh; it never fetches inline.
    pub fn select_workout(&self, workout: Option<WorkoutRef>) {
        match workout {
            None => {
                self.snapshot_tx.send_replace(SeriesSnapshot::empty());
            }
            Some(workout) => {
                self.selection_tx.send_replace(Some(workout));
            }
        }
    }

    /// Subscribe to published snapshots.
    pub fn subscribe(&self) -> watch::Receiver<SeriesSnapshot> {
        self.snapshot_tx.subscribe()
    }

    /// Published snapshots as a stream, for hosts that consume updates that
    /// way.
    pub fn snapshot_stream(&self) -> WatchStream<SeriesSnapshot> {
        WatchStream::new(self.snapshot_tx.subscribe())
    }

    pub fn current_snapshot(&self) -> SeriesSnapshot {
        self.snapshot_tx.borrow().clone()
    }
}

impl Drop for ChartRefreshService {
    fn drop(&mut self) {
        self.consumer.abort();
    }
}

/// Consumer loop. The slot holds only the newest selection, so workouts
/// overwritten while a refresh is in flight are dropped and the latest one
/// is picked up on the next pass. At most one refresh runs at a time.
async fn consume_selections(
    repository: Arc<dyn StatisticsRepository>,
    mut selection_rx: watch::Receiver<Option<WorkoutRef>>,
    snapshot_tx: Arc<watch::Sender<SeriesSnapshot>>,
) {
    while selection_rx.changed().await.is_ok() {
        let selected = selection_rx.borrow_and_update().clone();
        let Some(workout) = selected else { continue };
        tracing::debug!("Refreshing chart series for workout {}", workout.id());
        let snapshot = refresh(repository.as_ref(), &workout).await;
        snapshot_tx.send_replace(snapshot);
    }
}

/// Fetch and map the three channels in a fixed sequence. Channels never
/// fetch concurrently, so one snapshot always describes a single workout.
async fn refresh(repository: &dyn StatisticsRepository, workout: &WorkoutRef) -> SeriesSnapshot {
    let speed = fetch_channel(repository, workout, Channel::Speed).await;
    let power = fetch_channel(repository, workout, Channel::Power).await;
    let cadence = fetch_channel(repository, workout, Channel::Cadence).await;
    SeriesSnapshot {
        workout: Some(workout.clone()),
        speed,
        power,
        cadence,
    }
}

/// One channel's series. A failed fetch becomes an empty series and does not
/// abort the remaining channels; an empty chart is the only error surface
/// this display pipeline has.
async fn fetch_channel(
    repository: &dyn StatisticsRepository,
    workout: &WorkoutRef,
    channel: Channel,
) -> Vec<ChartPoint> {
    match repository
        .interval_statistics(workout, channel.quantity_kind(), Aggregation::Average)
        .await
    {
        Ok(statistics) => map_to_points(&statistics, channel.unit(), channel.category()),
        Err(e) => {
            tracing::warn!(
                "Error fetching {} statistics for workout {}: {}",
                channel.category(),
                workout.id(),
                e
            );
            Vec::new()
        }
    }
}
