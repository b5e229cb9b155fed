use std::time::Duration;

use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use tokio::time::interval;

use crate::app::search::SearchError;
use crate::domain::weather::WeatherSnapshot;

#[derive(Debug)]
pub enum AppEvent {
    Bootstrap,
    TickFrame,
    Input(Event),
    /// Login delay elapsed; the session is considered established.
    LoginCompleted,
    SearchCompleted {
        generation: u64,
        snapshot: Box<WeatherSnapshot>,
    },
    SearchFailed {
        generation: u64,
        error: SearchError,
    },
    Quit,
}

pub fn spawn_input_task() -> impl futures::Stream<Item = Event> {
    EventStream::new().filter_map(|event| async move { event.ok() })
}

/// Drives the loading spinner and the clock in the overview card.
pub fn start_frame_task(tx: tokio::sync::mpsc::Sender<AppEvent>, fps: u8) {
    let fps = fps.max(15);
    tokio::spawn(async move {
        let mut ticker = interval(Duration::from_millis(1000_u64 / u64::from(fps)));
        loop {
            ticker.tick().await;
            if tx.send(AppEvent::TickFrame).await.is_err() {
                break;
            }
        }
    });
}
