use tokio::sync::mpsc;
use tracing::debug;

use super::events::AppEvent;
use super::App;
use crate::mood::MoodLookup;

/// Submit the Mood DJ input. Earlier lookups still in flight keep running.
pub fn submit(app: &mut App, lookup: &MoodLookup, tx: &mpsc::Sender<AppEvent>) {
    let Some((request, mood)) = app.mood.begin_request() else {
        return;
    };
    debug!(request, mood = %mood, "spawning mood lookup");

    let lookup = lookup.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        let songs = lookup.lookup(&mood).await;
        let _ = tx.send(AppEvent::MoodResult { request, mood, songs }).await;
    });
}
