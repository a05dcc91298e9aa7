//! Mood DJ: free text in, a synthesised playlist out.

pub mod gemini;
pub mod reply;

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use futures::future::BoxFuture;
use tracing::{info, warn};

use crate::catalog::SongDescriptor;
use crate::error::Result;

pub use gemini::GeminiGenerator;
pub use reply::parse_reply;

pub const SUGGESTIONS: [&str; 4] = [
    "Late night coding 💻",
    "Running in the rain 🏃‍♂️",
    "Cooking a romantic dinner 🍝",
    "Road trip through the desert 🌵",
];

/// The external text generator. Returns the raw reply text.
pub trait PlaylistGenerator: Send + Sync {
    fn generate<'a>(&'a self, prompt: &'a str) -> BoxFuture<'a, Result<String>>;
}

pub fn build_prompt(mood: &str) -> String {
    format!(
        "Generate a playlist of 5 songs that perfectly match the mood or activity: \"{}\".\n\
         Make up realistic sounding songs if real ones aren't available, but try to use real popular songs.\n\
         Provide a diverse mix.",
        mood.trim()
    )
}

/// Mood lookups with all failures folded into "no results".
#[derive(Clone)]
pub struct MoodLookup {
    generator: Arc<dyn PlaylistGenerator>,
}

impl MoodLookup {
    pub fn new(generator: Arc<dyn PlaylistGenerator>) -> Self {
        Self { generator }
    }

    /// Never fails: errors are logged and come back as an empty playlist.
    pub async fn lookup(&self, mood: &str) -> Vec<SongDescriptor> {
        if mood.trim().is_empty() {
            return Vec::new();
        }
        match self.try_lookup(mood).await {
            Ok(songs) => {
                info!(mood, count = songs.len(), "mood playlist ready");
                songs
            }
            Err(e) => {
                warn!(mood, error = %e, "mood lookup failed");
                Vec::new()
            }
        }
    }

    async fn try_lookup(&self, mood: &str) -> Result<Vec<SongDescriptor>> {
        let prompt = build_prompt(mood);
        let raw = self.generator.generate(&prompt).await?;
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default();
        parse_reply(&raw, stamp, &mut rand::rng())
    }
}
