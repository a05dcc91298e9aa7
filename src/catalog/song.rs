use serde::{Deserialize, Serialize};

/// A single track as the player knows it.
///
/// Descriptors are built once (static tables or a mood reply) and only ever
/// cloned afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongDescriptor {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub album: String,
    pub duration_seconds: u32,
    pub cover_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    /// Why this track matched a mood prompt
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood_note: Option<String>,
}

impl SongDescriptor {
    pub fn new(
        id: &str,
        title: &str,
        artist: &str,
        album: &str,
        duration_seconds: u32,
        cover_url: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            artist: artist.to_string(),
            album: album.to_string(),
            // Zero-length tracks would never finish a tick cycle
            duration_seconds: duration_seconds.max(1),
            cover_url: cover_url.to_string(),
            genre: None,
            mood_note: None,
        }
    }

    pub fn with_genre(mut self, genre: &str) -> Self {
        self.genre = Some(genre.to_string());
        self
    }

    pub fn with_mood_note(mut self, note: &str) -> Self {
        self.mood_note = Some(note.to_string());
        self
    }

    pub fn duration(&self) -> std::time::Duration {
        std::time::Duration::from_secs(u64::from(self.duration_seconds))
    }
}

/// `m:ss`, matching the player bar clock
pub fn format_time(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0), "0:00");
        assert_eq!(format_time(59), "0:59");
        assert_eq!(format_time(243), "4:03");
        assert_eq!(format_time(600), "10:00");
    }

    #[test]
    fn test_zero_duration_is_clamped() {
        let song = SongDescriptor::new("x", "T", "A", "B", 0, "");
        assert_eq!(song.duration_seconds, 1);
    }

    #[test]
    fn test_optional_fields_are_skipped_in_json() {
        let song = SongDescriptor::new("1", "Dreams", "Fleetwood Mac", "Rumours", 257, "u");
        let json = serde_json::to_string(&song).unwrap();
        assert!(!json.contains("genre"));
        assert!(!json.contains("mood_note"));

        let tagged = song.with_genre("Rock");
        let json = serde_json::to_string(&tagged).unwrap();
        assert!(json.contains("\"genre\":\"Rock\""));
    }
}
