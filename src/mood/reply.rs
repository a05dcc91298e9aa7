//! Validation and mapping of the generator's JSON reply.

use rand::Rng;
use serde::Deserialize;
use serde_json::Value;

use crate::catalog::SongDescriptor;
use crate::error::{LookupError, Result};

/// Synthesised durations fall in `[MIN, MIN + SPREAD)` seconds.
const MIN_DURATION_SECS: u32 = 180;
const DURATION_SPREAD_SECS: u32 = 120;

/// One record of the reply, exactly as the response schema describes it.
#[derive(Debug, Deserialize)]
struct RawSong {
    title: String,
    artist: String,
    album: String,
    genre: String,
    #[serde(rename = "moodReason", default)]
    mood_reason: Option<String>,
}

/// Turn reply text into descriptors.
///
/// `stamp_ms` seeds the ids (`ai-{stamp}-{index}`) so that every lookup in a
/// session produces fresh ones; `rng` picks durations.
pub fn parse_reply<R: Rng>(
    raw: &str,
    stamp_ms: u128,
    rng: &mut R,
) -> Result<Vec<SongDescriptor>> {
    let raw = raw.trim();
    let value: Value = if raw.is_empty() {
        Value::Array(Vec::new())
    } else {
        serde_json::from_str(raw)?
    };

    let Value::Array(items) = value else {
        return Err(LookupError::Schema("expected a JSON array of songs".into()));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let song: RawSong = serde_json::from_value(item)
                .map_err(|e| LookupError::Schema(format!("song {}: {}", index, e)))?;
            Ok(to_descriptor(song, index, stamp_ms, rng))
        })
        .collect()
}

fn to_descriptor<R: Rng>(
    song: RawSong,
    index: usize,
    stamp_ms: u128,
    rng: &mut R,
) -> SongDescriptor {
    let duration = MIN_DURATION_SECS + rng.random_range(0..DURATION_SPREAD_SECS);
    let id = format!("ai-{}-{}", stamp_ms, index);
    let cover = cover_url(&song.artist, index);

    let mut descriptor =
        SongDescriptor::new(&id, &song.title, &song.artist, &song.album, duration, &cover)
            .with_genre(&song.genre);
    if let Some(reason) = song.mood_reason.as_deref().filter(|r| !r.trim().is_empty()) {
        descriptor = descriptor.with_mood_note(reason);
    }
    descriptor
}

/// Placeholder artwork keyed on the artist, since the reply carries none.
pub fn cover_url(artist: &str, index: usize) -> String {
    let seed: String = artist.chars().filter(|c| !c.is_whitespace()).collect();
    format!("https://picsum.photos/seed/{}{}/300/300", seed, index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    const REPLY: &str = r#"[
        {"title": "Riders on the Storm", "artist": "The Doors", "album": "L.A. Woman", "genre": "Rock", "moodReason": "Rain sounds all the way through"},
        {"title": "Purple Rain", "artist": "Prince", "album": "Purple Rain", "genre": "Pop"}
    ]"#;

    #[test]
    fn test_maps_records_in_order() {
        let songs = parse_reply(REPLY, 1700000000000, &mut rng()).unwrap();
        assert_eq!(songs.len(), 2);

        assert_eq!(songs[0].id, "ai-1700000000000-0");
        assert_eq!(songs[0].title, "Riders on the Storm");
        assert_eq!(songs[0].genre.as_deref(), Some("Rock"));
        assert_eq!(songs[0].mood_note.as_deref(), Some("Rain sounds all the way through"));
        assert_eq!(songs[0].cover_url, "https://picsum.photos/seed/TheDoors0/300/300");

        assert_eq!(songs[1].id, "ai-1700000000000-1");
        assert!(songs[1].mood_note.is_none());
    }

    #[test]
    fn test_durations_in_range() {
        let mut rng = rng();
        for stamp in 0..50 {
            for song in parse_reply(REPLY, stamp, &mut rng).unwrap() {
                assert!((180..300).contains(&song.duration_seconds));
            }
        }
    }

    #[test]
    fn test_empty_text_is_empty_playlist() {
        assert!(parse_reply("", 1, &mut rng()).unwrap().is_empty());
        assert!(parse_reply("  \n", 1, &mut rng()).unwrap().is_empty());
        assert!(parse_reply("[]", 1, &mut rng()).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_json_is_malformed() {
        let err = parse_reply("[{\"title\": ", 1, &mut rng()).unwrap_err();
        assert!(matches!(err, LookupError::Malformed(_)));
    }

    #[test]
    fn test_missing_required_field_is_schema_error() {
        let reply = r#"[{"title": "A", "artist": "B", "album": "C"}]"#;
        let err = parse_reply(reply, 1, &mut rng()).unwrap_err();
        assert!(matches!(err, LookupError::Schema(ref msg) if msg.contains("genre")));
    }

    #[test]
    fn test_wrong_type_is_schema_error() {
        let reply = r#"[{"title": 12, "artist": "B", "album": "C", "genre": "D"}]"#;
        assert!(matches!(
            parse_reply(reply, 1, &mut rng()),
            Err(LookupError::Schema(_))
        ));
    }

    #[test]
    fn test_non_array_is_schema_error() {
        let reply = r#"{"title": "A", "artist": "B", "album": "C", "genre": "D"}"#;
        assert!(matches!(
            parse_reply(reply, 1, &mut rng()),
            Err(LookupError::Schema(_))
        ));
    }

    #[test]
    fn test_cover_url_strips_whitespace() {
        assert_eq!(
            cover_url("Kid LAROI &\tJustin Bieber", 3),
            "https://picsum.photos/seed/KidLAROI&JustinBieber3/300/300"
        );
    }
}
