//! The media-playback capability the controller drives, and the decoder that
//! turns polled player state into progress/duration/end notifications.

use serde::Deserialize;

use crate::playlist::{TransportAction, Transition};

/// Anything that can play a video by id: the embedded player, or a test double.
pub trait PlaybackBackend {
    fn load(&mut self, media_id: &str, autoplay: bool);
    fn set_playing(&mut self, playing: bool);
    /// Seek to a fraction of the total duration.
    fn seek_to(&mut self, fraction: f64);
}

/// Apply the player-facing half of a reducer step.
pub fn forward<B: PlaybackBackend + ?Sized>(backend: &mut B, transition: &Transition) {
    if let Some(fraction) = transition.seek {
        backend.seek_to(fraction);
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlaybackEvent {
    Progress(f64),
    Duration(f64),
    Ended,
}

impl From<PlaybackEvent> for TransportAction {
    fn from(event: PlaybackEvent) -> Self {
        match event {
            PlaybackEvent::Progress(played) => TransportAction::Progress(played),
            PlaybackEvent::Duration(seconds) => TransportAction::Duration(seconds),
            PlaybackEvent::Ended => TransportAction::Ended,
        }
    }
}

/// Raw player state as reported by the embedded player on each poll.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct PlayerSnapshot {
    #[serde(default)]
    pub media_id: Option<String>,
    #[serde(default)]
    pub current_time: f64,
    #[serde(default)]
    pub duration: f64,
    #[serde(default)]
    pub ended: bool,
}

/// Minimum change before a new duration is reported.
const DURATION_EPSILON: f64 = 0.5;

#[derive(Debug, Clone, Default)]
pub struct EventDecoder {
    last_duration: Option<f64>,
    last_media_id: Option<String>,
    ended_for: Option<String>,
}

impl EventDecoder {
    pub fn decode(&mut self, snapshot: &PlayerSnapshot) -> Vec<PlaybackEvent> {
        let mut events = Vec::new();

        if snapshot.media_id != self.last_media_id {
            self.last_media_id = snapshot.media_id.clone();
            self.last_duration = None;
        }

        let duration = snapshot.duration;
        let has_duration = duration.is_finite() && duration > 0.0;
        if has_duration {
            let changed = self
                .last_duration
                .map(|last| (duration - last).abs() > DURATION_EPSILON)
                .unwrap_or(true);
            if changed {
                self.last_duration = Some(duration);
                events.push(PlaybackEvent::Duration(duration));
            }

            // Measured against the duration the controller was last told about.
            let reference = self.last_duration.unwrap_or(duration);
            let time = snapshot.current_time;
            if time.is_finite() {
                events.push(PlaybackEvent::Progress((time / reference).clamp(0.0, 1.0)));
            }
        }

        if snapshot.ended {
            if snapshot.media_id.is_some() && self.ended_for != snapshot.media_id {
                self.ended_for = snapshot.media_id.clone();
                events.push(PlaybackEvent::Ended);
            }
        } else {
            self.ended_for = None;
        }

        events
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::{Call, RecordingBackend};
    use super::*;
    use crate::playlist::test_support::items;
    use crate::playlist::{Playlist, Radio};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn snapshot(media_id: &str, current_time: f64, duration: f64, ended: bool) -> PlayerSnapshot {
        PlayerSnapshot {
            media_id: Some(media_id.to_string()),
            current_time,
            duration,
            ended,
        }
    }

    #[test]
    fn duration_is_reported_once_per_item() {
        let mut decoder = EventDecoder::default();
        let first = decoder.decode(&snapshot("A", 0.0, 200.0, false));
        assert_eq!(
            first,
            vec![PlaybackEvent::Duration(200.0), PlaybackEvent::Progress(0.0)]
        );

        let second = decoder.decode(&snapshot("A", 50.0, 200.2, false));
        assert_eq!(second, vec![PlaybackEvent::Progress(0.25)]);

        let next_item = decoder.decode(&snapshot("B", 0.0, 200.0, false));
        assert_eq!(next_item[0], PlaybackEvent::Duration(200.0));
    }

    #[test]
    fn no_progress_before_metadata_loads() {
        let mut decoder = EventDecoder::default();
        assert!(decoder.decode(&snapshot("A", 0.0, 0.0, false)).is_empty());
        assert!(decoder.decode(&snapshot("A", 1.0, f64::NAN, false)).is_empty());
    }

    #[test]
    fn ended_fires_exactly_once_per_item() {
        let mut decoder = EventDecoder::default();
        let ended = |events: &[PlaybackEvent]| {
            events
                .iter()
                .filter(|e| **e == PlaybackEvent::Ended)
                .count()
        };

        assert_eq!(ended(&decoder.decode(&snapshot("A", 200.0, 200.0, true))), 1);
        assert_eq!(ended(&decoder.decode(&snapshot("A", 200.0, 200.0, true))), 0);
        assert_eq!(ended(&decoder.decode(&snapshot("B", 180.0, 180.0, true))), 1);

        decoder.decode(&snapshot("B", 0.0, 180.0, false));
        assert_eq!(ended(&decoder.decode(&snapshot("B", 180.0, 180.0, true))), 1);
    }

    #[test]
    fn events_map_to_transport_actions() {
        assert_eq!(
            TransportAction::from(PlaybackEvent::Progress(0.5)),
            TransportAction::Progress(0.5)
        );
        assert_eq!(
            TransportAction::from(PlaybackEvent::Ended),
            TransportAction::Ended
        );
    }

    #[test]
    fn seeks_are_forwarded_to_the_backend() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut radio = Radio::new(Playlist::new(items(&["A", "B"]), 0));
        let mut backend = RecordingBackend::default();

        for action in [
            TransportAction::SeekBegin,
            TransportAction::SeekMove(0.2),
            TransportAction::Progress(0.9),
            TransportAction::SeekMove(0.4),
            TransportAction::SeekEnd(0.5),
            TransportAction::Next,
        ] {
            let transition = radio.apply(action, &mut rng);
            forward(&mut backend, &transition);
        }

        assert_eq!(
            backend.calls,
            vec![
                Call::SeekTo(0.2),
                Call::SeekTo(0.4),
                Call::SeekTo(0.5),
                Call::SeekTo(0.0)
            ]
        );
    }

    #[test]
    fn single_item_loop_restarts_after_ending() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut radio = Radio::new(Playlist::new(items(&["A"]), 0));
        radio.playback.is_playing = true;
        let mut decoder = EventDecoder::default();
        let mut backend = RecordingBackend::default();

        decoder.decode(&snapshot("A", 10.0, 200.0, false));
        for event in decoder.decode(&snapshot("A", 200.0, 200.0, true)) {
            let transition = radio.apply(event.into(), &mut rng);
            forward(&mut backend, &transition);
        }
        assert_eq!(backend.calls, vec![Call::SeekTo(0.0)]);

        // Once the rewind takes, the next ending is reported again.
        decoder.decode(&snapshot("A", 0.1, 200.0, false));
        let again = decoder.decode(&snapshot("A", 200.0, 200.0, true));
        assert!(again.contains(&PlaybackEvent::Ended));
    }
}
