use rand::Rng;

use super::Playlist;
use crate::utils::format_time;

/// Largest value the scrub control produces; played fraction stays below 1.
pub const MAX_PLAYED_FRACTION: f64 = 0.999999;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlaybackState {
    pub is_playing: bool,
    pub played_fraction: f64,
    pub duration_seconds: f64,
    pub is_seeking: bool,
}

impl PlaybackState {
    pub fn elapsed_seconds(&self) -> f64 {
        self.played_fraction * self.duration_seconds
    }

    pub fn elapsed_label(&self) -> String {
        format_time(self.elapsed_seconds())
    }

    pub fn duration_label(&self) -> String {
        format_time(self.duration_seconds)
    }
}

/// Every input the controller reacts to, from the transport view or the player.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransportAction {
    TogglePlay,
    Next,
    Previous,
    Ended,
    Shuffle,
    SeekBegin,
    SeekMove(f64),
    SeekEnd(f64),
    Progress(f64),
    Duration(f64),
}

/// Side effects a reducer step asks the caller to carry out.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Transition {
    pub position_changed: bool,
    pub seek: Option<f64>,
}

fn clamp_fraction(value: f64) -> Option<f64> {
    value
        .is_finite()
        .then(|| value.clamp(0.0, MAX_PLAYED_FRACTION))
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Radio {
    pub playlist: Playlist,
    pub playback: PlaybackState,
}

impl Radio {
    pub fn new(playlist: Playlist) -> Self {
        Self {
            playlist,
            playback: PlaybackState::default(),
        }
    }

    pub fn apply<R: Rng + ?Sized>(&mut self, action: TransportAction, rng: &mut R) -> Transition {
        let mut transition = Transition::default();
        match action {
            TransportAction::TogglePlay => {
                self.playback.is_playing = !self.playback.is_playing;
            }
            TransportAction::Next | TransportAction::Ended => {
                transition.position_changed = self.playlist.next();
            }
            TransportAction::Previous => {
                transition.position_changed = self.playlist.previous();
            }
            TransportAction::Shuffle => {
                transition.position_changed = self.playlist.reshuffle(rng);
            }
            TransportAction::SeekBegin => {
                self.playback.is_seeking = true;
            }
            TransportAction::SeekMove(value) => {
                if self.playback.is_seeking {
                    if let Some(value) = clamp_fraction(value) {
                        self.playback.played_fraction = value;
                        transition.seek = Some(value);
                    }
                }
            }
            TransportAction::SeekEnd(value) => {
                let was_seeking = std::mem::replace(&mut self.playback.is_seeking, false);
                if let Some(value) = clamp_fraction(value) {
                    // A drag already settled here; the trailing `change` adds nothing.
                    if was_seeking || value != self.playback.played_fraction {
                        self.playback.played_fraction = value;
                        transition.seek = Some(value);
                    }
                }
            }
            TransportAction::Progress(value) => {
                if !self.playback.is_seeking {
                    if let Some(value) = clamp_fraction(value) {
                        self.playback.played_fraction = value;
                    }
                }
            }
            TransportAction::Duration(seconds) => {
                if seconds.is_finite() && seconds >= 0.0 {
                    self.playback.duration_seconds = seconds;
                }
            }
        }

        // The new item may be the same video (one-item list, repeated link), in
        // which case the player is not reloaded and has to be rewound.
        if transition.position_changed {
            self.playback.played_fraction = 0.0;
            transition.seek = Some(0.0);
        }
        transition
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playlist::test_support::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn radio(ids: &[&str], position: usize) -> Radio {
        Radio::new(Playlist::new(items(ids), position))
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(11)
    }

    #[test]
    fn toggle_flips_is_playing() {
        let mut radio = radio(&["A"], 0);
        radio.apply(TransportAction::TogglePlay, &mut rng());
        assert!(radio.playback.is_playing);
        radio.apply(TransportAction::TogglePlay, &mut rng());
        assert!(!radio.playback.is_playing);
    }

    #[test]
    fn ended_matches_next_and_keeps_play_state() {
        let mut by_next = radio(&["A", "B", "C"], 2);
        let mut by_end = by_next.clone();
        by_end.playback.is_playing = true;

        let t_next = by_next.apply(TransportAction::Next, &mut rng());
        let t_end = by_end.apply(TransportAction::Ended, &mut rng());

        assert_eq!(by_next.playlist.position(), by_end.playlist.position());
        assert_eq!(by_end.playlist.position(), 0);
        assert!(t_next.position_changed && t_end.position_changed);
        assert!(by_end.playback.is_playing);
        assert!(!by_next.playback.is_playing);
    }

    #[test]
    fn next_three_times_returns_home() {
        let mut radio = radio(&["A", "B", "C"], 1);
        for _ in 0..3 {
            radio.apply(TransportAction::Next, &mut rng());
        }
        assert_eq!(radio.playlist.position(), 1);
        for _ in 0..3 {
            radio.apply(TransportAction::Previous, &mut rng());
        }
        assert_eq!(radio.playlist.position(), 1);
    }

    #[test]
    fn progress_is_ignored_while_seeking() {
        let mut radio = radio(&["A"], 0);
        radio.apply(TransportAction::Progress(0.25), &mut rng());
        assert_eq!(radio.playback.played_fraction, 0.25);

        radio.apply(TransportAction::SeekBegin, &mut rng());
        for p in [0.0, 0.5, 0.9, 0.3] {
            radio.apply(TransportAction::Progress(p), &mut rng());
            assert_eq!(radio.playback.played_fraction, 0.25);
        }

        let t = radio.apply(TransportAction::SeekEnd(0.6), &mut rng());
        assert!(!radio.playback.is_seeking);
        assert_eq!(radio.playback.played_fraction, 0.6);
        assert_eq!(t.seek, Some(0.6));

        radio.apply(TransportAction::Progress(0.61), &mut rng());
        assert_eq!(radio.playback.played_fraction, 0.61);
    }

    #[test]
    fn seek_move_forwards_every_value_while_dragging() {
        let mut radio = radio(&["A"], 0);

        let idle = radio.apply(TransportAction::SeekMove(0.4), &mut rng());
        assert_eq!(idle.seek, None);
        assert_eq!(radio.playback.played_fraction, 0.0);

        radio.apply(TransportAction::SeekBegin, &mut rng());
        let t = radio.apply(TransportAction::SeekMove(0.4), &mut rng());
        assert_eq!(t.seek, Some(0.4));
        assert_eq!(radio.playback.played_fraction, 0.4);
        assert!(radio.playback.is_seeking);
    }

    #[test]
    fn out_of_range_values_are_clamped_and_nan_ignored() {
        let mut radio = radio(&["A"], 0);
        radio.apply(TransportAction::Progress(1.0), &mut rng());
        assert_eq!(radio.playback.played_fraction, MAX_PLAYED_FRACTION);
        radio.apply(TransportAction::Progress(-0.5), &mut rng());
        assert_eq!(radio.playback.played_fraction, 0.0);

        radio.apply(TransportAction::Progress(0.5), &mut rng());
        let t = radio.apply(TransportAction::SeekEnd(f64::NAN), &mut rng());
        assert_eq!(t.seek, None);
        assert_eq!(radio.playback.played_fraction, 0.5);
        assert!(!radio.playback.is_seeking);
    }

    #[test]
    fn next_onto_the_same_video_rewinds_the_player() {
        let mut radio = radio(&["A"], 0);
        radio.playback.is_playing = true;
        radio.apply(TransportAction::Progress(0.99), &mut rng());

        let t = radio.apply(TransportAction::Ended, &mut rng());
        assert!(t.position_changed);
        assert_eq!(t.seek, Some(0.0));
        assert_eq!(radio.playlist.current_media_id().as_deref(), Some("A"));
        assert_eq!(radio.playback.played_fraction, 0.0);
        assert!(radio.playback.is_playing);
    }

    #[test]
    fn release_then_change_seeks_once() {
        let mut radio = radio(&["A"], 0);
        radio.apply(TransportAction::SeekBegin, &mut rng());
        radio.apply(TransportAction::SeekMove(0.4), &mut rng());

        let released = radio.apply(TransportAction::SeekEnd(0.4), &mut rng());
        assert_eq!(released.seek, Some(0.4));
        let changed = radio.apply(TransportAction::SeekEnd(0.4), &mut rng());
        assert_eq!(changed.seek, None);
        assert_eq!(radio.playback.played_fraction, 0.4);
    }

    #[test]
    fn keyboard_change_without_drag_still_seeks() {
        let mut radio = radio(&["A"], 0);
        radio.apply(TransportAction::Progress(0.2), &mut rng());

        let t = radio.apply(TransportAction::SeekEnd(0.7), &mut rng());
        assert_eq!(t.seek, Some(0.7));
        assert_eq!(radio.playback.played_fraction, 0.7);
    }

    #[test]
    fn duration_report_sets_duration() {
        let mut radio = radio(&["A"], 0);
        radio.apply(TransportAction::Duration(245.5), &mut rng());
        assert_eq!(radio.playback.duration_seconds, 245.5);
        radio.apply(TransportAction::Duration(f64::NAN), &mut rng());
        radio.apply(TransportAction::Duration(-1.0), &mut rng());
        assert_eq!(radio.playback.duration_seconds, 245.5);
    }

    #[test]
    fn shuffle_resets_progress_and_bumps_generation() {
        let mut radio = radio(&["A", "B", "C", "D"], 0);
        radio.apply(TransportAction::Progress(0.7), &mut rng());

        let t = radio.apply(TransportAction::Shuffle, &mut rng());
        assert!(t.position_changed);
        assert_eq!(radio.playback.played_fraction, 0.0);
        assert_eq!(radio.playlist.generation(), 1);
        assert_eq!(radio.playlist.len(), 4);
    }

    #[test]
    fn empty_working_order_ignores_navigation() {
        let mut radio = Radio::default();
        radio.playback.played_fraction = 0.3;
        for action in [
            TransportAction::Next,
            TransportAction::Previous,
            TransportAction::Ended,
            TransportAction::Shuffle,
        ] {
            let t = radio.apply(action, &mut rng());
            assert!(!t.position_changed);
        }
        assert_eq!(radio.playback.played_fraction, 0.3);
    }

    #[test]
    fn labels_use_elapsed_and_duration() {
        let playback = PlaybackState {
            played_fraction: 0.5,
            duration_seconds: 130.0,
            ..Default::default()
        };
        assert_eq!(playback.elapsed_label(), "1:05");
        assert_eq!(playback.duration_label(), "2:10");
    }
}
