//! Platform-dependent source identifiers.
//!
//! The same logical source (a display capture, a microphone, ...) has a
//! different identifier on each operating system. Translators pick the
//! identifier for the import's [`Platform`] from here.

use crate::base::Platform;

/// A logical source whose identifier depends on the platform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SourceKind {
    Text,
    Display,
    Window,
    Game,
    VideoDevice,
    AudioInput,
    AudioOutput,
}

impl SourceKind {
    pub const ALL: [SourceKind; 7] = [
        SourceKind::Text,
        SourceKind::Display,
        SourceKind::Window,
        SourceKind::Game,
        SourceKind::VideoDevice,
        SourceKind::AudioInput,
        SourceKind::AudioOutput,
    ];

    /// Primary identifier on `platform`, or `None` if the platform has no
    /// such source.
    pub fn id(self, platform: Platform) -> Option<&'static str> {
        self.native_ids(platform).first().copied()
    }

    /// Every identifier `platform` handles natively for this kind, primary
    /// first.
    pub fn native_ids(self, platform: Platform) -> &'static [&'static str] {
        use Platform::*;
        use SourceKind::*;

        match (self, platform) {
            (Text, Windows) => &["text_gdiplus"],
            (Text, MacOs | Linux) => &["text_ft2_source"],

            (Display, Windows) => &["monitor_capture"],
            (Display, MacOs) => &["display_capture"],
            (Display, Linux) => &["xshm_input"],

            (Window, Windows | MacOs) => &["window_capture"],
            (Window, Linux) => &["xcomposite_input"],

            (Game, Windows) => &["game_capture"],
            (Game, MacOs) => &["syphon-input"],
            (Game, Linux) => &[],

            (VideoDevice, Windows) => &["dshow_input"],
            (VideoDevice, MacOs) => &["av_capture_input"],
            (VideoDevice, Linux) => &["v4l2_input"],

            (AudioInput, Windows) => &["wasapi_input_capture"],
            (AudioInput, MacOs) => &["coreaudio_input_capture"],
            (AudioInput, Linux) => &["pulse_input_capture", "alsa_input_capture"],

            (AudioOutput, Windows) => &["wasapi_output_capture"],
            (AudioOutput, MacOs) => &["coreaudio_output_capture"],
            (AudioOutput, Linux) => &["pulse_output_capture", "jack_output_capture"],
        }
    }

    /// The kind an identifier from any platform belongs to.
    pub fn of_id(id: &str) -> Option<SourceKind> {
        Self::ALL.into_iter().find(|kind| {
            Platform::ALL
                .into_iter()
                .any(|platform| kind.native_ids(platform).contains(&id))
        })
    }

    pub fn is_native(self, id: &str, platform: Platform) -> bool {
        self.native_ids(platform).contains(&id)
    }
}

/// Settings key of the "show mouse cursor" flag of display captures.
pub fn cursor_key(platform: Platform) -> &'static str {
    match platform {
        Platform::Windows => "capture_cursor",
        Platform::MacOs | Platform::Linux => "show_cursor",
    }
}
