//! Hand-picked media used when dynamic resolution yields nothing.

/// Ordered trigger word → URL table. Lookup order is declaration order.
pub struct CuratedTable {
    entries: &'static [(&'static str, &'static str)],
    default_trigger: &'static str,
}

impl CuratedTable {
    pub const fn new(
        entries: &'static [(&'static str, &'static str)],
        default_trigger: &'static str,
    ) -> Self {
        Self {
            entries,
            default_trigger,
        }
    }

    pub fn entries(&self) -> &'static [(&'static str, &'static str)] {
        self.entries
    }

    pub fn get(&self, trigger: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(key, _)| *key == trigger)
            .map(|(_, url)| *url)
    }

    /// URL for the default trigger, or the first entry if it is missing.
    pub fn default_url(&self) -> &'static str {
        self.get(self.default_trigger)
            .or_else(|| self.entries.first().map(|(_, url)| *url))
            .unwrap_or_default()
    }

    /// First trigger contained in the lower-cased prompt wins.
    pub fn lookup(&self, prompt: &str) -> &'static str {
        let prompt = prompt.to_lowercase();
        self.entries
            .iter()
            .find(|(key, _)| prompt.contains(key))
            .map(|(_, url)| *url)
            .unwrap_or_else(|| self.default_url())
    }
}

pub static VIDEO_TABLE: CuratedTable = CuratedTable::new(
    &[
        (
            "rain",
            "https://videos.pexels.com/video-files/856882/856882-hd_1920_1080_30fps.mp4",
        ),
        (
            "calm",
            "https://videos.pexels.com/video-files/856882/856882-hd_1920_1080_30fps.mp4",
        ),
        (
            "nature",
            "https://videos.pexels.com/video-files/1536322/1536322-hd_1920_1080_30fps.mp4",
        ),
        (
            "city",
            "https://videos.pexels.com/video-files/1722882/1722882-hd_1920_1080_30fps.mp4",
        ),
        (
            "study",
            "https://videos.pexels.com/video-files/3205634/3205634-hd_1920_1080_25fps.mp4",
        ),
        (
            "space",
            "https://videos.pexels.com/video-files/3129957/3129957-hd_1920_1080_25fps.mp4",
        ),
    ],
    "calm",
);

/// Prompt word → sound search phrase that finds loopable clips.
pub static SOUND_VOCABULARY: &[(&str, &str)] = &[
    ("gym", "gym ambience"),
    ("workout", "fitness gym"),
    ("rain", "rain loop"),
    ("thunderstorm", "thunderstorm loop"),
    ("forest", "forest birds loop"),
    ("nature", "nature ambience"),
    ("ocean", "ocean waves loop"),
    ("city", "city traffic ambience"),
    ("cafe", "coffee shop ambience"),
    ("study", "library ambience"),
    ("party", "party crowd ambience"),
];

pub const FALLBACK_AUDIO_URL: &str =
    "https://cdn.freesound.org/previews/532/532299_11634568-lq.mp3";

pub fn sound_search_phrase(word: &str) -> Option<&'static str> {
    SOUND_VOCABULARY
        .iter()
        .find(|(key, _)| *key == word)
        .map(|(_, phrase)| *phrase)
}
