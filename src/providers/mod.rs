//! Media search providers.
//!
//! - Pexels: stock video search
//! - Freesound: sound effect search

mod freesound;
mod pexels;
mod provider;

pub use freesound::{FreesoundClient, FREESOUND_API_BASE, SOUND_DURATION_FILTER, SOUND_FIELDS};
pub use pexels::{PexelsClient, PEXELS_API_BASE, VIDEO_ORIENTATION, VIDEO_PAGE_SIZE, VIDEO_SIZE};
pub use provider::{
    AudioSearchProvider, ProviderError, SoundPreviews, SoundResult, VideoCandidate,
    VideoSearchProvider, VideoVariant,
};
