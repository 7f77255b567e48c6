//! Load-lifecycle state management
//!
//! Defines the engine's phase machine and its transitions. The engine moves
//! from nothing-loaded through image-shown to fully interactive, driven by
//! completion events from the image and region sources.

/// Lifecycle phase of the image map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No image yet; the surface has not been sized or drawn
    #[default]
    Unloaded,
    /// Base image drawn; region list pending or failed
    Loaded,
    /// Image and regions available; pointer events are live
    Interactive,
}

/// Completion events delivered by the asynchronous data sources
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadEvent {
    /// Image finished loading with its natural dimensions
    ImageLoaded,
    /// Image source failed; the map never activates
    ImageFailed,
    /// Region list arrived in input order
    RegionsLoaded,
    /// Region source failed; the view degrades to a static image
    RegionsFailed,
}

impl Phase {
    /// Applies a load event and returns the next phase
    ///
    /// Region-fetch failure is terminal for interactivity: the phase stays
    /// `Loaded` and no later event can advance it. Out-of-order events
    /// (regions before the image, anything after `Interactive`) leave the
    /// phase unchanged.
    pub fn next(self, event: LoadEvent) -> Phase {
        match (self, event) {
            (Phase::Unloaded, LoadEvent::ImageLoaded) => Phase::Loaded,
            (Phase::Unloaded, LoadEvent::ImageFailed) => Phase::Unloaded,
            (Phase::Loaded, LoadEvent::RegionsLoaded) => Phase::Interactive,
            (Phase::Loaded, LoadEvent::RegionsFailed) => Phase::Loaded,
            (phase, _) => phase,
        }
    }

    /// True once pointer events have any effect
    pub fn is_interactive(self) -> bool {
        matches!(self, Phase::Interactive)
    }
}
