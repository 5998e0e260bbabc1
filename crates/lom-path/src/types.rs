//! Type definitions for canonical object paths.

use std::fmt;

/// An indexed collection token. In a canonical path it is always followed by
/// a non-negative integer index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Collection {
    Tracks,
    ReturnTracks,
    Scenes,
    ClipSlots,
    Devices,
    Clips,
    Chains,
    ReturnChains,
    DrumPads,
    Parameters,
    Sends,
    ArrangementClips,
    CuePoints,
    VisibleTracks,
    ControlSurfaces,
    Grooves,
    Components,
}

impl Collection {
    /// Look up a collection by its path token.
    pub fn from_token(token: &str) -> Option<Self> {
        let collection = match token {
            "tracks" => Collection::Tracks,
            "return_tracks" => Collection::ReturnTracks,
            "scenes" => Collection::Scenes,
            "clip_slots" => Collection::ClipSlots,
            "devices" => Collection::Devices,
            "clips" => Collection::Clips,
            "chains" => Collection::Chains,
            "return_chains" => Collection::ReturnChains,
            "drum_pads" => Collection::DrumPads,
            "parameters" => Collection::Parameters,
            "sends" => Collection::Sends,
            "arrangement_clips" => Collection::ArrangementClips,
            "cue_points" => Collection::CuePoints,
            "visible_tracks" => Collection::VisibleTracks,
            "control_surfaces" => Collection::ControlSurfaces,
            "grooves" => Collection::Grooves,
            "components" => Collection::Components,
            _ => return None,
        };
        Some(collection)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Tracks => "tracks",
            Collection::ReturnTracks => "return_tracks",
            Collection::Scenes => "scenes",
            Collection::ClipSlots => "clip_slots",
            Collection::Devices => "devices",
            Collection::Clips => "clips",
            Collection::Chains => "chains",
            Collection::ReturnChains => "return_chains",
            Collection::DrumPads => "drum_pads",
            Collection::Parameters => "parameters",
            Collection::Sends => "sends",
            Collection::ArrangementClips => "arrangement_clips",
            Collection::CuePoints => "cue_points",
            Collection::VisibleTracks => "visible_tracks",
            Collection::ControlSurfaces => "control_surfaces",
            Collection::Grooves => "grooves",
            Collection::Components => "components",
        }
    }
}

/// The first token of a canonical path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Root {
    LiveSet,
    LiveApp,
    ThisDevice,
    /// `control_surfaces N`
    ControlSurface(u32),
}

impl fmt::Display for Root {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Root::LiveSet => f.write_str("live_set"),
            Root::LiveApp => f.write_str("live_app"),
            Root::ThisDevice => f.write_str("this_device"),
            Root::ControlSurface(index) => write!(f, "control_surfaces {index}"),
        }
    }
}

/// A single step below the root.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// `tracks 0`, `devices 2`, ...
    Indexed(Collection, u32),
    /// `master_track`
    MasterTrack,
    /// Any other property step: `view`, `mixer_device`, `clip`, ...
    Named(String),
    /// An indexed step outside the known collections, e.g. `take_lanes 0`.
    Other(String, u32),
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Indexed(collection, index) => write!(f, "{} {index}", collection.as_str()),
            Segment::MasterTrack => f.write_str("master_track"),
            Segment::Named(name) => f.write_str(name),
            Segment::Other(name, index) => write!(f, "{name} {index}"),
        }
    }
}

/// Which kind of track a path lives under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackCategory {
    Regular,
    Return,
    Master,
}

impl TrackCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrackCategory::Regular => "regular",
            TrackCategory::Return => "return",
            TrackCategory::Master => "master",
        }
    }
}

impl fmt::Display for TrackCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every positional index a path carries, projected in one go.
///
/// `None` means the path has no such dimension. Zero is a real index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PathIndices {
    pub track_index: Option<u32>,
    pub return_track_index: Option<u32>,
    pub category: Option<TrackCategory>,
    pub scene_index: Option<u32>,
    pub clip_slot_index: Option<u32>,
    pub device_index: Option<u32>,
}

/// A parsed canonical path: the root plus its segments, outer to inner.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LomPath {
    pub root: Root,
    pub segments: Vec<Segment>,
}

impl LomPath {
    pub fn new(root: Root, segments: Vec<Segment>) -> Self {
        Self { root, segments }
    }

    /// Number of segments below the root.
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Index following the first occurrence of `collection`.
    pub fn first_index(&self, collection: Collection) -> Option<u32> {
        self.segments.iter().find_map(|segment| match segment {
            Segment::Indexed(c, index) if *c == collection => Some(*index),
            _ => None,
        })
    }

    /// Index following the last occurrence of `collection`.
    pub fn last_index(&self, collection: Collection) -> Option<u32> {
        self.segments.iter().rev().find_map(|segment| match segment {
            Segment::Indexed(c, index) if *c == collection => Some(*index),
            _ => None,
        })
    }

    pub fn contains(&self, collection: Collection) -> bool {
        self.first_index(collection).is_some()
    }

    pub fn is_master(&self) -> bool {
        self.segments.contains(&Segment::MasterTrack)
    }

    pub fn track_index(&self) -> Option<u32> {
        self.first_index(Collection::Tracks)
    }

    pub fn return_track_index(&self) -> Option<u32> {
        self.first_index(Collection::ReturnTracks)
    }

    pub fn scene_index(&self) -> Option<u32> {
        self.first_index(Collection::Scenes)
    }

    pub fn clip_slot_index(&self) -> Option<u32> {
        self.first_index(Collection::ClipSlots)
    }

    pub fn clip_index(&self) -> Option<u32> {
        self.first_index(Collection::Clips)
    }

    /// Innermost device: racks nest `devices N chains M devices K`.
    pub fn device_index(&self) -> Option<u32> {
        self.last_index(Collection::Devices)
    }

    pub fn chain_index(&self) -> Option<u32> {
        self.last_index(Collection::Chains)
    }

    pub fn parameter_index(&self) -> Option<u32> {
        self.last_index(Collection::Parameters)
    }

    /// Master wins over return, return over regular.
    pub fn category(&self) -> Option<TrackCategory> {
        if self.is_master() {
            Some(TrackCategory::Master)
        } else if self.contains(Collection::ReturnTracks) {
            Some(TrackCategory::Return)
        } else if self.contains(Collection::Tracks) {
            Some(TrackCategory::Regular)
        } else {
            None
        }
    }

    pub fn indices(&self) -> PathIndices {
        PathIndices {
            track_index: self.track_index(),
            return_track_index: self.return_track_index(),
            category: self.category(),
            scene_index: self.scene_index(),
            clip_slot_index: self.clip_slot_index(),
            device_index: self.device_index(),
        }
    }
}

impl fmt::Display for LomPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.root)?;
        for segment in &self.segments {
            write!(f, " {segment}")?;
        }
        Ok(())
    }
}
