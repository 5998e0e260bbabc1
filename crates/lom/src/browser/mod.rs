//! Read-only browser tree and hotswap relations.
//!
//! Every top-level category is an independent root. Children are pulled one
//! at a time so large libraries are never materialized.

mod node;
mod relation;

pub use node::{BrowserNode, ChildSource, Children};
pub use relation::{contains, relation_between, Relation};

use std::fmt;

use tracing::{debug, warn};

/// Named top-level browser categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BrowserCategory {
    Instruments,
    AudioEffects,
    MidiEffects,
    Drums,
    Sounds,
    Samples,
    Clips,
    Plugins,
    MaxForLive,
    Packs,
    UserLibrary,
    CurrentProject,
}

impl BrowserCategory {
    pub const ALL: [BrowserCategory; 12] = [
        BrowserCategory::Instruments,
        BrowserCategory::AudioEffects,
        BrowserCategory::MidiEffects,
        BrowserCategory::Drums,
        BrowserCategory::Sounds,
        BrowserCategory::Samples,
        BrowserCategory::Clips,
        BrowserCategory::Plugins,
        BrowserCategory::MaxForLive,
        BrowserCategory::Packs,
        BrowserCategory::UserLibrary,
        BrowserCategory::CurrentProject,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BrowserCategory::Instruments => "instruments",
            BrowserCategory::AudioEffects => "audio_effects",
            BrowserCategory::MidiEffects => "midi_effects",
            BrowserCategory::Drums => "drums",
            BrowserCategory::Sounds => "sounds",
            BrowserCategory::Samples => "samples",
            BrowserCategory::Clips => "clips",
            BrowserCategory::Plugins => "plugins",
            BrowserCategory::MaxForLive => "max_for_live",
            BrowserCategory::Packs => "packs",
            BrowserCategory::UserLibrary => "user_library",
            BrowserCategory::CurrentProject => "current_project",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == name)
    }
}

impl fmt::Display for BrowserCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The host's browser subsystem.
pub trait BrowserHost {
    fn category(&self, category: BrowserCategory) -> Option<BrowserNode>;
    fn user_folders(&self) -> Vec<BrowserNode>;
    fn colors(&self) -> Vec<BrowserNode>;
    /// Current hotswap target. Changes with host UI state.
    fn hotswap_target(&self) -> Option<BrowserNode>;
    fn load_item(&self, item: &BrowserNode);
    fn preview_item(&self, item: &BrowserNode);
    fn stop_preview(&self);
}

/// Browser facade: category roots, best-effort actions and hotswap relations.
pub struct Browser<'b, B: BrowserHost> {
    host: &'b B,
}

impl<'b, B: BrowserHost> Browser<'b, B> {
    pub fn new(host: &'b B) -> Self {
        Self { host }
    }

    pub fn category(&self, category: BrowserCategory) -> Option<BrowserNode> {
        self.host.category(category)
    }

    /// Every category root the host currently provides.
    pub fn roots(&self) -> Vec<BrowserNode> {
        BrowserCategory::ALL
            .into_iter()
            .filter_map(|c| self.host.category(c))
            .collect()
    }

    pub fn user_folders(&self) -> Vec<BrowserNode> {
        self.host.user_folders()
    }

    pub fn colors(&self) -> Vec<BrowserNode> {
        self.host.colors()
    }

    /// Read fresh on every call.
    pub fn hotswap_target(&self) -> Option<BrowserNode> {
        self.host.hotswap_target()
    }

    pub fn relation_to_hotswap_target(&self, item: &BrowserNode) -> Relation {
        let target = self.host.hotswap_target();
        let relation = relation_between(item, target.as_ref());
        debug!(uri = %item.uri, relation = %relation, "hotswap relation");
        relation
    }

    pub fn load_item(&self, item: &BrowserNode) {
        if !item.is_loadable {
            warn!(uri = %item.uri, "loading an item the host marks as not loadable");
        }
        self.host.load_item(item);
    }

    pub fn preview_item(&self, item: &BrowserNode) {
        debug!(uri = %item.uri, "preview");
        self.host.preview_item(item);
    }

    pub fn stop_preview(&self) {
        self.host.stop_preview();
    }
}
