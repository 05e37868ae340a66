//! Sidebar navigation state: which dashboard section is visible.
//!
//! DESIGN
//! ======
//! Exactly one section is active at a time, so the active section is a single
//! value rather than per-section flags. Selection is in-memory only and resets
//! to Home on reload unless the URL names a tab.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

/// Content sections reachable from the sidebar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Home,
    Upload,
    Messages,
    Saved,
}

impl Section {
    pub const ALL: [Section; 4] = [Section::Home, Section::Upload, Section::Messages, Section::Saved];

    /// DOM id / `data-target` value of the section.
    pub fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Upload => "upload",
            Self::Messages => "messages",
            Self::Saved => "saved",
        }
    }

    /// Sidebar link label; also the topbar title once selected.
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Upload => "Upload",
            Self::Messages => "Messages",
            Self::Saved => "Saved",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SidebarState {
    pub active: Section,
    pub title: String,
}

impl Default for SidebarState {
    fn default() -> Self {
        Self::opened_at(Section::Home)
    }
}

impl SidebarState {
    pub fn opened_at(section: Section) -> Self {
        Self { active: section, title: section.label().to_owned() }
    }

    /// Activate the section whose id is `target` and retitle the topbar with
    /// the clicked link's trimmed `label`.
    ///
    /// Returns `false` and changes nothing when no section has that id.
    pub fn select(&mut self, target: &str, label: &str) -> bool {
        let Some(section) = Section::from_id(target) else {
            return false;
        };
        self.active = section;
        self.title = label.trim().to_owned();
        true
    }

    pub fn is_active(&self, section: Section) -> bool {
        self.active == section
    }
}
