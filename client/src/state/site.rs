//! Language and navigation store.
//!
//! DESIGN
//! ======
//! One `SiteState` lives in an `RwSignal` provided at the app root. The
//! language starts unset, which shows the selection screen; it is never
//! persisted, so a reload starts over.
//!
//! Sections are either anchors on the home page (scrolled into view) or
//! modal panels. At most one modal is open: opening another replaces it, and
//! choosing an anchor closes it.

#[cfg(test)]
#[path = "site_test.rs"]
mod site_test;

use crate::i18n::{Language, Tr};

/// Named content regions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Home,
    Couple,
    Story,
    Sumuhurtham,
    Events,
    OurGallery,
    Support,
    Messages,
    PhotoShare,
    Rsvp,
}

impl Section {
    /// Anchor sections in nav-bar order.
    pub const NAV: [Self; 7] = [
        Self::Home,
        Self::Couple,
        Self::Story,
        Self::Sumuhurtham,
        Self::Events,
        Self::OurGallery,
        Self::Support,
    ];

    /// Modal panels in floating-button order.
    pub const PANELS: [Self; 3] = [Self::Messages, Self::PhotoShare, Self::Rsvp];

    /// DOM id / nav id of the section.
    pub fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Couple => "couple",
            Self::Story => "story",
            Self::Sumuhurtham => "sumuhurtham",
            Self::Events => "events",
            Self::OurGallery => "our-gallery",
            Self::Support => "support",
            Self::Messages => "messages",
            Self::PhotoShare => "photo-share",
            Self::Rsvp => "rsvp",
        }
    }

    pub fn is_modal(self) -> bool {
        matches!(self, Self::Messages | Self::PhotoShare | Self::Rsvp)
    }

    pub fn label(self) -> Tr {
        match self {
            Self::Home => Tr::new("Home", "హోమ్"),
            Self::Couple => Tr::new("Couple", "జంట"),
            Self::Story => Tr::new("Our Story", "మా కథ"),
            Self::Sumuhurtham => Tr::new("Sumuhurtham", "సుముహుర్తం"),
            Self::Events => Tr::new("Events", "కార్యక్రమాలు"),
            Self::OurGallery => Tr::new("Gallery", "గ్యాలరీ"),
            Self::Support => Tr::new("Contact", "సంప్రదించండి"),
            Self::Messages => Tr::new("Messages", "సందేశాలు"),
            Self::PhotoShare => Tr::new("Share Photos", "ఫోటోలు షేర్ చేయండి"),
            Self::Rsvp => Tr::same("RSVP"),
        }
    }
}

/// What the shell must do after a section is selected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavAction {
    /// Scroll the element with this id into view.
    ScrollTo(&'static str),
    /// Show this panel as the overlay.
    OpenModal(Section),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SiteState {
    pub language: Option<Language>,
    /// Highlighted nav entry.
    pub active: Section,
    /// Open overlay panel, if any.
    pub modal: Option<Section>,
    pub menu_open: bool,
    /// Loading splash shown right after the first language choice.
    pub splash: bool,
}

impl SiteState {
    pub fn choose_language(&mut self, lang: Language) {
        if self.language.is_none() {
            self.splash = true;
        }
        self.language = Some(lang);
    }

    /// Swap English and Telugu. From unset, picks English.
    pub fn toggle_language(&mut self) {
        let next = self.language.map_or(Language::English, Language::other);
        self.choose_language(next);
    }

    /// Back to the language-selection screen.
    pub fn reset_language(&mut self) {
        self.language = None;
        self.modal = None;
        self.menu_open = false;
        self.splash = false;
    }

    pub fn select_section(&mut self, section: Section) -> NavAction {
        self.menu_open = false;
        self.active = section;
        if section.is_modal() {
            self.modal = Some(section);
            NavAction::OpenModal(section)
        } else {
            self.modal = None;
            NavAction::ScrollTo(section.id())
        }
    }

    pub fn close_modal(&mut self) {
        if let Some(panel) = self.modal.take() {
            if self.active == panel {
                self.active = Section::Home;
            }
        }
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn dismiss_splash(&mut self) {
        self.splash = false;
    }

    /// Language for rendering content; English while unset.
    pub fn lang(&self) -> Language {
        self.language.unwrap_or_default()
    }
}
