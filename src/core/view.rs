use std::fmt;

/// The dashboard's resource screens, in sidebar order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ViewType {
    #[default]
    Subscribers,
    Campaigns,
    Automations,
    Groups,
    Forms,
}

impl ViewType {
    pub const ALL: [ViewType; 5] = [
        ViewType::Subscribers,
        ViewType::Campaigns,
        ViewType::Automations,
        ViewType::Groups,
        ViewType::Forms,
    ];

    /// Position in the sidebar.
    pub fn index(self) -> usize {
        match self {
            ViewType::Subscribers => 0,
            ViewType::Campaigns => 1,
            ViewType::Automations => 2,
            ViewType::Groups => 3,
            ViewType::Forms => 4,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            ViewType::Subscribers => "Subscribers",
            ViewType::Campaigns => "Campaigns",
            ViewType::Automations => "Automations",
            ViewType::Groups => "Groups",
            ViewType::Forms => "Forms",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ViewType::Subscribers => "◉",
            ViewType::Campaigns => "◈",
            ViewType::Automations => "◆",
            ViewType::Groups => "◇",
            ViewType::Forms => "◌",
        }
    }
}

impl fmt::Display for ViewType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which region receives key input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FocusArea {
    Sidebar,
    #[default]
    Content,
}

impl FocusArea {
    pub fn toggle(self) -> Self {
        match self {
            FocusArea::Sidebar => FocusArea::Content,
            FocusArea::Content => FocusArea::Sidebar,
        }
    }
}
