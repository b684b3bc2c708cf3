//! Local UI chrome state (dark mode, data-management tab).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of auth/session state so the
//! shell chrome can evolve independently of the gate contract.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Entity tabs on the data-management page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DataTab {
    #[default]
    Customers,
    Agents,
    Routes,
    Policies,
    Claims,
}

impl DataTab {
    pub const ALL: [DataTab; 5] = [
        DataTab::Customers,
        DataTab::Agents,
        DataTab::Routes,
        DataTab::Policies,
        DataTab::Claims,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DataTab::Customers => "Customers",
            DataTab::Agents => "Agents",
            DataTab::Routes => "Routes",
            DataTab::Policies => "Policies",
            DataTab::Claims => "Claims",
        }
    }
}

/// UI state for the shell chrome.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
    pub data_tab: DataTab,
    pub notifications_open: bool,
}
