use super::*;

#[test]
fn ui_state_defaults_to_light_mode_customers_tab() {
    let state = UiState::default();
    assert!(!state.dark_mode);
    assert_eq!(state.data_tab, DataTab::Customers);
    assert!(!state.notifications_open);
}

#[test]
fn data_tab_all_lists_every_tab_once() {
    assert_eq!(DataTab::ALL.len(), 5);
    for (i, a) in DataTab::ALL.iter().enumerate() {
        for (j, b) in DataTab::ALL.iter().enumerate() {
            if i == j {
                assert_eq!(a, b);
            } else {
                assert_ne!(a, b);
            }
        }
    }
}

#[test]
fn data_tab_labels_match_page_headings() {
    assert_eq!(DataTab::Customers.label(), "Customers");
    assert_eq!(DataTab::Agents.label(), "Agents");
    assert_eq!(DataTab::Routes.label(), "Routes");
    assert_eq!(DataTab::Policies.label(), "Policies");
    assert_eq!(DataTab::Claims.label(), "Claims");
}
