//! # Add-on Labels
//!
//! Builds the "Cheese, Sauce" line shown under a cart item.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One add-on offered for an item, and whether the customer picked it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct AddOn {
    pub name: String,
    /// Missing means unchecked.
    #[serde(default)]
    #[serde(alias = "is_checked")]
    pub is_checked: bool,
}

impl AddOn {
    pub fn new(name: impl Into<String>, is_checked: bool) -> Self {
        AddOn {
            name: name.into(),
            is_checked,
        }
    }
}

/// Separator between add-on names.
pub const ADD_ON_SEPARATOR: &str = ", ";

/// Joins the names of checked add-ons in their original order.
///
/// Separators go strictly between included names, so an unchecked first
/// entry never leaves a leading `", "`.
///
/// ## Example
/// ```rust
/// use portal_pricing::{join_selected_add_ons, AddOn};
///
/// let add_ons = [
///     AddOn::new("Cheese", true),
///     AddOn::new("Bacon", false),
///     AddOn::new("Sauce", true),
/// ];
/// assert_eq!(join_selected_add_ons(&add_ons), "Cheese, Sauce");
/// assert_eq!(join_selected_add_ons(&[]), "");
/// ```
pub fn join_selected_add_ons(add_ons: &[AddOn]) -> String {
    add_ons
        .iter()
        .filter(|add_on| add_on.is_checked)
        .map(|add_on| add_on.name.as_str())
        .collect::<Vec<_>>()
        .join(ADD_ON_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joins_checked_in_order() {
        let add_ons = vec![
            AddOn::new("Cheese", true),
            AddOn::new("Bacon", false),
            AddOn::new("Sauce", true),
        ];
        assert_eq!(join_selected_add_ons(&add_ons), "Cheese, Sauce");
    }

    #[test]
    fn test_empty_and_none_checked() {
        assert_eq!(join_selected_add_ons(&[]), "");
        let add_ons = vec![AddOn::new("Bacon", false), AddOn::new("Onion", false)];
        assert_eq!(join_selected_add_ons(&add_ons), "");
    }

    #[test]
    fn test_unchecked_first_entry_has_no_leading_separator() {
        let add_ons = vec![
            AddOn::new("Bacon", false),
            AddOn::new("Cheese", true),
            AddOn::new("Sauce", true),
        ];
        assert_eq!(join_selected_add_ons(&add_ons), "Cheese, Sauce");
    }

    #[test]
    fn test_single_checked() {
        let add_ons = vec![AddOn::new("Bacon", false), AddOn::new("Sauce", true)];
        assert_eq!(join_selected_add_ons(&add_ons), "Sauce");
    }

    #[test]
    fn test_deserialize_from_frontend_shape() {
        let add_ons: Vec<AddOn> = serde_json::from_str(
            r#"[{"name": "Cheese", "isChecked": true},
                {"name": "Bacon"},
                {"name": "Sauce", "is_checked": true}]"#,
        )
        .unwrap();
        assert_eq!(join_selected_add_ons(&add_ons), "Cheese, Sauce");
    }

    #[test]
    fn test_missing_checked_flag_defaults_to_false() {
        let add_on: AddOn = serde_json::from_str(r#"{"name": "Bacon"}"#).unwrap();
        assert_eq!(add_on, AddOn::new("Bacon", false));

        let binding = AddOn::inline();
        assert!(binding.contains("isChecked"), "{binding}");
        assert!(!binding.contains("is_checked"), "{binding}");
    }
}
