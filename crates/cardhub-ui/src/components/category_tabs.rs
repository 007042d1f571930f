//! Category Tabs Component
//!
//! Horizontal row of filter tabs. Exactly one tab carries the `active`
//! class once the user has picked one.

use cardhub_core::TabSpec;
use dioxus::prelude::*;

/// Properties for the CategoryTabs component
#[derive(Clone, PartialEq, Props)]
pub struct CategoryTabsProps {
    /// Tabs in display order
    pub tabs: Vec<TabSpec>,
    /// Index of the active tab, if any
    #[props(default)]
    pub active: Option<usize>,
    /// Handler called with the clicked tab's index
    pub on_select: EventHandler<usize>,
}

/// CSS class for a tab in the given state.
pub fn tab_class(is_active: bool) -> &'static str {
    if is_active {
        "category-tab active"
    } else {
        "category-tab"
    }
}

/// Displays the category tab bar
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     CategoryTabs {
///         tabs: vec![TabSpec::new("All", "all"), TabSpec::new("Images", "images")],
///         active: Some(0),
///         on_select: move |index| page.write().handle(PageEvent::TabClicked(index), now()),
///     }
/// }
/// ```
#[component]
pub fn CategoryTabs(props: CategoryTabsProps) -> Element {
    if props.tabs.is_empty() {
        return VNode::empty();
    }

    rsx! {
        nav {
            class: "category-tabs",
            role: "tablist",
            "aria-label": "Tool categories",
            for (index, tab) in props.tabs.iter().enumerate() {
                {
                    let is_active = props.active == Some(index);
                    let category = tab.category.clone().unwrap_or_default();
                    let on_select = props.on_select;
                    rsx! {
                        button {
                            key: "{index}",
                            class: tab_class(is_active),
                            role: "tab",
                            "data-category": "{category}",
                            "aria-selected": if is_active { "true" } else { "false" },
                            onclick: move |_| on_select.call(index),
                            "{tab.label}"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_tab_class() {
        assert_eq!(tab_class(true), "category-tab active");
        assert_eq!(tab_class(false), "category-tab");
    }
}
