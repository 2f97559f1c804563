//! Tab navigation kept in sync with the URL hash

use super::page::PageView;

/// A nav-tabs group, addressed by its element id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabSet {
    id: &'static str,
}

impl TabSet {
    pub const BILLING: TabSet = TabSet { id: "billing-tabs" };
    pub const UPGRADE: TabSet = TabSet { id: "upgrade-tabs" };

    pub fn id(&self) -> &'static str {
        self.id
    }

    /// Show the tab named by the current hash, if any
    pub fn restore_from_hash<V: PageView + ?Sized>(&self, view: &mut V) -> bool {
        match view.location_hash() {
            Some(hash) if !hash.is_empty() => {
                view.show_tab(self.id, &hash);
                view.scroll_to_top();
                true
            }
            _ => false,
        }
    }

    /// A tab link was clicked: show it and record it in the hash
    pub fn on_tab_click<V: PageView + ?Sized>(&self, view: &mut V, href: &str) {
        view.show_tab(self.id, href);
        view.set_location_hash(href);
        view.scroll_to_top();
    }
}
