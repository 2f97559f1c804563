//! In-memory page used in place of a browser DOM

use seatbill::services::billing::{BillingForm, PageView};
use std::collections::{HashMap, HashSet};

/// Records every DOM operation the controllers perform
#[derive(Debug, Default)]
pub struct RecordingView {
    pub visible: HashMap<String, bool>,
    pub disabled: HashSet<String>,
    pub text: HashMap<String, String>,
    pub radios: HashMap<String, String>,
    /// Keyed by form element id, e.g. `autopay-form`
    pub forms: HashMap<String, BillingForm>,
    pub hash: Option<String>,
    pub shown_tabs: Vec<(String, String)>,
    pub loading_indicators: Vec<(String, String)>,
    pub reloads: usize,
    pub scrolls: usize,
}

impl RecordingView {
    pub fn is_visible(&self, id: &str) -> bool {
        self.visible.get(id).copied().unwrap_or(false)
    }

    pub fn is_enabled(&self, id: &str) -> bool {
        !self.disabled.contains(id)
    }

    pub fn text_of(&self, id: &str) -> Option<&str> {
        self.text.get(id).map(String::as_str)
    }

    pub fn check(&mut self, radio_name: &str, value: &str) {
        self.radios.insert(radio_name.to_string(), value.to_string());
    }

    pub fn type_into(&mut self, input_id: &str, value: &str) {
        for form in self.forms.values_mut() {
            form.set_value(input_id, value);
        }
    }
}

impl PageView for RecordingView {
    fn show(&mut self, id: &str) {
        self.visible.insert(id.to_string(), true);
    }

    fn hide(&mut self, id: &str) {
        self.visible.insert(id.to_string(), false);
    }

    fn set_enabled(&mut self, id: &str, enabled: bool) {
        if enabled {
            self.disabled.remove(id);
        } else {
            self.disabled.insert(id.to_string());
        }
        for form in self.forms.values_mut() {
            form.set_disabled(id, !enabled);
        }
    }

    fn set_text(&mut self, id: &str, text: &str) {
        self.text.insert(id.to_string(), text.to_string());
    }

    fn show_loading_indicator(&mut self, id: &str, text: &str) {
        self.loading_indicators
            .push((id.to_string(), text.to_string()));
    }

    fn checked_value(&self, radio_name: &str) -> Option<String> {
        self.radios.get(radio_name).cloned()
    }

    fn check_validity(&self, input_id: &str) -> bool {
        self.forms
            .values()
            .all(|form| form.check_field_validity(input_id).is_ok())
    }

    fn serialize_form(&self, form_id: &str) -> BillingForm {
        self.forms
            .get(form_id)
            .cloned()
            .unwrap_or_else(|| BillingForm::new(form_id.trim_end_matches("-form")))
    }

    fn location_hash(&self) -> Option<String> {
        self.hash.clone()
    }

    fn set_location_hash(&mut self, hash: &str) {
        self.hash = Some(hash.to_string());
    }

    fn show_tab(&mut self, tabs_id: &str, href: &str) {
        self.shown_tabs.push((tabs_id.to_string(), href.to_string()));
    }

    fn scroll_to_top(&mut self) {
        self.scrolls += 1;
    }

    fn reload(&mut self) {
        self.reloads += 1;
    }
}
