//! Upgrade and billing page controllers
//!
//! The controllers never touch a DOM directly. Every read and write goes
//! through [`PageView`], so the whole flow runs headless in tests.

use super::client::{BillingEndpoint, SubmissionOutcome, Submitter};
use super::form::{BillingForm, FormElements};
use super::payment::{PaymentRequest, PaymentToken, PaymentWidget, token_channel};
use super::tabs::TabSet;
use crate::config::{BillingConfig, PageParams, PaymentConfig};
use crate::services::pricing::{
    BillingSelection, ChargeAmount, LicenseMode, PanelState, QuoteEngine, Schedule,
};
use crate::utils::error::Result;
use tracing::{debug, info, warn};

/// Element showing the charge for the selected schedule
pub const CHARGED_AMOUNT: &str = "charged_amount";

pub const LICENSE_MANAGEMENT_RADIO: &str = "license_management";

pub const SCHEDULE_RADIO: &str = "schedule";

/// License-count input of the invoice form
pub const INVOICED_LICENSES: &str = "invoiced_licenses";

const LOADING_TEXT: &str = "Processing ...";

/// The page's DOM, as far as billing needs it
pub trait PageView {
    fn show(&mut self, id: &str);
    fn hide(&mut self, id: &str);
    fn set_enabled(&mut self, id: &str, enabled: bool);
    fn set_text(&mut self, id: &str, text: &str);
    fn show_loading_indicator(&mut self, id: &str, text: &str);

    /// Value of the checked option in a radio group
    fn checked_value(&self, radio_name: &str) -> Option<String>;
    /// Native constraint validation of one input
    fn check_validity(&self, input_id: &str) -> bool;
    /// Enabled inputs of `#{form_id}`
    fn serialize_form(&self, form_id: &str) -> BillingForm;

    fn location_hash(&self) -> Option<String>;
    fn set_location_hash(&mut self, hash: &str);
    fn show_tab(&mut self, tabs_id: &str, href: &str);
    fn scroll_to_top(&mut self);
    fn reload(&mut self);
}

/// Post the form called `form_name` and reflect the outcome in the page.
///
/// While the request is in flight only the loading section is visible.
/// Success shows the success section and reloads; a rejection shows the
/// server's message and brings the inputs back for correction. There is
/// exactly one attempt. A form that fails its constraints returns the
/// validation error without touching the page.
pub async fn submit_form<V, S>(
    view: &mut V,
    submitter: &S,
    endpoint: BillingEndpoint,
    form_name: &str,
    token: Option<&PaymentToken>,
) -> Result<SubmissionOutcome>
where
    V: PageView + ?Sized,
    S: Submitter + ?Sized,
{
    let elements = FormElements::for_form(form_name);
    let form = view.serialize_form(&elements.form);

    // An invalid form is abandoned before the page changes
    if let Err(e) = form.check_validity() {
        debug!(form = form_name, error = %e, "Form invalid, not submitting");
        return Err(e);
    }

    view.show_loading_indicator(&elements.loading_indicator, LOADING_TEXT);
    view.hide(&elements.input_section);
    view.hide(&elements.error);
    view.show(&elements.loading);

    match submitter.submit(endpoint, &form, token).await {
        Ok(SubmissionOutcome::Success) => {
            view.hide(&elements.loading);
            view.hide(&elements.error);
            view.show(&elements.success);
            info!(form = form_name, "Billing change applied, reloading");
            view.reload();
            Ok(SubmissionOutcome::Success)
        }
        Ok(SubmissionOutcome::Rejected { msg }) => {
            show_error(view, &elements, &msg);
            Ok(SubmissionOutcome::Rejected { msg })
        }
        Err(e) => {
            warn!(form = form_name, error = %e, "Billing submission failed");
            show_error(view, &elements, &e.user_message());
            Err(e)
        }
    }
}

fn show_error<V: PageView + ?Sized>(view: &mut V, elements: &FormElements, msg: &str) {
    view.hide(&elements.loading);
    view.show(&elements.error);
    view.set_text(&elements.error, msg);
    view.show(&elements.input_section);
}

/// Apply a panel state: one license section visible with its input enabled
pub fn apply_panel<V: PageView + ?Sized>(view: &mut V, state: &PanelState) {
    for (mode, visibility) in state.panels() {
        let section = mode.section_id();
        if visibility.visible {
            view.show(&section);
        } else {
            view.hide(&section);
        }
        view.set_enabled(&mode.input_id(), visibility.enabled);
    }
}

/// Controller for the upgrade page
pub struct UpgradePage<V, S> {
    view: V,
    submitter: S,
    engine: QuoteEngine,
    defaults: PageParams,
    payment: PaymentConfig,
}

impl<V: PageView, S: Submitter> UpgradePage<V, S> {
    pub fn new(view: V, submitter: S, config: &BillingConfig) -> Result<Self> {
        Ok(Self {
            view,
            submitter,
            engine: QuoteEngine::new(&config.page)?,
            defaults: config.page.clone(),
            payment: config.payment.clone(),
        })
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn engine(&self) -> &QuoteEngine {
        &self.engine
    }

    pub fn into_view(self) -> V {
        self.view
    }

    /// Page load: prices, initial panel, initial charge, tab from hash
    pub fn initialize(&mut self) -> Result<()> {
        // A bad radio value must leave the page untouched
        let selection = self.current_selection()?;

        TabSet::UPGRADE.restore_from_hash(&mut self.view);

        let display = self.engine.price_display();
        for (id, text) in display.targets() {
            self.view.set_text(id, text);
        }

        apply_panel(&mut self.view, &self.engine.on_license_mode_change(selection.license_mode));
        self.render_charge(&selection);

        debug!(?selection, "Upgrade page initialized");
        Ok(())
    }

    /// The radios as they are now. Unchecked groups fall back to the
    /// server-supplied defaults.
    pub fn current_selection(&self) -> Result<BillingSelection> {
        let license_mode = match self.view.checked_value(LICENSE_MANAGEMENT_RADIO) {
            Some(value) => value.parse()?,
            None => self.defaults.license_management,
        };
        let schedule = match self.view.checked_value(SCHEDULE_RADIO) {
            Some(value) => value.parse()?,
            None => self.defaults.schedule,
        };
        Ok(self.engine.selection(license_mode, schedule))
    }

    pub fn on_license_mode_change(&mut self, value: &str) -> Result<PanelState> {
        let mode: LicenseMode = value.parse()?;
        let state = self.engine.on_license_mode_change(mode);
        apply_panel(&mut self.view, &state);
        Ok(state)
    }

    pub fn on_schedule_change(&mut self, value: &str) -> Result<ChargeAmount> {
        let schedule: Schedule = value.parse()?;
        let charge = self.engine.on_schedule_change(schedule);
        self.view.set_text(CHARGED_AMOUNT, &charge.to_string());
        Ok(charge)
    }

    pub fn on_tab_click(&mut self, href: &str) {
        TabSet::UPGRADE.on_tab_click(&mut self.view, href);
    }

    /// Widget options for the add-card button, or `None` when the active
    /// license count is invalid
    pub fn on_add_card_click(&self) -> Result<Option<PaymentRequest>> {
        let selection = self.current_selection()?;
        if !self.view.check_validity(&selection.license_mode.input_id()) {
            debug!(license_mode = %selection.license_mode, "License count invalid, not opening payment widget");
            return Ok(None);
        }
        Ok(Some(PaymentRequest::add_card(&self.payment)))
    }

    /// Add-card flow end to end: validate, open the widget, wait for its
    /// token, submit
    pub async fn checkout<W: PaymentWidget + ?Sized>(
        &mut self,
        widget: &W,
    ) -> Result<Option<SubmissionOutcome>> {
        let Some(request) = self.on_add_card_click()? else {
            return Ok(None);
        };

        let (sender, receiver) = token_channel();
        widget.open(&request, sender);
        let token = receiver.recv().await?;

        self.on_payment_token(&token).await.map(Some)
    }

    pub async fn on_payment_token(&mut self, token: &PaymentToken) -> Result<SubmissionOutcome> {
        submit_form(
            &mut self.view,
            &self.submitter,
            BillingEndpoint::Upgrade,
            "autopay",
            Some(token),
        )
        .await
    }

    /// Invoice button: submits only when the license count is valid
    pub async fn on_invoice_click(&mut self) -> Result<Option<SubmissionOutcome>> {
        if !self.view.check_validity(INVOICED_LICENSES) {
            debug!("Invoiced license count invalid, not submitting");
            return Ok(None);
        }
        submit_form(
            &mut self.view,
            &self.submitter,
            BillingEndpoint::Upgrade,
            "invoice",
            None,
        )
        .await
        .map(Some)
    }

    fn render_charge(&mut self, selection: &BillingSelection) {
        let charge = self.engine.charge_for(selection);
        self.view.set_text(CHARGED_AMOUNT, &charge.to_string());
    }
}

/// Controller for the billing management page of an upgraded organization
pub struct BillingPage<V, S> {
    view: V,
    submitter: S,
    payment: PaymentConfig,
}

impl<V: PageView, S: Submitter> BillingPage<V, S> {
    pub fn new(view: V, submitter: S, payment: PaymentConfig) -> Self {
        Self {
            view,
            submitter,
            payment,
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }

    pub fn initialize(&mut self) {
        TabSet::BILLING.restore_from_hash(&mut self.view);
    }

    pub fn on_tab_click(&mut self, href: &str) {
        TabSet::BILLING.on_tab_click(&mut self.view, href);
    }

    pub fn on_update_card_click(&self) -> PaymentRequest {
        PaymentRequest::update_card(&self.payment)
    }

    /// Update-card flow: open the widget, wait for its token, submit
    pub async fn change_card<W: PaymentWidget + ?Sized>(
        &mut self,
        widget: &W,
    ) -> Result<SubmissionOutcome> {
        let (sender, receiver) = token_channel();
        widget.open(&self.on_update_card_click(), sender);
        let token = receiver.recv().await?;
        self.on_card_change_token(&token).await
    }

    pub async fn on_card_change_token(&mut self, token: &PaymentToken) -> Result<SubmissionOutcome> {
        submit_form(
            &mut self.view,
            &self.submitter,
            BillingEndpoint::ChangeSource,
            "cardchange",
            Some(token),
        )
        .await
    }
}
