use chrono::Local;
use tracing::{info, warn};

use crate::capture::{CaptureProvider, MockCapture};
use crate::db::Store;
use crate::i18n::{self, UiText};
use crate::nav::{Navigator, Screen, SlideDirection};
use crate::orders::OrderBook;
use crate::types::{AppSettings, Language, Order, OrderStatus, ReceiptDetails};

/// How far (in points) a freshly entered screen starts off-center before
/// sliding into place.
const SLIDE_START: f32 = 240.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Receipt,
    Item,
    Service,
}

impl Default for WizardStep {
    fn default() -> Self {
        WizardStep::Receipt
    }
}

/// Order-in-progress while the add-order wizard is on screen. Discarded
/// on cancel; turned into an [`Order`] on save.
#[derive(Debug, Default)]
pub struct OrderDraft {
    pub step: WizardStep,
    pub receipt_image: String,
    pub receipt_details: ReceiptDetails,
    pub item_image: String,
    pub service_type: Option<String>,
}

impl OrderDraft {
    pub fn step_number(&self) -> u8 {
        match self.step {
            WizardStep::Receipt => 1,
            WizardStep::Item => 2,
            WizardStep::Service => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReminderKind {
    Auto,
    Custom,
}

/// The application context: settings, orders, navigation and the store
/// handle, owned in one place and handed to the screen views by reference.
pub struct MochiApp {
    pub settings: AppSettings,
    pub orders: OrderBook,
    pub nav: Navigator,
    pub selected_order_id: Option<String>,
    pub draft: Option<OrderDraft>,
    pub dashboard_tab: OrderStatus,
    pub reminder_kind: ReminderKind,
    pub custom_message: String,
    pub sent_notice: Option<String>,
    pub store_error: Option<String>,
    pub slide_offset: f32,
    store: Option<Store>,
    capture: Box<dyn CaptureProvider>,
}

impl MochiApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        match Store::open_default() {
            Ok(store) => Self::with_store(store, Box::new(MockCapture)),
            Err(e) => {
                warn!(error = %e, "could not open the data store, continuing without persistence");
                let mut app = Self::base(Box::new(MockCapture));
                app.store_error = Some(app.text().storage_warning.to_string());
                app
            }
        }
    }

    /// Wire the context to an already-open store, loading both blobs and
    /// deriving the startup screen from the persisted settings.
    pub fn with_store(store: Store, capture: Box<dyn CaptureProvider>) -> Self {
        let mut app = Self::base(capture);
        app.settings = store.load_settings().unwrap_or_default();
        app.orders = OrderBook::from_orders(store.load_orders().unwrap_or_default());
        app.nav = Navigator::new(app.settings.initial_screen());
        app.store = Some(store);
        app
    }

    fn base(capture: Box<dyn CaptureProvider>) -> Self {
        let settings = AppSettings::default();
        let nav = Navigator::new(settings.initial_screen());
        Self {
            settings,
            orders: OrderBook::new(),
            nav,
            selected_order_id: None,
            draft: None,
            dashboard_tab: OrderStatus::Active,
            reminder_kind: ReminderKind::Auto,
            custom_message: String::new(),
            sent_notice: None,
            store_error: None,
            slide_offset: 0.0,
            store: None,
            capture,
        }
    }

    pub fn text(&self) -> &'static UiText {
        i18n::text(self.settings.language)
    }

    pub fn selected_order(&self) -> Option<&Order> {
        self.selected_order_id
            .as_deref()
            .and_then(|id| self.orders.find(id))
    }

    /// Move to `target`, refusing the detail and reminder screens unless
    /// the selected order id resolves to an existing order.
    pub fn navigate(&mut self, target: Screen) {
        if matches!(target, Screen::OrderDetail | Screen::SendReminder)
            && self.selected_order().is_none()
        {
            warn!(?target, "navigation refused: no resolvable selected order");
            return;
        }
        self.nav.navigate(target);
        self.slide_offset = match self.nav.direction() {
            Some(SlideDirection::Forward) => SLIDE_START,
            Some(SlideDirection::Backward) => -SLIDE_START,
            None => 0.0,
        };
    }

    // --- Onboarding -------------------------------------------------------

    pub fn finish_welcome(&mut self) {
        self.settings.has_seen_welcome = true;
        self.persist_settings();
        self.navigate(Screen::Language);
    }

    pub fn choose_language(&mut self, language: Language) {
        self.settings.language = language;
        self.settings.is_first_time = false;
        self.persist_settings();
        self.navigate(Screen::Dashboard);
    }

    // --- Order creation wizard -------------------------------------------

    pub fn start_new_order(&mut self) {
        self.draft = Some(OrderDraft::default());
        self.navigate(Screen::AddOrder);
    }

    pub fn cancel_new_order(&mut self) {
        self.draft = None;
        self.navigate(Screen::Dashboard);
    }

    pub fn capture_receipt(&mut self) {
        let captured = self.capture.capture_receipt();
        if let Some(draft) = &mut self.draft {
            draft.receipt_image = captured.image;
            draft.receipt_details = captured.details;
            draft.step = WizardStep::Item;
        }
    }

    pub fn capture_item(&mut self) {
        let image = self.capture.capture_item();
        if let Some(draft) = &mut self.draft {
            draft.item_image = image;
            draft.step = WizardStep::Service;
        }
    }

    pub fn choose_service(&mut self, label: &str) {
        if let Some(draft) = &mut self.draft {
            draft.service_type = Some(label.to_string());
        }
    }

    /// Turn the finished draft into an order at the front of the book and
    /// return to the dashboard. Without a chosen service the wizard stays
    /// open (the save control only appears after the choice anyway).
    pub fn save_order(&mut self) {
        let Some(mut draft) = self.draft.take() else {
            return;
        };
        match draft.service_type.take() {
            Some(service_type) => {
                let order = Order::new(
                    draft.receipt_image,
                    draft.receipt_details,
                    draft.item_image,
                    service_type,
                );
                info!(id = %order.id, service = %order.service_type, "order created");
                self.orders.add(order);
                self.persist_orders();
                self.navigate(Screen::Dashboard);
            }
            None => self.draft = Some(draft),
        }
    }

    // --- Dashboard and detail --------------------------------------------

    pub fn select_order(&mut self, id: &str) {
        self.selected_order_id = Some(id.to_string());
        self.navigate(Screen::OrderDetail);
    }

    pub fn complete_order(&mut self, id: &str) {
        if self.orders.complete(id, Local::now()) {
            info!(%id, "order completed");
            self.persist_orders();
        }
        self.navigate(Screen::Dashboard);
    }

    pub fn open_reminder(&mut self, id: &str) {
        self.selected_order_id = Some(id.to_string());
        self.reminder_kind = ReminderKind::Auto;
        self.custom_message.clear();
        self.navigate(Screen::SendReminder);
    }

    /// Compose the reminder (automatic template or the typed message) and
    /// return to the dashboard with a sent notice. Actual delivery is out
    /// of scope; the composed text is what an SMS/WhatsApp hookup would
    /// receive.
    pub fn send_reminder(&mut self) {
        let Some(order) = self.selected_order() else {
            return;
        };
        let message = match self.reminder_kind {
            ReminderKind::Auto => i18n::auto_reminder(self.settings.language, order),
            ReminderKind::Custom => self.custom_message.trim().to_string(),
        };
        if message.is_empty() {
            return;
        }
        info!(phone = %order.phone_number, "reminder composed");
        let notice = format!("{}\n{}: {}", self.text().sent, order.phone_number, message);
        self.sent_notice = Some(notice);
        self.custom_message.clear();
        self.navigate(Screen::Dashboard);
    }

    // --- Persistence ------------------------------------------------------

    fn persist_settings(&mut self) {
        let Some(store) = &self.store else { return };
        if let Err(e) = store.save_settings(&self.settings) {
            warn!(error = %e, "settings write failed, keeping in-memory state");
            self.store_error = Some(self.text().storage_warning.to_string());
        }
    }

    fn persist_orders(&mut self) {
        let Some(store) = &self.store else { return };
        if let Err(e) = store.save_orders(self.orders.as_slice()) {
            warn!(error = %e, "orders write failed, keeping in-memory state");
            self.store_error = Some(self.text().storage_warning.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn app_with_temp_store(dir: &std::path::Path) -> MochiApp {
        let store = Store::open(&dir.join("test.sqlite")).unwrap();
        MochiApp::with_store(store, Box::new(MockCapture))
    }

    fn run_wizard(app: &mut MochiApp) -> String {
        app.start_new_order();
        app.capture_receipt();
        app.capture_item();
        app.choose_service("پالش");
        app.save_order();
        app.orders.iter().next().unwrap().id.clone()
    }

    #[test]
    fn first_run_starts_at_welcome_and_onboards_to_dashboard() {
        let dir = tempdir().unwrap();
        let mut app = app_with_temp_store(dir.path());
        assert_eq!(app.nav.current(), Screen::Welcome);

        app.finish_welcome();
        assert_eq!(app.nav.current(), Screen::Language);

        app.choose_language(Language::Pashto);
        assert_eq!(app.nav.current(), Screen::Dashboard);
        assert!(!app.settings.is_first_time);

        // a second launch against the same store resumes at the dashboard
        drop(app);
        let app = app_with_temp_store(dir.path());
        assert_eq!(app.nav.current(), Screen::Dashboard);
        assert_eq!(app.settings.language, Language::Pashto);
    }

    #[test]
    fn detail_navigation_is_refused_without_a_selection() {
        let dir = tempdir().unwrap();
        let mut app = app_with_temp_store(dir.path());
        app.navigate(Screen::Dashboard);

        app.navigate(Screen::OrderDetail);
        assert_eq!(app.nav.current(), Screen::Dashboard);

        app.selected_order_id = Some("stale-id".to_string());
        app.navigate(Screen::SendReminder);
        assert_eq!(app.nav.current(), Screen::Dashboard);
    }

    #[test]
    fn wizard_builds_a_persisted_active_order() {
        let dir = tempdir().unwrap();
        let mut app = app_with_temp_store(dir.path());
        app.navigate(Screen::Dashboard);

        let id = run_wizard(&mut app);
        assert_eq!(app.nav.current(), Screen::Dashboard);

        let order = app.orders.find(&id).unwrap();
        assert_eq!(order.service_type, "پالش");
        assert_eq!(order.phone_number, order.receipt_details.number);
        assert!(order.is_active());

        // the order survives a restart
        drop(app);
        let app = app_with_temp_store(dir.path());
        assert!(app.orders.find(&id).is_some());
    }

    #[test]
    fn save_without_service_keeps_the_wizard_open() {
        let dir = tempdir().unwrap();
        let mut app = app_with_temp_store(dir.path());
        app.navigate(Screen::Dashboard);

        app.start_new_order();
        app.capture_receipt();
        app.capture_item();
        app.save_order();

        assert!(app.draft.is_some());
        assert!(app.orders.is_empty());
    }

    #[test]
    fn complete_from_detail_returns_to_dashboard() {
        let dir = tempdir().unwrap();
        let mut app = app_with_temp_store(dir.path());
        app.navigate(Screen::Dashboard);
        let id = run_wizard(&mut app);

        app.select_order(&id);
        assert_eq!(app.nav.current(), Screen::OrderDetail);

        app.complete_order(&id);
        assert_eq!(app.nav.current(), Screen::Dashboard);
        assert!(!app.orders.find(&id).unwrap().is_active());
    }

    #[test]
    fn auto_reminder_composes_and_returns_to_dashboard() {
        let dir = tempdir().unwrap();
        let mut app = app_with_temp_store(dir.path());
        app.navigate(Screen::Dashboard);
        let id = run_wizard(&mut app);

        app.open_reminder(&id);
        assert_eq!(app.nav.current(), Screen::SendReminder);

        app.send_reminder();
        assert_eq!(app.nav.current(), Screen::Dashboard);
        let notice = app.sent_notice.as_deref().unwrap();
        assert!(notice.contains("0300-"));
    }

    #[test]
    fn empty_custom_reminder_is_not_sent() {
        let dir = tempdir().unwrap();
        let mut app = app_with_temp_store(dir.path());
        app.navigate(Screen::Dashboard);
        let id = run_wizard(&mut app);

        app.open_reminder(&id);
        app.reminder_kind = ReminderKind::Custom;
        app.custom_message = "   ".to_string();
        app.send_reminder();

        assert_eq!(app.nav.current(), Screen::SendReminder);
        assert!(app.sent_notice.is_none());
    }
}
