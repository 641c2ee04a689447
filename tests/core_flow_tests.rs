//! End-to-end drives of the app context against a real temp-dir store,
//! GUI-free: onboarding, order creation, completion and the reminder flow.

use mochi_madadgar::app::{MochiApp, ReminderKind};
use mochi_madadgar::capture::MockCapture;
use mochi_madadgar::db::Store;
use mochi_madadgar::nav::{Screen, SlideDirection};
use mochi_madadgar::types::{Language, OrderStatus};
use tempfile::TempDir;

fn open_app(dir: &TempDir) -> MochiApp {
    let store = Store::open(&dir.path().join("mochi.sqlite")).unwrap();
    MochiApp::with_store(store, Box::new(MockCapture))
}

fn onboard(app: &mut MochiApp, language: Language) {
    app.finish_welcome();
    app.choose_language(language);
}

fn create_order(app: &mut MochiApp, service: &str) -> String {
    app.start_new_order();
    app.capture_receipt();
    app.capture_item();
    app.choose_service(service);
    app.save_order();
    app.orders.iter().next().unwrap().id.clone()
}

#[test]
fn onboarding_then_restart_lands_on_dashboard() {
    let dir = TempDir::new().unwrap();

    let mut app = open_app(&dir);
    assert_eq!(app.nav.current(), Screen::Welcome);
    onboard(&mut app, Language::Urdu);
    assert_eq!(app.nav.current(), Screen::Dashboard);
    drop(app);

    let app = open_app(&dir);
    assert_eq!(app.nav.current(), Screen::Dashboard);
    assert!(app.settings.has_seen_welcome);
    assert!(!app.settings.is_first_time);
}

#[test]
fn restart_after_welcome_only_resumes_at_language() {
    let dir = TempDir::new().unwrap();

    let mut app = open_app(&dir);
    app.finish_welcome();
    drop(app);

    let app = open_app(&dir);
    assert_eq!(app.nav.current(), Screen::Language);
}

#[test]
fn two_orders_list_newest_first_and_complete_moves_one_over() {
    let dir = TempDir::new().unwrap();
    let mut app = open_app(&dir);
    onboard(&mut app, Language::Urdu);

    let a = create_order(&mut app, "پالش");
    let b = create_order(&mut app, "سلائی");

    let listed: Vec<&str> = app.orders.iter().map(|o| o.id.as_str()).collect();
    assert_eq!(listed, [b.as_str(), a.as_str()]);

    app.select_order(&a);
    app.complete_order(&a);

    let active: Vec<&str> = app
        .orders
        .by_status(OrderStatus::Active)
        .map(|o| o.id.as_str())
        .collect();
    assert_eq!(active, [b.as_str()]);

    let completed = app.orders.find(&a).unwrap();
    assert!(completed.completed_at.is_some());
    assert!(app.orders.find(&b).unwrap().is_active());
}

#[test]
fn orders_survive_a_restart_with_status_intact() {
    let dir = TempDir::new().unwrap();
    let mut app = open_app(&dir);
    onboard(&mut app, Language::Pashto);

    let a = create_order(&mut app, "رنګول");
    let b = create_order(&mut app, "پالش");
    app.select_order(&a);
    app.complete_order(&a);
    drop(app);

    let app = open_app(&dir);
    assert_eq!(app.orders.len(), 2);
    assert_eq!(app.orders.iter().next().unwrap().id, b);
    assert_eq!(
        app.orders.find(&a).unwrap().status,
        OrderStatus::Completed
    );
}

#[test]
fn slide_direction_tracks_screen_order() {
    let dir = TempDir::new().unwrap();
    let mut app = open_app(&dir);
    onboard(&mut app, Language::Urdu);

    app.start_new_order();
    assert_eq!(app.nav.direction(), Some(SlideDirection::Forward));

    app.cancel_new_order();
    assert_eq!(app.nav.direction(), Some(SlideDirection::Backward));
}

#[test]
fn reminder_flow_composes_message_for_the_selected_order() {
    let dir = TempDir::new().unwrap();
    let mut app = open_app(&dir);
    onboard(&mut app, Language::Urdu);
    let id = create_order(&mut app, "پالش");

    app.open_reminder(&id);
    assert_eq!(app.nav.current(), Screen::SendReminder);

    app.reminder_kind = ReminderKind::Custom;
    app.custom_message = "کل آ جائیں".to_string();
    app.send_reminder();

    assert_eq!(app.nav.current(), Screen::Dashboard);
    assert!(app.sent_notice.as_deref().unwrap().contains("کل آ جائیں"));
}

#[test]
fn reminder_for_unknown_order_is_refused() {
    let dir = TempDir::new().unwrap();
    let mut app = open_app(&dir);
    onboard(&mut app, Language::Urdu);
    create_order(&mut app, "پالش");

    app.open_reminder("no-such-order");
    assert_eq!(app.nav.current(), Screen::Dashboard);
    assert!(app.sent_notice.is_none());
}
