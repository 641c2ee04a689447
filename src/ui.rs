use eframe::egui;

use crate::app::{MochiApp, OrderDraft, ReminderKind, WizardStep};
use crate::capture::SERVICES;
use crate::i18n::{self, UiText};
use crate::nav::Screen;
use crate::types::{Order, OrderStatus};

const DARK: egui::Color32 = egui::Color32::from_rgb(31, 41, 55);
const MUTED: egui::Color32 = egui::Color32::from_rgb(107, 114, 128);
const GREEN: egui::Color32 = egui::Color32::from_rgb(22, 163, 74);
const AMBER: egui::Color32 = egui::Color32::from_rgb(202, 138, 4);

impl eframe::App for MochiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Let a freshly entered screen slide the last stretch into place.
        if self.slide_offset != 0.0 {
            self.slide_offset *= 0.78;
            if self.slide_offset.abs() < 0.5 {
                self.slide_offset = 0.0;
            }
            ctx.request_repaint();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            show_store_error_banner(self, ui);

            let rect = ui.max_rect().translate(egui::vec2(self.slide_offset, 0.0));
            let mut content = ui.new_child(egui::UiBuilder::new().max_rect(rect));

            match self.nav.current() {
                Screen::Welcome => show_welcome(self, &mut content),
                Screen::Language => show_language(self, &mut content),
                Screen::Dashboard => show_dashboard(self, &mut content),
                Screen::AddOrder => show_add_order(self, &mut content),
                Screen::OrderDetail => show_order_detail(self, &mut content),
                Screen::SendReminder => show_send_reminder(self, &mut content),
            }
        });
    }
}

fn show_store_error_banner(app: &mut MochiApp, ui: &mut egui::Ui) {
    let Some(message) = app.store_error.clone() else {
        return;
    };
    ui.horizontal(|ui| {
        ui.colored_label(AMBER, message);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.small_button("✖").clicked() {
                app.store_error = None;
            }
        });
    });
    ui.separator();
}

fn primary_button(text: &str) -> egui::Button<'_> {
    egui::Button::new(
        egui::RichText::new(text)
            .size(20.0)
            .color(egui::Color32::WHITE),
    )
    .fill(DARK)
    .corner_radius(16.0)
    .min_size(egui::vec2(220.0, 52.0))
}

fn show_welcome(app: &mut MochiApp, ui: &mut egui::Ui) {
    let t = app.text();
    ui.add_space(140.0);
    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new(t.welcome_title).size(40.0).strong());
        ui.add_space(16.0);
        ui.label(egui::RichText::new(t.welcome_tagline).size(18.0).color(MUTED));
        ui.add_space(90.0);
        if ui.add(primary_button(t.welcome_start)).clicked() {
            app.finish_welcome();
        }
    });
}

fn show_language(app: &mut MochiApp, ui: &mut egui::Ui) {
    let t = app.text();
    if ui.button(t.back).clicked() {
        app.navigate(Screen::Welcome);
    }
    ui.add_space(110.0);
    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new(t.language_title).size(30.0).strong());
        ui.add_space(40.0);
        for language in [crate::types::Language::Urdu, crate::types::Language::Pashto] {
            if ui.add(primary_button(language.native_name())).clicked() {
                app.choose_language(language);
            }
            ui.add_space(14.0);
        }
    });
}

fn show_dashboard(app: &mut MochiApp, ui: &mut egui::Ui) {
    let t = app.text();

    if ui.button(t.back).clicked() {
        app.navigate(Screen::Language);
    }
    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new(t.dashboard_title).size(28.0).strong());
    });
    ui.add_space(8.0);

    if let Some(notice) = app.sent_notice.clone() {
        ui.group(|ui| {
            ui.horizontal(|ui| {
                ui.colored_label(GREEN, notice);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("✖").clicked() {
                        app.sent_notice = None;
                    }
                });
            });
        });
        ui.add_space(6.0);
    }

    if ui.add(primary_button(t.add_new).min_size(egui::vec2(0.0, 40.0))).clicked() {
        app.start_new_order();
    }
    ui.add_space(10.0);

    ui.horizontal(|ui| {
        ui.selectable_value(&mut app.dashboard_tab, OrderStatus::Active, t.active_tab);
        ui.selectable_value(&mut app.dashboard_tab, OrderStatus::Completed, t.completed_tab);
    });
    ui.separator();

    let listed: Vec<Order> = app.orders.by_status(app.dashboard_tab).cloned().collect();
    let mut order_to_open: Option<String> = None;

    egui::ScrollArea::vertical().show(ui, |ui| {
        if listed.is_empty() {
            ui.add_space(48.0);
            ui.vertical_centered(|ui| {
                let empty_text = match app.dashboard_tab {
                    OrderStatus::Active => t.no_active,
                    OrderStatus::Completed => t.no_completed,
                };
                ui.label(egui::RichText::new(empty_text).size(18.0).color(MUTED));
            });
        } else {
            for order in &listed {
                if show_order_card(t, ui, order) {
                    order_to_open = Some(order.id.clone());
                }
                ui.add_space(6.0);
            }
        }
    });

    if let Some(id) = order_to_open {
        app.select_order(&id);
    }
}

/// One dashboard card; returns true when the card was clicked.
fn show_order_card(t: &UiText, ui: &mut egui::Ui, order: &Order) -> bool {
    let response = ui
        .group(|ui| {
            ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                ui.label(
                    egui::RichText::new(&order.service_type)
                        .strong()
                        .color(egui::Color32::WHITE)
                        .background_color(DARK),
                );
                ui.label(i18n::format_date(&order.timestamp));
                ui.label(i18n::format_time(&order.timestamp));
                ui.label(egui::RichText::new(&order.phone_number).color(MUTED));
                if let Some(completed_at) = &order.completed_at {
                    ui.colored_label(
                        GREEN,
                        format!("{} {}", t.completed_on, i18n::format_date_time(completed_at)),
                    );
                }
            });
        })
        .response;

    response.interact(egui::Sense::click()).clicked()
}

fn show_add_order(app: &mut MochiApp, ui: &mut egui::Ui) {
    let t = app.text();
    if app.draft.is_none() {
        app.draft = Some(OrderDraft::default());
    }
    let Some(draft) = &app.draft else { return };
    let step = draft.step;
    let step_number = draft.step_number();
    let chosen_service = draft.service_type.clone();

    ui.horizontal(|ui| {
        if ui.button(t.back).clicked() {
            app.cancel_new_order();
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                egui::RichText::new(format!("{} {} {} 3", t.step_word, step_number, t.of_word))
                    .color(MUTED),
            );
        });
    });
    ui.add(egui::ProgressBar::new(step_number as f32 / 3.0).desired_height(6.0));
    ui.add_space(20.0);

    match step {
        WizardStep::Receipt => {
            show_capture_step(ui, t.step_receipt);
            if ui.add(primary_button(t.step_receipt)).clicked() {
                app.capture_receipt();
            }
        }
        WizardStep::Item => {
            show_capture_step(ui, t.step_item);
            if ui.add(primary_button(t.step_item)).clicked() {
                app.capture_item();
            }
        }
        WizardStep::Service => {
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new(t.step_service).size(24.0).strong());
            });
            ui.add_space(16.0);

            let language = app.settings.language;
            egui::Grid::new("service_grid").num_columns(2).show(ui, |ui| {
                for (idx, service) in SERVICES.iter().enumerate() {
                    let label = service.label(language);
                    let selected = chosen_service.as_deref() == Some(label);
                    let button = egui::Button::new(
                        egui::RichText::new(format!("{}\n{}", service.icon, label)).size(17.0),
                    )
                    .corner_radius(16.0)
                    .min_size(egui::vec2(160.0, 72.0))
                    .fill(if selected {
                        DARK
                    } else {
                        egui::Color32::from_gray(245)
                    });
                    if ui.add(button).clicked() {
                        app.choose_service(label);
                    }
                    if idx % 2 == 1 {
                        ui.end_row();
                    }
                }
            });

            if chosen_service.is_some() {
                ui.add_space(20.0);
                ui.vertical_centered(|ui| {
                    if ui.add(primary_button(t.save_order)).clicked() {
                        app.save_order();
                    }
                });
            }
        }
    }
}

/// The dashed camera placeholder shared by the two capture steps.
fn show_capture_step(ui: &mut egui::Ui, title: &str) {
    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new(title).size(24.0).strong());
    });
    ui.add_space(16.0);

    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), 260.0),
        egui::Sense::hover(),
    );
    ui.painter()
        .rect_filled(rect, 24.0, egui::Color32::from_gray(229));
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        "📷",
        egui::FontId::proportional(64.0),
        egui::Color32::from_gray(156),
    );
    ui.add_space(16.0);
}

fn detail_row(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(label).color(MUTED));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(value);
        });
    });
    ui.separator();
}

fn show_order_detail(app: &mut MochiApp, ui: &mut egui::Ui) {
    let t = app.text();
    // The navigation guard keeps this screen unreachable without a valid
    // selection; render nothing if it happens anyway.
    let Some(order) = app.selected_order().cloned() else {
        return;
    };

    if ui.button(t.back).clicked() {
        app.navigate(Screen::Dashboard);
    }

    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new(t.order_details).size(26.0).strong());
            ui.add_space(8.0);
            ui.label(
                egui::RichText::new(&order.service_type)
                    .size(18.0)
                    .color(egui::Color32::WHITE)
                    .background_color(DARK),
            );
        });
        ui.add_space(12.0);

        // Item photo placeholder; the stored value is an opaque reference.
        let (rect, _) = ui.allocate_exact_size(
            egui::vec2(ui.available_width(), 200.0),
            egui::Sense::hover(),
        );
        ui.painter()
            .rect_filled(rect, 24.0, egui::Color32::from_gray(243));
        ui.painter().text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            "👞",
            egui::FontId::proportional(56.0),
            egui::Color32::from_gray(156),
        );
        ui.add_space(12.0);

        ui.group(|ui| {
            detail_row(ui, t.customer_name, &order.receipt_details.name);
            detail_row(ui, t.phone_number, &order.phone_number);
            detail_row(ui, t.advance, &order.receipt_details.advance);
            detail_row(ui, t.total_amount, &order.receipt_details.total_amount);
            detail_row(ui, t.pickup_date, &order.receipt_details.pickup_date);
        });
        ui.add_space(16.0);

        if order.is_active() {
            ui.vertical_centered(|ui| {
                if ui.add(primary_button(t.complete_order).fill(GREEN)).clicked() {
                    app.complete_order(&order.id);
                }
                ui.add_space(8.0);
                if ui.add(primary_button(t.send_reminder)).clicked() {
                    app.open_reminder(&order.id);
                }
            });
        } else {
            ui.vertical_centered(|ui| {
                ui.colored_label(GREEN, egui::RichText::new(t.completed).size(20.0));
                if let Some(completed_at) = &order.completed_at {
                    ui.label(
                        egui::RichText::new(i18n::format_date_time(completed_at)).color(MUTED),
                    );
                }
            });
        }
    });
}

fn show_send_reminder(app: &mut MochiApp, ui: &mut egui::Ui) {
    let t = app.text();
    let Some(order) = app.selected_order().cloned() else {
        return;
    };

    if ui.button(t.back).clicked() {
        app.navigate(Screen::OrderDetail);
    }

    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new(t.reminder_title).size(26.0).strong());
        ui.label(egui::RichText::new(t.reminder_subtitle).color(MUTED));
    });
    ui.add_space(12.0);

    ui.group(|ui| {
        detail_row(ui, t.phone_number, &order.phone_number);
    });
    ui.add_space(12.0);

    ui.radio_value(&mut app.reminder_kind, ReminderKind::Auto, t.auto_message);
    if app.reminder_kind == ReminderKind::Auto {
        ui.group(|ui| {
            ui.label(i18n::auto_reminder(app.settings.language, &order));
        });
    }
    ui.add_space(8.0);

    ui.radio_value(&mut app.reminder_kind, ReminderKind::Custom, t.custom_message);
    if app.reminder_kind == ReminderKind::Custom {
        ui.add(
            egui::TextEdit::multiline(&mut app.custom_message)
                .hint_text(t.custom_placeholder)
                .desired_rows(4)
                .desired_width(f32::INFINITY),
        );
    }
    ui.add_space(16.0);

    let can_send = app.reminder_kind == ReminderKind::Auto
        || !app.custom_message.trim().is_empty();
    ui.vertical_centered(|ui| {
        if ui.add_enabled(can_send, primary_button(t.send)).clicked() {
            app.send_reminder();
        }
    });
}
