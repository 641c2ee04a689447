//! Per-language string tables and display formatting. The core only knows
//! which [`Language`] is active; everything here is a pure lookup.

use std::collections::HashMap;

use chrono::{DateTime, Datelike, Local, Timelike};
use text_placeholder::Template;

use crate::types::{Language, Order};

pub struct UiText {
    pub welcome_title: &'static str,
    pub welcome_tagline: &'static str,
    pub welcome_start: &'static str,

    pub language_title: &'static str,
    pub back: &'static str,

    pub dashboard_title: &'static str,
    pub active_tab: &'static str,
    pub completed_tab: &'static str,
    pub no_active: &'static str,
    pub no_completed: &'static str,
    pub add_new: &'static str,
    pub completed_on: &'static str,

    pub step_receipt: &'static str,
    pub step_item: &'static str,
    pub step_service: &'static str,
    pub save_order: &'static str,
    pub step_word: &'static str,
    pub of_word: &'static str,

    pub order_details: &'static str,
    pub customer_name: &'static str,
    pub phone_number: &'static str,
    pub advance: &'static str,
    pub total_amount: &'static str,
    pub pickup_date: &'static str,
    pub complete_order: &'static str,
    pub send_reminder: &'static str,
    pub completed: &'static str,

    pub reminder_title: &'static str,
    pub reminder_subtitle: &'static str,
    pub auto_message: &'static str,
    pub custom_message: &'static str,
    pub custom_placeholder: &'static str,
    pub send: &'static str,
    pub sent: &'static str,
    auto_reminder_template: &'static str,

    pub storage_warning: &'static str,
}

static URDU: UiText = UiText {
    welcome_title: "موچی مددگار",
    welcome_tagline: "آپ کے کاروبار کا ڈیجیٹل مددگار",
    welcome_start: "شروع کریں",

    language_title: "زبان منتخب کریں",
    back: "واپس",

    dashboard_title: "ڈیش بورڈ",
    active_tab: "چلتے ہوئے کام",
    completed_tab: "مکمل ہوئے کام",
    no_active: "کوئی چلتا ہوا کام نہیں",
    no_completed: "کوئی مکمل شدہ کام نہیں",
    add_new: "نیا آرڈر شامل کریں",
    completed_on: "مکمل ہوا:",

    step_receipt: "رسید کی تصویر لیں",
    step_item: "سامان کی تصویر لیں",
    step_service: "سروس کی قسم منتخب کریں",
    save_order: "آرڈر محفوظ کریں",
    step_word: "مرحلہ",
    of_word: "از",

    order_details: "آرڈر کی تفصیل",
    customer_name: "گاہک کا نام",
    phone_number: "فون نمبر",
    advance: "ایڈوانس",
    total_amount: "کل رقم",
    pickup_date: "پک اپ کی تاریخ",
    complete_order: "آرڈر مکمل کریں",
    send_reminder: "یاددہانی بھیجیں",
    completed: "مکمل ہو گیا",

    reminder_title: "یاددہانی بھیجیں",
    reminder_subtitle: "کسٹمر کو آرڈر تیار ہونے کی اطلاع بھیجیں",
    auto_message: "خودکار پیغام",
    custom_message: "اپنا پیغام",
    custom_placeholder: "اپنا پیغام یہاں لکھیں…",
    send: "پیغام بھیجیں",
    sent: "پیغام بھیج دیا گیا!",
    auto_reminder_template:
        "{{name}} صاحب، آپ کا {{service}} کا آرڈر تیار ہے۔ براہِ کرم {{pickup_date}} تک لے جائیں۔",

    storage_warning: "ڈیٹا محفوظ نہیں ہو سکا، تبدیلیاں صرف اس سیشن میں ہیں",
};

static PASHTO: UiText = UiText {
    welcome_title: "موچی مددگار",
    welcome_tagline: "ستاسو د سوداګرۍ ډیجیټل مرستیال",
    welcome_start: "پیل کړئ",

    language_title: "ژبه غوره کړئ",
    back: "بېرته",

    dashboard_title: "ډیش بورډ",
    active_tab: "روان کارونه",
    completed_tab: "بشپړ شوي کارونه",
    no_active: "هېڅ روان کار نشته",
    no_completed: "هېڅ بشپړ شوی کار نشته",
    add_new: "نوې آرډر اضافه کړئ",
    completed_on: "بشپړ شوی:",

    step_receipt: "د رسید انځور واخلئ",
    step_item: "د شي انځور واخلئ",
    step_service: "د سروس ډول غوره کړئ",
    save_order: "آرډر خوندي کړئ",
    step_word: "مرحله",
    of_word: "له",

    order_details: "د آرډر تفصیل",
    customer_name: "د پیرودونکي نوم",
    phone_number: "د تلیفون شمېره",
    advance: "پیشکي",
    total_amount: "ټول رقم",
    pickup_date: "د اخیستو نېټه",
    complete_order: "آرډر بشپړ کړئ",
    send_reminder: "یادونه واستوئ",
    completed: "بشپړ شوی",

    reminder_title: "یادونه واستوئ",
    reminder_subtitle: "پیرودونکي ته د آرډر چمتو کېدو خبر ورکړئ",
    auto_message: "خودکار پیغام",
    custom_message: "ستاسو پیغام",
    custom_placeholder: "خپله پیغام دلته ولیکئ…",
    send: "پیغام واستوئ",
    sent: "پیغام ولیږل شوه!",
    auto_reminder_template:
        "{{name}} صاحب، ستاسو د {{service}} آرډر چمتو دی. مهرباني وکړئ تر {{pickup_date}} پورې یې واخلئ.",

    storage_warning: "معلومات خوندي نشول، بدلونونه یوازې په دې ناسته کې دي",
};

pub fn text(language: Language) -> &'static UiText {
    match language {
        Language::Urdu => &URDU,
        Language::Pashto => &PASHTO,
    }
}

/// The automatic reminder message, filled with the order's customer name,
/// service and pickup date.
pub fn auto_reminder(language: Language, order: &Order) -> String {
    let table = text(language);
    let values = HashMap::from([
        ("name", order.receipt_details.name.as_str()),
        ("service", order.service_type.as_str()),
        ("pickup_date", order.receipt_details.pickup_date.as_str()),
    ]);
    Template::new(table.auto_reminder_template).fill_with_hashmap(&values)
}

const DIGITS: [char; 10] = ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'];

const MONTHS: [&str; 12] = [
    "جنوری",
    "فروری",
    "مارچ",
    "اپریل",
    "مئی",
    "جون",
    "جولائی",
    "اگست",
    "ستمبر",
    "اکتوبر",
    "نومبر",
    "دسمبر",
];

fn eastern_digits(value: u32) -> String {
    value
        .to_string()
        .chars()
        .map(|c| DIGITS[c.to_digit(10).unwrap_or(0) as usize])
        .collect()
}

/// Day, month name and year in Urdu-script digits, e.g. `۱۵ دسمبر ۲۰۲۵`.
pub fn format_date(ts: &DateTime<Local>) -> String {
    format!(
        "{} {} {}",
        eastern_digits(ts.day()),
        MONTHS[ts.month0() as usize],
        eastern_digits(ts.year() as u32),
    )
}

/// Clock time as plain `HH:MM`, the way the receipt slips show it.
pub fn format_time(ts: &DateTime<Local>) -> String {
    format!("{:02}:{:02}", ts.hour(), ts.minute())
}

pub fn format_date_time(ts: &DateTime<Local>) -> String {
    format!("{} - {}", format_date(ts), format_time(ts))
}
