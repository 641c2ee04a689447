use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::nav::Screen;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Urdu,
    Pashto,
}

impl Language {
    /// The language's own name, as shown on the selection screen.
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::Urdu => "اردو",
            Language::Pashto => "پښتو",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Active,
    Completed,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::Active => write!(f, "active"),
            OrderStatus::Completed => write!(f, "completed"),
        }
    }
}

/// Fields read off the paper receipt at capture time. All free text,
/// immutable once the order is saved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptDetails {
    pub name: String,
    pub number: String,
    pub advance: String,
    #[serde(rename = "totalAmount")]
    pub total_amount: String,
    #[serde(rename = "pickupDate")]
    pub pickup_date: String,
}

/// One repair job, tracked from intake to completion.
///
/// Serialized field names keep the camelCase layout of the stored JSON
/// blobs, so existing data loads unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    #[serde(rename = "receiptImage")]
    pub receipt_image: String,
    #[serde(rename = "receiptDetails")]
    pub receipt_details: ReceiptDetails,
    #[serde(rename = "itemImage")]
    pub item_image: String,
    #[serde(rename = "serviceType")]
    pub service_type: String,
    pub timestamp: DateTime<Local>,
    #[serde(rename = "phoneNumber")]
    pub phone_number: String,
    pub status: OrderStatus,
    #[serde(rename = "completedAt", default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Local>>,
}

impl Order {
    /// Build a fresh active order from the wizard's captured data.
    /// The phone number is denormalized out of the receipt for display
    /// and messaging.
    pub fn new(
        receipt_image: String,
        receipt_details: ReceiptDetails,
        item_image: String,
        service_type: String,
    ) -> Self {
        let phone_number = receipt_details.number.clone();
        Self {
            id: Uuid::new_v4().to_string(),
            receipt_image,
            receipt_details,
            item_image,
            service_type,
            timestamp: Local::now(),
            phone_number,
            status: OrderStatus::Active,
            completed_at: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == OrderStatus::Active
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSettings {
    pub language: Language,
    #[serde(rename = "isFirstTime")]
    pub is_first_time: bool,
    #[serde(rename = "hasSeenWelcome")]
    pub has_seen_welcome: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            language: Language::Urdu,
            is_first_time: true,
            has_seen_welcome: false,
        }
    }
}

impl AppSettings {
    /// Sole source of the startup screen: returning users land on the
    /// dashboard, users who saw the welcome but never picked a language
    /// resume at language selection, everyone else starts at welcome.
    pub fn initial_screen(&self) -> Screen {
        if self.has_seen_welcome && !self.is_first_time {
            Screen::Dashboard
        } else if self.has_seen_welcome {
            Screen::Language
        } else {
            Screen::Welcome
        }
    }
}
