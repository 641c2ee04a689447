//! Camera and OCR stand-ins. The app only talks to [`CaptureProvider`], so
//! a real capture pipeline can replace [`MockCapture`] without touching
//! anything else.

use tracing::info;
use uuid::Uuid;

use crate::types::{Language, ReceiptDetails};

/// One entry of the fixed service catalog offered on the wizard's last
/// step. The stored order keeps the display label, not the id.
pub struct Service {
    pub id: &'static str,
    pub icon: &'static str,
    label_urdu: &'static str,
    label_pashto: &'static str,
}

impl Service {
    pub fn label(&self, language: Language) -> &'static str {
        match language {
            Language::Urdu => self.label_urdu,
            Language::Pashto => self.label_pashto,
        }
    }
}

pub const SERVICES: [Service; 6] = [
    Service {
        id: "heel",
        icon: "👠",
        label_urdu: "ایڑی بدلنا",
        label_pashto: "پاشنه بدلول",
    },
    Service {
        id: "stitch",
        icon: "🪡",
        label_urdu: "سلائی",
        label_pashto: "ګنډل",
    },
    Service {
        id: "polish",
        icon: "✨",
        label_urdu: "پالش",
        label_pashto: "پالش",
    },
    Service {
        id: "sole",
        icon: "👞",
        label_urdu: "تلا بدلنا",
        label_pashto: "تلوه بدلول",
    },
    Service {
        id: "dye",
        icon: "🎨",
        label_urdu: "رنگ کروانا",
        label_pashto: "رنګول",
    },
    Service {
        id: "zip",
        icon: "🤐",
        label_urdu: "زِپ ٹھیک کرنا",
        label_pashto: "زپ ټیک کول",
    },
];

/// What a receipt capture yields: the photo reference plus the fields the
/// OCR step read off it.
#[derive(Debug, Clone)]
pub struct CapturedReceipt {
    pub image: String,
    pub details: ReceiptDetails,
}

pub trait CaptureProvider {
    fn capture_receipt(&mut self) -> CapturedReceipt;
    fn capture_item(&mut self) -> String;
}

const CUSTOMER_NAMES: [&str; 6] = [
    "احمد علی",
    "محمد حسن",
    "علی رضا",
    "عمران خان",
    "فیصل احمد",
    "زبیر حسین",
];

const SHOE_IMAGES: [&str; 8] = [
    "https://images.unsplash.com/photo-1549298916-b41d501d3772?w=400&h=400&fit=crop",
    "https://images.unsplash.com/photo-1560769629-975ec94e6a86?w=400&h=400&fit=crop",
    "https://images.unsplash.com/photo-1542291026-7eec264c27ff?w=400&h=400&fit=crop",
    "https://images.unsplash.com/photo-1606107557195-0e29a4b5b4aa?w=400&h=400&fit=crop",
    "https://images.unsplash.com/photo-1551107696-a4b0c5a0d9a2?w=400&h=400&fit=crop",
    "https://images.unsplash.com/photo-1552346154-21d32810aba3?w=400&h=400&fit=crop",
    "https://images.unsplash.com/photo-1595950653106-6c9ebd614d3a?w=400&h=400&fit=crop",
    "https://images.unsplash.com/photo-1603808033192-082d6919d3e1?w=400&h=400&fit=crop",
];

const RECEIPT_IMAGE: &str = "asset://receipt-template.png";

/// Fabricates plausible receipts and item photos. Entropy comes from v4
/// UUID bytes; the value ranges match what a real shop receipt carries.
#[derive(Debug, Default)]
pub struct MockCapture;

fn entropy() -> u128 {
    u128::from_le_bytes(*Uuid::new_v4().as_bytes())
}

impl CaptureProvider for MockCapture {
    fn capture_receipt(&mut self) -> CapturedReceipt {
        let name = CUSTOMER_NAMES[(entropy() % CUSTOMER_NAMES.len() as u128) as usize];
        let number = format!("0300-{}", 1_000_000 + entropy() % 9_000_000);
        let advance = format!("{} روپے", 300 + entropy() % 700);
        let total_amount = format!("{} روپے", 1000 + entropy() % 2000);
        let pickup_date = format!("{} دسمبر 2025", 10 + entropy() % 20);

        info!(customer = name, "fabricated receipt capture");
        CapturedReceipt {
            image: RECEIPT_IMAGE.to_string(),
            details: ReceiptDetails {
                name: name.to_string(),
                number,
                advance,
                total_amount,
                pickup_date,
            },
        }
    }

    fn capture_item(&mut self) -> String {
        SHOE_IMAGES[(entropy() % SHOE_IMAGES.len() as u128) as usize].to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_receipt_is_fully_populated() {
        let mut capture = MockCapture;
        let receipt = capture.capture_receipt();
        assert!(!receipt.image.is_empty());
        assert!(!receipt.details.name.is_empty());
        assert!(receipt.details.number.starts_with("0300-"));
        assert!(receipt.details.advance.ends_with("روپے"));
        assert!(!receipt.details.pickup_date.is_empty());
    }

    #[test]
    fn mock_item_image_comes_from_the_catalog() {
        let mut capture = MockCapture;
        let image = capture.capture_item();
        assert!(SHOE_IMAGES.contains(&image.as_str()));
    }

    #[test]
    fn catalog_labels_exist_for_both_languages() {
        for service in &SERVICES {
            assert!(!service.label(Language::Urdu).is_empty());
            assert!(!service.label(Language::Pashto).is_empty());
        }
    }
}
