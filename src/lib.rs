//! Mochi Madadgar library root: the navigation/state core, persistence,
//! capture mocking and string tables, plus the egui screens.

pub mod app;
pub mod capture;
pub mod db;
pub mod i18n;
pub mod nav;
pub mod orders;
pub mod types;
pub mod ui;
