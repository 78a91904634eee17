//! Task-level components

pub mod task_settings_popup;

pub use task_settings_popup::TaskSettingsPopup;
