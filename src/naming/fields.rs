//! Accepted spellings for each spec sheet field, in lookup priority order.

pub const SALES_MODEL_NAME: &[&str] = &["Sales Model Name"];
pub const SALES_MODEL: &[&str] = &["Sales Model"];

pub const PROCESSOR_SCAN: &str = "processor";
pub const CPU: &[&str] = &["CPU"];

pub const MEMORY: &[&str] = &["Memory", "RAM", "System Memory"];

/// Always SSD content, whatever the wording.
pub const SSD: &[&str] = &["SSD", "Solid State Drive", "SSD Storage"];
/// Counted only where a fragment says "SSD".
pub const STORAGE: &[&str] = &[
    "Storage",
    "Primary Storage",
    "Secondary Storage",
    "Storage Type",
    "Hard Drive",
    "Drive",
];
pub const HDD: &[&str] = &["HDD", "Hard Disk Drive"];

pub const PANEL_SIZE: &[&str] = &["Panel Size", "Display Size", "Screen Size"];
pub const RESOLUTION: &[&str] = &["Resolution", "Display Resolution", "Screen Resolution"];
pub const TOUCH: &[&str] = &["Touch Panel", "Touchscreen", "Touch Screen", "Touch"];

pub const CAMERA: &[&str] = &["Camera", "Webcam"];
pub const MICROPHONE: &[&str] = &["Microphone", "Mic"];

pub const POWER_SUPPLY: &[&str] = &["Power Supply", "Power Supply Unit", "PSU"];
pub const BATTERY: &[&str] = &["Battery", "Battery Type", "Battery Capacity"];

pub const WIRELESS: &[&str] = &["Wireless", "Connectivity", "LAN/WLAN", "WLAN"];

pub const KEYBOARD_MOUSE: &[&str] = &["Keyboard & Mouse", "Keyboard and Mouse"];
pub const IN_THE_BOX: &[&str] = &["Included in the box", "In the box", "Box Contents"];

pub const OPERATING_SYSTEM: &[&str] = &["Operating System", "OS"];

pub const BASE_WARRANTY: &[&str] = &["Base Warranty"];
pub const WARRANTY_SCAN: &str = "warranty";
pub const SERVICE: &[&str] = &["Service"];

pub const COLOR_SCAN: &[&str] = &["color", "colour"];
