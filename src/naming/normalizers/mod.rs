//! One independent transformer per spec category.
//!
//! Each normalizer takes the raw value(s) already resolved from the sheet plus
//! the product group where the policy depends on it, and returns a token.
//! Mandatory categories record a [`crate::naming::ValidationError`] and emit a
//! sentinel instead of dropping out.

mod battery;
mod color;
mod cpu;
mod display;
mod memory;
mod os;
mod peripherals;
mod power;
mod shared;
mod storage;
mod touch;
mod warranty;
mod wireless;

pub use battery::{BATTERY_SENTINEL, normalize_battery};
pub use color::{COLOR_SENTINEL, ColorToken, normalize_color};
pub use cpu::normalize_cpu;
pub use display::{normalize_display, panel_size, resolution};
pub use memory::normalize_memory;
pub use os::os_token;
pub use peripherals::keyboard_mouse_token;
pub use power::{PSU_SENTINEL, normalize_power_supply};
pub use storage::{StorageCount, aggregate_ssd, hdd_token};
pub use touch::{camera_and_mic, is_truthy, normalize_touch};
pub use warranty::{WARRANTY_SENTINEL, normalize_warranty};
pub use wireless::{bluetooth_token, wifi_token};
