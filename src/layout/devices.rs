use serde::Serialize;

/// Lock-screen wallpaper size for a phone model, in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DevicePreset {
    pub name: &'static str,
    pub width: u32,
    pub height: u32,
}

const fn preset(name: &'static str, width: u32, height: u32) -> DevicePreset {
    DevicePreset {
        name,
        width,
        height,
    }
}

pub const DEVICE_PRESETS: &[DevicePreset] = &[
    preset("iPhone 17 Pro Max", 1320, 2868),
    preset("iPhone 17 Pro", 1206, 2622),
    preset("iPhone 17 Plus", 1290, 2796),
    preset("iPhone 17", 1179, 2556),
    preset("iPhone 16 Pro Max", 1320, 2868),
    preset("iPhone 16 Pro", 1206, 2622),
    preset("iPhone 16 Plus", 1290, 2796),
    preset("iPhone 16", 1179, 2556),
    preset("iPhone 15 Pro Max", 1290, 2796),
    preset("iPhone 15 Pro", 1179, 2556),
    preset("iPhone 15 Plus", 1290, 2796),
    preset("iPhone 15", 1179, 2556),
    preset("iPhone 14 Pro Max", 1290, 2796),
    preset("iPhone 14 Pro", 1179, 2556),
    preset("iPhone 14 Plus", 1284, 2778),
    preset("iPhone 14", 1170, 2532),
    preset("iPhone SE (3rd gen)", 750, 1334),
];

/// Look up a preset by name, ignoring case, spaces and punctuation
/// (`iphone-15-pro` and `iPhone 15 Pro` both match).
pub fn find_device(name: &str) -> Option<&'static DevicePreset> {
    let wanted = slug(name);
    if wanted.is_empty() {
        return None;
    }
    DEVICE_PRESETS.iter().find(|d| slug(d.name) == wanted)
}

fn slug(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
