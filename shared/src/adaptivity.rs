use serde::{Deserialize, Serialize};

use crate::constants::COMPACT_BREAKPOINT_PX;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Ios,
    Android,
    #[default]
    Desktop,
}

impl Platform {
    pub fn from_user_agent(user_agent: &str) -> Self {
        let ua = user_agent.to_lowercase();
        if ua.contains("iphone") || ua.contains("ipad") || ua.contains("ipod") {
            Platform::Ios
        } else if ua.contains("android") {
            Platform::Android
        } else {
            Platform::Desktop
        }
    }

    /// Maps the host's `platform` string (`ios`, `android`, `tdesktop`, `macos`, ...).
    pub fn from_host(platform: &str) -> Option<Self> {
        match platform {
            "ios" => Some(Platform::Ios),
            "android" | "android_x" => Some(Platform::Android),
            "" | "unknown" => None,
            _ => Some(Platform::Desktop),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SizeClass {
    Compact,
    #[default]
    Regular,
}

impl SizeClass {
    pub fn from_extent(px: f64) -> Self {
        if px < COMPACT_BREAKPOINT_PX {
            SizeClass::Compact
        } else {
            SizeClass::Regular
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Adaptivity {
    pub platform: Platform,
    pub size_x: SizeClass,
    pub size_y: SizeClass,
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub is_touch: bool,
}

impl Adaptivity {
    pub fn new(platform: Platform, viewport_width: f64, viewport_height: f64, is_touch: bool) -> Self {
        Self {
            platform,
            size_x: SizeClass::from_extent(viewport_width),
            size_y: SizeClass::from_extent(viewport_height),
            viewport_width,
            viewport_height,
            is_touch,
        }
    }

    pub fn resized(self, viewport_width: f64, viewport_height: f64) -> Self {
        Self::new(self.platform, viewport_width, viewport_height, self.is_touch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_from_user_agent() {
        let iphone = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15";
        let pixel = "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36";
        let mac = "Mozilla/5.0 (Macintosh; Intel Mac OS X 14_0) AppleWebKit/605.1.15";
        assert_eq!(Platform::from_user_agent(iphone), Platform::Ios);
        assert_eq!(Platform::from_user_agent(pixel), Platform::Android);
        assert_eq!(Platform::from_user_agent(mac), Platform::Desktop);
    }

    #[test]
    fn test_platform_from_host() {
        assert_eq!(Platform::from_host("ios"), Some(Platform::Ios));
        assert_eq!(Platform::from_host("android_x"), Some(Platform::Android));
        assert_eq!(Platform::from_host("tdesktop"), Some(Platform::Desktop));
        assert_eq!(Platform::from_host("unknown"), None);
    }

    #[test]
    fn test_size_classes() {
        let phone = Adaptivity::new(Platform::Ios, 390.0, 844.0, true);
        assert_eq!(phone.size_x, SizeClass::Compact);
        assert_eq!(phone.size_y, SizeClass::Regular);

        let rotated = phone.resized(844.0, 390.0);
        assert_eq!(rotated.size_x, SizeClass::Regular);
        assert_eq!(rotated.size_y, SizeClass::Compact);
        assert!(rotated.is_touch);
        assert_eq!(SizeClass::from_extent(600.0), SizeClass::Regular);
    }
}
