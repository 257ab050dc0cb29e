use std::fmt;

use clap::ValueEnum;

/// A single splash screen output: file name and exact pixel dimensions.
///
/// Specs are defined statically per platform and never built from user
/// input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplashSpec {
    /// Output file name.
    pub name: &'static str,
    /// Target width in pixels.
    pub width: u32,
    /// Target height in pixels.
    pub height: u32,
}

const fn spec(name: &'static str, width: u32, height: u32) -> SplashSpec {
    SplashSpec {
        name,
        width,
        height,
    }
}

/// iOS launch screen variants, portrait and landscape.
pub const IOS_SPLASHES: [SplashSpec; 9] = [
    spec("iphone_2x.png", 640, 960),
    spec("iphone5.png", 640, 1136),
    spec("iphone6.png", 750, 1334),
    spec("iphone6p_portrait.png", 1242, 2208),
    spec("iphone6p_landscape.png", 2208, 1242),
    spec("ipad_portrait.png", 768, 1024),
    spec("ipad_portrait_2x.png", 1536, 2048),
    spec("ipad_landscape.png", 1024, 768),
    spec("ipad_landscape_2x.png", 2048, 1536),
];

/// Android launch screen variants, one per density bucket.
pub const ANDROID_SPLASHES: [SplashSpec; 8] = [
    // Landscape
    spec("android_mdpi_landscape.png", 480, 320),
    spec("android_hdpi_landscape.png", 800, 480),
    spec("android_xhdpi_landscape.png", 1280, 720),
    spec("android_xxhdpi_landscape.png", 1440, 960),
    // Portrait
    spec("android_mdpi_portrait.png", 320, 480),
    spec("android_hdpi_portrait.png", 480, 800),
    spec("android_xhdpi_portrait.png", 720, 1280),
    spec("android_xxhdpi_portrait.png", 960, 1440),
];

/// The platform(s) to generate splash screens for.
///
/// Only `ios` and `android` are accepted as explicit CLI values;
/// `All` is the default when no platform is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Platform {
    /// iOS launch screens only.
    Ios,
    /// Android launch screens only.
    Android,
    /// Both platforms, iOS first.
    #[value(skip)]
    All,
}

impl Platform {
    /// Resolve this selector to its ordered list of output specs.
    ///
    /// `All` is the iOS table followed by the Android table.
    pub fn splashes(&self) -> Vec<SplashSpec> {
        match self {
            Platform::Ios => IOS_SPLASHES.to_vec(),
            Platform::Android => ANDROID_SPLASHES.to_vec(),
            Platform::All => IOS_SPLASHES
                .iter()
                .chain(ANDROID_SPLASHES.iter())
                .copied()
                .collect(),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Platform::Ios => "ios",
            Platform::Android => "android",
            Platform::All => "all",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_ios_resolves_to_its_table_in_order() {
        assert_eq!(Platform::Ios.splashes(), IOS_SPLASHES.to_vec());
    }

    #[test]
    fn test_android_resolves_to_its_table_in_order() {
        assert_eq!(Platform::Android.splashes(), ANDROID_SPLASHES.to_vec());
    }

    #[test]
    fn test_all_concatenates_ios_then_android() {
        let all = Platform::All.splashes();

        assert_eq!(all.len(), 9 + 8);
        assert_eq!(all[..9], IOS_SPLASHES);
        assert_eq!(all[9..], ANDROID_SPLASHES);
    }

    #[test]
    fn test_spec_names_are_unique() {
        let all = Platform::All.splashes();
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn test_all_dimensions_are_positive() {
        for spec in Platform::All.splashes() {
            assert!(spec.width > 0, "{}", spec.name);
            assert!(spec.height > 0, "{}", spec.name);
        }
    }

    #[test]
    fn test_all_is_not_a_cli_value() {
        assert!(Platform::All.to_possible_value().is_none());
        assert!(Platform::Ios.to_possible_value().is_some());
        assert!(Platform::Android.to_possible_value().is_some());
    }
}
