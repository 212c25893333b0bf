use serde::{Deserialize, Serialize};

/// Symbolic weather icon, independent of how a front end draws it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconKey {
    Snow,
    Rain,
    Storm,
    PartlyCloudy,
    Overcast,
    Sun,
    MildSun,
    Unclassified,
}

impl IconKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            IconKey::Snow => "snow",
            IconKey::Rain => "rain",
            IconKey::Storm => "storm",
            IconKey::PartlyCloudy => "partly_cloudy",
            IconKey::Overcast => "overcast",
            IconKey::Sun => "sun",
            IconKey::MildSun => "mild_sun",
            IconKey::Unclassified => "unclassified",
        }
    }

    /// Terminal glyph for the icon.
    pub fn glyph(&self) -> &'static str {
        match self {
            IconKey::Snow => "❄️",
            IconKey::Rain => "🌧️",
            IconKey::Storm => "⛈️",
            IconKey::PartlyCloudy => "⛅",
            IconKey::Overcast => "☁️",
            IconKey::Sun => "☀️",
            IconKey::MildSun | IconKey::Unclassified => "🌤️",
        }
    }

    pub const fn all() -> &'static [IconKey] {
        &[
            IconKey::Snow,
            IconKey::Rain,
            IconKey::Storm,
            IconKey::PartlyCloudy,
            IconKey::Overcast,
            IconKey::Sun,
            IconKey::MildSun,
            IconKey::Unclassified,
        ]
    }
}

impl std::fmt::Display for IconKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Temperatures strictly above this pick the warm variant of cloud/sun icons.
const WARM_ABOVE_C: i32 = 25;

/// Pick an icon for a description and temperature.
///
/// Rules are checked in order and the first hit wins: snow, rain/drizzle,
/// thunder, cloud, clear/sunny. Anything else gets [`IconKey::Unclassified`].
pub fn classify_icon(description: &str, temperature_c: i32) -> IconKey {
    let warm = temperature_c > WARM_ABOVE_C;

    if description.contains("snow") {
        IconKey::Snow
    } else if description.contains("rain") || description.contains("drizzle") {
        IconKey::Rain
    } else if description.contains("thunder") {
        IconKey::Storm
    } else if description.contains("cloud") {
        if warm { IconKey::PartlyCloudy } else { IconKey::Overcast }
    } else if description.contains("clear") || description.contains("sunny") {
        if warm { IconKey::Sun } else { IconKey::MildSun }
    } else {
        IconKey::Unclassified
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rain_wins_regardless_of_temperature() {
        assert_eq!(classify_icon("light rain", 30), IconKey::Rain);
        assert_eq!(classify_icon("light rain", 0), IconKey::Rain);
        assert_eq!(classify_icon("drizzle", 12), IconKey::Rain);
    }

    #[test]
    fn cloud_switches_on_strictly_above_25() {
        assert_eq!(classify_icon("partly cloudy", 30), IconKey::PartlyCloudy);
        assert_eq!(classify_icon("partly cloudy", 26), IconKey::PartlyCloudy);
        assert_eq!(classify_icon("partly cloudy", 25), IconKey::Overcast);
        assert_eq!(classify_icon("partly cloudy", 10), IconKey::Overcast);
    }

    #[test]
    fn clear_and_sunny_switch_on_temperature() {
        assert_eq!(classify_icon("sunny", 32), IconKey::Sun);
        assert_eq!(classify_icon("clear sky", 22), IconKey::MildSun);
        assert_eq!(classify_icon("clear sky", 25), IconKey::MildSun);
    }

    #[test]
    fn earlier_rules_take_priority() {
        // snow before rain, rain before cloud
        assert_eq!(classify_icon("snow and rain", 0), IconKey::Snow);
        assert_eq!(classify_icon("cloudy with rain", 30), IconKey::Rain);
        assert_eq!(classify_icon("thunderstorm", 30), IconKey::Storm);
    }

    #[test]
    fn unknown_description_gets_default_icon() {
        assert_eq!(classify_icon("overcast", 18), IconKey::Unclassified);
        assert_eq!(classify_icon("", 18), IconKey::Unclassified);
        assert_eq!(classify_icon("fog", 40), IconKey::Unclassified);
    }

    #[test]
    fn every_icon_has_a_key_and_glyph() {
        for icon in IconKey::all() {
            assert!(!icon.as_str().is_empty());
            assert!(!icon.glyph().is_empty());
        }
    }
}
