//! Weather-code classification and icon resolution.
//!
//! The primary path maps a WMO code to a category through a fixed table.
//! When no code is available, a secondary path matches keywords in the
//! textual description; this keeps older payloads without codes rendering
//! a sensible icon.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherCategory {
    Clear,
    Cloud,
    Fog,
    Rain,
    Snow,
    Thunder,
    Unknown,
}

#[must_use]
pub fn category_for_code(code: u16) -> WeatherCategory {
    match code {
        0..=2 => WeatherCategory::Clear,
        3 => WeatherCategory::Cloud,
        45 | 48 => WeatherCategory::Fog,
        51..=57 | 61..=67 | 80..=82 => WeatherCategory::Rain,
        71..=77 | 85 | 86 => WeatherCategory::Snow,
        95 | 96 | 99 => WeatherCategory::Thunder,
        _ => WeatherCategory::Unknown,
    }
}

fn category_from_description(description: &str) -> Option<WeatherCategory> {
    let normalized = description.to_lowercase();
    let rules: [(&[&str], WeatherCategory); 6] = [
        (&["thunder"], WeatherCategory::Thunder),
        (&["snow"], WeatherCategory::Snow),
        (&["rain", "drizzle", "shower"], WeatherCategory::Rain),
        (&["fog", "mist"], WeatherCategory::Fog),
        (&["clear"], WeatherCategory::Clear),
        (&["cloud", "overcast"], WeatherCategory::Cloud),
    ];

    rules
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| normalized.contains(k)))
        .map(|(_, category)| *category)
}

/// Resolves the display category: code table first, description keywords
/// as the fallback, `Unknown` when neither matches.
#[must_use]
pub fn resolve_category(code: Option<u16>, description: &str) -> WeatherCategory {
    match code.map(category_for_code) {
        Some(WeatherCategory::Unknown) | None => {
            category_from_description(description).unwrap_or(WeatherCategory::Unknown)
        }
        Some(category) => category,
    }
}

#[must_use]
pub fn category_icon(category: WeatherCategory) -> &'static str {
    match category {
        WeatherCategory::Clear => "☀",
        WeatherCategory::Cloud => "☁",
        WeatherCategory::Fog => "░",
        WeatherCategory::Rain => "☂",
        WeatherCategory::Snow => "❄",
        WeatherCategory::Thunder => "⚡",
        WeatherCategory::Unknown => "·",
    }
}

/// Icon for a reading, combining both resolution paths.
#[must_use]
pub fn weather_icon(code: Option<u16>, description: &str) -> &'static str {
    category_icon(resolve_category(code, description))
}
