use chrono::Weekday;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Display languages. Persian switches the layout to right-to-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum Language {
    En,
    Fa,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDirection {
    Ltr,
    Rtl,
}

impl Language {
    #[must_use]
    pub fn direction(self) -> TextDirection {
        match self {
            Language::En => TextDirection::Ltr,
            Language::Fa => TextDirection::Rtl,
        }
    }

    /// Language code sent to the geocoding API.
    #[must_use]
    pub fn api_code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fa => "fa",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::Fa,
            Language::Fa => Language::En,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Text {
    AppTitle,
    SearchLabel,
    SearchPlaceholder,
    Loading,
    NotAvailable,
    FeelsLike,
    High,
    Low,
    OverviewTitle,
    ForecastTitle,
    MonthlyChartTitle,
    FooterAttribution,
    FooterUpdated,
    SettingsTitle,
    SettingsMode,
    SettingsLight,
    SettingsDark,
    SettingsLanguage,
    SettingsLogout,
    SettingsHint,
    DismissHint,
    LoginTitle,
    LoginPrompt,
    LoginHint,
    LoginPending,
    ErrEmptySearch,
    ErrLocationNotFound,
    ErrLoadFailed,
    ErrNameRequired,
    ErrNameTooShort,
}

#[must_use]
pub fn text(lang: Language, key: Text) -> &'static str {
    match lang {
        Language::En => text_en(key),
        Language::Fa => text_fa(key),
    }
}

fn text_en(key: Text) -> &'static str {
    match key {
        Text::AppTitle => "Weather Dashboard",
        Text::SearchLabel => "Search location",
        Text::SearchPlaceholder => "City name...",
        Text::Loading => "Loading...",
        Text::NotAvailable => "N/A",
        Text::FeelsLike => "Feels like",
        Text::High => "High",
        Text::Low => "Low",
        Text::OverviewTitle => "Today",
        Text::ForecastTitle => "14-Day Forecast",
        Text::MonthlyChartTitle => "Monthly Average Temperature",
        Text::FooterAttribution => "Weather data by Open-Meteo",
        Text::FooterUpdated => "Updated",
        Text::SettingsTitle => "Settings",
        Text::SettingsMode => "Mode",
        Text::SettingsLight => "Light",
        Text::SettingsDark => "Dark",
        Text::SettingsLanguage => "Language",
        Text::SettingsLogout => "Log out",
        Text::SettingsHint => "↑/↓ select  Enter toggle  Esc close",
        Text::DismissHint => "Esc to dismiss",
        Text::LoginTitle => "Login",
        Text::LoginPrompt => "Enter your name",
        Text::LoginHint => "Enter to log in",
        Text::LoginPending => "Logging in...",
        Text::ErrEmptySearch => "Enter a location to search",
        Text::ErrLocationNotFound => "Location not found",
        Text::ErrLoadFailed => "Failed to load weather data",
        Text::ErrNameRequired => "Name is required",
        Text::ErrNameTooShort => "Name must be at least 2 characters",
    }
}

fn text_fa(key: Text) -> &'static str {
    match key {
        Text::AppTitle => "داشبورد آب‌وهوا",
        Text::SearchLabel => "جستجوی مکان",
        Text::SearchPlaceholder => "...نام شهر",
        Text::Loading => "...در حال دریافت",
        Text::NotAvailable => "نامشخص",
        Text::FeelsLike => "دمای احساسی",
        Text::High => "بیشینه",
        Text::Low => "کمینه",
        Text::OverviewTitle => "امروز",
        Text::ForecastTitle => "پیش‌بینی ۱۴ روزه",
        Text::MonthlyChartTitle => "میانگین دمای ماهانه",
        Text::FooterAttribution => "داده‌های آب‌وهوا از Open-Meteo",
        Text::FooterUpdated => "به‌روزرسانی",
        Text::SettingsTitle => "تنظیمات",
        Text::SettingsMode => "حالت",
        Text::SettingsLight => "روشن",
        Text::SettingsDark => "تیره",
        Text::SettingsLanguage => "زبان",
        Text::SettingsLogout => "خروج",
        Text::SettingsHint => "↑/↓ انتخاب  Enter تغییر  Esc بستن",
        Text::DismissHint => "Esc برای بستن",
        Text::LoginTitle => "ورود",
        Text::LoginPrompt => "نام خود را وارد کنید",
        Text::LoginHint => "Enter برای ورود",
        Text::LoginPending => "...در حال ورود",
        Text::ErrEmptySearch => "برای جستجو یک مکان وارد کنید",
        Text::ErrLocationNotFound => "مکانی یافت نشد",
        Text::ErrLoadFailed => "دریافت اطلاعات آب‌وهوا ناموفق بود",
        Text::ErrNameRequired => "نام الزامی است",
        Text::ErrNameTooShort => "نام باید دست‌کم ۲ حرف باشد",
    }
}

/// Localized description for a WMO weather code. Unknown codes get a
/// generic "unknown conditions" label, a missing code the not-available one.
#[must_use]
pub fn weather_description(lang: Language, code: Option<u16>) -> &'static str {
    let Some(code) = code else {
        return text(lang, Text::NotAvailable);
    };

    match lang {
        Language::En => description_en(code),
        Language::Fa => description_fa(code),
    }
}

fn description_en(code: u16) -> &'static str {
    match code {
        0 => "Clear sky",
        1 => "Mainly clear",
        2 => "Partly cloudy",
        3 => "Overcast",
        45 => "Fog",
        48 => "Depositing rime fog",
        51 => "Light drizzle",
        53 => "Moderate drizzle",
        55 => "Dense drizzle",
        56 => "Light freezing drizzle",
        57 => "Dense freezing drizzle",
        61 => "Slight rain",
        63 => "Moderate rain",
        65 => "Heavy rain",
        66 => "Light freezing rain",
        67 => "Heavy freezing rain",
        71 => "Slight snowfall",
        73 => "Moderate snowfall",
        75 => "Heavy snowfall",
        77 => "Snow grains",
        80 => "Slight rain showers",
        81 => "Moderate rain showers",
        82 => "Violent rain showers",
        85 => "Slight snow showers",
        86 => "Heavy snow showers",
        95 => "Thunderstorm",
        96 => "Thunderstorm with light hail",
        99 => "Thunderstorm with heavy hail",
        _ => "Unknown conditions",
    }
}

fn description_fa(code: u16) -> &'static str {
    match code {
        0 => "آسمان صاف",
        1 => "عمدتاً صاف",
        2 => "نیمه‌ابری",
        3 => "ابری",
        45 => "مه",
        48 => "مه همراه با شبنم یخ‌زده",
        51 => "نم‌نم باران سبک",
        53 => "نم‌نم باران متوسط",
        55 => "نم‌نم باران شدید",
        56 => "نم‌نم باران یخ‌زده سبک",
        57 => "نم‌نم باران یخ‌زده شدید",
        61 => "باران سبک",
        63 => "باران متوسط",
        65 => "باران شدید",
        66 => "باران یخ‌زده سبک",
        67 => "باران یخ‌زده شدید",
        71 => "برف سبک",
        73 => "برف متوسط",
        75 => "برف سنگین",
        77 => "دانه‌های برف",
        80 => "رگبار باران سبک",
        81 => "رگبار باران متوسط",
        82 => "رگبار باران شدید",
        85 => "رگبار برف سبک",
        86 => "رگبار برف سنگین",
        95 => "رعد و برق",
        96 => "رعد و برق با تگرگ سبک",
        99 => "رعد و برق با تگرگ سنگین",
        _ => "وضعیت نامشخص",
    }
}

#[must_use]
pub fn month_short(lang: Language, month: u32) -> &'static str {
    const EN: [&str; 12] = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];
    const FA: [&str; 12] = [
        "ژانویه",
        "فوریه",
        "مارس",
        "آوریل",
        "مه",
        "ژوئن",
        "ژوئیه",
        "اوت",
        "سپتامبر",
        "اکتبر",
        "نوامبر",
        "دسامبر",
    ];

    let idx = month.clamp(1, 12) as usize - 1;
    match lang {
        Language::En => EN[idx],
        Language::Fa => FA[idx],
    }
}

#[must_use]
pub fn weekday_name(lang: Language, weekday: Weekday) -> &'static str {
    match lang {
        Language::En => match weekday {
            Weekday::Mon => "Monday",
            Weekday::Tue => "Tuesday",
            Weekday::Wed => "Wednesday",
            Weekday::Thu => "Thursday",
            Weekday::Fri => "Friday",
            Weekday::Sat => "Saturday",
            Weekday::Sun => "Sunday",
        },
        Language::Fa => match weekday {
            Weekday::Mon => "دوشنبه",
            Weekday::Tue => "سه‌شنبه",
            Weekday::Wed => "چهارشنبه",
            Weekday::Thu => "پنج‌شنبه",
            Weekday::Fri => "جمعه",
            Weekday::Sat => "شنبه",
            Weekday::Sun => "یکشنبه",
        },
    }
}

#[must_use]
pub fn weekday_short(lang: Language, weekday: Weekday) -> &'static str {
    match lang {
        Language::En => match weekday {
            Weekday::Mon => "Mon",
            Weekday::Tue => "Tue",
            Weekday::Wed => "Wed",
            Weekday::Thu => "Thu",
            Weekday::Fri => "Fri",
            Weekday::Sat => "Sat",
            Weekday::Sun => "Sun",
        },
        Language::Fa => weekday_name(Language::Fa, weekday),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persian_is_rtl() {
        assert_eq!(Language::Fa.direction(), TextDirection::Rtl);
        assert_eq!(Language::En.direction(), TextDirection::Ltr);
    }

    #[test]
    fn unknown_code_has_label_in_both_languages() {
        assert_eq!(weather_description(Language::En, Some(999)), "Unknown conditions");
        assert_eq!(weather_description(Language::Fa, Some(999)), "وضعیت نامشخص");
    }

    #[test]
    fn missing_code_maps_to_not_available() {
        assert_eq!(
            weather_description(Language::En, None),
            text(Language::En, Text::NotAvailable)
        );
    }

    #[test]
    fn every_known_code_is_translated() {
        let codes = [
            0u16, 1, 2, 3, 45, 48, 51, 53, 55, 56, 57, 61, 63, 65, 66, 67, 71, 73, 75, 77, 80, 81,
            82, 85, 86, 95, 96, 99,
        ];
        for code in codes {
            assert_ne!(description_en(code), "Unknown conditions", "code {code}");
            assert_ne!(description_fa(code), "وضعیت نامشخص", "code {code}");
        }
    }

    #[test]
    fn language_toggle_round_trips() {
        assert_eq!(Language::En.toggled().toggled(), Language::En);
    }
}
