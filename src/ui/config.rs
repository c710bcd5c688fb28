use eframe::egui::Color32;

/// UI Colors for consistent theming
#[derive(Clone, Copy)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    pub bullish: Color32,
    pub bearish: Color32,
}

/// Static UI strings gathered in one place
pub struct UiText {
    pub app_title: &'static str,
    pub controls_heading: &'static str,
    pub stats_heading: &'static str,
    pub averages_heading: &'static str,
    pub data_source: &'static str,
    pub fetch_failed_heading: &'static str,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub side_panel_min_width: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY,
        heading: Color32::from_rgb(255, 200, 60),
        central_panel: Color32::from_rgb(20, 22, 28),
        side_panel: Color32::from_rgb(25, 25, 25),
        bullish: Color32::from_rgb(130, 200, 140),
        bearish: Color32::from_rgb(230, 110, 110),
    },
    side_panel_min_width: 180.0,
};

pub static UI_TEXT: UiText = UiText {
    app_title: "Brent Oil Price Dashboard",
    controls_heading: "Controls",
    stats_heading: "Quick Stats",
    averages_heading: "Monthly & Yearly Averages",
    data_source: "Data source: Yahoo Finance (BZ=F)",
    fetch_failed_heading: "⚠ Unable to Build Dashboard",
};
