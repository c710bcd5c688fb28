//! Plot visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    pub close_price_color: Color32,
    pub short_ma_color: Color32,
    pub long_ma_color: Color32,
    pub volatility_color: Color32,
    pub trend_component_color: Color32,
    pub seasonal_component_color: Color32,
    pub residual_component_color: Color32,
    pub forecast_color: Color32,
    pub forecast_bound_color: Color32,
    pub event_marker_color: Color32,
    /// Width of the main series line
    pub series_line_width: f32,
    /// Width of moving-average overlay lines
    pub overlay_line_width: f32,
    /// Width of event marker lines
    pub event_line_width: f32,
    /// Default plot height when several charts stack vertically
    pub stacked_plot_height: f32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    close_price_color: Color32::from_rgb(31, 119, 180),    // Steel blue
    short_ma_color: Color32::from_rgb(44, 160, 44),        // Green
    long_ma_color: Color32::from_rgb(214, 39, 40),         // Red
    volatility_color: Color32::from_rgb(231, 76, 60),      // Crimson
    trend_component_color: Color32::from_rgb(46, 134, 193), // Blue
    seasonal_component_color: Color32::from_rgb(155, 89, 182), // Violet
    residual_component_color: Color32::from_rgb(127, 140, 141), // Slate gray
    forecast_color: Color32::from_rgb(230, 126, 34),       // Orange
    forecast_bound_color: Color32::from_rgb(243, 156, 18), // Amber
    event_marker_color: Color32::from_rgb(128, 128, 128),  // Gray
    series_line_width: 1.5,
    overlay_line_width: 1.0,
    event_line_width: 1.0,
    stacked_plot_height: 180.0,
};
