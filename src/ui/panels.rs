use eframe::egui::{Color32, Slider, Ui};

use crate::config::ANALYSIS;
use crate::error::DashboardError;
use crate::models::DashboardModel;
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::{UiStyleExt, format_price};
use crate::utils::time_utils::format_date;

/// Moving-average sliders and the event-marker toggle.
pub fn controls_panel(
    ui: &mut Ui,
    short_ma_days: &mut usize,
    long_ma_days: &mut usize,
    show_all_events: &mut bool,
) {
    ui.label_header(UI_TEXT.controls_heading);

    let ma = &ANALYSIS.moving_average;
    ui.add(
        Slider::new(short_ma_days, ma.short_min_days..=ma.short_max_days)
            .text("Short MA (days)"),
    );
    ui.add(Slider::new(long_ma_days, ma.long_min_days..=ma.long_max_days).text("Long MA (days)"));
    ui.checkbox(show_all_events, "Show all events");
}

/// Headline numbers for the fetched history and the forecast.
pub fn quick_stats_panel(ui: &mut Ui, model: &DashboardModel) {
    ui.label_header(UI_TEXT.stats_heading);

    ui.metric(
        "Current Price",
        &format_price(model.prices.last_close()),
        Color32::WHITE,
    );

    if let (Some(change), Some(pct)) = (model.prices.last_change(), model.returns.last()) {
        let color = direction_color(change);
        ui.metric(
            "Session Change",
            &format!("{change:+.2} ({:+.2}%)", pct * 100.0),
            color,
        );
    }

    if let Some(vol_pct) = model.latest_volatility_pct(&ANALYSIS) {
        ui.metric(
            &format!("{}d Volatility", model.volatility.window()),
            &format!("{vol_pct:.2}%"),
            Color32::WHITE,
        );
    }

    let delta_pct = model.forecast_delta_pct();
    ui.metric(
        "Next-Day Forecast",
        &format!(
            "{} ({delta_pct:+.2}%)",
            format_price(model.forecast.predicted_close)
        ),
        direction_color(delta_pct),
    );
    if let Some((lower, upper)) = model.forecast.interval {
        ui.metric(
            "95% Interval",
            &format!("{} to {}", format_price(lower), format_price(upper)),
            Color32::GRAY,
        );
    }
}

/// Shown in the central panel when the pipeline failed.
pub fn error_panel(ui: &mut Ui, error: &DashboardError) {
    ui.add_space(40.0);
    ui.vertical_centered(|ui| {
        ui.heading(UI_TEXT.fetch_failed_heading);
        ui.add_space(10.0);
        ui.label_error(error.to_string());
        ui.add_space(10.0);
        ui.label_subdued("Restart the dashboard to fetch again.");
    });
}

/// Bottom strip: provenance plus the fetched span.
pub fn status_bar(ui: &mut Ui, model: Option<&DashboardModel>) {
    ui.horizontal(|ui| {
        ui.label_subdued(UI_TEXT.data_source);
        if let Some(model) = model {
            ui.separator();
            ui.label_subdued(format!(
                "{} sessions, {} to {}",
                model.prices.len(),
                format_date(model.prices.first_date()),
                format_date(model.prices.last_date()),
            ));
        }
    });
}

fn direction_color(value: f64) -> Color32 {
    if value >= 0.0 {
        UI_CONFIG.colors.bullish
    } else {
        UI_CONFIG.colors.bearish
    }
}
