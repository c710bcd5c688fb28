use chrono::NaiveDate;
use eframe::egui::Ui;
use egui_plot::{
    AxisHints, Corner, HPlacement, Legend, Line, LineStyle, MarkerShape, Plot, PlotPoints, Points,
    VLine,
};

use crate::config::{ANALYSIS, MARKET_EVENTS, PLOT_CONFIG};
use crate::models::DashboardModel;
use crate::utils::maths_utils;
use crate::utils::time_utils::{date_to_plot_x, format_date, plot_x_to_date};

/// Moving-average overlays are the only per-frame derivation in the UI;
/// cache them keyed by the slider windows so dragging stays cheap.
struct MaCache {
    short_window: usize,
    long_window: usize,
    short: Vec<[f64; 2]>,
    long: Vec<[f64; 2]>,
}

impl MaCache {
    fn compute(model: &DashboardModel, short_window: usize, long_window: usize) -> Self {
        let dates = model.prices.dates();
        let closes = model.prices.close_prices();
        Self {
            short_window,
            long_window,
            short: optional_series_points(dates, &maths_utils::rolling_mean(closes, short_window)),
            long: optional_series_points(dates, &maths_utils::rolling_mean(closes, long_window)),
        }
    }
}

#[derive(Default)]
pub struct PlotView {
    ma_cache: Option<MaCache>,
}

impl PlotView {
    pub fn new() -> Self {
        Self { ma_cache: None }
    }

    /// Price history with both moving averages and event markers.
    pub fn trend_plot(
        &mut self,
        ui: &mut Ui,
        model: &DashboardModel,
        short_window: usize,
        long_window: usize,
        show_all_events: bool,
    ) {
        let closes = series_points(model.prices.dates(), model.prices.close_prices());
        let (short_points, long_points) =
            self.moving_average_points(model, short_window, long_window);
        let first_date = model.prices.first_date();
        let last_date = model.prices.last_date();

        Plot::new("trend_plot")
            .legend(Legend::default().position(Corner::LeftTop))
            .custom_x_axes(vec![date_x_axis()])
            .custom_y_axes(vec![price_y_axis("Price (USD)")])
            .label_formatter(hover_label)
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new("Brent Close", PlotPoints::new(closes))
                        .color(PLOT_CONFIG.close_price_color)
                        .width(PLOT_CONFIG.series_line_width),
                );
                plot_ui.line(
                    Line::new(format!("MA{short_window}"), PlotPoints::new(short_points))
                        .color(PLOT_CONFIG.short_ma_color)
                        .width(PLOT_CONFIG.overlay_line_width)
                        .style(LineStyle::dashed_loose()),
                );
                plot_ui.line(
                    Line::new(format!("MA{long_window}"), PlotPoints::new(long_points))
                        .color(PLOT_CONFIG.long_ma_color)
                        .width(PLOT_CONFIG.overlay_line_width)
                        .style(LineStyle::dashed_loose()),
                );

                for event in MARKET_EVENTS {
                    if !show_all_events && !event.major {
                        continue;
                    }
                    let Ok(date) = event.date.parse::<NaiveDate>() else {
                        continue;
                    };
                    if date < first_date || date > last_date {
                        continue;
                    }
                    plot_ui.vline(
                        VLine::new(event.name, date_to_plot_x(date))
                            .color(PLOT_CONFIG.event_marker_color)
                            .width(PLOT_CONFIG.event_line_width)
                            .style(LineStyle::dashed_loose()),
                    );
                }
            });
    }

    /// Annualized rolling volatility in percent.
    pub fn volatility_plot(&self, ui: &mut Ui, model: &DashboardModel) {
        let scaled = model
            .volatility
            .annualized_pct(ANALYSIS.annualization_factor());
        let points = optional_series_points(model.volatility.dates(), &scaled);
        let legend_label = format!("{}-Day Rolling Volatility", model.volatility.window());

        Plot::new("volatility_plot")
            .legend(Legend::default().position(Corner::RightTop))
            .custom_x_axes(vec![date_x_axis()])
            .custom_y_axes(vec![
                AxisHints::new_y()
                    .label("Volatility (%)")
                    .formatter(|mark, _range| format!("{:.0}%", mark.value))
                    .placement(HPlacement::Left),
            ])
            .label_formatter(hover_label)
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new(legend_label, PlotPoints::new(points))
                        .color(PLOT_CONFIG.volatility_color)
                        .width(PLOT_CONFIG.series_line_width),
                );
            });
    }

    /// The additive decomposition as three stacked component charts.
    pub fn seasonal_plot(&self, ui: &mut Ui, model: &DashboardModel) {
        let dates = model.seasonal.dates();
        let components = [
            (
                "Trend",
                model.seasonal.trend(),
                PLOT_CONFIG.trend_component_color,
            ),
            (
                "Seasonal",
                model.seasonal.seasonal(),
                PLOT_CONFIG.seasonal_component_color,
            ),
            (
                "Residual",
                model.seasonal.residual(),
                PLOT_CONFIG.residual_component_color,
            ),
        ];

        for (name, values, color) in components {
            let points = series_points(dates, values);
            Plot::new(format!("seasonal_{name}"))
                .height(PLOT_CONFIG.stacked_plot_height)
                .legend(Legend::default().position(Corner::LeftTop))
                .custom_x_axes(vec![date_x_axis()])
                .label_formatter(hover_label)
                .show(ui, |plot_ui| {
                    plot_ui.line(
                        Line::new(name, PlotPoints::new(points))
                            .color(color)
                            .width(PLOT_CONFIG.overlay_line_width),
                    );
                });
        }
    }

    /// Recent history plus the next-day prediction and its interval.
    pub fn forecast_plot(&self, ui: &mut Ui, model: &DashboardModel) {
        let n = model.prices.len();
        let tail = ANALYSIS.forecast.chart_tail_days.min(n);
        let tail_dates = &model.prices.dates()[n - tail..];
        let tail_closes = &model.prices.close_prices()[n - tail..];
        let history = series_points(tail_dates, tail_closes);

        let last_x = date_to_plot_x(model.prices.last_date());
        let forecast_x = date_to_plot_x(model.forecast.date);
        let predicted = model.forecast.predicted_close;

        // Keep the whole interval in view even when it clears the history.
        let (mut y_min, mut y_max) = maths_utils::get_min_max(tail_closes);
        y_min = y_min.min(predicted);
        y_max = y_max.max(predicted);
        if let Some((lower, upper)) = model.forecast.interval {
            y_min = y_min.min(lower);
            y_max = y_max.max(upper);
        }
        let y_margin = ((y_max - y_min) * 0.05).max(0.5);

        Plot::new("forecast_plot")
            .legend(Legend::default().position(Corner::LeftTop))
            .custom_x_axes(vec![date_x_axis()])
            .custom_y_axes(vec![price_y_axis("Price (USD)")])
            .label_formatter(hover_label)
            .show(ui, |plot_ui| {
                plot_ui.set_plot_bounds_y(y_min - y_margin..=y_max + y_margin);

                plot_ui.line(
                    Line::new("Historical Price", PlotPoints::new(history))
                        .color(PLOT_CONFIG.close_price_color)
                        .width(PLOT_CONFIG.series_line_width),
                );

                let bridge = vec![[last_x, model.prices.last_close()], [forecast_x, predicted]];
                plot_ui.line(
                    Line::new("Next-Day Forecast", PlotPoints::new(bridge))
                        .color(PLOT_CONFIG.forecast_color)
                        .width(PLOT_CONFIG.series_line_width)
                        .style(LineStyle::dashed_loose()),
                );
                plot_ui.points(
                    Points::new("Next-Day Forecast", PlotPoints::new(vec![[forecast_x, predicted]]))
                        .color(PLOT_CONFIG.forecast_color)
                        .shape(MarkerShape::Circle)
                        .radius(4.0),
                );

                if let Some((lower, upper)) = model.forecast.interval {
                    plot_ui.line(
                        Line::new(
                            "95% Interval",
                            PlotPoints::new(vec![[forecast_x, lower], [forecast_x, upper]]),
                        )
                        .color(PLOT_CONFIG.forecast_bound_color)
                        .width(PLOT_CONFIG.series_line_width),
                    );
                }
            });
    }

    /// Calendar resamples shown under the trend chart.
    pub fn averages_plot(&self, ui: &mut Ui, model: &DashboardModel) {
        let monthly: Vec<[f64; 2]> = model
            .monthly
            .iter()
            .map(|p| [date_to_plot_x(p.period_start), p.mean_close])
            .collect();
        let yearly: Vec<[f64; 2]> = model
            .yearly
            .iter()
            .map(|p| [date_to_plot_x(p.period_start), p.mean_close])
            .collect();

        Plot::new("averages_plot")
            .height(PLOT_CONFIG.stacked_plot_height)
            .legend(Legend::default().position(Corner::LeftTop))
            .custom_x_axes(vec![date_x_axis()])
            .custom_y_axes(vec![price_y_axis("Price (USD)")])
            .label_formatter(hover_label)
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new("Monthly Average", PlotPoints::new(monthly))
                        .color(PLOT_CONFIG.short_ma_color)
                        .width(PLOT_CONFIG.overlay_line_width),
                );
                plot_ui.line(
                    Line::new("Yearly Average", PlotPoints::new(yearly))
                        .color(PLOT_CONFIG.long_ma_color)
                        .width(PLOT_CONFIG.series_line_width),
                );
            });
    }

    fn moving_average_points(
        &mut self,
        model: &DashboardModel,
        short_window: usize,
        long_window: usize,
    ) -> (Vec<[f64; 2]>, Vec<[f64; 2]>) {
        let cache = match self.ma_cache.take() {
            Some(cache)
                if cache.short_window == short_window && cache.long_window == long_window =>
            {
                cache
            }
            _ => MaCache::compute(model, short_window, long_window),
        };
        let points = (cache.short.clone(), cache.long.clone());
        self.ma_cache = Some(cache);
        points
    }
}

// Helpers retained locally for chart assembly

fn series_points(dates: &[NaiveDate], values: &[f64]) -> Vec<[f64; 2]> {
    dates
        .iter()
        .zip(values)
        .map(|(date, value)| [date_to_plot_x(*date), *value])
        .collect()
}

/// Drops absent positions so rolling windows start where they are defined.
fn optional_series_points(dates: &[NaiveDate], values: &[Option<f64>]) -> Vec<[f64; 2]> {
    dates
        .iter()
        .zip(values)
        .filter_map(|(date, value)| value.map(|v| [date_to_plot_x(*date), v]))
        .collect()
}

fn hover_label(name: &str, point: &egui_plot::PlotPoint) -> String {
    let date = plot_x_to_date(point.x).map(format_date).unwrap_or_default();
    if name.is_empty() {
        format!("{date}  {:.2}", point.y)
    } else {
        format!("{name}\n{date}  {:.2}", point.y)
    }
}

fn date_x_axis() -> AxisHints<'static> {
    AxisHints::new_x().label("Date").formatter(|mark, _range| {
        plot_x_to_date(mark.value)
            .map(|date| date.format("%Y-%m").to_string())
            .unwrap_or_default()
    })
}

fn price_y_axis(label: &'static str) -> AxisHints<'static> {
    AxisHints::new_y()
        .label(label)
        .formatter(|mark, _range| format!("${:.2}", mark.value))
        .placement(HPlacement::Left)
}
