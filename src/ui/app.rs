use eframe::{Frame, egui};
use strum::IntoEnumIterator;

use crate::config::ANALYSIS;
use crate::error::DashboardError;
use crate::models::DashboardModel;
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::panels;
use crate::ui::plot_view::PlotView;
use crate::ui::styles::{UiStyleExt, setup_custom_visuals};

/// The chart pages, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum_macros::EnumIter, strum_macros::Display)]
pub enum Tab {
    #[default]
    #[strum(to_string = "Price Trends")]
    Trends,
    #[strum(to_string = "Volatility")]
    Volatility,
    #[strum(to_string = "Seasonal Patterns")]
    Seasonal,
    #[strum(to_string = "Forecast")]
    Forecast,
}

/// The dashboard window. Holds either the finished pipeline output or the
/// terminal error; nothing is recomputed after startup except the
/// moving-average overlays driven by the sliders.
pub struct BrentDashApp {
    model: Result<DashboardModel, DashboardError>,
    active_tab: Tab,
    short_ma_days: usize,
    long_ma_days: usize,
    show_all_events: bool,
    plot_view: PlotView,
}

impl BrentDashApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        model: Result<DashboardModel, DashboardError>,
    ) -> Self {
        setup_custom_visuals(&cc.egui_ctx);

        Self {
            model,
            active_tab: Tab::default(),
            short_ma_days: ANALYSIS.moving_average.short_default_days,
            long_ma_days: ANALYSIS.moving_average.long_default_days,
            // Major events only until the user opts into the full set
            show_all_events: false,
            plot_view: PlotView::new(),
        }
    }

    fn render_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("header_panel").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.heading(
                    egui::RichText::new(UI_TEXT.app_title).color(UI_CONFIG.colors.heading),
                );
                ui.separator();
                for tab in Tab::iter() {
                    ui.selectable_value(&mut self.active_tab, tab, tab.to_string());
                }
            });
            ui.add_space(4.0);
        });
    }

    fn render_side_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("left_panel")
            .min_width(UI_CONFIG.side_panel_min_width)
            .show(ctx, |ui| {
                panels::controls_panel(
                    ui,
                    &mut self.short_ma_days,
                    &mut self.long_ma_days,
                    &mut self.show_all_events,
                );

                ui.add_space(10.0);
                ui.separator();
                ui.add_space(10.0);

                match &self.model {
                    Ok(model) => panels::quick_stats_panel(ui, model),
                    Err(error) => panels::error_panel(ui, error),
                }
            });
    }

    fn render_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            panels::status_bar(ui, self.model.as_ref().ok());
        });
    }

    fn render_central_panel(&mut self, ctx: &egui::Context) {
        // Split the borrows: the plot view caches mutably while the model
        // stays read-only.
        let Self {
            model,
            active_tab,
            short_ma_days,
            long_ma_days,
            show_all_events,
            plot_view,
        } = self;

        egui::CentralPanel::default().show(ctx, |ui| {
            let model = match model {
                Ok(model) => model,
                Err(error) => {
                    panels::error_panel(ui, error);
                    return;
                }
            };

            match active_tab {
                Tab::Trends => {
                    let chart_height = (ui.available_height() - 220.0).max(240.0);
                    ui.scope(|ui| {
                        ui.set_height(chart_height);
                        plot_view.trend_plot(
                            ui,
                            model,
                            *short_ma_days,
                            *long_ma_days,
                            *show_all_events,
                        );
                    });
                    egui::CollapsingHeader::new(UI_TEXT.averages_heading)
                        .default_open(false)
                        .show(ui, |ui| {
                            plot_view.averages_plot(ui, model);
                        });
                }
                Tab::Volatility => plot_view.volatility_plot(ui, model),
                Tab::Seasonal => {
                    ui.label_subdued(format!(
                        "Additive decomposition of the close series, {}-session period",
                        model.seasonal.period()
                    ));
                    egui::ScrollArea::vertical().show(ui, |ui| {
                        plot_view.seasonal_plot(ui, model);
                    });
                }
                Tab::Forecast => plot_view.forecast_plot(ui, model),
            }
        });
    }
}

impl eframe::App for BrentDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        self.render_top_panel(ctx);
        self.render_side_panel(ctx);
        self.render_status_bar(ctx);
        self.render_central_panel(ctx);
    }
}
