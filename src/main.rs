mod app;

use eframe::egui;

use app::DashboardApp;
use robotics_atlas::config::DashboardConfig;

fn main() {
    env_logger::init();

    // Optional first argument: dataset path or URL
    let mut config = DashboardConfig::default();
    if let Some(location) = std::env::args().nth(1) {
        config = config.with_dataset(location);
    }
    log::info!("Dataset: {}", config.data.dataset);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size([640.0, 420.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Robotics Atlas",
        options,
        Box::new(|cc| {
            let mut app = DashboardApp::new(config);
            app.start_loads(&cc.egui_ctx);
            Ok(Box::new(app))
        }),
    )
    .expect("Failed to start eframe");
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_loads();

        // Apply dark/light visuals
        if self.state.dark_mode {
            ctx.set_visuals(egui::Visuals::dark());
        } else {
            ctx.set_visuals(egui::Visuals::light());
        }

        // Top toolbar
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            self.draw_toolbar(ui);
            self.draw_notice(ui);
        });
        self.ensure_view();

        // Stats side panel
        if self.show_stats {
            egui::SidePanel::right("stats")
                .default_width(220.0)
                .show(ctx, |ui| {
                    self.draw_stats_panel(ui);
                });
        }

        // Main content area
        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_content(ui);
        });
    }
}
