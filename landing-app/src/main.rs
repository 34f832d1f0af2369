use landing_reveal::{
    core::logging::init_env_logger,
    ui::{LandingThemes, LandingWidget},
    AnimationEngine, LandingConfig, LandingProfile, LandingView, Tweener, ViewState,
};

/// Standalone landing page preview
fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_env_logger();

    let custom = match std::env::args().nth(1) {
        Some(path) => Some(LandingConfig::from_json_file(path)?),
        None => None,
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_title("Landing Reveal - Preview"),
        ..Default::default()
    };

    eframe::run_native(
        "landing-app",
        options,
        Box::new(|cc| Box::new(LandingApp::new(cc, custom))),
    )?;

    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum ProfileChoice {
    Cinematic,
    Brisk,
    Custom,
}

/// The main application struct
struct LandingApp {
    view: LandingView<Tweener>,
    custom: Option<LandingConfig>,
    profile: ProfileChoice,
    wireframe: bool,
    show_status_panel: bool,
}

impl LandingApp {
    fn new(_cc: &eframe::CreationContext<'_>, custom: Option<LandingConfig>) -> Self {
        let profile = if custom.is_some() {
            ProfileChoice::Custom
        } else {
            ProfileChoice::Cinematic
        };
        let mut app = Self {
            view: LandingView::new(Tweener::new(), LandingConfig::default()),
            custom,
            profile,
            wireframe: false,
            show_status_panel: true,
        };
        app.restart();
        app
    }

    fn resolved_profile(&self) -> LandingProfile {
        match (self.profile, &self.custom) {
            (ProfileChoice::Brisk, _) => LandingProfile::Brisk,
            (ProfileChoice::Custom, Some(config)) => LandingProfile::Custom(config.clone()),
            _ => LandingProfile::Cinematic,
        }
    }

    /// Tear the page down and play it again from the splash
    fn restart(&mut self) {
        self.view.unmount();
        let config = match self.resolved_profile().resolve() {
            Ok(config) => config,
            Err(err) => {
                log::warn!("custom profile rejected, playing the cinematic one: {}", err);
                self.profile = ProfileChoice::Cinematic;
                LandingConfig::default()
            }
        };
        self.view = LandingView::new(Tweener::new(), config);
        self.view.mount();
    }

    fn profile_picker(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Profile:");

            let mut choices = vec![
                (ProfileChoice::Cinematic, "Cinematic"),
                (ProfileChoice::Brisk, "Brisk"),
            ];
            if self.custom.is_some() {
                choices.push((ProfileChoice::Custom, "Custom"));
            }

            for (choice, name) in choices {
                if ui.selectable_label(self.profile == choice, name).clicked() && self.profile != choice {
                    self.profile = choice;
                    self.restart();
                }
            }
        });
    }
}

impl eframe::App for LandingApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_status_panel, "Status Panel");
                    ui.checkbox(&mut self.wireframe, "Wireframe Palette");
                });

                ui.separator();
                self.profile_picker(ui);

                ui.separator();
                if ui.button("Restart").clicked() {
                    self.restart();
                }
            });
        });

        if self.show_status_panel {
            egui::SidePanel::left("status_panel").resizable(true).show(ctx, |ui| {
                ui.heading("Status");
                ui.separator();

                let state = match self.view.state() {
                    Some(ViewState::Splash(_)) => "splash",
                    Some(ViewState::Revealed(_)) => "revealed",
                    None => "unmounted",
                };
                ui.label(format!("State: {}", state));
                ui.label(format!("Clock: {:.2}s", self.view.engine().time()));
                ui.label(format!("Active tweens: {}", self.view.engine().active_count()));
                ui.label(format!("Pointer listeners: {}", self.view.listener_count()));
                ui.label(format!("Nodes: {}", self.view.scene().len()));
            });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            let palette = if self.wireframe {
                LandingThemes::wireframe()
            } else {
                LandingThemes::dusk()
            };
            ui.add(LandingWidget::new(&mut self.view).palette(palette));
        });
    }
}
