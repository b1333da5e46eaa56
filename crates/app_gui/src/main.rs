use anyhow::{Context as _, Result};
use eframe::{egui, App, Frame, NativeOptions};
use prato_core::{prepare_image, ApiConfig, ClassifyClient, ScreenState};
use rfd::{FileDialog, MessageDialog, MessageLevel};
use std::io;
use std::path::Path;

const PLACEHOLDER: &str = "Selecione a foto do seu prato para analisar.";
const PERMISSION_ALERT: &str = "É necessário conceder permissão para acessar seu álbum!";
const ANALYSIS_FAILED: &str = "Não foi possível analisar a imagem.";
const PREVIEW_SIZE: f32 = 300.0;

fn main() {
    tracing_subscriber::fmt::init();
    let config = match ApiConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuração inválida: {e}");
            std::process::exit(1);
        }
    };
    let options = NativeOptions::default();
    if let Err(e) = eframe::run_native(
        "PratoVision",
        options,
        Box::new(move |_cc| {
            Ok::<_, Box<dyn std::error::Error + Send + Sync>>(Box::new(UiApp::new(config)))
        }),
    ) {
        eprintln!("Aplicativo encerrado com erro: {e}");
    }
}

struct UiApp {
    client: ClassifyClient,
    screen: ScreenState,
    status: String,
    preview: Option<egui::TextureHandle>,
}

impl UiApp {
    fn new(config: ApiConfig) -> Self {
        Self {
            client: ClassifyClient::new(config),
            screen: ScreenState::default(),
            status: String::new(),
            preview: None,
        }
    }

    /// One full select → transform → classify pass. Blocking on the GUI
    /// thread; fine for a single-screen v0.
    fn handle_select_image(&mut self, ctx: &egui::Context) {
        self.status.clear();
        self.screen.begin();

        let picked = FileDialog::new()
            .add_filter("Imagens", &["jpg", "jpeg", "png"])
            .pick_file();
        let picked = match picked {
            Some(path) => path,
            None => {
                self.screen.cancel();
                return;
            }
        };

        if let Err(e) = std::fs::File::open(&picked) {
            if e.kind() == io::ErrorKind::PermissionDenied {
                MessageDialog::new()
                    .set_level(MessageLevel::Warning)
                    .set_title("PratoVision")
                    .set_description(PERMISSION_ALERT)
                    .show();
                self.screen.cancel();
                return;
            }
            tracing::error!("falha ao abrir {}: {e}", picked.display());
            self.status = ANALYSIS_FAILED.to_string();
            self.screen.fail();
            return;
        }

        if let Err(e) = self.analyze(ctx, &picked) {
            tracing::error!("análise falhou: {e:#}");
            self.status = ANALYSIS_FAILED.to_string();
            self.screen.fail();
        }
    }

    fn analyze(&mut self, ctx: &egui::Context, picked: &Path) -> Result<()> {
        let prepared = prepare_image(picked)?;
        self.preview = Some(load_preview(ctx, &prepared.path)?);
        self.screen.image_ready(prepared.path);
        let concepts = self.client.classify(&prepared.base64)?;
        self.screen.complete(concepts);
        Ok(())
    }
}

fn load_preview(ctx: &egui::Context, path: &Path) -> Result<egui::TextureHandle> {
    let img = image::open(path)
        .with_context(|| format!("não foi possível carregar a prévia: {}", path.display()))?;
    let rgba = img.to_rgba8();
    let (w, h) = rgba.dimensions();
    let color = egui::ColorImage::from_rgba_unmultiplied([w as usize, h as usize], rgba.as_raw());
    let name = format!("preview:{}", path.display());
    Ok(ctx.load_texture(name, color, egui::TextureOptions::LINEAR))
}

impl App for UiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        egui::TopBottomPanel::top("top").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let can_select = self.screen.can_select();
                if ui
                    .add_enabled(can_select, egui::Button::new("Selecionar imagem"))
                    .clicked()
                {
                    self.handle_select_image(ctx);
                }
                if !self.status.is_empty() {
                    ui.label(&self.status);
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            match (&self.preview, self.screen.selected_image()) {
                (Some(tex), Some(_)) => {
                    ui.image((tex.id(), egui::Vec2::splat(PREVIEW_SIZE)));
                }
                _ => {
                    ui.label(PLACEHOLDER);
                }
            }
            ui.add_space(8.0);

            if self.screen.is_loading() {
                ui.add(egui::Spinner::new());
                return;
            }

            if !self.screen.message().is_empty() {
                ui.colored_label(egui::Color32::ORANGE, self.screen.message());
                ui.add_space(4.0);
            }

            if !self.screen.items().is_empty() {
                egui::ScrollArea::vertical()
                    .auto_shrink([false; 2])
                    .show(ui, |ui| {
                        for item in self.screen.items() {
                            ui.horizontal(|ui| {
                                ui.label(&item.name);
                                ui.with_layout(
                                    egui::Layout::right_to_left(egui::Align::Center),
                                    |ui| {
                                        ui.label(&item.percentage);
                                    },
                                );
                            });
                            ui.separator();
                        }
                    });
            }
        });
    }
}
