//! Main GUI application module.
//!
//! Holds the `GuiApp` state, the frame update loop, and `launch`.

use crate::config::Config;
use crate::gui::fetch::FetchJob;
use crate::gui::notifications::NotificationEntry;
use crate::gui::theme::{configure_style, AppTheme};
use crate::gui::widgets::QrViewer;
use crate::transaction::Transaction;
use anyhow::{anyhow, Result};
use eframe::{egui, egui::RichText, App, Frame, NativeOptions};
use std::collections::VecDeque;

/// Fixed message shown when the fetch fails, regardless of cause.
pub(crate) const FETCH_ERROR_MESSAGE: &str =
    "Erro ao carregar transações. Verifique se a API está rodando.";

const MAX_NOTIFICATIONS: usize = 50;

pub struct GuiApp {
    pub(crate) config: Config,
    pub(crate) theme: AppTheme,
    /// Current transaction list. Replaced wholesale on a successful fetch,
    /// left untouched on failure.
    pub(crate) transactions: Vec<Transaction>,
    pub(crate) fetch_job: Option<FetchJob>,
    pub(crate) fetch_error: Option<String>,
    pub(crate) notifications: VecDeque<NotificationEntry>,
    pub(crate) show_notifications_popup: bool,
    pub(crate) qr_viewer: Option<QrViewer>,
}

impl GuiApp {
    fn new(config: Config, ctx: &egui::Context) -> Self {
        let theme = AppTheme::default();
        configure_style(ctx, &theme);

        let mut app = Self {
            config,
            theme,
            transactions: Vec::new(),
            fetch_job: None,
            fetch_error: None,
            notifications: VecDeque::with_capacity(MAX_NOTIFICATIONS),
            show_notifications_popup: false,
            qr_viewer: None,
        };
        // First fetch starts with the app, mirroring a page load.
        app.start_fetch();
        app
    }

    pub(crate) fn is_loading(&self) -> bool {
        self.fetch_job.as_ref().map(FetchJob::is_running).unwrap_or(false)
    }

    /// Kick off a fetch unless one is already in flight.
    pub(crate) fn start_fetch(&mut self) {
        if self.is_loading() {
            return;
        }
        self.fetch_error = None;
        self.fetch_job = Some(FetchJob::spawn(self.config.clone()));
    }

    fn poll_jobs(&mut self) {
        if let Some(job) = &mut self.fetch_job {
            if let Some(result) = job.poll() {
                match result {
                    Ok(transactions) => {
                        self.notifications.push_back(NotificationEntry::new(format!(
                            "[OK] {} transações carregadas",
                            transactions.len()
                        )));
                        self.transactions = transactions;
                        self.fetch_error = None;
                    }
                    Err(e) => {
                        tracing::error!("failed to fetch transactions: {}", e);
                        self.fetch_error = Some(FETCH_ERROR_MESSAGE.to_string());
                        self.notifications.push_back(NotificationEntry::new(format!(
                            "[!!] Falha ao buscar transações: {}",
                            e
                        )));
                    }
                }
                self.fetch_job = None;
            }
        }

        while self.notifications.len() > MAX_NOTIFICATIONS {
            self.notifications.pop_front();
        }
    }

    fn render_top_bar(&mut self, ui: &mut egui::Ui) {
        ui.add_space(self.theme.spacing_sm);
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.heading(RichText::new("💳 Transações Pix").color(self.theme.text_primary));
                ui.label(
                    RichText::new("Visualização das transações salvas no DynamoDB")
                        .color(self.theme.text_secondary),
                );
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let is_loading = self.is_loading();
                let label = if is_loading { "Atualizando..." } else { "🔄 Atualizar" };
                if ui
                    .add_enabled(!is_loading, self.theme.button_primary(label))
                    .on_hover_text("Buscar transações novamente")
                    .clicked()
                {
                    self.start_fetch();
                }

                let bell = format!("🔔 {}", self.notifications.len());
                if ui.add(self.theme.button_secondary(&bell)).clicked() {
                    self.show_notifications_popup = !self.show_notifications_popup;
                }
            });
        });
        ui.add_space(self.theme.spacing_sm);
    }

    fn render_notifications_popup(&mut self, ctx: &egui::Context) {
        if !self.show_notifications_popup {
            return;
        }

        let mut open = true;
        let mut clear = false;
        egui::Window::new("Notificações")
            .open(&mut open)
            .default_width(360.0)
            .show(ctx, |ui| {
                if self.notifications.is_empty() {
                    ui.label(RichText::new("Nenhuma notificação.").color(self.theme.text_secondary));
                } else {
                    egui::ScrollArea::vertical().max_height(240.0).show(ui, |ui| {
                        for entry in self.notifications.iter().rev() {
                            ui.horizontal(|ui| {
                                ui.label(
                                    RichText::new(entry.time_ago())
                                        .small()
                                        .color(self.theme.text_secondary),
                                );
                                ui.label(&entry.message);
                            });
                        }
                    });
                    ui.add_space(self.theme.spacing_xs);
                    if ui.add(self.theme.button_secondary("Limpar")).clicked() {
                        clear = true;
                    }
                }
            });

        if clear {
            self.notifications.clear();
        }
        self.show_notifications_popup = open;
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        self.poll_jobs();

        // Keep polling while a fetch is in flight even without input events.
        if self.is_loading() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            self.render_top_bar(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.view_transactions(ui);
        });

        self.render_notifications_popup(ctx);

        let mut close_viewer = false;
        if let Some(viewer) = &mut self.qr_viewer {
            close_viewer = !viewer.show(ctx);
        }
        if close_viewer {
            self.qr_viewer = None;
        }
    }
}

pub fn launch(config: Config) -> Result<()> {
    let app_creator = move |cc: &eframe::CreationContext<'_>| {
        Box::new(GuiApp::new(config.clone(), &cc.egui_ctx)) as Box<dyn App>
    };

    let viewport = egui::ViewportBuilder::default().with_inner_size([1100.0, 720.0]);
    let native_options = NativeOptions {
        viewport,
        persist_window: true,
        ..Default::default()
    };

    eframe::run_native("Pixdash - Transações Pix", native_options, Box::new(app_creator))
        .map_err(|e| anyhow!("Failed to start GUI: {}", e))
}
