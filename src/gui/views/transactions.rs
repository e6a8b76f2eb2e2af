//! Transactions view.
//!
//! Renders one of the three mutually exclusive surface states: loading,
//! error, or loaded (table plus summary counters).

use crate::format;
use crate::gui::app::GuiApp;
use crate::gui::theme::AppTheme;
use crate::gui::widgets::QrViewer;
use crate::summary::Summary;
use eframe::egui::{self, RichText};

impl GuiApp {
    pub(crate) fn view_transactions(&mut self, ui: &mut egui::Ui) {
        if self.is_loading() {
            self.render_loading(ui);
        } else if let Some(message) = self.fetch_error.clone() {
            self.render_error(ui, &message);
        } else if self.transactions.is_empty() {
            self.render_empty(ui);
        } else {
            self.render_loaded(ui);
        }
    }

    fn render_loading(&self, ui: &mut egui::Ui) {
        let theme = self.theme;
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() * 0.35);
            ui.add(egui::Spinner::new().size(48.0));
            ui.add_space(theme.spacing_md);
            ui.label(
                RichText::new("Carregando transações...")
                    .size(16.0)
                    .color(theme.text_secondary),
            );
        });
    }

    fn render_error(&mut self, ui: &mut egui::Ui, message: &str) {
        let theme = self.theme;
        let mut retry = false;
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() * 0.3);
            theme.frame_panel().show(ui, |ui| {
                ui.label(RichText::new("⚠").size(28.0).color(theme.danger));
                ui.label(RichText::new(message).color(theme.danger));
            });
            ui.add_space(theme.spacing_md);
            if ui.add(theme.button_primary("🔄 Tentar Novamente")).clicked() {
                retry = true;
            }
        });
        if retry {
            self.start_fetch();
        }
    }

    fn render_empty(&self, ui: &mut egui::Ui) {
        let theme = self.theme;
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() * 0.3);
            ui.label(RichText::new("📥").size(48.0));
            ui.add_space(theme.spacing_sm);
            ui.label(
                RichText::new("Nenhuma transação encontrada")
                    .size(18.0)
                    .strong()
                    .color(theme.text_secondary),
            );
            ui.label(
                RichText::new("Não há transações salvas no DynamoDB ainda.")
                    .color(theme.text_secondary),
            );
        });
    }

    fn render_loaded(&mut self, ui: &mut egui::Ui) {
        let theme = self.theme;
        let summary = Summary::of(&self.transactions);

        ui.label(
            RichText::new(format!("Lista de Transações ({})", self.transactions.len()))
                .size(16.0)
                .strong(),
        );
        ui.add_space(theme.spacing_xs);

        // The row that opens the QR viewer is collected here and applied
        // after the table loop releases its borrow of the list.
        let mut open_qr: Option<usize> = None;

        let table_height = (ui.available_height() - 150.0).max(120.0);
        theme.frame_surface().show(ui, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .max_height(table_height)
                .show(ui, |ui| {
                    ui.set_min_width(ui.available_width());
                    egui::Grid::new("transactions_table")
                        .num_columns(7)
                        .striped(true)
                        .spacing([theme.spacing_md, theme.spacing_sm])
                        .show(ui, |ui| {
                            for header in
                                ["ID", "Tipo", "Valor", "Status", "Data", "Descrição", "QR Code"]
                            {
                                ui.label(
                                    RichText::new(header)
                                        .small()
                                        .strong()
                                        .color(theme.text_secondary),
                                );
                            }
                            ui.end_row();

                            for (idx, tx) in self.transactions.iter().enumerate() {
                                ui.monospace(
                                    RichText::new(tx.short_id())
                                        .small()
                                        .color(theme.text_secondary),
                                );

                                theme.badge(
                                    ui,
                                    format::kind_label(tx.kind),
                                    theme.kind_badge_color(tx.kind),
                                    egui::Color32::WHITE,
                                );

                                let accent = format::value_accent(tx.kind, &tx.value);
                                ui.label(
                                    RichText::new(format::format_currency(&tx.value))
                                        .strong()
                                        .color(theme.value_color(accent)),
                                );

                                let badge = format::classify_status(&tx.status);
                                let (fill, text) = theme.status_badge_colors(badge.category);
                                theme.badge(ui, &badge.label, fill, text);

                                ui.label(
                                    RichText::new(format::format_date(&tx.created_at))
                                        .small()
                                        .color(theme.text_secondary),
                                );

                                ui.label(
                                    RichText::new(tx.description.as_deref().unwrap_or("-"))
                                        .small()
                                        .color(theme.text_secondary),
                                );

                                if tx.has_image() {
                                    if ui
                                        .add(theme.button_secondary("QR"))
                                        .on_hover_text("Ver QR Code")
                                        .clicked()
                                    {
                                        open_qr = Some(idx);
                                    }
                                } else {
                                    ui.label(RichText::new("-").color(theme.text_secondary));
                                }

                                ui.end_row();
                            }
                        });
                });
        });

        if let Some(idx) = open_qr {
            if let Some(tx) = self.transactions.get(idx) {
                if let Some(encoded) = tx.encoded_image.as_deref() {
                    self.qr_viewer = Some(QrViewer::open(tx.id.clone(), encoded));
                }
            }
        }

        ui.add_space(theme.spacing_md);
        render_summary_cards(ui, &theme, &summary);
    }
}

fn render_summary_cards(ui: &mut egui::Ui, theme: &AppTheme, summary: &Summary) {
    ui.columns(4, |columns| {
        summary_card(&mut columns[0], theme, "⬇", "Depósitos", summary.deposits, theme.success);
        summary_card(&mut columns[1], theme, "⬆", "Saques", summary.withdrawals, theme.danger);
        summary_card(&mut columns[2], theme, "✔", "Concluídas", summary.completed, theme.success);
        summary_card(&mut columns[3], theme, "🕓", "Pendentes", summary.pending, theme.warning);
    });
}

fn summary_card(
    ui: &mut egui::Ui,
    theme: &AppTheme,
    icon: &str,
    title: &str,
    count: usize,
    accent: egui::Color32,
) {
    theme.frame_panel().show(ui, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(icon).size(22.0).color(accent));
            ui.label(RichText::new(title).color(theme.text_secondary));
            ui.label(RichText::new(count.to_string()).size(26.0).strong().color(accent));
        });
    });
}
