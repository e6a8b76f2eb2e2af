//! Theme and styling for the dashboard.
//!
//! A dark slate palette with the semantic colors the table badges need.
//! Mapping from the formatter's visual categories to concrete colors happens
//! here so the formatter stays presentation-agnostic.

use crate::format::{StatusCategory, ValueAccent};
use crate::transaction::TransactionKind;
use eframe::egui;

#[derive(Clone, Copy)]
pub struct AppTheme {
    // Base colors
    pub background: egui::Color32,
    pub surface: egui::Color32,
    pub surface_hover: egui::Color32,
    pub surface_active: egui::Color32,
    pub panel_fill: egui::Color32,
    pub text_primary: egui::Color32,
    pub text_secondary: egui::Color32,

    // Semantic colors
    pub primary: egui::Color32,
    pub success: egui::Color32,
    pub warning: egui::Color32,
    pub danger: egui::Color32,
    pub secondary: egui::Color32,
    pub info: egui::Color32,

    // Spacing scale
    pub spacing_xs: f32,
    pub spacing_sm: f32,
    pub spacing_md: f32,
    pub spacing_lg: f32,

    // Button sizes
    pub button_small: egui::Vec2,
    pub button_medium: egui::Vec2,
}

impl Default for AppTheme {
    fn default() -> Self {
        Self {
            background: egui::Color32::from_rgb(16, 18, 24),
            surface: egui::Color32::from_rgb(24, 27, 35),
            surface_hover: egui::Color32::from_rgb(34, 38, 48),
            surface_active: egui::Color32::from_rgb(44, 49, 61),
            panel_fill: egui::Color32::from_rgb(20, 23, 30),
            text_primary: egui::Color32::from_rgb(230, 234, 240),
            text_secondary: egui::Color32::from_rgb(140, 148, 160),

            primary: egui::Color32::from_rgb(49, 130, 246),
            success: egui::Color32::from_rgb(46, 174, 96),
            warning: egui::Color32::from_rgb(240, 180, 41),
            danger: egui::Color32::from_rgb(226, 74, 74),
            secondary: egui::Color32::from_rgb(96, 104, 116),
            info: egui::Color32::from_rgb(66, 186, 205),

            spacing_xs: 4.0,
            spacing_sm: 8.0,
            spacing_md: 16.0,
            spacing_lg: 24.0,

            button_small: egui::vec2(90.0, 26.0),
            button_medium: egui::vec2(130.0, 34.0),
        }
    }
}

impl AppTheme {
    /// Primary action button (refresh, retry).
    pub fn button_primary(&self, text: &str) -> egui::Button<'_> {
        egui::Button::new(egui::RichText::new(text).color(egui::Color32::WHITE).strong())
            .fill(self.primary)
            .rounding(4.0)
            .min_size(self.button_medium)
    }

    /// Low-emphasis button (per-row actions, popups).
    pub fn button_secondary(&self, text: &str) -> egui::Button<'_> {
        egui::Button::new(egui::RichText::new(text).color(self.text_primary))
            .fill(self.surface)
            .stroke(egui::Stroke::new(1.0, self.secondary))
            .rounding(4.0)
            .min_size(self.button_small)
    }

    /// Card frame for panels and the summary counters.
    pub fn frame_panel(&self) -> egui::Frame {
        egui::Frame::none()
            .fill(self.panel_fill)
            .rounding(6.0)
            .inner_margin(self.spacing_md)
            .stroke(egui::Stroke::new(1.0, self.surface_active))
    }

    /// Frame for the table surface.
    pub fn frame_surface(&self) -> egui::Frame {
        egui::Frame::none()
            .fill(self.surface)
            .rounding(6.0)
            .inner_margin(self.spacing_sm)
    }

    /// Draw a pill-shaped badge with the given fill and text color.
    pub fn badge(&self, ui: &mut egui::Ui, label: &str, fill: egui::Color32, text: egui::Color32) {
        egui::Frame::none()
            .fill(fill)
            .rounding(8.0)
            .inner_margin(egui::Margin::symmetric(8.0, 2.0))
            .show(ui, |ui| {
                ui.label(egui::RichText::new(label).color(text).small().strong());
            });
    }

    /// Badge fill and text colors for a status category. Warning badges use
    /// dark text for contrast, matching the rest on light-on-dark.
    pub fn status_badge_colors(&self, category: StatusCategory) -> (egui::Color32, egui::Color32) {
        match category {
            StatusCategory::Success => (self.success, egui::Color32::WHITE),
            StatusCategory::Warning => (self.warning, egui::Color32::from_rgb(40, 34, 8)),
            StatusCategory::Danger => (self.danger, egui::Color32::WHITE),
            StatusCategory::Neutral => (self.secondary, egui::Color32::WHITE),
        }
    }

    /// Badge fill for a transaction kind: deposits carry the primary accent,
    /// withdrawals the info accent.
    pub fn kind_badge_color(&self, kind: TransactionKind) -> egui::Color32 {
        match kind {
            TransactionKind::CashIn => self.primary,
            TransactionKind::CashOut => self.info,
        }
    }

    /// Text color for a value cell.
    pub fn value_color(&self, accent: ValueAccent) -> egui::Color32 {
        match accent {
            ValueAccent::Neutral => self.text_secondary,
            ValueAccent::Positive => self.success,
            ValueAccent::Negative => self.danger,
        }
    }
}

/// Apply the theme to the egui context.
pub fn configure_style(ctx: &egui::Context, theme: &AppTheme) {
    let mut visuals = egui::Visuals::dark();
    visuals.window_fill = theme.background;
    visuals.panel_fill = theme.panel_fill;
    visuals.override_text_color = Some(theme.text_primary);

    visuals.widgets.noninteractive.bg_fill = theme.surface;
    visuals.widgets.inactive.bg_fill = theme.surface;
    visuals.widgets.hovered.bg_fill = theme.surface_hover;
    visuals.widgets.active.bg_fill = theme.surface_active;
    visuals.widgets.open.bg_fill = theme.surface_active;
    visuals.faint_bg_color = theme.surface_hover;

    ctx.set_visuals(visuals);

    let mut style = (*ctx.style()).clone();
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(12.0, 6.0);

    style.text_styles.insert(
        egui::TextStyle::Heading,
        egui::FontId::new(22.0, egui::FontFamily::Proportional),
    );
    style.text_styles.insert(
        egui::TextStyle::Body,
        egui::FontId::new(14.0, egui::FontFamily::Proportional),
    );
    style.text_styles.insert(
        egui::TextStyle::Button,
        egui::FontId::new(14.0, egui::FontFamily::Proportional),
    );

    ctx.set_style(style);
}
