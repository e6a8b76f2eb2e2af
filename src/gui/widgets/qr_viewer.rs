//! Secondary viewport that displays a transaction's QR code image.
//!
//! The viewer holds no state beyond the record it was opened for: the decoded
//! image, a lazily created texture, and nothing else. Closing it (either via
//! the button or the window's own close control) drops the whole thing.

use eframe::egui;

/// Decode a base64-encoded PNG into an egui image.
pub fn decode_encoded_image(encoded: &str) -> Result<egui::ColorImage, String> {
    use base64::{engine::general_purpose::STANDARD, Engine as _};

    let bytes = STANDARD
        .decode(encoded.trim())
        .map_err(|e| format!("invalid base64 payload: {}", e))?;
    let rgba = image::load_from_memory(&bytes)
        .map_err(|e| format!("not a decodable image: {}", e))?
        .into_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}

/// Auxiliary window showing one transaction's QR code.
pub struct QrViewer {
    transaction_id: String,
    image: Result<egui::ColorImage, String>,
    texture: Option<egui::TextureHandle>,
}

impl QrViewer {
    pub fn open(transaction_id: impl Into<String>, encoded_image: &str) -> Self {
        let image = decode_encoded_image(encoded_image);
        if let Err(e) = &image {
            tracing::warn!("failed to decode QR image: {}", e);
        }
        Self {
            transaction_id: transaction_id.into(),
            image,
            texture: None,
        }
    }

    pub fn transaction_id(&self) -> &str {
        &self.transaction_id
    }

    /// Render the viewer in its own native viewport. Returns false once the
    /// user asked to close it.
    pub fn show(&mut self, ctx: &egui::Context) -> bool {
        let mut open = true;
        let viewport_id = egui::ViewportId::from_hash_of(("qr_viewer", &self.transaction_id));
        let builder = egui::ViewportBuilder::default()
            .with_title("QR Code Pix")
            .with_inner_size([400.0, 460.0])
            .with_resizable(false);

        ctx.show_viewport_immediate(viewport_id, builder, |ctx, _class| {
            egui::CentralPanel::default().show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(8.0);
                    ui.heading("QR Code Pix");
                    ui.add_space(12.0);

                    match &self.image {
                        Ok(img) => {
                            let texture = self.texture.get_or_insert_with(|| {
                                ctx.load_texture(
                                    format!("qr_{}", self.transaction_id),
                                    img.clone(),
                                    Default::default(),
                                )
                            });
                            ui.add(
                                egui::Image::new(&*texture)
                                    .fit_to_exact_size(egui::vec2(300.0, 300.0)),
                            );
                        }
                        Err(e) => {
                            ui.colored_label(
                                egui::Color32::from_rgb(226, 74, 74),
                                format!("Não foi possível exibir o QR Code: {}", e),
                            );
                        }
                    }

                    ui.add_space(16.0);
                    if ui.button("Fechar").clicked() {
                        open = false;
                    }
                });
            });

            if ctx.input(|i| i.viewport().close_requested()) {
                open = false;
            }
        });

        open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 1x1 transparent PNG.
    const TINY_PNG_B64: &str =
        "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mP8z8BQDwAEhQGAhKmMIQAAAABJRU5ErkJggg==";

    #[test]
    fn test_decode_valid_png() {
        let image = decode_encoded_image(TINY_PNG_B64).unwrap();
        assert_eq!(image.size, [1, 1]);
    }

    #[test]
    fn test_decode_tolerates_surrounding_whitespace() {
        let padded = format!("  {}  ", TINY_PNG_B64);
        assert!(decode_encoded_image(&padded).is_ok());
    }

    #[test]
    fn test_decode_rejects_invalid_base64() {
        let err = decode_encoded_image("%%% not base64 %%%").unwrap_err();
        assert!(err.contains("base64"));
    }

    #[test]
    fn test_decode_rejects_non_image_bytes() {
        // "aGVsbG8=" is valid base64 for "hello", which is not an image.
        let err = decode_encoded_image("aGVsbG8=").unwrap_err();
        assert!(err.contains("image"));
    }

    #[test]
    fn test_viewer_records_decode_failure() {
        let viewer = QrViewer::open("tx-1", "aGVsbG8=");
        assert_eq!(viewer.transaction_id(), "tx-1");
        assert!(viewer.image.is_err());
    }
}
