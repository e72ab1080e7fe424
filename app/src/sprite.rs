use eframe::egui::{self, ColorImage, TextureHandle, TextureOptions, Vec2};
use pokegui_team::{CreatureRecord, SlotId};

/// Decode encoded sprite bytes into an egui image
pub fn decode(bytes: &[u8]) -> image::ImageResult<ColorImage> {
    let rgba = image::load_from_memory(bytes)?.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(ColorImage::from_rgba_unmultiplied(size, &rgba.into_raw()))
}

/// Upload the record's sprite for `slot`, if it has one that decodes
pub fn load(ctx: &egui::Context, slot: SlotId, record: &CreatureRecord) -> Option<TextureHandle> {
    let bytes = record.image.as_deref()?;

    match decode(bytes) {
        Ok(image) => Some(ctx.load_texture(
            format!("sprite-{}", slot.index()),
            image,
            TextureOptions::LINEAR,
        )),
        Err(e) => {
            tracing::warn!(
                slot = %slot,
                name = %record.name,
                error = %e,
                "Failed to decode sprite"
            );
            None
        }
    }
}

/// Largest size with the image's aspect ratio that fits in `bounds`
pub fn fit(image: Vec2, bounds: Vec2) -> Vec2 {
    if image.x <= 0.0 || image.y <= 0.0 || bounds.x <= 0.0 || bounds.y <= 0.0 {
        return Vec2::ZERO;
    }

    let scale = (bounds.x / image.x).min(bounds.y / image.y);
    image * scale
}
