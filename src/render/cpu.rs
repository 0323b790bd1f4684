use std::io::Cursor;

use crate::foundation::error::{LifeWeeksError, LifeWeeksResult};
use crate::palette::color::Rgb8;
use crate::render::scene::Scene;
use crate::render::svg::labels_document;
use crate::render::text::rasterize_overlay;

/// Tolerance used when flattening rounded corners.
const CORNER_TOLERANCE: f64 = 0.1;

/// Straight-alpha RGBA8 pixels, row-major, `width * height * 4` bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl FrameRGBA {
    /// `[r, g, b, a]` at `(x, y)`, or `None` out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

/// Rasterize `scene` on the CPU.
///
/// Cells are filled with `vello_cpu`; labels are laid out by `usvg` against the system fonts and
/// composited on top as an image paint.
#[tracing::instrument(level = "debug", skip(scene), fields(width = scene.width, height = scene.height))]
pub fn render_frame(scene: &Scene) -> LifeWeeksResult<FrameRGBA> {
    let (w, h) = surface_size(scene.width, scene.height)?;
    let mut ctx = vello_cpu::RenderContext::new(w, h);
    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);

    ctx.set_paint(paint(scene.background));
    ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
        0.0,
        0.0,
        f64::from(scene.width),
        f64::from(scene.height),
    ));

    for c in &scene.cells {
        let rr = vello_cpu::kurbo::RoundedRect::new(
            c.rect.x0, c.rect.y0, c.rect.x1, c.rect.y1, c.radius,
        );
        let path = vello_cpu::kurbo::Shape::to_path(&rr, CORNER_TOLERANCE);
        ctx.set_paint(paint(c.color));
        ctx.fill_path(&path);
    }

    if !scene.labels.is_empty()
        && let Some(overlay) =
            rasterize_overlay(&labels_document(scene), scene.width, scene.height)?
    {
        ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint(overlay);
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(scene.width),
            f64::from(scene.height),
        ));
    }

    ctx.flush();
    let mut pixmap = vello_cpu::Pixmap::new(w, h);
    ctx.render_to_pixmap(&mut pixmap);

    let mut data = pixmap.data_as_u8_slice().to_vec();
    unpremultiply_in_place(&mut data);
    Ok(FrameRGBA {
        width: scene.width,
        height: scene.height,
        data,
    })
}

/// Encode a frame as PNG.
pub fn encode_png(frame: &FrameRGBA) -> LifeWeeksResult<Vec<u8>> {
    let img = image::RgbaImage::from_raw(frame.width, frame.height, frame.data.clone())
        .ok_or_else(|| LifeWeeksError::encode("frame byte length does not match its size"))?;
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .map_err(|e| LifeWeeksError::encode(format!("png encode failed: {e}")))?;
    Ok(buf)
}

fn surface_size(width: u32, height: u32) -> LifeWeeksResult<(u16, u16)> {
    let w: u16 = width
        .try_into()
        .map_err(|_| LifeWeeksError::render("frame width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| LifeWeeksError::render("frame height exceeds u16"))?;
    if w == 0 || h == 0 {
        return Err(LifeWeeksError::render("frame size must be non-zero"));
    }
    Ok((w, h))
}

fn paint(c: Rgb8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, 255)
}

fn unpremultiply_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3];
        if a == 0 || a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u16::from(*c) * 255 + u16::from(a) / 2) / u16::from(a)).min(255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
