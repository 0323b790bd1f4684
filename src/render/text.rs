use std::sync::{Arc, OnceLock};

use crate::foundation::error::{LifeWeeksError, LifeWeeksResult};

static SYSTEM_FONTS: OnceLock<Arc<usvg::fontdb::Database>> = OnceLock::new();

/// Process-wide system font database, loaded on first use.
pub(crate) fn system_fonts() -> Arc<usvg::fontdb::Database> {
    SYSTEM_FONTS
        .get_or_init(|| {
            let mut db = usvg::fontdb::Database::new();
            db.load_system_fonts();
            tracing::debug!(faces = db.len(), "loaded system fonts");
            Arc::new(db)
        })
        .clone()
}

/// Rasterize an SVG text overlay into a `vello_cpu` image paint of exactly `width x height`.
///
/// Returns `Ok(None)` when no fonts are installed; the grid is still drawn without labels.
pub(crate) fn rasterize_overlay(
    svg: &str,
    width: u32,
    height: u32,
) -> LifeWeeksResult<Option<vello_cpu::Image>> {
    let fontdb = system_fonts();
    if fontdb.is_empty() {
        tracing::warn!("no system fonts found; skipping text labels");
        return Ok(None);
    }

    let opts = usvg::Options {
        fontdb,
        ..Default::default()
    };
    let tree = usvg::Tree::from_data(svg.as_bytes(), &opts)
        .map_err(|e| LifeWeeksError::render(format!("parse label overlay: {e}")))?;

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| LifeWeeksError::render("failed to allocate label pixmap"))?;
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::identity(),
        &mut pixmap.as_mut(),
    );

    premul_to_image(pixmap.data(), width, height).map(Some)
}

fn premul_to_image(rgba8_premul: &[u8], width: u32, height: u32) -> LifeWeeksResult<vello_cpu::Image> {
    let w: u16 = width
        .try_into()
        .map_err(|_| LifeWeeksError::render("overlay width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| LifeWeeksError::render("overlay height exceeds u16"))?;

    let pixels = rgba8_premul
        .chunks_exact(4)
        .map(|px| vello_cpu::peniko::color::PremulRgba8 {
            r: px[0],
            g: px[1],
            b: px[2],
            a: px[3],
        })
        .collect::<Vec<_>>();

    let pixmap = vello_cpu::Pixmap::from_parts_with_opacity(pixels, w, h, true);
    Ok(vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    })
}
