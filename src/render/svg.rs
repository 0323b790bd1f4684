use std::fmt::Write as _;

use crate::foundation::format::escape_markup;
use crate::render::scene::{Scene, TextLabel};

/// Serialize `scene` to a standalone SVG document.
///
/// Every cell is a rounded `<rect>` carrying a `<title>` caption, so browsers show the
/// year/week tooltip on hover without scripting.
#[tracing::instrument(level = "debug", skip(scene), fields(width = scene.width, height = scene.height))]
pub fn render_svg(scene: &Scene) -> String {
    let mut out = String::with_capacity(scene.cells.len() * 160 + 1024);
    open_document(&mut out, scene.width, scene.height);
    let _ = writeln!(
        out,
        r#"<rect width="100%" height="100%" fill="{}"/>"#,
        scene.background
    );

    out.push_str("<g id=\"weeks\">\n");
    for c in &scene.cells {
        let _ = writeln!(
            out,
            r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" rx="{:.2}" fill="{}" data-week="{}"><title>{}</title></rect>"#,
            c.rect.x0,
            c.rect.y0,
            c.rect.width(),
            c.rect.height(),
            c.radius,
            c.color,
            c.cell.week_number(),
            escape_markup(&scene.caption(c.cell)),
        );
    }
    out.push_str("</g>\n");

    write_labels(&mut out, &scene.labels);
    out.push_str("</svg>\n");
    out
}

/// Document holding only the text labels on a transparent background.
pub(crate) fn labels_document(scene: &Scene) -> String {
    let mut out = String::with_capacity(scene.labels.len() * 200 + 256);
    open_document(&mut out, scene.width, scene.height);
    write_labels(&mut out, &scene.labels);
    out.push_str("</svg>\n");
    out
}

fn open_document(out: &mut String, width: u32, height: u32) {
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    );
}

fn write_labels(out: &mut String, labels: &[TextLabel]) {
    if labels.is_empty() {
        return;
    }
    out.push_str("<g id=\"labels\">\n");
    for l in labels {
        let _ = writeln!(
            out,
            r#"<text x="{:.2}" y="{:.2}" font-family="{}" font-size="{:.2}" font-weight="{}" text-anchor="{}" fill="{}">{}</text>"#,
            l.x,
            l.y,
            l.family.css(),
            l.size,
            l.weight,
            l.anchor.svg(),
            l.color,
            escape_markup(&l.text),
        );
    }
    out.push_str("</g>\n");
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
