//! Drawing code written once against `Graphics`, run on two back ends.

use std::path::Path;
use std::sync::Arc;

use crossgfx::logging::{LoggingConfig, init_logging};
use crossgfx::prelude::*;
use crossgfx::raster::RasterImage;
use crossgfx::record::RecordingSurface;
use crossgfx::scene::{DrawCmd, Style};
use crossgfx::text::NullMetrics;

/// A dial face: background disc, rim, hour ticks, a hand, and a caption.
fn draw_dial<G: Graphics>(g: &mut G, size: f32, logo: &Path) {
    let bounds = Rect::new(0.0, 0.0, size, size);
    let center = bounds.center();
    let radius = size * 0.5;

    g.begin_entity(&Tag::new("face"));
    g.set_color(&Color::LIGHT_GRAY);
    g.fill_oval_in(bounds);
    g.set_color(&Color::DARK_GRAY);
    g.draw_oval(bounds.x(), bounds.y(), bounds.width(), bounds.height(), 2.0);

    g.lines(|g| {
        for hour in 0..12 {
            let angle = hour as f32 * std::f32::consts::TAU / 12.0;
            let dir = Vec2::new(angle.sin(), -angle.cos());
            g.draw_line_between(center + dir * (radius * 0.85), center + dir * radius, 3.0);
        }
    });

    let mut hand = Polygon::new();
    hand.add_point(center.x - 2.0, center.y);
    hand.add_point(center.x, center.y - radius * 0.6);
    hand.add_point(center.x + 2.0, center.y);
    g.begin_entity(&Tag::new("hand"));
    g.set_color(&Color::RED);
    g.fill_polygon(&hand);

    g.set_font(&Font::bold("sans-serif", 14));
    let metrics = g.font_metrics();
    let caption = "crossgfx";
    let x = center.x - metrics.string_width(caption) as f32 / 2.0;
    g.set_color(&Color::BLACK);
    g.draw_string(caption, x, center.y + radius * 0.3);

    let image = g.image_from_file(logo);
    g.draw_image_opt(image.as_ref(), center.x - 8.0, center.y - 8.0, 16.0, 16.0);
}

fn missing_logo() -> std::path::PathBuf {
    std::env::temp_dir().join("crossgfx-contract-missing-logo.png")
}

#[test]
fn dial_records_in_call_order() {
    init_logging(LoggingConfig::for_tests());
    let mut surface = RecordingSurface::default();
    surface.begin_drawing();
    draw_dial(&mut surface, 200.0, &missing_logo());
    let list = surface.finish();

    let kinds: Vec<&str> = list.commands().map(DrawCmd::kind).collect();
    let mut expected = vec!["oval", "oval", "begin-lines"];
    expected.extend(std::iter::repeat_n("line", 12));
    expected.extend(["end-lines", "polygon", "text"]);
    assert_eq!(kinds, expected);
    assert!(surface.violations().is_empty());
}

#[test]
fn dial_entities_and_styles() {
    let mut surface = RecordingSurface::default();
    surface.begin_drawing();
    draw_dial(&mut surface, 100.0, &missing_logo());
    let list = surface.finish();

    let styles: Vec<Style> = list
        .commands()
        .filter_map(|cmd| match cmd {
            DrawCmd::Oval(o) => Some(o.style),
            _ => None,
        })
        .collect();
    assert_eq!(styles, vec![Style::Fill, Style::Stroke(2.0)]);

    let hand = list
        .iter()
        .find(|item| matches!(item.cmd, DrawCmd::Polygon(_)))
        .and_then(|item| item.entity.as_ref())
        .and_then(|tag| tag.downcast_ref::<&str>().copied());
    assert_eq!(hand, Some("hand"));
}

#[test]
fn dial_draws_logo_when_present() {
    let path = std::env::temp_dir().join(format!("crossgfx-contract-logo-{}.png", std::process::id()));
    image::RgbaImage::from_pixel(4, 4, image::Rgba([0, 128, 255, 255]))
        .save(&path)
        .unwrap();

    let mut surface = RecordingSurface::default();
    surface.begin_drawing();
    draw_dial(&mut surface, 100.0, &path);
    let list = surface.finish();
    std::fs::remove_file(&path).ok();

    match list.commands().last() {
        Some(DrawCmd::Image(img)) => {
            assert_eq!((img.image.width(), img.image.height()), (4, 4));
            assert_eq!(img.dest, Rect::new(42.0, 42.0, 16.0, 16.0));
        }
        other => panic!("expected image, got {other:?}"),
    }
}

/// Minimal back end that only counts calls; proves the helpers need nothing
/// beyond the contract.
#[derive(Default)]
struct Tally {
    fills: usize,
    strokes: usize,
    lines: usize,
    batches: usize,
    text: usize,
}

impl Graphics for Tally {
    type Image = ();

    fn begin_entity(&mut self, _entity: &Tag) {}
    fn set_font(&mut self, _font: &Font) {}
    fn set_color(&mut self, _color: &Color) {}
    fn fill_polygon(&mut self, _polygon: &Polygon) { self.fills += 1; }
    fn draw_polygon(&mut self, _polygon: &Polygon, _w: f32) { self.strokes += 1; }
    fn fill_rect(&mut self, _x: f32, _y: f32, _width: f32, _height: f32) { self.fills += 1; }
    fn draw_rect(&mut self, _x: f32, _y: f32, _width: f32, _height: f32, _w: f32) { self.strokes += 1; }
    fn fill_rounded_rect(&mut self, _x: f32, _y: f32, _width: f32, _height: f32, _radius: f32) { self.fills += 1; }
    fn draw_rounded_rect(&mut self, _x: f32, _y: f32, _width: f32, _height: f32, _radius: f32, _w: f32) { self.strokes += 1; }
    fn fill_oval(&mut self, _x: f32, _y: f32, _width: f32, _height: f32) { self.fills += 1; }
    fn draw_oval(&mut self, _x: f32, _y: f32, _width: f32, _height: f32, _w: f32) { self.strokes += 1; }
    fn begin_lines(&mut self) { self.batches += 1; }
    fn draw_line(&mut self, _sx: f32, _sy: f32, _ex: f32, _ey: f32, _w: f32) { self.lines += 1; }
    fn end_lines(&mut self) {}
    fn draw_image(&mut self, _image: &(), _x: f32, _y: f32, _width: f32, _height: f32) {}
    fn draw_string(&mut self, _text: &str, _x: f32, _y: f32) { self.text += 1; }
    fn font_metrics(&mut self) -> Arc<dyn FontMetrics> { Arc::new(NullMetrics) }
    fn image_from_file(&mut self, _path: &Path) -> Option<()> { None }
}

#[test]
fn same_drawing_code_runs_on_any_back_end() {
    let mut tally = Tally::default();
    draw_dial(&mut tally, 100.0, &missing_logo());
    assert_eq!(
        (tally.fills, tally.strokes, tally.lines, tally.batches, tally.text),
        (2, 1, 12, 1, 1)
    );
}

#[test]
fn contract_is_usable_as_trait_object() {
    let mut surface = RecordingSurface::default();
    surface.begin_drawing();
    {
        let g: &mut dyn Graphics<Image = RasterImage> = &mut surface;
        g.set_color(&Color::GREEN);
        g.fill_rect_in(Rect::new(1.0, 2.0, 3.0, 4.0));
        g.draw_rect_in(Rect::new(1.0, 2.0, 3.0, 4.0), 1.0);
        g.fill_rounded_rect_in(Rect::new(0.0, 0.0, 10.0, 10.0), 2.0);
        g.draw_image_opt(None, 0.0, 0.0, 5.0, 5.0);
    }
    assert_eq!(surface.finish().len(), 3);
}
