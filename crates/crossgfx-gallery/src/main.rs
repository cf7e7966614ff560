use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use log::LevelFilter;

use crossgfx::logging::{LoggingConfig, init_logging};
use crossgfx::prelude::*;
use crossgfx::record::{LinePolicy, RecordingSurface, SurfaceConfig};
use crossgfx::scene::{DrawCmd, DrawItem, Style};
use crossgfx::text::FontSystem;

const CANVAS: f32 = 320.0;
const FAMILY: &str = "gallery";

#[derive(Debug, Default)]
struct Args {
    strict: bool,
    verbose: bool,
    image: Option<PathBuf>,
    font: Option<PathBuf>,
}

impl Args {
    fn parse() -> Result<Self> {
        let mut args = Args::default();
        let mut it = std::env::args().skip(1);
        while let Some(arg) = it.next() {
            match arg.as_str() {
                "--strict" => args.strict = true,
                "-v" | "--verbose" => args.verbose = true,
                "--image" => args.image = Some(it.next().context("--image needs a path")?.into()),
                "--font" => args.font = Some(it.next().context("--font needs a path")?.into()),
                "-h" | "--help" => {
                    println!("usage: crossgfx-gallery [--strict] [--verbose] [--image PATH] [--font PATH]");
                    std::process::exit(0);
                }
                other => bail!("unknown argument {other:?}"),
            }
        }
        Ok(args)
    }
}

fn main() -> Result<()> {
    let args = Args::parse()?;
    let level = if args.verbose { LevelFilter::Debug } else { LevelFilter::Info };
    init_logging(LoggingConfig::with_level(level));

    let mut fonts = FontSystem::new();
    if let Some(path) = &args.font {
        let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        fonts
            .load_font(FAMILY, false, &bytes)
            .with_context(|| format!("loading {}", path.display()))?;
    } else {
        log::info!("no --font given; text will measure as zero");
    }

    let config = SurfaceConfig {
        default_font: Font::regular(FAMILY, 14),
        line_policy: if args.strict { LinePolicy::Strict } else { LinePolicy::Lenient },
        ..SurfaceConfig::default()
    };
    let mut surface = RecordingSurface::with_fonts(config, Arc::new(fonts));

    surface.begin_drawing();
    draw_gallery(&mut surface, args.image.as_deref());
    let list = surface.finish();

    for item in &list {
        println!("{}", describe(item));
    }
    for violation in surface.violations() {
        println!("! {violation}");
    }
    log::info!("{} commands recorded", list.len());
    Ok(())
}

/// Static showcase of every primitive in the contract.
fn draw_gallery<G: Graphics>(g: &mut G, image: Option<&std::path::Path>) {
    let canvas = Rect::new(0.0, 0.0, CANVAS, CANVAS);

    g.begin_entity(&Tag::new("panel"));
    g.set_color(&Color::DARK_GRAY);
    g.fill_rect_in(canvas);
    g.set_color(&Color::GRAY);
    g.draw_rounded_rect(8.0, 8.0, CANVAS - 16.0, CANVAS - 16.0, 12.0, 2.0);

    g.begin_entity(&Tag::new("star"));
    let center = canvas.center();
    let mut star = Polygon::with_capacity(10);
    for i in 0..10 {
        let r = if i % 2 == 0 { 90.0 } else { 36.0 };
        let angle = i as f32 * std::f32::consts::PI / 5.0;
        star.add_point(center.x + r * angle.sin(), center.y - r * angle.cos());
    }
    g.set_color(&Color::YELLOW.with_alpha(200));
    g.fill_polygon(&star);
    g.set_color(&Color::YELLOW.inverted());
    g.draw_polygon(&star, 1.5);

    g.begin_entity(&Tag::new("ticks"));
    g.set_color(&Color::LIGHT_GRAY);
    g.lines(|g| {
        for i in 0..=10 {
            let x = 40.0 + i as f32 * 24.0;
            let len = if i % 5 == 0 { 12.0 } else { 6.0 };
            g.draw_line_between(Vec2::new(x, 28.0), Vec2::new(x, 28.0 + len), 1.0);
        }
    });

    g.begin_entity(&Tag::new("caption"));
    g.set_font(&Font::bold(FAMILY, 16));
    let metrics = g.font_metrics();
    let caption = "crossgfx gallery";
    let x = center.x - metrics.string_width(caption) as f32 / 2.0;
    let y = CANVAS - 40.0 - metrics.height() as f32;
    g.set_color(&Color::WHITE);
    g.draw_string(caption, x, y);

    g.begin_entity(&Tag::new("badge"));
    g.set_color(&Color::BLUE);
    g.fill_oval(CANVAS - 56.0, 24.0, 32.0, 32.0);
    g.set_color(&Color::CYAN);
    g.draw_oval(CANVAS - 56.0, 24.0, 32.0, 32.0, 2.0);

    if let Some(path) = image {
        let loaded = g.image_from_file(path);
        if loaded.is_none() {
            log::warn!("could not load {}; skipping", path.display());
        }
        g.draw_image_opt(loaded.as_ref(), 24.0, CANVAS - 88.0, 64.0, 64.0);
    }
}

fn describe(item: &DrawItem) -> String {
    if item.cmd.is_marker() {
        return format!("{:>3} {}", item.order, item.cmd.kind());
    }
    let entity = item
        .entity
        .as_ref()
        .and_then(|tag| tag.downcast_ref::<&str>().copied())
        .unwrap_or("-");
    let detail = match &item.cmd {
        DrawCmd::Rect(c) => format!("{:?} {} {}", c.rect, style(c.style), hex(&c.color)),
        DrawCmd::RoundedRect(c) => {
            format!("{:?} r={} {} {}", c.rect, c.radius, style(c.style), hex(&c.color))
        }
        DrawCmd::Oval(c) => format!("{:?} {} {}", c.bounds, style(c.style), hex(&c.color)),
        DrawCmd::Polygon(c) => format!(
            "{} points v{} {} {}",
            c.points.len(),
            c.version,
            style(c.style),
            hex(&c.color)
        ),
        DrawCmd::Line(c) => format!(
            "({}, {}) -> ({}, {}) w={} {}",
            c.start.x, c.start.y, c.end.x, c.end.y, c.width, hex(&c.color)
        ),
        DrawCmd::Image(c) => format!("{}x{} into {:?}", c.image.width(), c.image.height(), c.dest),
        DrawCmd::Text(c) => format!("{:?} at ({}, {}) {} {}", c.text, c.origin.x, c.origin.y, c.font, hex(&c.color)),
        DrawCmd::BeginLines | DrawCmd::EndLines => String::new(),
    };
    format!("{:>3} [{entity}] {} {detail}", item.order, item.cmd.kind())
}

fn style(style: Style) -> String {
    match style.stroke_width() {
        Some(w) => format!("stroke={w}"),
        None => "fill".to_string(),
    }
}

fn hex(color: &Color) -> String {
    let [r, g, b, a] = color.channels();
    format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorded() -> Vec<String> {
        let mut surface = RecordingSurface::default();
        surface.begin_drawing();
        draw_gallery(&mut surface, None);
        surface.finish().iter().map(describe).collect()
    }

    #[test]
    fn markers_print_without_detail() {
        let lines = recorded();
        let begin = lines.iter().find(|l| l.ends_with("begin-lines")).unwrap();
        assert!(!begin.contains('['));
        assert!(lines.iter().any(|l| l.ends_with("end-lines")));
    }

    #[test]
    fn styles_print_fill_or_stroke_width() {
        let lines = recorded();
        assert!(lines.iter().any(|l| l.contains("[panel] rect") && l.contains(" fill ")));
        assert!(lines.iter().any(|l| l.contains("[star] polygon") && l.contains("stroke=1.5")));
    }
}
