use crossgen::engine::render::{PlotRequest, RenderError, Renderer};
use nalgebra::{Point2, Point3};
use std::fmt::{self, Write as _};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const CANVAS_SIZE: f64 = 400.0;
const MARGIN: f64 = 40.0;
const MARKER_RADIUS: f64 = 4.0;
/// Depth axis direction of the oblique 3D projection (30 degrees, half length).
const DEPTH_X: f64 = 0.433_012_701_892_219_3;
const DEPTH_Y: f64 = 0.25;

/// Writes every plot request as a standalone SVG file into a directory.
///
/// Files are numbered in the order they are rendered: `plot-0001-2d.svg`,
/// `plot-0002-3d.svg`, and so on.
#[derive(Debug)]
pub struct SvgPlotter {
    output_dir: PathBuf,
    counter: usize,
    written: Vec<PathBuf>,
}

impl SvgPlotter {
    pub fn new(output_dir: &Path) -> Result<Self, RenderError> {
        fs::create_dir_all(output_dir)?;
        Ok(Self {
            output_dir: output_dir.to_path_buf(),
            counter: 0,
            written: Vec::new(),
        })
    }

    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    fn write(
        &mut self,
        suffix: &str,
        request: &PlotRequest,
        points: &[Point2<f64>],
    ) -> Result<(), RenderError> {
        request.validate()?;
        self.counter += 1;
        let path = self
            .output_dir
            .join(format!("plot-{:04}-{}.svg", self.counter, suffix));

        fs::write(&path, render_svg(request, points)?)?;
        debug!("Wrote plot to {:?}", &path);
        self.written.push(path);
        Ok(())
    }
}

impl Renderer for SvgPlotter {
    fn plot_2d(&mut self, request: &PlotRequest) -> Result<(), RenderError> {
        let points: Vec<_> = request
            .coordinates
            .iter()
            .map(|p| Point2::new(p.x, p.y))
            .collect();
        self.write("2d", request, &points)
    }

    fn plot_3d(&mut self, request: &PlotRequest) -> Result<(), RenderError> {
        let points: Vec<_> = request.coordinates.iter().map(project_oblique).collect();
        self.write("3d", request, &points)
    }
}

fn project_oblique(p: &Point3<f64>) -> Point2<f64> {
    Point2::new(p.x + DEPTH_X * p.z, p.y + DEPTH_Y * p.z)
}

/// Maps plot coordinates onto the canvas, keeping the aspect ratio and flipping y.
fn fit_to_canvas(points: &[Point2<f64>]) -> Vec<Point2<f64>> {
    let (min_x, max_x) = extent(points.iter().map(|p| p.x));
    let (min_y, max_y) = extent(points.iter().map(|p| p.y));
    let span = (max_x - min_x).max(max_y - min_y);
    let scale = if span > 0.0 {
        (CANVAS_SIZE - 2.0 * MARGIN) / span
    } else {
        1.0
    };

    points
        .iter()
        .map(|p| {
            Point2::new(
                MARGIN + (p.x - min_x) * scale,
                CANVAS_SIZE - MARGIN - (p.y - min_y) * scale,
            )
        })
        .collect()
}

fn extent(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    })
}

fn render_svg(request: &PlotRequest, points: &[Point2<f64>]) -> Result<String, fmt::Error> {
    let canvas = fit_to_canvas(points);
    let mut svg = String::new();

    writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}">"#,
        size = CANVAS_SIZE
    )?;
    writeln!(svg, r#"<rect width="100%" height="100%" fill="white"/>"#)?;
    if let Some(title) = &request.title {
        writeln!(
            svg,
            r#"<text x="{x}" y="20" text-anchor="middle" font-family="sans-serif" font-size="14">{title}</text>"#,
            x = CANVAS_SIZE / 2.0,
            title = escape(title)
        )?;
    }
    if request.connected && canvas.len() > 1 {
        let path: Vec<String> = canvas
            .iter()
            .map(|p| format!("{:.2},{:.2}", p.x, p.y))
            .collect();
        writeln!(
            svg,
            r#"<polyline points="{}" fill="none" stroke="steelblue" stroke-width="2"/>"#,
            path.join(" ")
        )?;
    }
    for (p, label) in canvas.iter().zip(&request.labels) {
        writeln!(
            svg,
            r#"<circle cx="{:.2}" cy="{:.2}" r="{}" fill="steelblue"/>"#,
            p.x, p.y, MARKER_RADIUS
        )?;
        writeln!(
            svg,
            r#"<text x="{:.2}" y="{:.2}" text-anchor="end" font-family="sans-serif" font-size="12">{}</text>"#,
            p.x - MARKER_RADIUS,
            p.y - MARKER_RADIUS,
            escape(label)
        )?;
    }
    svg.push_str("</svg>\n");
    Ok(svg)
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
