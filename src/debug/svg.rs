use std::{fmt, io, path};

use crate::{Double2, Triangle, debug};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum SvgOutputLevel {
    None,
    ResultOnly,
    MajorSteps,
}

pub(crate) struct SvgOutput<'a> {
    pub context: &'a SvgContext,
    content: String,
}

impl<'a> SvgOutput<'a> {
    pub fn new(context: &'a SvgContext) -> Self {
        Self {
            context,
            content: String::new(),
        }
    }

    pub fn append_element<E: SvgElement>(&mut self, element: &E) -> fmt::Result {
        element.write_svg(self)
    }

    pub fn save<P: AsRef<path::Path>>(self, file_name: P) -> io::Result<()> {
        use std::io::Write;

        let path = self.context.output_path.join(file_name);
        let f = std::fs::File::create(path)?;
        let mut w = io::BufWriter::new(&f);

        writeln!(w, "<svg viewBox=\"{}, {}, {}, {}\" xmlns=\"http://www.w3.org/2000/svg\">", self.context.view_x_min, self.context.view_y_min, self.context.view_w(), self.context.view_h())?;
        writeln!(w, "{}", self.content)?;
        writeln!(w, "</svg>")?;
        Ok(())
    }
}

impl<'a> fmt::Write for SvgOutput<'a> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.content.write_str(s)
    }
}

pub(crate) struct SvgContext {
    pub output_path: path::PathBuf,
    pub output_level: SvgOutputLevel,
    pub view_x_min: f32,
    pub view_x_max: f32,
    pub view_y_min: f32,
    pub view_y_max: f32,
    pub show_labels: bool,
}

impl SvgContext {
    /// `None` unless an output path is configured in the environment
    pub fn from_env(contours: &[Vec<Double2>]) -> Option<Self> {
        let output_path = debug::env::svg::output_path()?;
        let output_level = debug::env::svg::output_level();
        let show_labels = debug::env::svg::show_labels();

        if output_level == SvgOutputLevel::None {
            return None;
        }

        let mut view_x_min = f32::MAX;
        let mut view_x_max = f32::MIN;
        let mut view_y_min = f32::MAX;
        let mut view_y_max = f32::MIN;
        for p in contours.iter().flatten() {
            view_x_min = view_x_min.min(p.x as f32);
            view_x_max = view_x_max.max(p.x as f32);
            view_y_min = view_y_min.min(p.y as f32);
            view_y_max = view_y_max.max(p.y as f32);
        }
        if view_x_min > view_x_max {
            return None;
        }

        let w = view_x_max - view_x_min;
        let h = view_y_max - view_y_min;
        let margin_scale = 0.1;
        view_x_min -= w * margin_scale;
        view_x_max += w * margin_scale;
        view_y_min -= h * margin_scale;
        view_y_max += h * margin_scale;

        Some(Self {
            output_path,
            output_level,
            view_x_min,
            view_x_max,
            view_y_min,
            view_y_max,
            show_labels,
        })
    }

    pub fn view_w(&self) -> f32 { self.view_x_max - self.view_x_min }
    pub fn view_h(&self) -> f32 { self.view_y_max - self.view_y_min }

    pub fn view_min_size(&self) -> f32 { self.view_w().min(self.view_h()) }

    pub fn percent(&self, p: f32) -> f32 { self.view_min_size() * p / 100.0 }

    /// Writes `element` to `{name}.svg` if the configured level includes `level`. Failures are ignored.
    pub fn output<E: SvgElement>(&self, name: &str, level: SvgOutputLevel, element: &E) {
        if self.output_level < level {
            return;
        }
        let mut svg = SvgOutput::new(self);
        if svg.append_element(element).is_ok() {
            if let Err(e) = svg.save(format!("{}.svg", name)) {
                log::warn!("could not write {}.svg: {}", name, e);
            }
        }
    }
}

pub(crate) trait SvgElement {
    fn write_svg(&self, svg_output: &mut SvgOutput<'_>) -> fmt::Result;
}

// svg_fmt is missing a function for Circle
pub(crate) fn circle(x: f32, y: f32, r: f32) -> svg_fmt::Circle {
    svg_fmt::Circle {
        x,
        y,
        radius: r,
        style: svg_fmt::Style::default(),
        comment: None,
    }
}

fn to_f32s(points: &[Double2]) -> Vec<[f32; 2]> {
    points.iter().map(|p| [p.x as f32, p.y as f32]).collect()
}

/// Input contours, with their vertices numbered
pub(crate) struct ContoursSvg<'a>(pub &'a [Vec<Double2>]);

impl<'a> SvgElement for ContoursSvg<'a> {
    fn write_svg(&self, svg_output: &mut SvgOutput<'_>) -> fmt::Result {
        use svg_fmt::*;
        use fmt::Write;

        for contour in self.0 {
            writeln!(svg_output, "{}",
                polygon(&to_f32s(contour))
                    .stroke(Stroke::Color(rgb(255, 0, 255), svg_output.context.percent(0.3)))
            )?;
        }

        let r = svg_output.context.percent(0.5);
        for (ci, contour) in self.0.iter().enumerate() {
            for (vi, p) in contour.iter().enumerate() {
                writeln!(svg_output, "{}",
                    circle(p.x as f32, p.y as f32, r)
                        .fill(Fill::Color(blue()))
                )?;
                if svg_output.context.show_labels {
                    let gap = svg_output.context.percent(1.0);
                    writeln!(svg_output, "{}",
                        text(p.x as f32 - gap, p.y as f32, format!("{}.{}", ci, vi))
                            .color(black())
                            .align(Align::Right)
                            .size(svg_output.context.percent(2.0))
                    )?;
                }
            }
        }
        Ok(())
    }
}

/// Monotone pieces, each filled with its own shade
pub(crate) struct PiecesSvg<'a>(pub &'a [Vec<Double2>]);

impl<'a> SvgElement for PiecesSvg<'a> {
    fn write_svg(&self, svg_output: &mut SvgOutput<'_>) -> fmt::Result {
        use svg_fmt::*;
        use fmt::Write;

        for (i, piece) in self.0.iter().enumerate() {
            let shade = (i * 67 % 192) as u8 + 32;
            writeln!(svg_output, "{}",
                polygon(&to_f32s(piece))
                    .fill(Fill::Color(rgb(shade, 255 - shade, 128)))
                    .stroke(Stroke::Color(black(), svg_output.context.percent(0.2)))
            )?;
        }
        Ok(())
    }
}

pub(crate) struct TrianglesSvg<'a>(pub &'a [Triangle]);

impl<'a> SvgElement for TrianglesSvg<'a> {
    fn write_svg(&self, svg_output: &mut SvgOutput<'_>) -> fmt::Result {
        use svg_fmt::*;
        use fmt::Write;

        for triangle in self.0 {
            writeln!(svg_output, "{}",
                polygon(&to_f32s(&triangle.points()))
                    .fill(Fill::Color(rgb(255, 255, 0)))
                    .stroke(Stroke::Color(black(), svg_output.context.percent(0.1)))
                    .stroke_opacity(0.5)
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(show_labels: bool) -> SvgContext {
        SvgContext {
            output_path: path::PathBuf::new(),
            output_level: SvgOutputLevel::MajorSteps,
            view_x_min: 0.,
            view_x_max: 10.,
            view_y_min: 0.,
            view_y_max: 10.,
            show_labels,
        }
    }

    #[test]
    fn contour_vertices() {
        let contour: Vec<Double2> = [(0., 0.), (10., 0.), (0., 10.)].iter().map(|&p| p.into()).collect();
        let context = context(true);
        let mut svg = SvgOutput::new(&context);
        svg.append_element(&ContoursSvg(&[contour])).expect("Formatting failed");
        assert_eq!(svg.content.matches("<circle").count(), 3);
        assert_eq!(svg.content.matches("<polygon").count(), 1);
        assert!(svg.content.contains("0.2"));
    }

    #[test]
    fn triangles() {
        let context = context(false);
        let mut svg = SvgOutput::new(&context);
        let triangle = Triangle::new(Double2::new(0., 0.), Double2::new(1., 0.), Double2::new(0., 1.));
        svg.append_element(&TrianglesSvg(&[triangle])).expect("Formatting failed");
        assert_eq!(svg.content.matches("<polygon").count(), 1);
        assert!(!svg.content.contains("<circle"));
    }
}
