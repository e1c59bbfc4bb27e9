use anyhow::Result;

use crate::line::Line;
use crate::scalar::Scalar;
use std::path;
use svg::node::element::path::Data;
use svg::node::element::Path;
use svg::Document;

const COLORS: [&str; 4] = ["cyan", "magenta", "yellow", "black"];

/// Smallest width or height of the view box, for lines without extent on an axis.
const MIN_SPAN: f64 = 1.0;

fn draw_line<T: Scalar>(document: Document, line: &Line<T>, color: &str) -> Document {
    let first = line.first();
    let mut data = Data::new().move_to((first.x.real(), first.y.real()));

    for point in line.iter().skip(1) {
        data = data.line_to((point.x.real(), point.y.real()));
    }

    let path = Path::new()
        .set("fill", "none")
        .set("stroke", color)
        .set("stroke-width", "1.0")
        .set("d", data);

    document.add(path)
}

fn span(min: f64, max: f64) -> (f64, f64) {
    let extent = max - min;

    if extent < MIN_SPAN {
        let center = (min + max) / 2.0;
        (center - MIN_SPAN / 2.0, MIN_SPAN)
    } else {
        (min, extent)
    }
}

/// View box `(x, y, width, height)` enclosing the real part of every vertex.
pub fn view_box<T: Scalar>(lines: &[Line<T>]) -> (f64, f64, f64, f64) {
    let mut points = lines.iter().flat_map(|line| line.iter());

    let Some(first) = points.next() else {
        return (0.0, 0.0, MIN_SPAN, MIN_SPAN);
    };

    let (x, y) = (first.x.real(), first.y.real());
    let (min_x, min_y, max_x, max_y) = points.fold((x, y, x, y), |(x0, y0, x1, y1), p| {
        let (x, y) = (p.x.real(), p.y.real());
        (x0.min(x), y0.min(y), x1.max(x), y1.max(y))
    });

    let (x, width) = span(min_x, max_x);
    let (y, height) = span(min_y, max_y);
    (x, y, width, height)
}

/// Builds a document with one stroked path per line. Only the real part of
/// each coordinate is drawn.
pub fn document<T: Scalar>(lines: &[Line<T>]) -> Document {
    let mut document = Document::new().set("viewBox", view_box(lines));

    for (line, color) in lines.iter().zip(COLORS.iter().cycle()) {
        document = draw_line(document, line, color);
    }

    document
}

pub fn write_lines<T: Scalar>(filename: &path::Path, lines: &[Line<T>]) -> Result<()> {
    svg::save(filename, &document(lines))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::Point;

    #[test]
    fn one_path_per_line() {
        let lines = vec![Line::<i32>::h_shape(6, 10), Line::h_shape(2, 2)];
        let rendered = document(&lines).to_string();

        assert_eq!(rendered.matches("<path").count(), 2);
        assert!(rendered.contains("viewBox=\"0 0 6 10\""));
        assert!(rendered.contains("stroke=\"cyan\""));
        assert!(rendered.contains("stroke=\"magenta\""));
        assert!(rendered.contains("M0,0 L0,10 L3,5 L6,10 L6,0"));
    }

    #[test]
    fn colors_cycle() {
        let line = Line::from_points([Point::new(0.0, 0.0), Point::new(1.0, 1.0)]).unwrap();
        let lines = vec![line; 5];
        let rendered = document(&lines).to_string();

        assert_eq!(rendered.matches("stroke=\"cyan\"").count(), 2);
        assert_eq!(rendered.matches("stroke=\"black\"").count(), 1);
    }

    #[test]
    fn view_box_encloses_negative_points() {
        let line = Line::from_points([Point::new(-5.0, -5.0), Point::new(-1.0, -2.0)]).unwrap();
        assert_eq!(view_box(&[line.clone()]), (-5.0, -5.0, 4.0, 3.0));

        let rendered = document(&[line]).to_string();
        assert!(rendered.contains("viewBox=\"-5 -5 4 3\""));
        assert!(rendered.contains("M-5,-5 L-1,-2"));
    }

    #[test]
    fn view_box_spans_all_lines() {
        let lines = vec![
            Line::from_points([Point::new(-3, 2), Point::new(0, 4)]).unwrap(),
            Line::from_points([Point::new(7, -1)]).unwrap(),
        ];
        assert_eq!(view_box(&lines), (-3.0, -1.0, 10.0, 5.0));
    }

    #[test]
    fn degenerate_view_box_keeps_a_span() {
        let point = Line::from_points([Point::new(-2.0, 3.0)]).unwrap();
        assert_eq!(view_box(&[point]), (-2.5, 2.5, 1.0, 1.0));

        let flat = Line::from_points([Point::new(-4.0, 1.0), Point::new(4.0, 1.0)]).unwrap();
        assert_eq!(view_box(&[flat]), (-4.0, 0.5, 8.0, 1.0));

        assert_eq!(view_box::<f64>(&[]), (0.0, 0.0, 1.0, 1.0));
    }
}
