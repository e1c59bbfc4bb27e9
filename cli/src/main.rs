use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use polyline::{Line, Point};
use std::path::PathBuf;

#[derive(Parser)]
#[command(about = "Build polylines and print their lengths")]
pub struct Options {
    /// Additionally draw the printed lines into this SVG file
    #[arg(long, global = true)]
    svg: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Square, square plus a point and the letter H
    Demo,

    /// The letter H as a single polyline
    HShape {
        #[arg(long, default_value = "6")]
        width: f64,

        #[arg(long, default_value = "10")]
        height: f64,
    },

    /// Points drawn uniformly from [min, max) on both axes
    Random {
        #[arg(long, default_value = "0")]
        min: f64,

        #[arg(long, default_value = "1")]
        max: f64,

        #[arg(long, short, default_value = "10")]
        count: usize,
    },

    /// Length of a JSON array of {"x": .., "y": ..} points
    Length {
        #[arg(long, short)]
        input: PathBuf,
    },
}

fn report<T: polyline::Scalar>(name: &str, line: &Line<T>) {
    println!("{}:\n{}", name, line);
    println!("Length of {}: {}\n", name, line.length());
}

fn demo() -> Result<Vec<Line<f64>>> {
    let line1 = Line::from_points([
        Point::new(0, 0),
        Point::new(0, 5),
        Point::new(5, 5),
        Point::new(5, 0),
    ])?;
    report("line1", &line1);

    let p = Point::new(3, 3);
    let line2 = &line1 + p;
    println!("After adding point {}:", p);
    report("line2", &line2);

    let h_shape = Line::<i32>::h_shape(6, 10);
    report("H-shaped line", &h_shape);

    [line1, line2, h_shape]
        .into_iter()
        .map(|line| {
            Line::from_points(
                line.iter()
                    .map(|p| Point::new(f64::from(p.x), f64::from(p.y))),
            )
        })
        .collect::<polyline::Result<Vec<_>>>()
        .map_err(Into::into)
}

fn main() -> Result<()> {
    env_logger::init();

    let opt = Options::parse();

    let lines = match opt.command.unwrap_or(Command::Demo) {
        Command::Demo => {
            info!("Run demo");
            demo()?
        }
        Command::HShape { width, height } => {
            let line = Line::h_shape(width, height);
            report("H-shaped line", &line);
            vec![line]
        }
        Command::Random { min, max, count } => {
            info!("Sample {} points", count);
            let line = Line::random(min, max, count)?;
            report("random line", &line);
            vec![line]
        }
        Command::Length { input } => {
            info!("Read points from {}", input.display());
            let fh = std::fs::File::open(&input)
                .with_context(|| format!("Cannot open {}", input.display()))?;
            let line: Line<f64> = serde_json::from_reader(std::io::BufReader::new(fh))?;
            report("input line", &line);
            vec![line]
        }
    };

    if let Some(filename) = opt.svg {
        info!("Write {}", filename.display());
        polyline::svg::write_lines(&filename, &lines)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_lines_convert_to_floats() {
        let lines = demo().unwrap();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].len(), 4);
        assert_eq!(lines[1].len(), 5);
        assert_eq!(*lines[1].last(), Point::new(3.0, 3.0));
        assert_eq!(lines[2][2], Point::new(3.0, 5.0));
    }

    #[test]
    fn random_lines_with_negative_range_fit_the_drawing() {
        let lines = vec![Line::random(-5.0, 5.0, 20).unwrap()];
        let (x, y, width, height) = polyline::svg::view_box(&lines);

        for p in lines[0].iter() {
            assert!(p.x >= x && p.x <= x + width);
            assert!(p.y >= y && p.y <= y + height);
        }
    }

    #[test]
    fn parses_global_svg_after_subcommand() {
        let opt = Options::try_parse_from(["polyline", "random", "-c", "3", "--svg", "out.svg"]).unwrap();
        assert_eq!(opt.svg, Some(PathBuf::from("out.svg")));
        assert!(matches!(opt.command, Some(Command::Random { count: 3, .. })));
    }
}
