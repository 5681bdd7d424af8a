//! Text output for the spline report driver: the dense series as CSV
//! and the single interpolated-value line.
use std::io::{self, Write};

/// Write `header` followed by one `x,y` line per point, then flush.
pub fn write_series<W: Write>(mut w: W, header: &str, series: &[(f64, f64)]) -> io::Result<()> {
    writeln!(w, "{header}")?;
    for (x, y) in series {
        writeln!(w, "{x},{y}")?;
    }
    w.flush()
}

/// The interpolated value at `x`, rounded to 4 decimal digits.
pub fn value_line(x: f64, y: f64) -> String {
    format!("Interpolated Value at {x} is : {y:.4}")
}

#[cfg(test)]
mod test {
    use super::{value_line, write_series};
    use crate::cubic::{self, CubicSpline};

    #[test]
    fn test_write_series_exact() {
        // Two samples give a straight line, so the midpoint is exact
        let spline = CubicSpline::new(&[0.0, 2.0], &[0.0, 4.0]).unwrap();
        let dense = cubic::evaluate_dense_grid(&spline, 3).unwrap();

        let mut buf = Vec::new();
        write_series(&mut buf, "x,y", &dense).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "x,y\n0,0\n1,2\n2,4\n");
    }

    #[test]
    fn test_write_series_reference() {
        let spline = CubicSpline::new(&[1.0, 3.0, 5.0, 8.0], &[2.0, 3.0, 9.0, 10.0]).unwrap();
        let dense = cubic::evaluate_dense_grid(&spline, 100).unwrap();

        let mut buf = Vec::new();
        write_series(&mut buf, "# samples\nx,y", &dense).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert!(text.ends_with('\n'));
        assert_eq!(lines.len(), 102);
        assert_eq!(lines[0], "# samples");
        assert_eq!(lines[1], "x,y");
        assert_eq!(lines[2], "1,2");
        assert_eq!(lines[101], "8,10");
        for (line, (x, y)) in lines[2..].iter().zip(dense.iter()) {
            assert_eq!(*line, format!("{x},{y}"));
        }
    }

    #[test]
    fn test_value_line() {
        assert_eq!(
            value_line(4.0, 225.0 / 38.0),
            "Interpolated Value at 4 is : 5.9211"
        );
        assert_eq!(
            value_line(4.0, 411.0 / 70.0),
            "Interpolated Value at 4 is : 5.8714"
        );
        assert_eq!(
            value_line(2.5, -1.0),
            "Interpolated Value at 2.5 is : -1.0000"
        );
    }
}
