//! Walk through basic arithmetic, the standard float math functions,
//! IEEE special values, and complex numbers.
use std::f64::consts::PI;

use num_complex::Complex64;

/// Float text with the decimal point always shown (`2.0`, `inf`, `nan`).
fn float_text(v: f64) -> String {
    if v.is_nan() {
        "nan".to_owned()
    } else {
        format!("{v:?}")
    }
}

/// Complex text in `(re+imj)` form, e.g. `(2+5j)`.
fn complex_text(z: Complex64) -> String {
    format!("({}{:+}j)", z.re, z.im)
}

fn main() {
    // Simple arithmetic
    println!("2 + 3= {}", 2 + 3);
    println!("2 - 3= {}", 2 - 3);
    println!("2 * 3= {}", 2 * 3);
    println!("2 / 3= {}", float_text(2.0_f64 / 3.0));
    println!("2 ** 3= {}", 2_i32.pow(3));

    // Order of operations with parentheses
    println!(
        "(3 * 4) / (2**2 + 4/2) = {}",
        float_text((3.0_f64 * 4.0) / (2.0_f64.powi(2) + 4.0 / 2.0))
    );

    // Math functions
    println!("Square root of 9 = {}", float_text(9.0_f64.sqrt()));
    println!("Cos(pie/3) = {}", float_text((PI / 3.0).cos()));
    println!("e^log(10)= {}", float_text(10.0_f64.ln().exp()));
    println!("e^log10(10)= {}", float_text(10.0_f64.log10().exp()));

    // Special values
    println!("1 / infinity= {}", float_text(1.0 / f64::INFINITY));
    println!("2 * infinity= {}", float_text(2.0 * f64::INFINITY));
    println!(
        "infinity / infinity = {}",
        float_text(f64::INFINITY / f64::INFINITY)
    );

    // Complex numbers
    println!("Complex Number 2+5j= {}", complex_text(Complex64::new(2.0, 5.0)));
    println!(
        "ANother way to represent= {}",
        complex_text(Complex64 { re: 2.0, im: 5.0 })
    );
}
