use std::env;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Number of CORDIC iterations, fixed at compile time
const ITERATIONS: usize = 16;

/// Number of fraction bits of the Q3.28 format
const FRAC_BITS: i32 = 28;

fn to_q3_28(x: f64) -> i32 {
    // Truncate toward negative infinity, like the reference constants
    f64::floor(x * f64::powi(2.0, FRAC_BITS)) as i32
}

fn compute_atan_table() -> [i32; ITERATIONS] {
    (0..ITERATIONS)
        .map(|i| to_q3_28(f64::atan(f64::powi(2.0, -(i as i32)))))
        .collect::<Vec<i32>>()
        .try_into()
        .unwrap()
}

fn compute_gain() -> f64 {
    (0..ITERATIONS).fold(1.0, |k, i| k * f64::sqrt(1.0 + f64::powi(2.0, -2 * i as i32)))
}

fn main() {
    let out_dir = env::var_os("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("cordic_tables.rs");
    let mut f = File::create(dest_path).unwrap();

    let atan_table = compute_atan_table();
    let gain = compute_gain();

    writeln!(&mut f, "/// Number of rotation steps performed by every evaluation").unwrap();
    writeln!(&mut f, "pub const ITERATIONS: usize = {};", ITERATIONS).unwrap();
    writeln!(&mut f, "/// Cumulative gain of {} rotation steps", ITERATIONS).unwrap();
    writeln!(&mut f, "pub const CORDIC_GAIN: f64 = {:?};", gain).unwrap();
    writeln!(&mut f, "pub(crate) const GAIN_INV: i32 = {:#010x};", to_q3_28(1.0 / gain)).unwrap();
    write!(&mut f, "pub(crate) const ATAN_TABLE: [i32; ITERATIONS] = [").unwrap();
    for x in atan_table {
        write!(&mut f, "{:#010x}, ", x).unwrap();
    }
    writeln!(&mut f, "];").unwrap();

    println!("cargo:rerun-if-changed=build.rs");
}
