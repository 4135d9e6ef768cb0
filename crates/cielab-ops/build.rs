use std::env;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// IEC 61966-2-1 formula: 8-bit sRGB channel to linear light (0.0..=1.0)
fn srgb8_to_linear_exact(value: u8) -> f64 {
    let c = value as f64 / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("gamma_lut.rs");
    let mut file = File::create(&dest_path).unwrap();

    // Every 8-bit input has an exact entry, so the table is lossless.
    writeln!(file, "/// Linear light for each 8-bit sRGB channel value").unwrap();
    writeln!(file, "pub static SRGB8_TO_LINEAR: [f64; 256] = [").unwrap();
    for i in 0..=255u8 {
        // {:?} prints the shortest representation that round-trips exactly
        writeln!(file, "    {:?},", srgb8_to_linear_exact(i)).unwrap();
    }
    writeln!(file, "];").unwrap();

    println!("cargo:rerun-if-changed=build.rs");
}
