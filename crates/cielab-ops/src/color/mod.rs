//! Color types and conversions
//!
//! The conversion chain is device RGB -> XYZ -> CIELAB and back:
//!
//! ```text
//! RgbColor (8-bit sRGB)
//!     |  gamma decode (LUT), x100, sRGB matrix
//!     v
//! Xyz (D65, Y of white = 100)
//!     |  divide by D65 white, cube-root / linear transfer
//!     v
//! Lab (L 0..100, a/b ~ -128..127)
//! ```
//!
//! The reverse path applies the inverse transfer, the inverse matrix, gamma
//! encoding and finally rounds and clamps to 0..=255. A full round trip
//! reproduces every 8-bit input within one unit per channel.
//!
//! # Example
//!
//! ```
//! use cielab_ops::{Lab, RgbColor};
//!
//! let lab = Lab::from(RgbColor::new(200, 40, 90));
//! let back = lab.to_rgb();
//! assert!((back.r as i32 - 200).abs() <= 1);
//! ```

mod distance;
mod error;
mod lab;
mod lut;
mod rgb;
mod xyz;

pub use distance::delta_e76;
pub use error::ParseColorError;
pub use lab::{lab_to_xyz, xyz_to_lab, Lab, D65_WHITE};
pub use rgb::RgbColor;
pub use xyz::{rgb_to_xyz, xyz_to_rgb, Xyz};
