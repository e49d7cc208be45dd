//! Fast approximate sine and cosine over scalar or batched lanes.

mod arch;
mod batch;
mod bits;
mod consts;
mod cos;
mod lane;
mod sin;

pub use arch::HAS_HARDWARE_FMA;
pub use batch::{Batch, F32x16, F32x4, F32x8, F64x2, F64x4, F64x8};
pub use consts::Coefficients;
pub use cos::cosine;
pub use lane::{Element, Lane};
pub use sin::{coarse_sine, sine};
