// Scalar fused multiply-add, resolved at compile time.
//
// Hardware FMA is used when the target guarantees it (`-C target-feature=+fma`
// on x86, always on aarch64). Every other target gets a plain multiply then
// add, so a given build always rounds the same way.

#[cfg(all(any(target_arch = "x86_64", target_arch = "x86"), target_feature = "fma"))]
mod x86;
#[cfg(target_arch = "aarch64")]
mod aarch64;

#[cfg(all(any(target_arch = "x86_64", target_arch = "x86"), target_feature = "fma"))]
pub(crate) use x86::{fma_f32, fma_f64};

#[cfg(target_arch = "aarch64")]
pub(crate) use aarch64::{fma_f32, fma_f64};

#[cfg(not(any(
    all(any(target_arch = "x86_64", target_arch = "x86"), target_feature = "fma"),
    target_arch = "aarch64"
)))]
#[inline(always)]
pub(crate) fn fma_f64(a: f64, b: f64, c: f64) -> f64 {
    a * b + c
}

#[cfg(not(any(
    all(any(target_arch = "x86_64", target_arch = "x86"), target_feature = "fma"),
    target_arch = "aarch64"
)))]
#[inline(always)]
pub(crate) fn fma_f32(a: f32, b: f32, c: f32) -> f32 {
    a * b + c
}

/// True when [`fma_f64`]/[`fma_f32`] round once.
///
/// False on default x86_64 builds, which lack `+fma`. There the fallback is a
/// multiply then add that rounds twice, not a correctly rounded software fma,
/// so results can differ in the last bit from an `+fma` build.
pub const HAS_HARDWARE_FMA: bool = cfg!(any(
    all(any(target_arch = "x86_64", target_arch = "x86"), target_feature = "fma"),
    target_arch = "aarch64"
));
