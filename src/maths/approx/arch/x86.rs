#[cfg(target_arch = "x86")]
use core::arch::x86::{
    _mm_cvtsd_f64, _mm_cvtss_f32, _mm_fmadd_sd, _mm_fmadd_ss, _mm_set_sd, _mm_set_ss,
};
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::{
    _mm_cvtsd_f64, _mm_cvtss_f32, _mm_fmadd_sd, _mm_fmadd_ss, _mm_set_sd, _mm_set_ss,
};

#[inline(always)]
#[allow(unused_unsafe)]
pub(crate) fn fma_f64(a: f64, b: f64, c: f64) -> f64 {
    // SAFETY: this module is only compiled with `target_feature = "fma"`.
    unsafe { _mm_cvtsd_f64(_mm_fmadd_sd(_mm_set_sd(a), _mm_set_sd(b), _mm_set_sd(c))) }
}

#[inline(always)]
#[allow(unused_unsafe)]
pub(crate) fn fma_f32(a: f32, b: f32, c: f32) -> f32 {
    // SAFETY: as above.
    unsafe { _mm_cvtss_f32(_mm_fmadd_ss(_mm_set_ss(a), _mm_set_ss(b), _mm_set_ss(c))) }
}
