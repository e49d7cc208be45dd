#[inline(always)]
pub(crate) fn fma_f64(a: f64, b: f64, c: f64) -> f64 {
    let out: f64;
    // SAFETY: `fmadd` is part of the aarch64 base ISA and touches no memory.
    unsafe {
        core::arch::asm!(
            "fmadd {out:d}, {a:d}, {b:d}, {c:d}",
            out = out(vreg) out,
            a = in(vreg) a,
            b = in(vreg) b,
            c = in(vreg) c,
            options(pure, nomem, nostack)
        );
    }
    out
}

#[inline(always)]
pub(crate) fn fma_f32(a: f32, b: f32, c: f32) -> f32 {
    let out: f32;
    // SAFETY: as above.
    unsafe {
        core::arch::asm!(
            "fmadd {out:s}, {a:s}, {b:s}, {c:s}",
            out = out(vreg) out,
            a = in(vreg) a,
            b = in(vreg) b,
            c = in(vreg) c,
            options(pure, nomem, nostack)
        );
    }
    out
}
