//! Memory wiping and ordering barriers

use zeroize::Zeroize;

/// Overwrite `value` with zeros and keep the write from being reordered away
///
/// `zeroize` already uses volatile writes; the trailing fence stops later
/// code from being hoisted above the wipe.
#[inline]
pub fn secure_zero<T: Zeroize + ?Sized>(value: &mut T) {
    value.zeroize();
    barrier::compiler_fence_seq_cst();
}

/// Memory barrier utilities
pub mod barrier {
    use core::sync::atomic::{compiler_fence, Ordering};

    /// Insert a compiler fence to prevent reordering
    #[inline(always)]
    pub fn compiler_fence_seq_cst() {
        compiler_fence(Ordering::SeqCst);
    }
}
