//! Scratchpad (§4.2): a per-thread, per-field-width register file reused
//! across point and Elligator operations to keep hot paths allocation-free.
//!
//! The source this is modeled on relies on a managed runtime's
//! thread-locals and never explicitly returns a pad to a pool — release
//! happens only at scope exit. Here that's made explicit: one [`Scratchpad`]
//! instance lives per `(thread, field width)` pair, and [`ScratchpadGuard`]
//! returns it to the thread-local slot on drop, on every exit path. Pads
//! are not cleared on acquire or release; callees treat registers as
//! arbitrary scratch and overwrite what they read.

use crate::field::{FieldElement, FieldParams};
use std::cell::RefCell;
use std::collections::HashMap;

/// Five general-purpose field-element registers, enough for the point
/// engine's addition/doubling formulas and the Elligator maps.
pub struct Scratchpad {
    regs: [FieldElement; 5],
}

impl Scratchpad {
    fn new(params: &'static FieldParams) -> Self {
        Self {
            regs: [FieldElement::zero(params); 5],
        }
    }

    pub fn reg(&mut self, i: usize) -> &mut FieldElement {
        &mut self.regs[i]
    }
}

thread_local! {
    static POOL: RefCell<HashMap<usize, Scratchpad>> = RefCell::new(HashMap::new());
}

/// A scoped handle on the calling thread's scratchpad for one field width.
pub struct ScratchpadGuard {
    key: usize,
    pad: Option<Scratchpad>,
}

impl ScratchpadGuard {
    /// Acquires the thread's scratchpad for `params`, creating one the
    /// first time this `(thread, field width)` pair is seen.
    pub fn acquire(params: &'static FieldParams) -> Self {
        let key = params as *const FieldParams as usize;
        let pad = POOL
            .with(|pool| pool.borrow_mut().remove(&key))
            .unwrap_or_else(|| Scratchpad::new(params));
        Self {
            key,
            pad: Some(pad),
        }
    }
}

impl core::ops::Deref for ScratchpadGuard {
    type Target = Scratchpad;
    fn deref(&self) -> &Scratchpad {
        self.pad.as_ref().expect("pad is only taken in Drop")
    }
}

impl core::ops::DerefMut for ScratchpadGuard {
    fn deref_mut(&mut self) -> &mut Scratchpad {
        self.pad.as_mut().expect("pad is only taken in Drop")
    }
}

impl Drop for ScratchpadGuard {
    fn drop(&mut self) {
        if let Some(pad) = self.pad.take() {
            POOL.with(|pool| {
                pool.borrow_mut().insert(self.key, pad);
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curves;

    #[test]
    fn acquire_after_release_reuses_the_same_slot() {
        let field = curves::curve1174_field();
        {
            let mut guard = ScratchpadGuard::acquire(field);
            *guard.reg(0) = FieldElement::from_u64(42, field);
        }
        let mut guard = ScratchpadGuard::acquire(field);
        assert!(guard.reg(0).equals(&FieldElement::from_u64(42, field)));
    }

    #[test]
    fn different_field_widths_get_independent_pads() {
        let a = curves::curve1174_field();
        let b = curves::e521_field();
        let mut ga = ScratchpadGuard::acquire(a);
        let mut gb = ScratchpadGuard::acquire(b);
        *ga.reg(0) = FieldElement::from_u64(1, a);
        *gb.reg(0) = FieldElement::from_u64(2, b);
        assert!(ga.reg(0).equals(&FieldElement::from_u64(1, a)));
        assert!(gb.reg(0).equals(&FieldElement::from_u64(2, b)));
    }
}
