//! Tiny heap for the error-reporting path.
//!
//! anyhow boxes its errors, so the no_std build needs a global
//! allocator. Nothing allocates on the happy path; a small arena in
//! .bss covers the failure reports.

use talc::{ClaimOnOom, Span, Talc, Talck};

const HEAP_SIZE: usize = 1024;

static mut ARENA: [u8; HEAP_SIZE] = [0; HEAP_SIZE];

#[global_allocator]
static ALLOCATOR: Talck<spin::Mutex<()>, ClaimOnOom> = Talc::new(unsafe {
    ClaimOnOom::new(Span::from_array(core::ptr::addr_of!(ARENA).cast_mut()))
})
.lock();
