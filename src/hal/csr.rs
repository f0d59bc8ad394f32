//! Hardware identity backed by the RISC-V machine CSRs.

use super::HwId;

/// `HwId` source reading `misa`/`mimpid` directly.
///
/// Neither CSR changes after reset, so there is nothing to cache or lock.
/// Platforms without a system-id / build-id block keep the zero defaults,
/// which suppresses those report fields.
pub struct CsrId;

impl HwId for CsrId {
    fn isa(&self) -> usize {
        riscv::register::misa::read().map_or(0, |isa| isa.bits())
    }

    fn impl_id(&self) -> usize {
        riscv::register::mimpid::read().map_or(0, |id| id.bits())
    }
}
