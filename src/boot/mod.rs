//! Bare-metal bring-up. Compiled only for RISC-V `target_os = "none"`.

mod allocator;
mod entry;

use crate::console;
use crate::drivers::{rtc, uart};
use crate::hal::machine::MachineHal;
use crate::monitor::{self, Monitor};
use crate::platform::board;

/// First Rust code after the assembly stub: bring up the clock and the
/// console, then hand the UART to the operator forever.
#[unsafe(no_mangle)]
pub extern "C" fn rust_main() -> ! {
    rtc::init();
    uart::init_early();
    console::set_sink(uart::puts);

    if console::init_logger().is_ok() {
        info!("scbl up on {}", board::NAME);
    }

    if let Err(err) = monitor::registry::validate() {
        crate::println!("bad command table: {err}");
    }

    Monitor::new(MachineHal::new(), &board::PLATFORM).run()
}

#[cfg(not(test))]
#[panic_handler]
fn panic(info: &core::panic::PanicInfo) -> ! {
    crate::println!("PANIC: {}", info);
    loop {
        riscv::asm::wfi();
    }
}
