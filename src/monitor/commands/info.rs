//! `platform info` - identity report plus board configuration.

use crate::diag;
use crate::hal::Hal;
use crate::platform::Platform;

pub fn run<H: Hal>(hal: &mut H, platform: &Platform) {
    hal.putchar(b'\n');
    diag::hwinfo(hal, platform);
    hal.puts("Platform configuration:\n");
    hal.print_config();
}
