//! Assembly entry: stack, data/BSS image setup, then `rust_main`.
//!
//! The linker script provides `_stack_top`, the `.data` load/run symbols
//! and the `.bss` bounds.

core::arch::global_asm!(
    r#"
    .section .text.entry
    .globl _start
_start:
    la      sp, _stack_top

    // Copy .data from its ROM load address into TCM
    la      t0, _sidata
    la      t1, _sdata
    la      t2, _edata
1:
    bgeu    t1, t2, 2f
    lw      t3, 0(t0)
    sw      t3, 0(t1)
    addi    t0, t0, 4
    addi    t1, t1, 4
    j       1b
2:

    // Zero .bss
    la      t0, _sbss
    la      t1, _ebss
3:
    bgeu    t0, t1, 4f
    sw      zero, 0(t0)
    addi    t0, t0, 4
    j       3b
4:
    call    rust_main

    // rust_main never returns; park the hart if it somehow does.
5:
    wfi
    j       5b
"#
);
