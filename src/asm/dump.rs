/// The `push`/`pop` stack macros and the `dump` subroutine, reproduced
/// byte-for-byte. `dump` is a fixed-size, branch-free decimal formatter: it
/// divides by 10 via the magic multiplier `-3689348814741910324` (loaded in
/// two halves through `mov`/`movk`) instead of an integer division
/// instruction, writes digits into a 32-byte scratch area below the stack
/// pointer, and exits through the write syscall (`x16 = 4`) to fd 1. Its
/// dependence on those Apple-ABI syscall numbers is intentional and is not
/// parameterized.
pub const DUMP_ROUTINE: &str = r#".macro push Xn:req
   str \Xn, [sp, #-16]!
.endm
.macro pop Xn:req
   ldr \Xn, [sp], #16
.endm
dump:
   stp x29, x30, [sp, -48]!
   mov x7, -3689348814741910324
   mov w3, 10
   mov x29, sp
   add x1, sp, 16
   mov x2, 1
   movk x7, 0xcccd, lsl 0
   strb w3, [sp, 47]
.L2:
   umulh x4, x0, x7
   sub x5, x1, x2
   mov x6, x0
   add x2, x2, 1
   lsr x4, x4, 3
   add x3, x4, x4, lsl 2
   sub x3, x0, x3, lsl 1
   mov x0, x4
   add w3, w3, 48
   strb w3, [x5, 31]
   cmp x6, 9
   bhi .L2
   sub x1, x1, x2
   mov w0, 1
   add x1, x1, 32
   mov x16, 4
   svc #0
   ldp x29, x30, [sp], 48
   ret"#;
