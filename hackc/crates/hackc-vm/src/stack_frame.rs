//! Fixed HACK assembly templates for the stack-machine primitives that
//! don't depend on a segment or index: the binary/unary ALU ops and the
//! push/pop tail shared by every memory-access command.
//!
//! `SP` always points one past the top of stack, growing upward from 256 -
//! "push X" is "write X to `*SP`, then `SP++`"; "pop into X" is the reverse.

/// Pops two, leaves their sum on top.
pub const ADD: &[&str] = &["@SP", "AM=M-1", "D=M", "M=0", "A=A-1", "M=D+M"];

/// Pops two, leaves `second - top` on top.
pub const SUB: &[&str] = &["@SP", "AM=M-1", "D=M", "M=0", "A=A-1", "M=M-D"];

/// Negates the top in place.
pub const NEG: &[&str] = &["@SP", "A=M-1", "M=-M"];

/// Pops two, leaves their bitwise AND on top.
pub const AND: &[&str] = &["@SP", "AM=M-1", "D=M", "M=0", "A=A-1", "M=D&M"];

/// Pops two, leaves their bitwise OR on top.
pub const OR: &[&str] = &["@SP", "AM=M-1", "D=M", "M=0", "A=A-1", "M=D|M"];

/// Bitwise-NOTs the top in place.
pub const NOT: &[&str] = &["@SP", "A=M-1", "M=!M"];

/// Shared push tail: writes `D` to `*SP`, then increments `SP`. Every
/// `push`-family command computes its value into `D` first, then appends
/// this.
pub const PUSH: &[&str] = &["@SP", "A=M", "M=D", "@SP", "M=M+1"];

/// Shared pop tail: stores the target address (already in `D`) into `R13`,
/// pops the stack into `D`, then writes `D` to `*R13`. Every `pop`-family
/// command computes its target address into `D` first, then appends this.
pub const POP: &[&str] = &[
    "@R13", "M=D", "@SP", "AM=M-1", "D=M", "M=0", "@R13", "A=M", "M=D",
];

/// `return`'s fixed sequence: save the frame pointer and return address
/// before the caller's segments get overwritten, write the return value in
/// place of the first argument, then restore `THAT`/`THIS`/`ARG`/`LCL` from
/// the saved frame and jump back.
pub const RETURN: &[&str] = &[
    "@LCL", "D=M", "@R14", "M=D", // frame = R14 = LCL
    "@5", "A=D-A", "D=M", "@R13", "M=D", // RET = R13 = *(frame - 5)
    "@SP", "A=M-1", "D=M", "@ARG", "A=M", "M=D", // *ARG = pop()
    "D=A+1", "@SP", "M=D", // SP = ARG + 1
    "@R14", "AM=M-1", "D=M", "@THAT", "M=D", // THAT = *(frame - 1)
    "@R14", "AM=M-1", "D=M", "@THIS", "M=D", // THIS = *(frame - 2)
    "@R14", "AM=M-1", "D=M", "@ARG", "M=D", // ARG = *(frame - 3)
    "@R14", "AM=M-1", "D=M", "@LCL", "M=D", // LCL = *(frame - 4)
    "@R13", "A=M", "0;JMP", // goto RET
];
