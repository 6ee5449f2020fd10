//! `function`/`call`/`return` emission and the `Sys.init` bootstrap.
//!
//! Grounded on the original translator's `function`/`call`/`sys_init`
//! helpers, with one deliberate change: the return-address label's unique
//! suffix is a per-file monotonic counter instead of `random.randint(1,
//! 100)` - the random suffix can collide within a file once it has more
//! than a handful of call sites, silently corrupting the return jump.

use crate::stack_frame::RETURN;

/// `function f k`: labels the entry point, then zero-initializes `k`
/// locals by walking `SP` forward `k` times before committing the new
/// stack top back to `SP`.
pub fn emit_function(out: &mut Vec<String>, name: &str, n_locals: u16) {
    out.push(format!("({name})"));
    out.push("@SP".to_string());
    out.push("A=M".to_string());
    for _ in 0..n_locals {
        out.push("M=0".to_string());
        out.push("A=A+1".to_string());
    }
    out.push("D=A".to_string());
    out.push("@SP".to_string());
    out.push("M=D".to_string());
}

/// `call f n`: pushes a return address and the caller's four segment
/// pointers, repositions `ARG`/`LCL` for the callee, jumps to `f`, then
/// labels the return point. `call_id` is this file's next unique suffix for
/// the return-address label; the caller is responsible for incrementing it
/// between calls.
pub fn emit_call(out: &mut Vec<String>, program: &str, callee: &str, n_args: u16, call_id: u32) {
    let return_label = format!("ret_{program}_{call_id}");

    out.push(format!("@{return_label}"));
    out.push("D=A".to_string());
    push_d(out);

    for register in ["LCL", "ARG", "THIS", "THAT"] {
        out.push(format!("@{register}"));
        out.push("D=M".to_string());
        push_d(out);
    }

    out.push(format!("@{}", n_args as u32 + 5));
    out.push("D=A".to_string());
    out.push("@SP".to_string());
    out.push("D=M-D".to_string());
    out.push("@ARG".to_string());
    out.push("M=D".to_string());

    out.push("@SP".to_string());
    out.push("D=M".to_string());
    out.push("@LCL".to_string());
    out.push("M=D".to_string());

    out.push(format!("@{callee}"));
    out.push("0;JMP".to_string());

    out.push(format!("({return_label})"));
}

fn push_d(out: &mut Vec<String>) {
    out.push("@SP".to_string());
    out.push("A=M".to_string());
    out.push("M=D".to_string());
    out.push("@SP".to_string());
    out.push("M=M+1".to_string());
}

pub fn emit_return(out: &mut Vec<String>) {
    out.extend(RETURN.iter().map(|s| s.to_string()));
}

/// Only emitted when a `Sys.vm` file is present: sets `SP = 256`, calls
/// `Sys.init 0`, then traps in an infinite loop (a `call` never returns
/// from the bootstrap, so nothing after it in the program should run).
pub fn emit_bootstrap(out: &mut Vec<String>, call_id: u32) {
    out.push("@256".to_string());
    out.push("D=A".to_string());
    out.push("@SP".to_string());
    out.push("M=D".to_string());
    emit_call(out, "Sys", "Sys.init", 0, call_id);
    out.push("0;JMP".to_string());
}
