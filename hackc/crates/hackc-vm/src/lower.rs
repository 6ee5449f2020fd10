//! Lowers a single parsed [`Command`] into its fixed sequence of HACK
//! assembly lines.

use crate::calling_convention::{emit_call, emit_function, emit_return};
use crate::lir::{ArithOp, Command, Segment};
use crate::stack_frame::{ADD, AND, NEG, NOT, OR, POP, PUSH, SUB};

/// Lowers one command, appending its assembly lines to `out`.
///
/// `program` namespaces labels and static variables to the current VM file.
/// `line` feeds the `eq`/`gt`/`lt` label scheme. `call_id` is this file's
/// next unique `call` return-label suffix; bumped by the caller after a
/// `Command::Call` is lowered.
pub fn lower_command(out: &mut Vec<String>, program: &str, line: u32, call_id: u32, command: &Command) {
    match command {
        Command::Arithmetic(op) => lower_arithmetic(out, program, line, *op),
        Command::Push(segment, index) => lower_push(out, program, *segment, *index),
        Command::Pop(segment, index) => lower_pop(out, program, *segment, *index),
        Command::Label(name) => out.push(format!("({program}_{name})")),
        Command::Goto(name) => {
            out.push(format!("@{program}_{name}"));
            out.push("0;JMP".to_string());
        }
        Command::IfGoto(name) => {
            out.push("@SP".to_string());
            out.push("AM=M-1".to_string());
            out.push("D=M".to_string());
            out.push("M=0".to_string());
            out.push(format!("@{program}_{name}"));
            out.push("D;JNE".to_string());
        }
        Command::Function(name, n_locals) => emit_function(out, name, *n_locals),
        Command::Call(callee, n_args) => emit_call(out, program, callee, *n_args, call_id),
        Command::Return => emit_return(out),
    }
}

fn lower_arithmetic(out: &mut Vec<String>, program: &str, line: u32, op: ArithOp) {
    let template: &[&str] = match op {
        ArithOp::Add => ADD,
        ArithOp::Sub => SUB,
        ArithOp::Neg => NEG,
        ArithOp::And => AND,
        ArithOp::Or => OR,
        ArithOp::Not => NOT,
        ArithOp::Eq | ArithOp::Gt | ArithOp::Lt => {
            lower_comparison(out, program, line, op);
            return;
        }
    };
    out.extend(template.iter().map(|s| s.to_string()));
}

/// `eq`/`gt`/`lt` subtract the two operands, then branch on the sign of the
/// difference to leave `-1` (true) or `0` (false) on top. Each comparison
/// needs its own label within the file - `{op}_{program}_{line}` keeps
/// every occurrence distinct since `line` is the source line it appeared on.
fn lower_comparison(out: &mut Vec<String>, program: &str, line: u32, op: ArithOp) {
    let jump = match op {
        ArithOp::Eq => "JNE",
        ArithOp::Gt => "JLE",
        ArithOp::Lt => "JGE",
        _ => unreachable!("lower_comparison only applies to eq/gt/lt"),
    };
    let label = format!("{}_{program}_{line}", op.label_name());

    out.push("@SP".to_string());
    out.push("AM=M-1".to_string());
    out.push("D=M".to_string());
    out.push("M=0".to_string());
    out.push("A=A-1".to_string());
    out.push("D=M-D".to_string());
    out.push("M=0".to_string());
    out.push(format!("@{label}"));
    out.push(format!("D;{jump}"));
    out.push("@SP".to_string());
    out.push("A=M".to_string());
    out.push("A=A-1".to_string());
    out.push("M=-1".to_string());
    out.push(format!("({label})"));
}

fn lower_push(out: &mut Vec<String>, program: &str, segment: Segment, index: u16) {
    match segment {
        Segment::Local | Segment::Argument | Segment::This | Segment::That => {
            out.push(format!("@{}", segment.base_register().unwrap()));
            out.push("D=M".to_string());
            out.push(format!("@{index}"));
            out.push("A=D+A".to_string());
            out.push("D=M".to_string());
        }
        Segment::Pointer => {
            out.push(if index == 0 { "@THIS".to_string() } else { "@THAT".to_string() });
            out.push("D=M".to_string());
        }
        Segment::Constant => {
            out.push(format!("@{index}"));
            out.push("D=A".to_string());
        }
        Segment::Static => {
            out.push(format!("@{program}_{index}"));
            out.push("D=M".to_string());
        }
        Segment::Temp => {
            out.push("@R5".to_string());
            out.push("D=A".to_string());
            out.push(format!("@{index}"));
            out.push("A=D+A".to_string());
            out.push("D=M".to_string());
        }
    }
    out.extend(PUSH.iter().map(|s| s.to_string()));
}

fn lower_pop(out: &mut Vec<String>, program: &str, segment: Segment, index: u16) {
    match segment {
        Segment::Local | Segment::Argument | Segment::This | Segment::That => {
            out.push(format!("@{}", segment.base_register().unwrap()));
            out.push("D=M".to_string());
            out.push(format!("@{index}"));
            out.push("D=D+A".to_string());
            out.extend(POP.iter().map(|s| s.to_string()));
        }
        Segment::Pointer => {
            out.push("@SP".to_string());
            out.push("AM=M-1".to_string());
            out.push("D=M".to_string());
            out.push("M=0".to_string());
            out.push(if index == 0 { "@THIS".to_string() } else { "@THAT".to_string() });
            out.push("M=D".to_string());
        }
        Segment::Static => {
            out.push("@SP".to_string());
            out.push("AM=M-1".to_string());
            out.push("D=M".to_string());
            out.push("M=0".to_string());
            out.push(format!("@{program}_{index}"));
            out.push("M=D".to_string());
        }
        Segment::Temp => {
            out.push("@R5".to_string());
            out.push("D=A".to_string());
            out.push(format!("@{index}"));
            out.push("D=D+A".to_string());
            out.extend(POP.iter().map(|s| s.to_string()));
        }
        Segment::Constant => unreachable!("the compiler never emits `pop constant`"),
    }
}
