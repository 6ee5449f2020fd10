//! The parsed form of a single VM instruction.
//!
//! The translator never walks raw text more than once: each decommented
//! line is parsed into a [`Command`] up front, then [`crate::lower`] turns
//! each `Command` into its fixed sequence of HACK assembly lines.

use crate::error::{TranslateError, TranslateResult};

/// The nine stack arithmetic/logical opcodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithOp {
    Add,
    Sub,
    Neg,
    And,
    Or,
    Not,
    Eq,
    Gt,
    Lt,
}

impl ArithOp {
    fn from_str(s: &str) -> Option<Self> {
        Some(match s {
            "add" => ArithOp::Add,
            "sub" => ArithOp::Sub,
            "neg" => ArithOp::Neg,
            "and" => ArithOp::And,
            "or" => ArithOp::Or,
            "not" => ArithOp::Not,
            "eq" => ArithOp::Eq,
            "gt" => ArithOp::Gt,
            "lt" => ArithOp::Lt,
            _ => return None,
        })
    }

    /// The name used in generated comparison labels (`eq_Program_17`).
    pub fn label_name(self) -> &'static str {
        match self {
            ArithOp::Eq => "eq",
            ArithOp::Gt => "gt",
            ArithOp::Lt => "lt",
            _ => unreachable!("label_name only applies to eq/gt/lt"),
        }
    }
}

/// The seven memory segments `push`/`pop` can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Local,
    Argument,
    This,
    That,
    Constant,
    Static,
    Pointer,
    Temp,
}

impl Segment {
    fn from_str(s: &str) -> Option<Self> {
        Some(match s {
            "local" => Segment::Local,
            "argument" => Segment::Argument,
            "this" => Segment::This,
            "that" => Segment::That,
            "constant" => Segment::Constant,
            "static" => Segment::Static,
            "pointer" => Segment::Pointer,
            "temp" => Segment::Temp,
            _ => return None,
        })
    }

    /// The HACK pointer register a base-pointer segment loads its base
    /// address from. `None` for segments addressed another way.
    pub fn base_register(self) -> Option<&'static str> {
        match self {
            Segment::Local => Some("LCL"),
            Segment::Argument => Some("ARG"),
            Segment::This => Some("THIS"),
            Segment::That => Some("THAT"),
            _ => None,
        }
    }
}

/// One parsed VM instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Arithmetic(ArithOp),
    Push(Segment, u16),
    Pop(Segment, u16),
    Label(String),
    Goto(String),
    IfGoto(String),
    Function(String, u16),
    Call(String, u16),
    Return,
}

impl Command {
    /// Parses one already-decommented, non-blank VM source line.
    ///
    /// `line` is the instruction's 1-based position in its source file -
    /// preserved (not renumbered past blanks/comments) since it feeds the
    /// `eq`/`gt`/`lt` label scheme.
    pub fn parse(text: &str, line: u32) -> TranslateResult<Command> {
        if let Some(op) = ArithOp::from_str(text) {
            return Ok(Command::Arithmetic(op));
        }

        let tokens: Vec<&str> = text.split_whitespace().collect();
        let malformed = || TranslateError::MalformedInstruction {
            text: text.to_string(),
            line,
        };

        match tokens.as_slice() {
            ["push", segment, index] => {
                let segment = parse_segment(segment, line)?;
                let index = parse_index(index, line)?;
                Ok(Command::Push(segment, index))
            }
            ["pop", segment, index] => {
                let segment = parse_segment(segment, line)?;
                let index = parse_index(index, line)?;
                Ok(Command::Pop(segment, index))
            }
            ["label", name] => Ok(Command::Label(name.to_string())),
            ["goto", name] => Ok(Command::Goto(name.to_string())),
            ["if-goto", name] => Ok(Command::IfGoto(name.to_string())),
            ["function", name, n_locals] => {
                let n_locals = parse_index(n_locals, line)?;
                Ok(Command::Function(name.to_string(), n_locals))
            }
            ["call", name, n_args] => {
                let n_args = parse_index(n_args, line)?;
                Ok(Command::Call(name.to_string(), n_args))
            }
            ["return"] => Ok(Command::Return),
            _ => Err(malformed()),
        }
    }
}

fn parse_segment(s: &str, line: u32) -> TranslateResult<Segment> {
    Segment::from_str(s).ok_or_else(|| TranslateError::UnknownSegment {
        segment: s.to_string(),
        line,
    })
}

fn parse_index(s: &str, line: u32) -> TranslateResult<u16> {
    s.parse().map_err(|_| TranslateError::InvalidIndex {
        value: s.to_string(),
        line,
    })
}
