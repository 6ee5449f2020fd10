//! Translates Jack VM commands into HACK assembly.
//!
//! One [`translate_file`] call handles a single VM file's worth of
//! commands; [`translate_program`] drives a whole program's worth of files,
//! concatenating their output and bootstrapping with a call to `Sys.init`
//! when a `Sys.vm` file is present.

pub mod calling_convention;
pub mod error;
pub mod lir;
pub mod lower;
pub mod stack_frame;

#[cfg(test)]
mod edge_cases;
#[cfg(test)]
mod tests;

pub use error::{TranslateError, TranslateResult};
pub use lir::Command;

use calling_convention::emit_bootstrap;
use hackc_util::decomment::{decomment, Mode};
use lower::lower_command;

/// Parses every non-blank line of a decommented VM source file into a
/// `Command`, keeping each command's original 1-based line number (the
/// `eq`/`gt`/`lt` label scheme depends on it).
fn parse_program(source: &str) -> TranslateResult<Vec<(u32, Command)>> {
    let lines = decomment(source, Mode::Preserve);
    let mut commands = Vec::new();
    for (i, line) in lines.iter().enumerate() {
        if line.is_empty() {
            continue;
        }
        let line_no = (i + 1) as u32;
        commands.push((line_no, Command::parse(line, line_no)?));
    }
    Ok(commands)
}

/// Translates one VM file's source text into HACK assembly lines.
///
/// `program` is the file's base name (`Fraction.vm` -> `Fraction`),
/// namespacing this file's labels and statics. `next_call_id` is a
/// monotonic counter threaded across every `call` in the whole program - a
/// per-file-not-per-program counter would let two files reuse the same
/// return-address label when concatenated.
pub fn translate_file(
    program: &str,
    source: &str,
    next_call_id: &mut u32,
) -> TranslateResult<Vec<String>> {
    let commands = parse_program(source)?;
    let mut out = Vec::new();
    for (line, command) in commands {
        out.push(format!("// {program} line {line}"));
        lower_command(&mut out, program, line, *next_call_id, &command);
        if matches!(command, Command::Call(..)) {
            *next_call_id += 1;
        }
    }
    Ok(out)
}

/// Translates a whole program's VM files into one HACK assembly listing.
///
/// `files` is `(program_name, source_text)` pairs in load order; per
/// spec.md, a `Sys.vm` file must be listed first when present, and its
/// presence triggers the `SP = 256` / `call Sys.init 0` / infinite-loop
/// bootstrap ahead of every other file's translation.
pub fn translate_program(files: &[(&str, &str)]) -> TranslateResult<String> {
    let mut out = Vec::new();
    let mut next_call_id = 0u32;

    if files.iter().any(|(name, _)| *name == "Sys") {
        emit_bootstrap(&mut out, next_call_id);
        next_call_id += 1;
    }

    for (program, source) in files {
        out.push(format!("// {program}.vm"));
        out.extend(translate_file(program, source, &mut next_call_id)?);
    }

    let mut text = out.join("\n");
    text.push('\n');
    Ok(text)
}
