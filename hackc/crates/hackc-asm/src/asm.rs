//! Two-pass HACK assembler: resolves labels and variables to addresses,
//! then encodes every remaining instruction into its 16-bit binary string.

use std::collections::HashMap;

use hackc_util::decomment::{decomment, Mode};

use crate::error::{AssembleError, AssembleResult};
use crate::types::{comp_bits, dest_bits, jump_bits};

/// The symbol -> address bindings every HACK program starts with, before
/// any label or variable declared by the source is seen.
fn predefined_symbols() -> HashMap<String, i32> {
    let mut table = HashMap::new();
    for i in 0..16 {
        table.insert(format!("R{i}"), i);
    }
    table.insert("SCREEN".to_string(), 16384);
    table.insert("KBD".to_string(), 24576);
    table.insert("SP".to_string(), 0);
    table.insert("LCL".to_string(), 1);
    table.insert("ARG".to_string(), 2);
    table.insert("THIS".to_string(), 3);
    table.insert("THAT".to_string(), 4);
    table
}

/// Resolves every `@symbol` and `(LABEL)` to a numeric address, then
/// encodes the remaining A/C-instructions into 16-bit binary strings, one
/// per output line.
pub fn assemble(source: &str) -> AssembleResult<Vec<String>> {
    let lines = decomment(source, Mode::Compact);

    let mut symbols = predefined_symbols();
    let mut pending_variables: Vec<String> = Vec::new();
    let mut instructions: Vec<String> = Vec::new();

    // Pass 1: labels resolve to the instruction counter at their
    // definition site; `@symbol` references that aren't numeric and
    // aren't yet known are recorded as pending variables, in the order
    // they were first referenced.
    let mut instruction_count = 0i32;
    for line in &lines {
        if line.is_empty() {
            continue;
        }
        if let Some(label) = line.strip_prefix('(').and_then(|s| s.strip_suffix(')')) {
            symbols.insert(label.to_string(), instruction_count);
            continue;
        }
        if let Some(symbol) = line.strip_prefix('@') {
            if symbol.parse::<i32>().is_err() && !symbols.contains_key(symbol) {
                pending_variables.push(symbol.to_string());
                symbols.insert(symbol.to_string(), -1);
            }
        }
        instructions.push(line.clone());
        instruction_count += 1;
    }

    // Pass 2 setup: assign RAM addresses starting at 16, in first-seen
    // order, to every symbol still unresolved after pass 1 - a later
    // label definition for the same name may have already overwritten
    // the sentinel, in which case it is left alone.
    let mut next_ram = 16;
    for symbol in &pending_variables {
        if symbols.get(symbol) == Some(&-1) {
            symbols.insert(symbol.clone(), next_ram);
            next_ram += 1;
        }
    }

    let mut binaries = Vec::with_capacity(instructions.len());
    for (i, instruction) in instructions.iter().enumerate() {
        binaries.push(encode(instruction, &symbols, (i + 1) as u32)?);
    }
    Ok(binaries)
}

fn encode(instruction: &str, symbols: &HashMap<String, i32>, line: u32) -> AssembleResult<String> {
    match instruction.strip_prefix('@') {
        Some(symbol) => {
            let address = match symbol.parse::<i32>() {
                Ok(n) => n,
                Err(_) => *symbols
                    .get(symbol)
                    .expect("every referenced symbol was resolved in pass 1"),
            };
            Ok(format!("0{address:015b}"))
        }
        None => encode_c_instruction(instruction, line),
    }
}

/// Encodes a C-instruction of the form `dest=comp;jump`, where `dest` and
/// `jump` may both be absent. Mirrors the reference assembler's approach:
/// pad in the missing `null` piece, then split on every `=`/`;` and require
/// exactly three fields.
fn encode_c_instruction(instruction: &str, line: u32) -> AssembleResult<String> {
    let malformed = || AssembleError::MalformedInstruction {
        text: instruction.to_string(),
        line,
    };

    let padded = if instruction.contains('=') {
        instruction.to_string()
    } else {
        format!("null={instruction}")
    };
    let padded = if padded.contains(';') {
        padded
    } else {
        format!("{padded};null")
    };

    let fields: Vec<&str> = padded.split(['=', ';']).collect();
    if fields.len() != 3 {
        return Err(malformed());
    }
    let (dest, comp, jump) = (fields[0], fields[1], fields[2]);

    let dest = dest_bits(dest).ok_or_else(|| AssembleError::UnknownMnemonic {
        field: "dest",
        mnemonic: dest.to_string(),
        line,
    })?;
    let comp = comp_bits(comp).ok_or_else(|| AssembleError::UnknownMnemonic {
        field: "comp",
        mnemonic: comp.to_string(),
        line,
    })?;
    let jump = jump_bits(jump).ok_or_else(|| AssembleError::UnknownMnemonic {
        field: "jump",
        mnemonic: jump.to_string(),
        line,
    })?;

    Ok(format!("111{comp}{dest}{jump}"))
}
