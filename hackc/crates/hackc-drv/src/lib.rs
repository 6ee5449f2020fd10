//! Compiler driver: orchestrates the four pipeline stages
//! (tokenize+parse, translate, assemble) over whatever mix of `.jack`,
//! `.vm`, and `.asm` files the CLI argument resolves to.
//!
//! A `.jack` input cascades all the way through to `.hack`: each compiled
//! class's `.vm` output feeds the VM-translation stage, and that stage's
//! `.asm` output feeds the assembler, matching the "single-binary batch
//! toolchain" framing this crate is grounded on (the teacher's separate
//! per-stage CLIs became one binary here).

mod discovery;
mod error;
mod token_xml;

use std::path::{Path, PathBuf};

pub use error::{DriverError, DriverResult};

use tracing::{debug, info};

/// Driver configuration for one invocation.
#[derive(Debug, Clone)]
pub struct Config {
    /// The CLI's single positional argument, unparsed.
    pub input: String,

    /// Working directory input paths are resolved relative to.
    pub working_dir: PathBuf,

    /// Whether to write a `T.xml` token-list dump alongside each compiled
    /// `.jack` file. Off by default; set from `hackt.toml`.
    pub emit_token_xml: bool,
}

impl Config {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            working_dir: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            emit_token_xml: false,
        }
    }
}

/// One pipeline invocation over a resolved `Config`.
pub struct Session {
    config: Config,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Runs every applicable stage to completion, writing every
    /// intermediate artifact (`.vm`, `.asm`, `.hack`) to disk.
    pub fn run(&self) -> DriverResult<()> {
        let inputs = discovery::discover_inputs(&self.config.input, &self.config.working_dir)?;
        if inputs.is_empty() {
            return Err(DriverError::NoInputFiles(self.config.input.clone()));
        }

        let mut jack_files = Vec::new();
        let mut vm_files = Vec::new();
        let mut asm_files = Vec::new();

        for path in inputs {
            match path.extension().and_then(|ext| ext.to_str()) {
                Some("jack") => jack_files.push(path),
                Some("vm") => vm_files.push(path),
                Some("asm") => asm_files.push(path),
                _ => return Err(DriverError::UnsupportedExtension(path)),
            }
        }

        if !jack_files.is_empty() {
            info!(count = jack_files.len(), "compiling Jack classes");
            vm_files.extend(self.compile_jack_files(&jack_files)?);
        }

        if !vm_files.is_empty() {
            info!(count = vm_files.len(), "translating VM program");
            asm_files.push(self.translate_vm_files(&vm_files)?);
        }

        for asm_path in &asm_files {
            info!(path = %asm_path.display(), "assembling");
            self.assemble_file(asm_path)?;
        }

        Ok(())
    }

    /// Compiles each `.jack` file to its own sibling `.vm` file, returning
    /// the produced paths so they can feed the VM-translation stage.
    fn compile_jack_files(&self, paths: &[PathBuf]) -> DriverResult<Vec<PathBuf>> {
        let mut produced = Vec::with_capacity(paths.len());
        for path in paths {
            let source =
                std::fs::read_to_string(path).map_err(|e| DriverError::Io(path.clone(), e))?;
            let class_name = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or_default();

            debug!(class = class_name, "tokenizing");
            let tokens = hackc_lex::tokenize_source(&source)?;

            if self.config.emit_token_xml {
                let xml_path = path.with_file_name(format!("{class_name}T.xml"));
                std::fs::write(&xml_path, token_xml::render(&tokens))
                    .map_err(|e| DriverError::Io(xml_path, e))?;
            }

            debug!(class = class_name, "parsing");
            let vm_text =
                hackc_par::Parser::new(&tokens, hackc_util::Symbol::intern(class_name))
                    .compile_class()?;

            let vm_path = path.with_extension("vm");
            std::fs::write(&vm_path, &vm_text).map_err(|e| DriverError::Io(vm_path.clone(), e))?;
            produced.push(vm_path);
        }
        Ok(produced)
    }

    /// Translates every `.vm` file as one program, `Sys.vm` forced first
    /// per spec.md, writing a single `.asm` file named after the shared
    /// directory (or the lone file's stem, if there is only one).
    fn translate_vm_files(&self, paths: &[PathBuf]) -> DriverResult<PathBuf> {
        let mut sources = Vec::with_capacity(paths.len());
        for path in paths {
            let text =
                std::fs::read_to_string(path).map_err(|e| DriverError::Io(path.clone(), e))?;
            let name = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or_default()
                .to_string();
            sources.push((name, text));
        }
        sources.sort_by(|(a, _), (b, _)| match (a.as_str() == "Sys", b.as_str() == "Sys") {
            (true, false) => std::cmp::Ordering::Less,
            (false, true) => std::cmp::Ordering::Greater,
            _ => a.cmp(b),
        });

        let refs: Vec<(&str, &str)> = sources.iter().map(|(n, s)| (n.as_str(), s.as_str())).collect();
        let asm_text = hackc_vm::translate_program(&refs)?;

        let asm_path = paths[0]
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join(format!("{}.asm", unit_name(paths)));
        std::fs::write(&asm_path, &asm_text).map_err(|e| DriverError::Io(asm_path.clone(), e))?;
        Ok(asm_path)
    }

    /// Assembles one `.asm` file into a sibling `.hack` file.
    fn assemble_file(&self, path: &Path) -> DriverResult<()> {
        let source =
            std::fs::read_to_string(path).map_err(|e| DriverError::Io(path.to_path_buf(), e))?;
        let binaries = hackc_asm::assemble(&source)?;

        let mut text = binaries.join("\n");
        if !text.is_empty() {
            text.push('\n');
        }

        let hack_path = path.with_extension("hack");
        std::fs::write(&hack_path, text).map_err(|e| DriverError::Io(hack_path, e))?;
        Ok(())
    }
}

/// The name a translated or assembled unit's output file takes: the lone
/// file's stem when there is only one, otherwise the shared parent
/// directory's name, matching the original per-stage tools' single-file
/// vs. directory CLI convention.
fn unit_name(paths: &[PathBuf]) -> String {
    if let [only] = paths {
        only.file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("program")
            .to_string()
    } else {
        paths[0]
            .parent()
            .and_then(|p| p.file_name())
            .and_then(|n| n.to_str())
            .unwrap_or("program")
            .to_string()
    }
}
