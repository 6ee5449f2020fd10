//! Library-level pipeline integration tests: drives `Session::run` directly
//! against files written into a temp directory, covering the six
//! end-to-end scenarios the toolchain is built around.

use hackc_drv::{Config, Session};

fn session_for(dir: &std::path::Path, input: &str) -> Session {
    Session::new(Config {
        input: input.to_string(),
        working_dir: dir.to_path_buf(),
        emit_token_xml: false,
    })
}

#[test]
fn assembler_minimal_scenario() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("Prog.asm"), "@5\nD=A\n@SP\nM=D\n").unwrap();

    session_for(dir.path(), "Prog.asm").run().unwrap();

    let hack = std::fs::read_to_string(dir.path().join("Prog.hack")).unwrap();
    let lines: Vec<&str> = hack.lines().collect();
    assert_eq!(
        lines,
        vec![
            "0000000000000101",
            "1110110000010000",
            "0000000000000000",
            "1110001100001000",
        ]
    );
}

#[test]
fn assembler_label_and_variable_scenario() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("Prog.asm"),
        "@LOOP\n(LOOP)\n@i\nM=1\n@LOOP\n0;JMP\n",
    )
    .unwrap();

    session_for(dir.path(), "Prog.asm").run().unwrap();

    let hack = std::fs::read_to_string(dir.path().join("Prog.hack")).unwrap();
    let first_line = hack.lines().next().unwrap();
    assert_eq!(first_line, "0000000000000001");
}

#[test]
fn vm_translator_add_scenario() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("Prog.vm"),
        "push constant 7\npush constant 8\nadd\n",
    )
    .unwrap();

    session_for(dir.path(), "Prog.vm").run().unwrap();

    let asm = std::fs::read_to_string(dir.path().join("Prog.asm")).unwrap();
    assert!(asm.contains("@7"));
    assert!(asm.contains("@8"));
    assert!(asm.contains("M=D+M"));
}

#[test]
fn compiler_empty_method_scenario() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("Foo.jack"),
        "class Foo {\n  method void bar() {\n    return;\n  }\n}\n",
    )
    .unwrap();

    session_for(dir.path(), "Foo.jack").run().unwrap();

    let vm = std::fs::read_to_string(dir.path().join("Foo.vm")).unwrap();
    assert_eq!(
        vm.trim(),
        "function Foo.bar 0\npush argument 0\npop pointer 0\npush constant 0\nreturn"
    );
}

#[test]
fn token_xml_dump_is_written_next_to_the_class_when_enabled() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("Foo.jack"),
        "class Foo {\n  method void bar() {\n    return;\n  }\n}\n",
    )
    .unwrap();

    Session::new(Config {
        input: "Foo.jack".to_string(),
        working_dir: dir.path().to_path_buf(),
        emit_token_xml: true,
    })
    .run()
    .unwrap();

    let xml = std::fs::read_to_string(dir.path().join("FooT.xml")).unwrap();
    assert!(xml.starts_with("<tokens>"));
    assert!(xml.contains("<keyword> class </keyword>"));
}

#[test]
fn full_jack_to_hack_chain_scenario() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("Sys.jack"),
        "class Sys {\n  function void init() {\n    return;\n  }\n}\n",
    )
    .unwrap();

    session_for(dir.path(), "Sys.jack").run().unwrap();

    assert!(dir.path().join("Sys.vm").exists());
    let asm_path = dir.path().join("Sys.asm");
    assert!(asm_path.exists(), "VM translation should produce an .asm file");
    let hack_path = dir.path().join("Sys.hack");
    assert!(hack_path.exists(), "assembly should produce a .hack file");

    let hack = std::fs::read_to_string(&hack_path).unwrap();
    for line in hack.lines() {
        assert_eq!(line.len(), 16);
        assert!(line.chars().all(|c| c == '0' || c == '1'));
    }
}

#[test]
fn multi_class_project_compiles_each_class_independently() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("Main.jack"),
        "class Main {\n  function void main() {\n    return;\n  }\n}\n",
    )
    .unwrap();
    std::fs::write(
        dir.path().join("Helper.jack"),
        "class Helper {\n  function void noop() {\n    return;\n  }\n}\n",
    )
    .unwrap();

    session_for(dir.path(), "").run().unwrap();

    assert!(dir.path().join("Main.vm").exists());
    assert!(dir.path().join("Helper.vm").exists());
}

#[test]
fn nonexistent_input_reports_no_input_files() {
    let dir = tempfile::tempdir().unwrap();
    let err = session_for(dir.path(), "").run().unwrap_err();
    assert!(matches!(err, hackc_drv::DriverError::NoInputFiles(_)));
}

#[test]
fn unrecognized_extension_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("notes.txt"), "hello").unwrap();
    let err = session_for(dir.path(), "notes.txt").run().unwrap_err();
    assert!(matches!(err, hackc_drv::DriverError::UnsupportedExtension(_)));
}
