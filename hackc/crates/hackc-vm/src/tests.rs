//! Whole-file and whole-program translation tests.

#[cfg(test)]
mod tests {
    use crate::translate_program;

    #[test]
    fn simple_arithmetic_program() {
        let source = "push constant 7\npush constant 8\nadd\n";
        let asm = translate_program(&[("Main", source)]).unwrap();
        assert!(asm.contains("@7"));
        assert!(asm.contains("@8"));
        assert!(asm.contains("M=D+M"));
    }

    #[test]
    fn program_without_sys_has_no_bootstrap() {
        let source = "push constant 1\n";
        let asm = translate_program(&[("Main", source)]).unwrap();
        assert!(!asm.contains("Sys.init"));
    }

    #[test]
    fn program_with_sys_bootstraps_before_anything_else() {
        let source = "function Sys.init 0\ncall Main.main 0\nreturn\n";
        let asm = translate_program(&[("Sys", source), ("Main", "function Main.main 0\nreturn\n")])
            .unwrap();
        let bootstrap_pos = asm.find("@256").unwrap();
        let sys_file_pos = asm.find("Sys.vm").unwrap();
        assert!(bootstrap_pos < sys_file_pos);
    }

    #[test]
    fn call_ids_are_unique_across_the_whole_program_not_just_one_file() {
        let a = "call Main.helper 0\ncall Main.helper 0\n";
        let b = "call Main.helper 0\n";
        let asm = translate_program(&[("A", a), ("B", b)]).unwrap();
        assert!(asm.contains("ret_A_0"));
        assert!(asm.contains("ret_A_1"));
        assert!(asm.contains("ret_B_2"));
    }

    #[test]
    fn comments_and_blank_lines_do_not_shift_line_numbers() {
        let source = "// comment\n\npush constant 1\n// another\neq\n";
        let asm = translate_program(&[("Main", source)]).unwrap();
        assert!(asm.contains("eq_Main_5"));
    }

    #[test]
    fn malformed_instruction_is_reported_with_its_line() {
        let source = "push constant 1\nbogus instruction here\n";
        let err = translate_program(&[("Main", source)]).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("line 2"));
    }
}
