//! Edge case tests for hackc-vm

#[cfg(test)]
mod tests {
    use crate::error::TranslateError;
    use crate::lir::{Command, Segment};
    use crate::translate_program;

    #[test]
    fn pointer_index_other_than_zero_or_one_pushes_that_not_this() {
        // index != 0 is treated as THAT by the same `if index == 0` check
        // the original translator uses - there is no validation against
        // indices other than 0/1 at this layer, matching the source.
        let mut out = Vec::new();
        crate::lower::lower_command(&mut out, "Main", 1, 0, &Command::Push(Segment::Pointer, 1));
        assert!(out.contains(&"@THAT".to_string()));
    }

    #[test]
    fn function_with_zero_locals_emits_no_zero_initialization() {
        let mut out = Vec::new();
        crate::calling_convention::emit_function(&mut out, "Main.main", 0);
        assert!(!out.contains(&"M=0".to_string()));
    }

    #[test]
    fn empty_program_translates_to_a_trailing_newline_only() {
        let asm = translate_program(&[("Main", "")]).unwrap();
        assert_eq!(asm, "// Main.vm\n");
    }

    #[test]
    fn whitespace_and_comment_only_file_translates_to_no_commands() {
        let asm = translate_program(&[("Main", "// just a comment\n   \n")]).unwrap();
        assert_eq!(asm, "// Main.vm\n");
    }

    #[test]
    fn unknown_segment_name_is_rejected() {
        let err = Command::parse("push nonsense 0", 3).unwrap_err();
        assert!(matches!(err, TranslateError::UnknownSegment { line: 3, .. }));
    }

    #[test]
    fn goto_and_label_share_the_same_namespacing_scheme() {
        let mut out = Vec::new();
        crate::lower::lower_command(&mut out, "Main", 1, 0, &Command::Goto("LOOP".to_string()));
        assert!(out.contains(&"@Main_LOOP".to_string()));
    }

    #[test]
    fn block_comment_spanning_lines_blanks_every_line_it_covers() {
        let source = "push constant 1\n/* start\nstill a comment\nend */\npush constant 2\n";
        let asm = translate_program(&[("Main", source)]).unwrap();
        // the second push is on line 5, not line 2 - the block comment's
        // three interior lines must not have been parsed as commands.
        assert!(asm.contains("Main line 1"));
        assert!(asm.contains("Main line 5"));
        assert!(!asm.contains("Main line 2"));
    }

    #[test]
    fn call_with_zero_arguments_still_reserves_five_frame_slots() {
        let mut out = Vec::new();
        crate::calling_convention::emit_call(&mut out, "Main", "Main.f", 0, 0);
        assert!(out.contains(&"@5".to_string()));
    }
}
