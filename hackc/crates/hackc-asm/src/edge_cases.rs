//! Edge case tests for hackc-asm
