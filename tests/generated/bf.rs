// Generated by tapegen
//   echo.bf
//   nested.bf
//   wrap_left.bf
// DO NOT EDIT: regenerate from the tape-language sources
//
// Checked against the compiler's current output by tests/generated_rust_test.rs

pub mod bf {
    #![allow(unused_mut, unused_variables, unused_assignments)]

    pub const TAPE_SIZE: usize = 256;

    pub fn echo(input: &str) -> String {
        let input = input.as_bytes();
        let mut tape = [0u8; TAPE_SIZE];
        let mut ptr: usize = 0;
        let mut input_pos: usize = 0;
        let mut output = String::new();
        tape[ptr] = input.get(input_pos).copied().unwrap_or(0);
        input_pos += 1;
        output.push(char::from(tape[ptr]));
        output
    }

    pub fn nested(input: &str) -> String {
        let input = input.as_bytes();
        let mut tape = [0u8; TAPE_SIZE];
        let mut ptr: usize = 0;
        let mut input_pos: usize = 0;
        let mut output = String::new();
        tape[ptr] = tape[ptr].wrapping_add(1);
        tape[ptr] = tape[ptr].wrapping_add(1);
        while tape[ptr] != 0 {
            ptr = (ptr + 1) % TAPE_SIZE;
            tape[ptr] = tape[ptr].wrapping_add(1);
            tape[ptr] = tape[ptr].wrapping_add(1);
            while tape[ptr] != 0 {
                ptr = (ptr + 1) % TAPE_SIZE;
                tape[ptr] = tape[ptr].wrapping_add(1);
                ptr = (ptr + 255) % TAPE_SIZE;
                tape[ptr] = tape[ptr].wrapping_sub(1);
            }
            ptr = (ptr + 255) % TAPE_SIZE;
            tape[ptr] = tape[ptr].wrapping_sub(1);
        }
        ptr = (ptr + 1) % TAPE_SIZE;
        ptr = (ptr + 1) % TAPE_SIZE;
        output.push(char::from(tape[ptr]));
        output
    }

    pub fn wrap_left(input: &str) -> String {
        let input = input.as_bytes();
        let mut tape = [0u8; TAPE_SIZE];
        let mut ptr: usize = 0;
        let mut input_pos: usize = 0;
        let mut output = String::new();
        ptr = (ptr + 255) % TAPE_SIZE;
        tape[ptr] = tape[ptr].wrapping_add(1);
        output.push(char::from(tape[ptr]));
        output
    }
}
