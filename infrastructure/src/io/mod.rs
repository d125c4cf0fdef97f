//! Session input and output files
//!
//! A session lives in a directory: `input.json` describes it and
//! `output.json` receives the collected responses.

mod reader_writer;

pub use reader_writer::{
    INPUT_FILE, IoError, OUTPUT_FILE, SessionInput, read_input, read_input_file, write_output,
};
