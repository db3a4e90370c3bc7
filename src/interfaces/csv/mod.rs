pub mod intent_reader;
pub mod session_writer;
