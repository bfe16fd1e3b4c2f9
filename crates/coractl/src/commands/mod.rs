pub mod ask;
pub mod doctor;
pub mod repl;
pub mod topics;
