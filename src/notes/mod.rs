// Notes scoped to their owner

pub mod service;

pub use service::NoteService;
