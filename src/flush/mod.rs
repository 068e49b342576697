pub mod jsonl;

pub use jsonl::{flush_to_jsonl, load_from_jsonl};
