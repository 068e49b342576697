pub mod implementation;
