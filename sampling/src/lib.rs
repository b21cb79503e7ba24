pub mod integer;
pub mod source;
