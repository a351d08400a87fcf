pub mod strings;
mod plain;
