pub mod wordlist;

pub use wordlist::{FileFormat, LoadReport, Wordlist};
