pub mod python;

pub use python::{Extraction, PythonOutline};
