pub mod assembler;
pub mod dataset;
pub mod error;
pub mod matcher;
pub mod model;
