pub mod analyzers;
pub mod error;
pub mod generator;
pub mod input;
pub mod mathop;
pub mod output;
pub mod processor;
pub mod stats;
pub mod transform;
