pub mod adjusted;
pub mod charts;
pub mod classify;
pub mod config;
pub mod error;
pub mod geo;
pub mod output;
pub mod phase;
pub mod pipeline;
pub mod record;
pub mod registry;
pub mod sources;
pub mod utility;
