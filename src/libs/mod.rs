pub mod accession;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod histogram;
pub mod io;
pub mod partition;
pub mod ratio;
pub mod result;
pub mod series;
pub mod stat;
pub mod topology;
