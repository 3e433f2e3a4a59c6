//! Export module for simulation results
//!
//! # Available formats
//!
//! | Format  | Module          |
//! |---------|-----------------|
//! | CSV     | [`csv`]         |
//!
//! Each format offers plain functions over `&[f64]` slices plus a
//! [`ProfileSink`](crate::output::ProfileSink) implementation the driver can
//! write through.

pub mod csv;

pub use csv::{
    export_profile_csv,
    export_profiles_csv,
    export_trajectory_csv,
    CsvConfig,
    CsvMetadata,
    CsvSink,
};
