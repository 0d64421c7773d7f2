//! Catalog data types.
//!
//! Raw CSV rows, the validated `Record` built from each one, and the
//! `Catalog` resource that holds every valid record in dataset order.

/// Dataset row asset, validated records and the catalog resource.
pub mod catalog;
