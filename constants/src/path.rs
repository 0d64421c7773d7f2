/// Catalog dataset, relative to the asset root.
pub const DATASET_PATH: &str = "data/catalog.csv";

/// Source dataset picked up by the staging step.
pub const DATASET_SOURCE: &str = "catalog-browser/assets/data/catalog.csv";

/// Destination of the staged dataset inside the publish directory.
pub const STAGED_DATASET_PATH: &str = "assets/data/catalog.csv";
