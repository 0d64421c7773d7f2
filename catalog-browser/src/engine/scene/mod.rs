//! Scene construction for catalog items.
//!
//! Every valid record becomes a root entity with a card and a cover panel
//! as children, placed on the spiral and registered against its record.

/// Startup system that spawns one item per record.
pub mod builder;

/// Seedable random source for per-item float phases.
pub mod float_phase;

/// Item components: root marker, child visuals, pick boxes and visual state.
pub mod item;

/// Entity to record association table.
pub mod registry;
