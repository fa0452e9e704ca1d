//! Screen text cache.
//!
//! `ScreenBuffer` records every string the console writes, split into
//! `CacheEntry` units tagged with an insertion sequence id and the cursor
//! position they were written at. The console owns the only mutable handle,
//! so the cache stays in step with the terminal as long as callers do not
//! write to the terminal behind its back.

mod buffer;
mod cursor;

pub use buffer::{CacheEntry, ScreenBuffer};
