//! Core engine for the Linkpost content assistant.
//!
//! Two leaf components do the real work: [`extraction`] parses free-form
//! model output into typed records, and [`templates`] renders reusable post
//! templates against user-supplied values. [`posts`] and [`counter`] carry
//! the supporting records the embedding application displays and stores.
//!
//! Everything here is pure and synchronous: text in, structured data or
//! text out. Prompt construction, model calls, and persistence belong to
//! the caller.

pub mod counter;
pub mod errors;
pub mod extraction;
pub mod posts;
pub mod templates;

pub use counter::{word_count, CharacterCount, CountStatus, POST_CHAR_LIMIT};
pub use errors::TemplateError;
pub use extraction::{
    extract, parse_hashtags, parse_optimization, Extracted, HashtagSet, Mode, OptimizationResult,
    ScoreBand,
};
pub use posts::{PostLog, SavedPost};
pub use templates::{discover_unfilled, render, RenderedPost, Template, TemplateCatalog};
