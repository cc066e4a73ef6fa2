// Text layout primitives shared by both PDF composers:
// Helvetica width tables, page geometry and greedy word wrap.
// Pure CPU work; callers on the async runtime go through spawn_blocking.

pub mod font_metrics;
pub mod wrap;

pub use font_metrics::{profile_page, resume_page, Font, PageGeometry};
pub use wrap::{wrap_spans, Line, Span};
