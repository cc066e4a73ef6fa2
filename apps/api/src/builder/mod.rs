// Structured resume builder: a `ResumeProfile` submitted field by field, rendered to PDF.

pub mod handlers;
