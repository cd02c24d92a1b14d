//! Dataset persistence.
//!
//! The pipeline persists each dataset as a single CSV file that is read in
//! full at the start of a run and rewritten in full at the end
//! (append-by-replace). See [`csv`] for the encoding details.

pub mod csv;
