//! Parsers for raw planning-base record batches.
//!
//! The backing store returns tabular records as JSON: a record id plus a map
//! of named fields, where linked fields arrive as lists of record keys
//! (usually one element). [`record_parser`] turns a batch payload into
//! [`RawRecord`]s and provides the field accessors that implement the
//! first-of-list normalization contract.

pub mod record_parser;


pub use record_parser::{parse_record_batch_str, RawRecord, DATE_FORMAT};
