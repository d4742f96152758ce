//! Bounding box properties checked over random inputs.

mod envelope_test;
