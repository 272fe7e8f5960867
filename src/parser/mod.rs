//! Parsers for the external kbdgen layout format.

pub mod kbdgen;

pub use kbdgen::{
    parse_kbdgen_file, parse_kbdgen_str, transform_layout, KbdgenLayout, KbdgenPlatform,
    KbdgenPrimary, TransformError,
};
