//! Application constants for the parser launcher
//!
//! Numeric bounds checked before a config file is written, the defaults
//! the external parser falls back to, and the key names of the config
//! file format it reads.

// =============================================================================
// Numeric Bounds
// =============================================================================

/// Largest value of a signed 16-bit integer
pub const MAX_SHORT: i64 = (1 << 15) - 1;

/// Largest value of a signed 32-bit integer
pub const MAX_INT: i64 = (1 << 31) - 1;

/// Inclusive bounds for field sizes in bytes
pub const FIELD_SIZE_BOUNDS: (i64, i64) = (1, MAX_SHORT);

/// Inclusive bounds for tile dimensions
pub const TILE_BOUNDS: (i64, i64) = (0, MAX_INT);

// =============================================================================
// Parser Defaults
// =============================================================================

pub const DEFAULT_TILE_WIDTH: i64 = 1000;
pub const DEFAULT_TILE_HEIGHT: i64 = 1000;
pub const DEFAULT_MIN_FIELD_SIZE: i64 = 5;
pub const DEFAULT_MAX_FIELD_SIZE: i64 = 7;

// =============================================================================
// Config File Format
// =============================================================================

/// Config file keys, in the order they are written
pub mod keys {
    pub const MIN_FIELD_SIZE: &str = "min_field_size";
    pub const MAX_FIELD_SIZE: &str = "max_field_size";
    pub const OUTPUT_FIELD_SIZE: &str = "output_field_size";
    pub const EOL_FLAG: &str = "eol_flag";
    pub const TILE_WIDTH: &str = "tile_width";
    pub const TILE_HEIGHT: &str = "tile_height";
    pub const SOURCE: &str = "source";
    pub const DEST: &str = "dest";
}

/// Size of the buffer the parser reads its config file into; the file
/// must be strictly smaller.
pub const PARSER_CONFIG_BUFFER_SIZE: usize = 20_000;

/// The parser stores paths in PATH_MAX-sized buffers including the NUL
pub const PARSER_MAX_PATH_LEN: usize = 4096;

/// Suffix used for temporary config files created by the CLI
pub const TEMP_CONFIG_SUFFIX: &str = ".toml";
