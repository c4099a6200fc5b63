// Constants for the Befunge interpreter

/// Cell that ends execution; checked before every fetch
pub const TERMINATOR: char = '@';

/// Default snapshot history budget for the debugger (256 MB)
pub const DEFAULT_SNAPSHOT_LIMIT: usize = 256 * 1024 * 1024;
