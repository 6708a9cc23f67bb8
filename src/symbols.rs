// Visual symbols and emoji constants used throughout the library
// Using generic names that represent meaning rather than the specific emoji

/// Status and feedback symbols
pub const SYMBOL_INDICATOR_SUCCESS: &str = "✅";
pub const SYMBOL_INDICATOR_ERROR: &str = "❌";
pub const SYMBOL_INDICATOR_WARNING: &str = "⚠️";

/// Process and action symbols
pub const SYMBOL_ACTION_LAUNCH: &str = "🚀";
pub const SYMBOL_ACTION_HOOK: &str = "🪝";

/// Content and data symbols
pub const SYMBOL_CONTENT_SKIP: &str = "⏭️";
