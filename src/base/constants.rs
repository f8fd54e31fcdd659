//! Domain constants shared across layers.

/// Extension of IDL model files.
pub const IDL_EXTENSION: &str = "smithy";

/// Namespace of the IDL prelude.
pub const PRELUDE_NAMESPACE: &str = "smithy.api";

/// Version declared by files this crate produces.
pub const TARGET_VERSION: &str = "2.0";

/// Version strings accepted as the legacy (1.0) declaration.
pub const LEGACY_VERSIONS: &[&str] = &["1.0", "1"];

/// Version strings accepted as an already-upgraded declaration.
pub const UPGRADED_VERSIONS: &[&str] = &["2.0", "2"];

/// Prefix of source locations that point inside packaged archives.
pub const ARCHIVE_SOURCE_PREFIX: &str = "jar:";

/// Keyword that starts a native enum declaration.
pub const ENUM_KEYWORD: &str = "enum";

/// Sigil that starts a trait application.
pub const TRAIT_SIGIL: char = '@';

/// Prefix of a documentation comment.
pub const DOC_COMMENT_PREFIX: &str = "///";
