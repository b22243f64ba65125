use std::borrow::Cow;
use std::ops::RangeInclusive;

/// Name under which the generic lowercase table is emitted.
pub const GENERIC_LOWERCASE: &str = "GENERIC_LOWERCASE";

/// Compiler and emitter settings.
///
/// ```
/// use alphabet_compiler::Config;
///
/// let config = Config::default().with_emit_names(false);
/// assert_eq!(*config.lowercase_range.start(), 0x21);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Codepoints covered by the generic lowercase map.
    pub lowercase_range: RangeInclusive<u32>,
    /// Banner written at the top of the generated module.
    pub header: Cow<'static, str>,
    /// Emit table names into the artifact (useful for debugging dumps).
    pub emit_names: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lowercase_range: 0x21..=0xFFFF,
            header: Cow::Borrowed("@generated by alphabet-compiler. Do not edit by hand."),
            emit_names: true,
        }
    }
}

impl Config {
    #[inline]
    pub fn with_lowercase_range(mut self, range: RangeInclusive<u32>) -> Self {
        self.lowercase_range = range;
        self
    }

    #[inline]
    pub fn with_header(mut self, header: impl Into<Cow<'static, str>>) -> Self {
        self.header = header.into();
        self
    }

    #[inline]
    pub fn with_emit_names(mut self, emit: bool) -> Self {
        self.emit_names = emit;
        self
    }
}
