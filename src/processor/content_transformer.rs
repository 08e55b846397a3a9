//! # Content Transformer Module
//!
//! Literal search-and-replace of a license block inside file content. No
//! pattern syntax is involved: the source block has to appear character for
//! character, line breaks included, anywhere in the content.

use crate::license::LicenseSwap;

/// Content transformation for license replacement.
///
/// The `ContentTransformer` swaps every verbatim occurrence of the source
/// block for the target block and leaves all other bytes alone.
#[derive(Debug, Clone, Default)]
pub struct ContentTransformer {
  swap: LicenseSwap,
}

impl ContentTransformer {
  /// Creates a new ContentTransformer for the given license pair.
  pub const fn new(swap: LicenseSwap) -> Self {
    Self { swap }
  }

  /// Counts the non-overlapping occurrences of the source block.
  pub fn count_occurrences(&self, content: &str) -> usize {
    if self.swap.source().is_empty() {
      return 0;
    }
    content.matches(self.swap.source()).count()
  }

  /// Replaces every occurrence of the source block with the target block.
  ///
  /// # Returns
  ///
  /// `None` when the source block does not occur, so callers can skip the
  /// write entirely. Otherwise the rewritten content.
  pub fn replace_license(&self, content: &str) -> Option<String> {
    let source = self.swap.source();
    if source.is_empty() || !content.contains(source) {
      return None;
    }
    Some(content.replace(source, self.swap.target()))
  }
}
