//! # License Module
//!
//! The two fixed license blocks this tool knows about, and the
//! [`LicenseSwap`] pair that tells the processor which one to look for and
//! which one to put in its place.
//!
//! Both blocks are matched and written verbatim. Whitespace, the comment
//! delimiters and the leading ` *` on each line are all significant.

use std::borrow::Cow;

/// The MIT header that gets replaced.
///
/// The trailing blank line is part of the block, so it is removed together
/// with the comment.
pub const MIT_LICENSE: &str = r#"/**
 *MIT License
 *
 *Copyright (c) 2025 ylgeeker
 *
 *Permission is hereby granted, free of charge, to any person obtaining a copy
 *of this software and associated documentation files (the "Software"), to deal
 *in the Software without restriction, including without limitation the rights
 *to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 *copies of the Software, and to permit persons to whom the Software is
 *furnished to do so, subject to the following conditions:
 *
 *copies or substantial portions of the Software.
 *
 *THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 *IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 *FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 *AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 *LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 *OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 *SOFTWARE.
**/

"#;

/// The Apache 2.0 header written in place of [`MIT_LICENSE`].
pub const APACHE_LICENSE: &str = r#"/**
 * Copyright 2025 saber authors.
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
**/
"#;

/// A literal source/target pair of license blocks.
///
/// The default pair is [`MIT_LICENSE`] to [`APACHE_LICENSE`]. Other pairs
/// can be supplied through [`LicenseSwap::new`]; matching stays exact and
/// literal either way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseSwap {
  source: Cow<'static, str>,
  target: Cow<'static, str>,
}

impl LicenseSwap {
  /// Creates a pair from any two literal blocks.
  ///
  /// # Parameters
  ///
  /// * `source` - The block to search for
  /// * `target` - The block written in its place
  pub fn new(source: impl Into<Cow<'static, str>>, target: impl Into<Cow<'static, str>>) -> Self {
    Self {
      source: source.into(),
      target: target.into(),
    }
  }

  /// The block being searched for.
  pub fn source(&self) -> &str {
    &self.source
  }

  /// The block written in place of [`LicenseSwap::source`].
  pub fn target(&self) -> &str {
    &self.target
  }
}

impl Default for LicenseSwap {
  fn default() -> Self {
    Self {
      source: Cow::Borrowed(MIT_LICENSE),
      target: Cow::Borrowed(APACHE_LICENSE),
    }
  }
}
