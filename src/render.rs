// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Canonical lombok.config rendering.
//!
//! Rendering is a pure function of its inputs. The same header, directives,
//! and extra lines always produce byte-identical text, which is what allows
//! [`crate::artifact::write`] to skip writes that would change nothing.
//!
//! # Layout
//!
//! ```text
//! config.stopBubbling = true
//! <key> = <value>
//! <key> += <token>
//! <extra line>
//! ```
//!
//! Lines are joined with `\n`. No trailing newline is added.

use crate::directive::{Directive, DirectiveKind};

use std::fmt::{Display, Formatter, Result as FmtResult};

/// Header line that starts every generated file.
///
/// Stops lombok from searching parent directories for more configuration.
pub const HEADER: &str = "config.stopBubbling = true";

impl Display for Directive {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> FmtResult {
        match self.kind {
            DirectiveKind::SingleValue => write!(fmt, "{} = {}", self.key, self.value),
            DirectiveKind::ListAppend => write!(fmt, "{} += {}", self.key, self.value),
        }
    }
}

/// Render header, directives, and extra lines into final file content.
///
/// Directives keep their given order. Extra lines are trimmed, then appended
/// in their given order.
pub fn render(
    header: &str,
    directives: &[Directive],
    extra_lines: impl IntoIterator<Item = impl AsRef<str>>,
) -> String {
    let mut out = String::from(header);
    for directive in directives {
        out.push('\n');
        out.push_str(&directive.to_string());
    }

    for line in extra_lines {
        out.push('\n');
        out.push_str(line.as_ref().trim());
    }

    out
}
