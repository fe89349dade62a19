//! Colorized, annotated printing of decoded segments
//!
//! Only the top level of an object is laid out: one member per line, keys in
//! byte-lexicographic order. Nested arrays and objects are flattened to their
//! compact textual form and printed as strings.
//!
//! ```text
//! {
//!   "admin": true,
//!   "iat": 1516239022, # 2018-01-18T01:30:22Z [2648 day(s) ago]
//!   "name": "John Doe"
//! }
//! ```

mod palette;

pub use palette::Palette;

use crate::error::{Error, Result};
use crate::time::{Clock, RelativeTime, epoch_to_utc, format_iso, is_plausible_timestamp};
use crate::value::{Value, format_number};
use chrono::{DateTime, Utc};
use std::io::Write;

/// Prints one decoded segment
pub struct Renderer<'a> {
    palette: &'a Palette,
    clock: &'a dyn Clock,
}

impl<'a> Renderer<'a> {
    pub fn new(palette: &'a Palette, clock: &'a dyn Clock) -> Self {
        Self { palette, clock }
    }

    /// Render `value`, which must be an object
    pub fn render<W: Write + ?Sized>(&self, writer: &mut W, value: &Value) -> Result<()> {
        let members = value.as_object().ok_or(Error::NotAnObject {
            found: value.kind(),
        })?;

        let now = self.clock.now();
        let p = self.palette;

        tracing::debug!(keys = members.len(), %now, "rendering object");

        writeln!(writer, "{{")?;

        let last = members.len().saturating_sub(1);
        for (i, (key, member)) in members.iter().enumerate() {
            let comma = if i == last { "" } else { "," };

            write!(writer, "  {}\"{key}\"{}: ", p.key, p.reset)?;

            match member {
                Value::Bool(b) => {
                    write!(writer, "{}{b}{}{comma}", p.boolean, p.reset)?;
                }
                Value::Number(n) => {
                    write!(
                        writer,
                        "{}{}{}{comma}",
                        p.number,
                        format_number(*n),
                        p.reset
                    )?;
                    self.annotate(writer, *n, now)?;
                }
                Value::Null | Value::String(_) | Value::Array(_) | Value::Object(_) => {
                    write!(writer, "{}\"{member}\"{}{comma}", p.string, p.reset)?;
                }
            }

            writeln!(writer)?;
        }

        writeln!(writer, "}}")?;
        Ok(())
    }

    /// Append ` # <iso> [<relative>]` when `n` looks like epoch seconds
    fn annotate<W: Write + ?Sized>(
        &self,
        writer: &mut W,
        n: f64,
        now: DateTime<Utc>,
    ) -> Result<()> {
        if !is_plausible_timestamp(n) {
            return Ok(());
        }
        let Some(time) = epoch_to_utc(n) else {
            return Ok(());
        };

        let p = self.palette;
        write!(
            writer,
            " {}# {}{} [{}]{}",
            p.annotation,
            format_iso(&time),
            p.delta,
            RelativeTime::between(time, now),
            p.reset
        )?;
        Ok(())
    }
}
