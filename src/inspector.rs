use crate::error::{Result, SegmentKind};
use crate::render::{Palette, Renderer};
use crate::time::{Clock, SystemClock};
use crate::token::{TokenSegments, decode_part};
use crate::utils::codec::Alphabet;
use crate::value::Value;
use std::io::Write;
use std::sync::Arc;

/// Token inspector
///
/// The inspector is configured once and can be reused for any number of
/// tokens. Defaults reproduce the classic output: standard Base64 alphabet,
/// ANSI colors, wall clock.
#[derive(Clone)]
pub struct Inspector {
    config_alphabet: Alphabet,
    config_palette: Palette,
    config_clock: Arc<dyn Clock>,
}

impl Inspector {
    /// Create a new inspector with default settings
    pub fn new() -> Self {
        Self {
            config_alphabet: Alphabet::default(),
            config_palette: Palette::default(),
            config_clock: Arc::new(SystemClock),
        }
    }

    /// Configure the Base64 alphabet used for header and payload
    pub fn alphabet(&mut self, alphabet: Alphabet) -> &mut Self {
        self.config_alphabet = alphabet;
        self
    }

    /// Configure the escape codes used while rendering
    pub fn palette(&mut self, palette: Palette) -> &mut Self {
        self.config_palette = palette;
        self
    }

    /// Configure the reference time for relative-time phrases
    pub fn clock<C>(&mut self, clock: C) -> &mut Self
    where
        C: Clock + 'static,
    {
        self.config_clock = Arc::new(clock);
        self
    }

    /// Finish configuration
    pub fn build(&mut self) -> Self {
        self.clone()
    }
}

impl Inspector {
    /// Decode a token and write its header and payload to `writer`
    ///
    /// The header block is written before the payload is decoded, so a
    /// broken payload still leaves the header on the stream. Any failure
    /// stops the run.
    pub fn write_claims<W: Write + ?Sized>(&self, writer: &mut W, token: &str) -> Result<()> {
        let segments = TokenSegments::split(token)?;
        let renderer = Renderer::new(&self.config_palette, self.config_clock.as_ref());

        let header = self.decode(segments.header, SegmentKind::Header)?;
        writeln!(writer, "{}", SegmentKind::Header.label())?;
        renderer.render(writer, &header).inspect_err(|e| {
            tracing::warn!(segment = %SegmentKind::Header, error = %e, "render failed");
        })?;

        let payload = self.decode(segments.payload, SegmentKind::Payload)?;
        writeln!(writer)?;
        writeln!(writer, "{}", SegmentKind::Payload.label())?;
        renderer.render(writer, &payload).inspect_err(|e| {
            tracing::warn!(segment = %SegmentKind::Payload, error = %e, "render failed");
        })?;
        writeln!(writer)?;

        Ok(())
    }

    fn decode(&self, encoded: &str, segment: SegmentKind) -> Result<Value> {
        decode_part(encoded, segment, self.config_alphabet).inspect_err(|e| {
            tracing::warn!(%segment, error = %e, "segment rejected");
        })
    }
}

impl Default for Inspector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::time::FixedClock;
    use crate::utils::codec::encode_segment;

    fn inspector() -> Inspector {
        Inspector::new()
            .palette(Palette::plain())
            .clock(FixedClock::parse("2025-04-19T18:25:00+02:00").unwrap())
            .build()
    }

    fn token(header: &str, payload: &str) -> String {
        format!(
            "{}.{}.sig",
            encode_segment(header.as_bytes(), Alphabet::Standard),
            encode_segment(payload.as_bytes(), Alphabet::Standard)
        )
    }

    #[test]
    fn test_writes_both_blocks() {
        let mut out = Vec::new();
        inspector()
            .write_claims(&mut out, &token(r#"{"alg":"none"}"#, r#"{"n":1}"#))
            .unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Header:\n{\n  \"alg\": \"none\"\n}\n\nPayload:\n{\n  \"n\": 1\n}\n\n"
        );
    }

    #[test]
    fn test_invalid_format_writes_nothing() {
        let mut out = Vec::new();
        let result = inspector().write_claims(&mut out, "only.two");
        assert!(matches!(result, Err(Error::FormatInvalid { parts: 2 })));
        assert!(out.is_empty());
    }

    #[test]
    fn test_header_failure_writes_nothing() {
        let mut out = Vec::new();
        let result = inspector().write_claims(&mut out, "!!!.e30.sig");
        assert!(matches!(
            result,
            Err(Error::Decode {
                segment: SegmentKind::Header,
                ..
            })
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn test_payload_failure_keeps_header() {
        let mut out = Vec::new();
        let result = inspector().write_claims(&mut out, &token(r#"{"alg":"none"}"#, "[1,2]"));
        assert!(matches!(result, Err(Error::NotAnObject { found: "array" })));

        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("Header:\n{\n  \"alg\": \"none\"\n}\n\nPayload:\n"));
        assert!(!out.contains("[1,2]"));
    }
}
