//! Dogstatsd gauge line encoding.
//!
//! Layout: `name:value|g[|#tag,tag][|@rate]`. The tag section is omitted when
//! there are no tags and the rate section when the rate is 1.

use std::fmt::Write;

use bytes::{BufMut, Bytes, BytesMut};

/// First character in `s` that would break line framing: the section
/// separators `|`, `#`, `@`, the tag separator `,`, whitespace, or a control
/// character.
pub fn find_framing_char(s: &str) -> Option<char> {
    s.chars()
        .find(|&c| matches!(c, '|' | '#' | '@' | ',') || c.is_whitespace() || c.is_control())
}

/// One gauge datapoint ready to send.
#[derive(Debug, Clone, PartialEq)]
pub struct Gauge {
    /// Fully prefixed metric name.
    pub name: String,
    pub value: f64,
    /// Normalized `key:value` tags.
    pub tags: Vec<String>,
    /// Passed through to the collector, never enforced here.
    pub sample_rate: u32,
}

impl Gauge {
    /// Render the datagram payload.
    pub fn encode(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(self.name.len() + 32 + self.tags.iter().map(|t| t.len() + 1).sum::<usize>());
        buf.put_slice(self.name.as_bytes());
        buf.put_u8(b':');
        // Writing into BytesMut is infallible.
        let _ = write!(buf, "{}", self.value);
        buf.put_slice(b"|g");

        if !self.tags.is_empty() {
            buf.put_slice(b"|#");
            for (i, tag) in self.tags.iter().enumerate() {
                if i > 0 {
                    buf.put_u8(b',');
                }
                buf.put_slice(tag.as_bytes());
            }
        }

        if self.sample_rate != 1 {
            let _ = write!(buf, "|@{}", self.sample_rate);
        }

        buf.freeze()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gauge(value: f64, tags: &[&str], sample_rate: u32) -> Gauge {
        Gauge {
            name: "hass.temp".into(),
            value,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            sample_rate,
        }
    }

    #[test]
    fn plain_gauge() {
        assert_eq!(&gauge(21.5, &[], 1).encode()[..], b"hass.temp:21.5|g");
    }

    #[test]
    fn tags_and_rate() {
        let line = gauge(3.0, &["room:kitchen", "floor:1"], 5).encode();
        assert_eq!(&line[..], b"hass.temp:3|g|#room:kitchen,floor:1|@5");
    }

    #[test]
    fn framing_chars() {
        assert_eq!(find_framing_char("sensor.temp_1"), None);
        assert_eq!(find_framing_char("room:kitchen"), None);
        assert_eq!(find_framing_char("a,b"), Some(','));
        assert_eq!(find_framing_char("a|b"), Some('|'));
        assert_eq!(find_framing_char("x\nhass.y"), Some('\n'));
        assert_eq!(find_framing_char("a b"), Some(' '));
    }

    #[test]
    fn negative_and_fractional_values() {
        assert_eq!(&gauge(-0.25, &[], 1).encode()[..], b"hass.temp:-0.25|g");
    }
}
