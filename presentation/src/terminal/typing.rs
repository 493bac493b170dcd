//! Character-by-character typing effect for the boot screens

use std::io::Write;
use std::time::Duration;

/// Writes text one character at a time
#[derive(Debug, Clone, Copy)]
pub struct TypingEffect {
    delay: Duration,
}

impl TypingEffect {
    /// A zero delay writes the whole text at once
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn is_instant(&self) -> bool {
        self.delay.is_zero()
    }

    pub async fn type_out<W: Write>(&self, text: &str, out: &mut W) -> std::io::Result<()> {
        if self.is_instant() {
            out.write_all(text.as_bytes())?;
            return out.flush();
        }

        let mut buf = [0u8; 4];
        for ch in text.chars() {
            out.write_all(ch.encode_utf8(&mut buf).as_bytes())?;
            out.flush()?;
            tokio::time::sleep(self.delay).await;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_instant_writes_everything() {
        let mut out = Vec::new();
        TypingEffect::new(Duration::ZERO)
            .type_out("Booting up ...\n", &mut out)
            .await
            .unwrap();
        assert_eq!(out, b"Booting up ...\n");
    }

    #[tokio::test]
    async fn test_typed_output_keeps_multibyte_chars() {
        let mut out = Vec::new();
        TypingEffect::new(Duration::from_millis(1))
            .type_out("[ • ] 😏", &mut out)
            .await
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "[ • ] 😏");
    }
}
