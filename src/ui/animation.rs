//! Staggered entrance animation for page sections.

use std::io::{self, Write};
use std::time::Duration;

/// Delay between two revealed sections.
pub const DEFAULT_STEP: Duration = Duration::from_millis(120);

#[derive(Debug, Clone, Copy)]
pub struct Reveal {
    enabled: bool,
    step: Duration,
}

impl Reveal {
    pub fn new(enabled: bool, step: Duration) -> Self {
        Self { enabled, step }
    }

    pub fn disabled() -> Self {
        Self::new(false, Duration::ZERO)
    }

    /// Writes `sections` to `out`, pausing between them when enabled.
    pub async fn play<W: Write>(&self, sections: &[String], out: &mut W) -> io::Result<()> {
        for (index, section) in sections.iter().enumerate() {
            if self.enabled && index > 0 && !self.step.is_zero() {
                tokio::time::sleep(self.step).await;
            }
            writeln!(out, "{section}")?;
            out.flush()?;
        }
        Ok(())
    }
}

impl Default for Reveal {
    fn default() -> Self {
        Self::new(true, DEFAULT_STEP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_play_writes_all_sections_in_order() {
        let sections = vec!["one".to_string(), "two".to_string(), "three".to_string()];
        let mut out = Vec::new();

        let started = tokio::time::Instant::now();
        Reveal::default().play(&sections, &mut out).await.unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "one\ntwo\nthree\n");
        assert!(started.elapsed() >= DEFAULT_STEP * 2);
    }

    #[tokio::test]
    async fn test_disabled_does_not_wait() {
        let mut out = Vec::new();
        Reveal::disabled()
            .play(&["only".to_string()], &mut out)
            .await
            .unwrap();
        assert_eq!(out, b"only\n");
    }
}
