//! Splash screen played before the list mounts

use std::io::Write;
use std::time::Duration;

const BAR_WIDTH: usize = 30;
const TICKS: u32 = 20;

/// One frame of the splash progress bar; `progress` is clamped to `[0, 1]`
pub fn splash_frame(progress: f64) -> String {
    let progress = progress.clamp(0.0, 1.0);
    let filled = (progress * BAR_WIDTH as f64).round() as usize;
    format!(
        "User Directory  [{}{}] {:>3}%",
        "█".repeat(filled),
        " ".repeat(BAR_WIDTH - filled),
        (progress * 100.0).round() as u32
    )
}

/// Animate the progress bar over `duration`, redrawing in place
pub async fn play_splash<W: Write>(out: &mut W, duration: Duration) -> std::io::Result<()> {
    if duration.is_zero() {
        return Ok(());
    }

    let mut ticker = tokio::time::interval((duration / TICKS).max(Duration::from_millis(1)));
    for tick in 0..=TICKS {
        ticker.tick().await;
        write!(out, "\r{}", splash_frame(f64::from(tick) / f64::from(TICKS)))?;
        out.flush()?;
    }
    writeln!(out)?;
    Ok(())
}
