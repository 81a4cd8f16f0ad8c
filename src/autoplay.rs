use crate::constants::AUTO_PLAY_POLL_MS;
use crate::dom::Timer;
use crate::state::Shared;

/// Interval that lets the engine's auto-play schedule decide when to step.
pub fn start_autoplay(shared: &Shared) -> anyhow::Result<Option<Timer>> {
    let enabled = shared
        .read(|s| s.autoplay().is_enabled())
        .unwrap_or(false);
    if !enabled {
        return Ok(None);
    }
    let tick_shared = shared.clone();
    let mut timer = Timer::new(move || {
        if tick_shared
            .with_slider(|s| s.poll_autoplay(instant::now()))
            .unwrap_or(false)
        {
            log::debug!("[web] auto-play step");
        }
    });
    timer.repeat(AUTO_PLAY_POLL_MS)?;
    Ok(Some(timer))
}
