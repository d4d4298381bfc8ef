//! The three-frame icon animation played on each toggle.
//!
//! The first frame is applied immediately; the remaining two are delayed
//! swaps posted to the UI thread. The sequence is fixed and runs to
//! completion; frames from overlapping toggles interleave in post order.

use crate::{IconFrame, TrayCommand};

use std::time::Duration;

use tao::event_loop::EventLoopProxy;
use tokio::task::JoinHandle;
use whilom_core::SleepState;

/// Delay between animation frame swaps.
///
/// Two chained steps at this interval follow the immediate first frame, so a
/// full animation takes 300 ms. Short enough to read as one motion, long
/// enough that all three frames are visible in the menu bar.
pub(crate) const FRAME_STEP: Duration = Duration::from_millis(150);

/// Direction of the toggle animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationDirection {
    /// Waking up: played when sleep gets disabled.
    Forward,
    /// Settling back: played when sleep gets re-enabled.
    Backward,
}

impl AnimationDirection {
    /// The direction played when the system settles into `target`.
    pub fn for_target(target: SleepState) -> Self {
        match target {
            SleepState::Disabled => AnimationDirection::Forward,
            SleepState::Enabled => AnimationDirection::Backward,
        }
    }

    /// The three frames for this direction, in play order.
    pub(crate) fn frames(self) -> [IconFrame; 3] {
        match self {
            AnimationDirection::Forward => [IconFrame::Wake1, IconFrame::Wake2, IconFrame::Wake3],
            AnimationDirection::Backward => [IconFrame::Wake2, IconFrame::Wake1, IconFrame::Off],
        }
    }
}

/// Play an animation by posting frame swaps to the UI thread.
pub(crate) fn play(
    proxy: EventLoopProxy<TrayCommand>,
    direction: AnimationDirection,
) -> JoinHandle<()> {
    play_with(direction, move |frame| {
        let _ = proxy.send_event(TrayCommand::SetFrame(frame));
    })
}

/// Drive the frame schedule through an arbitrary sink.
///
/// Split from [`play`] so tests can observe the sequence without an event
/// loop.
pub(crate) fn play_with<F>(direction: AnimationDirection, mut sink: F) -> JoinHandle<()>
where
    F: FnMut(IconFrame) + Send + 'static,
{
    let frames = direction.frames();

    tokio::spawn(async move {
        sink(frames[0]);

        for frame in frames.into_iter().skip(1) {
            tokio::time::sleep(FRAME_STEP).await;
            sink(frame);
        }
    })
}
