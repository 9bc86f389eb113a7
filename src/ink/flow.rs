//! Recognition-to-text handoff: ask the session for its best guess, morph the
//! ink toward where that text will sit, then hand the text back.

use crate::{
    animation::clock::Clock,
    coordinator::AnimationCoordinator,
    foundation::error::MorphResult,
    ink::host::AnimationDataSource,
    ink::recognizer::DrawingSession,
    layout::metrics::GlyphMeasure,
    render::surface::Surface,
};

/// Resolve the session's drawing into text, animating on `surface` when
/// there is something to show.
///
/// Returns the first prediction's text, or `""` when the recognizer had none.
/// On success the surface is left cleared and fully opaque, ready for the next
/// capture; the session itself is left untouched.
#[tracing::instrument(skip_all)]
pub fn recognize_and_animate<M, C>(
    session: &mut dyn DrawingSession,
    host: &mut dyn AnimationDataSource,
    coordinator: &mut AnimationCoordinator<M>,
    surface: &mut Surface,
    text_context: &str,
    clock: &C,
) -> MorphResult<String>
where
    M: GlyphMeasure,
    C: Clock + ?Sized,
{
    let Some(best) = session.get_prediction()?.into_iter().next() else {
        tracing::debug!("no prediction");
        return Ok(String::new());
    };

    let data = host.request_animation_data();
    let stats = coordinator.run(clock, text_context, &best, session.drawing(), surface, &data)?;
    tracing::debug!(
        text = %best.text,
        frames = stats.frames,
        draws = stats.draws,
        "recognized text animated"
    );

    surface.clear();
    surface.set_opacity(1.0);
    Ok(best.text)
}

#[cfg(test)]
#[path = "../../tests/unit/ink/flow.rs"]
mod tests;
