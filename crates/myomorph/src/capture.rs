//! Snapshot and animation capture
//!
//! - Snapshots tile every organism of a population into a grid and save a PNG
//! - Animations step the physics extension inside the active window and save a GIF

use std::path::Path;

use anyhow::{Context, Result};
use glam::Vec2;
use myomorph_creature::{ActiveWindow, OrganismBody, OrganismRenderData, Population};

use crate::config::RenderConfig;
use crate::headless::{GifCapture, PixelRenderer};

/// Organisms placed into grid cells, plus the canvas size that holds them
pub struct GridLayout {
    pub placed: Vec<(OrganismRenderData, Vec2)>,
    pub width: usize,
    pub height: usize,
}

/// Axis-aligned bounds of a drawing, including anchor radii
pub fn bounds(data: &OrganismRenderData) -> Option<(Vec2, Vec2)> {
    let mut shapes = data
        .anchors
        .iter()
        .map(|a| (a.position - Vec2::splat(a.radius), a.position + Vec2::splat(a.radius)))
        .chain(
            data.muscles
                .iter()
                .map(|m| (m.from.min(m.to), m.from.max(m.to))),
        );

    let first = shapes.next()?;
    Some(shapes.fold(first, |(min, max), (lo, hi)| (min.min(lo), max.max(hi))))
}

/// Tile organisms row by row into equally sized cells
pub fn layout_grid(population: &Population, margin: u32) -> GridLayout {
    layout_drawings(
        population.iter().map(OrganismRenderData::from_organism),
        margin,
    )
}

/// Tile drawings row by row; drawings with nothing to draw are skipped
pub fn layout_drawings(
    sources: impl IntoIterator<Item = OrganismRenderData>,
    margin: u32,
) -> GridLayout {
    let mut drawings: Vec<(OrganismRenderData, (Vec2, Vec2))> = Vec::new();
    for (i, data) in sources.into_iter().enumerate() {
        match bounds(&data) {
            Some(b) => drawings.push((data, b)),
            None => log::warn!("Drawing {} has no anchors or muscles, skipping it", i + 1),
        }
    }

    let margin = margin as f32;
    let cell = drawings
        .iter()
        .map(|(_, (min, max))| *max - *min)
        .fold(Vec2::ONE, Vec2::max)
        + Vec2::splat(margin);

    let columns = (drawings.len() as f32).sqrt().ceil().max(1.0) as usize;
    let rows = drawings.len().div_ceil(columns).max(1);

    let placed = drawings
        .into_iter()
        .enumerate()
        .map(|(i, (data, (min, _)))| {
            let origin = Vec2::new((i % columns) as f32, (i / columns) as f32) * cell;
            (data, origin + Vec2::splat(margin / 2.0) - min)
        })
        .collect();

    GridLayout {
        placed,
        width: (cell.x * columns as f32).ceil() as usize,
        height: (cell.y * rows as f32).ceil() as usize,
    }
}

/// Render every organism of a population into one PNG
///
/// Returns the image dimensions.
pub fn capture_snapshot(
    population: &Population,
    margin: u32,
    output_path: impl AsRef<Path>,
) -> Result<(usize, usize)> {
    if population.is_empty() {
        anyhow::bail!("Population is empty, nothing to render");
    }

    let layout = layout_grid(population, margin);
    log::info!(
        "Rendering {} organisms into a {}x{} snapshot",
        layout.placed.len(),
        layout.width,
        layout.height
    );

    let mut renderer = PixelRenderer::new(layout.width, layout.height);
    renderer.render(&layout.placed);

    log::info!("Saving to {:?}...", output_path.as_ref());
    renderer.save_png(output_path)?;
    Ok((layout.width, layout.height))
}

/// Run the physics extension for `render.frames` steps and save a GIF
///
/// Returns the number of frames written.
pub fn capture_animation(
    population: &Population,
    window: ActiveWindow,
    render: &RenderConfig,
    output_path: impl AsRef<Path>,
) -> Result<usize> {
    if render.frames == 0 {
        anyhow::bail!("Animation needs at least one frame");
    }

    let width = u16::try_from(window.width as u32).context("Window width exceeds GIF limits")?;
    let height =
        u16::try_from(window.height as u32).context("Window height exceeds GIF limits")?;

    let mut bodies: Vec<OrganismBody> = population
        .iter()
        .map(|organism| OrganismBody::new(organism, window))
        .collect();

    log::info!(
        "Simulating {} organisms for {} frames in a {}x{} window",
        bodies.len(),
        render.frames,
        width,
        height
    );

    let mut renderer = PixelRenderer::new(width as usize, height as usize);
    let mut capture = GifCapture::new(width, height, render.fps);

    for _ in 0..render.frames {
        let frame: Vec<(OrganismRenderData, Vec2)> = population
            .iter()
            .zip(&bodies)
            .map(|(organism, body)| (OrganismRenderData::from_body(organism, body), Vec2::ZERO))
            .collect();
        renderer.render(&frame);
        capture.capture_frame(&renderer)?;

        for body in &mut bodies {
            body.step();
        }
    }

    for (i, body) in bodies.iter().enumerate() {
        if let Some(centroid) = body.centroid() {
            log::debug!("Organism {} settled around {:?}", i + 1, centroid);
        }
    }

    capture.save(output_path)?;
    Ok(capture.frame_count())
}
