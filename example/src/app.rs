use std::fmt;

use duoslide_components::{
    numeric::NumericDomain,
    range_slider::{
        range_slider, range_slider_angle, range_slider_f32_vec, range_slider_i32,
        range_slider_vertical_i32,
    },
    searchable_select::{SearchableSelectArgs, searchable_select},
};
use duoslide_ui::{GuiContext, Size};

pub const MAPS: [&str; 6] = ["Arena", "Canyon", "Harbor", "Quarry", "Tundra", "Yard"];

/// Values edited by the demo window.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub latency: (f32, f32),
    pub frames: (i32, i32),
    pub tint_lo: [f32; 3],
    pub tint_hi: [f32; 3],
    pub arc: (f32, f32),
    pub map: Option<usize>,
    pub volume: (i32, i32),
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            latency: (10.0, 90.0),
            frames: (2, 8),
            tint_lo: [0.0; 3],
            tint_hi: [1.0; 3],
            arc: (0.0, std::f32::consts::FRAC_PI_2),
            map: None,
            volume: (20, 80),
        }
    }
}

/// Builds one frame of the demo. Returns whether any value changed.
pub fn app(ctx: &mut GuiContext, state: &mut AppState) -> bool {
    let latency = NumericDomain::new(0.0f32, 250.0)
        .with_power(2.0)
        .with_format("%.1f ms");
    let mut changed = range_slider(
        ctx,
        "Latency",
        &latency,
        &mut state.latency.0,
        &mut state.latency.1,
    );
    changed |= range_slider_i32(
        ctx,
        "Frames",
        &mut state.frames.0,
        &mut state.frames.1,
        0,
        10,
    );
    changed |= range_slider_f32_vec(
        ctx,
        "Tint",
        &mut state.tint_lo,
        &mut state.tint_hi,
        0.0,
        1.0,
    );
    changed |= range_slider_angle(ctx, "Arc", &mut state.arc.0, &mut state.arc.1, -180.0, 180.0);
    changed |= searchable_select(
        ctx,
        "Map",
        &mut state.map,
        &MAPS,
        &SearchableSelectArgs::default()
            .default_preview_text("Pick a map")
            .max_visible_items(4),
    );
    changed |= range_slider_vertical_i32(
        ctx,
        "##volume",
        Size::new(19.0, 120.0),
        &mut state.volume.0,
        &mut state.volume.1,
        0,
        100,
    );
    changed
}

impl fmt::Display for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "latency: {:.1} ms .. {:.1} ms", self.latency.0, self.latency.1)?;
        writeln!(f, "frames:  {} .. {}", self.frames.0, self.frames.1)?;
        writeln!(f, "tint:    {:?} .. {:?}", self.tint_lo, self.tint_hi)?;
        writeln!(
            f,
            "arc:     {:.0} deg .. {:.0} deg",
            self.arc.0.to_degrees(),
            self.arc.1.to_degrees()
        )?;
        writeln!(
            f,
            "map:     {}",
            self.map.and_then(|index| MAPS.get(index)).unwrap_or(&"-")
        )?;
        write!(f, "volume:  {} .. {}", self.volume.0, self.volume.1)
    }
}
