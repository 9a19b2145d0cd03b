//! Page overlay: title, depth-zone markers and a small readout.
//!
//! The overlay behaves like page content: it is laid out on a virtual page
//! `scroll_extent + viewport height` tall and moves up as the offset grows.
//! Zones are labels only; nothing in the animation reads them.

/// Ocean light zones, shallowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepthZone {
    Sunlight,
    Twilight,
    Midnight,
    Abyssal,
}

impl DepthZone {
    pub const ALL: [DepthZone; 4] = [
        DepthZone::Sunlight,
        DepthZone::Twilight,
        DepthZone::Midnight,
        DepthZone::Abyssal,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DepthZone::Sunlight => "Sunlight Zone",
            DepthZone::Twilight => "Twilight Zone",
            DepthZone::Midnight => "Midnight Zone",
            DepthZone::Abyssal => "Abyssal Zone",
        }
    }

    pub fn range_text(self) -> &'static str {
        match self {
            DepthZone::Sunlight => "0-200m deep",
            DepthZone::Twilight => "200-1000m deep",
            DepthZone::Midnight => "1000-4000m deep",
            DepthZone::Abyssal => "4000+ meters deep",
        }
    }

    /// Where the zone's marker sits, as a fraction of the page height.
    pub fn marker_fraction(self) -> f32 {
        match self {
            DepthZone::Sunlight => 0.25,
            DepthZone::Twilight => 0.5,
            DepthZone::Midnight => 0.75,
            DepthZone::Abyssal => 0.9,
        }
    }

    /// Deepest zone whose marker lies at or above `fraction` of the page.
    pub fn at_page_fraction(fraction: f32) -> DepthZone {
        DepthZone::ALL
            .iter()
            .rev()
            .copied()
            .find(|zone| fraction >= zone.marker_fraction())
            .unwrap_or(DepthZone::Sunlight)
    }
}

/// What the overlay needs from the current frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HudState {
    pub scroll_offset: f32,
    pub scroll_extent: f32,
    /// Logical points
    pub viewport_height: f32,
    pub depth: f32,
    pub fps: f32,
}

impl HudState {
    pub fn page_height(&self) -> f32 {
        self.scroll_extent + self.viewport_height
    }

    /// Page y of a zone's marker.
    pub fn marker_page_y(&self, zone: DepthZone) -> f32 {
        zone.marker_fraction() * self.page_height()
    }

    /// Fraction of the page at the middle of the viewport. A marker counts
    /// as reached once it has scrolled up to the middle of the screen.
    pub fn focus_fraction(&self) -> f32 {
        let page = self.page_height();
        if page <= 0.0 {
            return 0.0;
        }
        ((self.scroll_offset + self.viewport_height * 0.5) / page).clamp(0.0, 1.0)
    }

    /// On-screen y of a point `page_y` down the page.
    pub fn screen_y(&self, page_y: f32) -> f32 {
        page_y - self.scroll_offset
    }

    pub fn current_zone(&self) -> DepthZone {
        DepthZone::at_page_fraction(self.focus_fraction())
    }
}

const HEADER_TOP: f32 = 40.0;
const ACCENT: egui::Color32 = egui::Color32::from_rgb(74, 158, 255);

pub fn draw(ctx: &egui::Context, state: &HudState) {
    let header_y = state.screen_y(HEADER_TOP);
    if header_y > -120.0 {
        egui::Area::new(egui::Id::new("ocean_header"))
            .fixed_pos(egui::pos2(40.0, header_y))
            .interactable(false)
            .show(ctx, |ui| {
                ui.label(
                    egui::RichText::new("Deep Ocean Explorer")
                        .size(40.0)
                        .strong()
                        .color(egui::Color32::WHITE),
                );
                ui.label(
                    egui::RichText::new("Scroll to dive deeper into the ocean")
                        .size(16.0)
                        .color(egui::Color32::LIGHT_GRAY),
                );
            });
    }

    let current = state.current_zone();
    for zone in DepthZone::ALL {
        let y = state.screen_y(state.marker_page_y(zone));
        if y < -80.0 || y > state.viewport_height + 20.0 {
            continue;
        }
        let color = if zone == current {
            ACCENT
        } else {
            egui::Color32::from_white_alpha(200)
        };
        egui::Area::new(egui::Id::new(("zone_marker", zone.label())))
            .fixed_pos(egui::pos2(40.0, y))
            .interactable(false)
            .show(ctx, |ui| {
                ui.label(egui::RichText::new(zone.label()).size(22.0).color(color));
                ui.label(
                    egui::RichText::new(zone.range_text())
                        .size(13.0)
                        .color(egui::Color32::LIGHT_GRAY),
                );
            });
    }

    egui::Area::new(egui::Id::new("depth_readout"))
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-16.0, 16.0))
        .interactable(false)
        .show(ctx, |ui| {
            ui.label(
                egui::RichText::new(format!("{:.1}", state.depth))
                    .size(32.0)
                    .color(ACCENT),
            );
            ui.label(egui::RichText::new("DEPTH").size(12.0).color(egui::Color32::GRAY));
            ui.label(
                egui::RichText::new(format!("{:.0} FPS", state.fps))
                    .size(12.0)
                    .color(egui::Color32::GRAY),
            );
        });
}
