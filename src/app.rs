//! Standalone runner: host a single diagram in its own eframe window.
//!
//! Embedding applications normally call [`WellSpacingDiagram::ui`] from
//! their own update loop; this module is the shortcut for demos and
//! by-hand testing.

use eframe::egui;

use crate::diagram::WellSpacingDiagram;

/// eframe wrapper around one diagram filling the central panel.
pub struct DiagramApp {
    diagram: WellSpacingDiagram,
}

impl DiagramApp {
    pub fn new(diagram: WellSpacingDiagram) -> Self {
        Self { diagram }
    }

    pub fn diagram_mut(&mut self) -> &mut WellSpacingDiagram {
        &mut self.diagram
    }
}

impl eframe::App for DiagramApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.diagram.ui(ui);
        });
    }
}

/// Open a native window with the given diagram and block until it closes.
pub fn run_diagram(title: &str, diagram: WellSpacingDiagram) -> eframe::Result<()> {
    let mut opts = eframe::NativeOptions::default();
    if opts.viewport.inner_size.is_none() {
        opts.viewport = opts.viewport.clone().with_inner_size(egui::vec2(1000.0, 700.0));
    }

    eframe::run_native(
        title,
        opts,
        Box::new(|cc| {
            // Install the Phosphor icon font before the first frame; the
            // toolbar's measuring stick toggles use it.
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(DiagramApp::new(diagram)))
        }),
    )
}
