use eframe::egui;

/// What one `score_slider` render reported back to the caller.
pub struct SliderOutput {
    /// New value, only when the user changed the control this frame. Always
    /// within `[0, max_points]`.
    pub value: Option<u32>,
    pub drag_started: bool,
    pub drag_stopped: bool,
}

/// Bounded integer slider for one rubric cell. Fully controlled: the caller
/// owns the value, the widget renders it and emits edits without keeping any
/// state of its own, so external updates are visible on the next frame.
pub fn score_slider(ui: &mut egui::Ui, name: &str, max_points: u32, value: u32) -> SliderOutput {
    let mut current = value.min(max_points);

    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(name).size(12.0));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                egui::RichText::new(format!("{current} / {max_points}"))
                    .strong()
                    .size(12.0),
            );
        });
    });

    let response = ui
        .scope(|ui| {
            ui.spacing_mut().slider_width = (ui.available_width() - 16.0).max(120.0);
            ui.add(egui::Slider::new(&mut current, 0..=max_points).show_value(false))
        })
        .inner;

    SliderOutput {
        value: (current != value).then_some(current),
        drag_started: response.drag_started(),
        drag_stopped: response.drag_stopped(),
    }
}
