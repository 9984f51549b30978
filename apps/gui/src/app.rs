use crate::controller::Controller;
use crate::state::AppState;
use crate::widgets;
use eframe::egui;
use judging_core::{MAX_TEAMS, Rubric, SessionStore, TeamId};

pub struct JudgeApp {
    store: SessionStore,
    state: AppState,
}

impl JudgeApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            store: SessionStore::new(Rubric::hackathon()),
            state: AppState::default(),
        }
    }

    fn render_roster(&mut self, ui: &mut egui::Ui) {
        ui.add_space(10.0);
        ui.horizontal(|ui| {
            ui.heading("Teams");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let at_capacity = self.store.teams().len() >= MAX_TEAMS;
                if ui
                    .add_enabled(!at_capacity, egui::Button::new("➕ Add Team"))
                    .clicked()
                {
                    Controller::add_team(&mut self.store);
                }
            });
        });
        ui.separator();

        let selected = self.store.selected_id();
        let entries: Vec<(TeamId, String)> = self
            .store
            .teams()
            .iter()
            .map(|team| (team.id, team.name.clone()))
            .collect();

        for (id, name) in entries {
            let total = self.store.total_score(id);
            let is_selected = selected == Some(id);

            ui.add_space(4.0);
            ui.group(|ui| {
                ui.set_min_width(ui.available_width());
                ui.horizontal(|ui| {
                    let mut edited = name.clone();
                    let resp = ui.add(
                        egui::TextEdit::singleline(&mut edited)
                            .hint_text("Enter team name")
                            .desired_width(130.0),
                    );
                    if resp.changed() {
                        Controller::rename_team(&mut self.store, id, &edited);
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(egui::RichText::new(total.to_string()).strong());
                    });
                });
                ui.horizontal(|ui| {
                    if ui.selectable_label(is_selected, "⭐ Judge").clicked() {
                        Controller::select_team(&mut self.store, id);
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("🗑 Remove").clicked() {
                            Controller::remove_team(&mut self.store, id);
                        }
                    });
                });
            });
        }
    }

    fn render_detail(&mut self, ui: &mut egui::Ui) {
        let Some(team) = self.store.selected_team() else {
            ui.add_space(20.0);
            ui.weak("Add a team to start scoring.");
            return;
        };
        let team_id = team.id;
        let team_name = team.name.clone();
        let criteria = self.store.rubric().criteria().to_vec();
        let grand_max = self.store.rubric().grand_max();
        let total = self.store.total_score(team_id);

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.heading(format!("Project Score: {team_name}"));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(egui::RichText::new(format!("/ {grand_max}")).size(16.0));
                ui.label(egui::RichText::new(total.to_string()).strong().size(26.0));
                ui.label(egui::RichText::new("🏆").size(22.0));
            });
        });

        for criterion in &criteria {
            let subtotal = self.store.criterion_score(team_id, &criterion.name);
            ui.add_space(12.0);
            ui.label(
                egui::RichText::new(format!(
                    "{} ({} / {} points)",
                    criterion.name, subtotal, criterion.max_points
                ))
                .strong()
                .size(15.0),
            );
            ui.separator();

            for subcriterion in &criterion.subcriteria {
                let value = self
                    .store
                    .score(team_id, &criterion.name, &subcriterion.name);
                let output =
                    widgets::score_slider(ui, &subcriterion.name, subcriterion.max_points, value);
                if output.drag_started {
                    Controller::begin_drag(&mut self.state);
                }
                if let Some(new_value) = output.value {
                    Controller::set_score(
                        &mut self.store,
                        team_id,
                        &criterion.name,
                        &subcriterion.name,
                        new_value,
                    );
                }
                if output.drag_stopped {
                    Controller::end_drag(&mut self.state);
                }
                ui.add_space(6.0);
            }
        }
    }
}

impl eframe::App for JudgeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(6.0);
                ui.heading("Metaverse Pharmacy Hackathon");
                ui.label("Judging Panel");
                ui.add_space(6.0);
            });
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.small(format!("Teams: {}/{}", self.store.teams().len(), MAX_TEAMS));
                ui.separator();
                ui.small(format!(
                    "Input: {:?}",
                    self.state.slider_machine.current_state()
                ));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.small("© 2024 Metaverse Pharmacy Hackathon");
                });
            });
        });

        egui::SidePanel::left("roster_panel")
            .resizable(false)
            .default_width(240.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    self.render_roster(ui);
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.render_detail(ui);
            });
        });
    }
}
