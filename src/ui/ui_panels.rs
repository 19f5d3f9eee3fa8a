use eframe::egui::{ComboBox, Slider, Ui};
use strum::IntoEnumIterator;

use crate::config::MISSION;
use crate::domain::Shielding;
use crate::ui::config::UI_TEXT;
use crate::ui::styles::UiStyleExt;
use crate::ui::utils::section_heading;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Trait for UI panels that can be rendered
pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

/// Panel for the operator's mission inputs
pub struct MissionPanel {
    duration_days: u32,
    shielding: Shielding,
}

impl MissionPanel {
    pub fn new(duration_days: u32, shielding: Shielding) -> Self {
        Self {
            duration_days,
            shielding,
        }
    }

    fn render_duration_slider(&mut self, ui: &mut Ui) -> Option<u32> {
        ui.add_space(5.0);
        ui.label_subheader(UI_TEXT.duration_label);

        let response = ui.add(
            Slider::new(&mut self.duration_days, MISSION.min_days..=MISSION.max_days)
                .integer()
                .suffix(" days"),
        );

        response.changed().then_some(self.duration_days)
    }

    fn render_shielding_selector(&mut self, ui: &mut Ui) -> Option<Shielding> {
        let mut changed = None;

        ui.add_space(5.0);
        ui.label_subheader(UI_TEXT.shielding_label);
        ComboBox::from_id_salt("shielding_material")
            .selected_text(self.shielding.to_string())
            .show_ui(ui, |ui| {
                for material in Shielding::iter() {
                    if ui
                        .selectable_value(&mut self.shielding, material, material.to_string())
                        .clicked()
                    {
                        changed = Some(material);
                    }
                }
            });

        changed
    }
}

#[derive(Debug, PartialEq)]
pub enum MissionEvent {
    DurationDays(u32),
    Shielding(Shielding),
}

impl Panel for MissionPanel {
    type Event = MissionEvent;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        section_heading(ui, UI_TEXT.mission_heading);

        if let Some(days) = self.render_duration_slider(ui) {
            events.push(MissionEvent::DurationDays(days));
        }
        if let Some(material) = self.render_shielding_selector(ui) {
            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_ui_interactions {
                log::info!("Shielding selected: {}", material);
            }
            events.push(MissionEvent::Shielding(material));
        }

        ui.add_space(20.0);
        events
    }
}

/// Panel with the manual refresh controls
pub struct DataSourcePanel {
    is_fetching: bool,
}

impl DataSourcePanel {
    pub fn new(is_fetching: bool) -> Self {
        Self { is_fetching }
    }
}

#[derive(Debug, PartialEq)]
pub enum DataSourceEvent {
    Refresh { force: bool },
}

impl Panel for DataSourcePanel {
    type Event = DataSourceEvent;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        section_heading(ui, UI_TEXT.data_source_heading);

        ui.add_enabled_ui(!self.is_fetching, |ui| {
            ui.horizontal(|ui| {
                if ui
                    .button(UI_TEXT.refresh_button)
                    .on_hover_text(UI_TEXT.refresh_tooltip)
                    .clicked()
                {
                    events.push(DataSourceEvent::Refresh { force: false });
                }
                if ui
                    .small_button(UI_TEXT.force_refresh_button)
                    .on_hover_text(UI_TEXT.force_refresh_tooltip)
                    .clicked()
                {
                    events.push(DataSourceEvent::Refresh { force: true });
                }
            });
        });

        if self.is_fetching {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label_subdued(UI_TEXT.fetching_label);
            });
        }

        ui.add_space(10.0);
        events
    }
}
