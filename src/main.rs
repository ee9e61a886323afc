use clap::Parser;
use macroquad::prelude::*;

use cellular_automata::{
    Automaton, GameState, WolframCode,
    application::GridLayout,
    config::Cli,
    domain::presets,
    input::{self, KeyRepeat},
    rendering,
    ui::{
        self, AUTOMATON_DROPDOWN, Dropdown, ELEMENTARY_RULES, GRID_SIZES, PATTERN_DROPDOWN,
        RULE_DROPDOWN, SIZE_DROPDOWN,
    },
};

fn window_conf() -> Conf {
    Conf {
        window_title: "Cellular Automata".to_owned(),
        window_width: 1000,
        window_height: 800,
        window_resizable: true,
        ..Default::default()
    }
}

/// Automaton for a dropdown index, carrying the selected Wolfram code
fn automaton_at(index: usize, rule: WolframCode) -> Automaton {
    match Automaton::all().get(index).copied().unwrap_or_default() {
        Automaton::Elementary(_) => Automaton::Elementary(rule),
        other => other,
    }
}

fn pattern_names(automaton: Automaton) -> Vec<String> {
    presets::for_automaton(automaton)
        .iter()
        .map(|p| p.name.to_owned())
        .collect()
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let config = match Cli::parse().launch_config().and_then(|c| c.validate()) {
        Ok(config) => config,
        Err(err) => {
            log::error!("{err}");
            std::process::exit(2);
        }
    };

    let mut state = match GameState::new(config) {
        Ok(state) => state,
        Err(err) => {
            log::error!("{err}");
            std::process::exit(2);
        }
    };

    log::info!("Controls:");
    for line in ui::HELP_LINES {
        log::info!("  {line}");
    }

    let px = ui::panel_x();
    let automata = Automaton::all();
    let mut automaton_dropdown = Dropdown::new(
        px,
        ui::dropdown_y(AUTOMATON_DROPDOWN),
        ui::PANEL_WIDTH,
        "Automaton",
        automata.iter().map(|a| a.name().to_owned()).collect(),
    );
    automaton_dropdown.set_selected(
        automata
            .iter()
            .position(|a| a.slug() == config.automaton.slug())
            .unwrap_or(0),
    );

    let mut size_dropdown = Dropdown::new(
        px,
        ui::dropdown_y(SIZE_DROPDOWN),
        ui::PANEL_WIDTH,
        "Size",
        GRID_SIZES.iter().map(|(_, name)| name.to_string()).collect(),
    );
    size_dropdown.set_selected(
        GRID_SIZES
            .iter()
            .position(|&(size, _)| size == config.cols)
            .unwrap_or(2),
    );

    let mut rules: Vec<i64> = ELEMENTARY_RULES.to_vec();
    let initial_rule = config.automaton.wolfram_code().unwrap_or_default();
    if !rules.contains(&i64::from(initial_rule.value())) {
        rules.insert(0, i64::from(initial_rule.value()));
    }
    let mut rule_dropdown = Dropdown::new(
        px,
        ui::dropdown_y(RULE_DROPDOWN),
        ui::PANEL_WIDTH,
        "Elementary rule",
        rules.iter().map(|r| format!("Rule {r}")).collect(),
    );
    rule_dropdown.set_selected(
        rules
            .iter()
            .position(|&r| r == i64::from(initial_rule.value()))
            .unwrap_or(0),
    );

    let pattern_dropdown = Dropdown::new(
        px,
        ui::dropdown_y(PATTERN_DROPDOWN),
        ui::PANEL_WIDTH,
        "Pattern",
        pattern_names(config.automaton),
    );

    let mut dropdowns = [automaton_dropdown, size_dropdown, rule_dropdown, pattern_dropdown];
    let mut space_repeat = KeyRepeat::default();

    loop {
        let mouse_pos = mouse_position();

        let px = ui::panel_x();
        for (slot, dropdown) in dropdowns.iter_mut().enumerate() {
            dropdown.set_position(px, ui::dropdown_y(slot));
        }
        let buttons = ui::create_buttons();

        let menu_was_open = dropdowns.iter().any(Dropdown::is_open);
        let picked = if is_mouse_button_pressed(MouseButton::Left) {
            ui::click_dropdowns(&mut dropdowns, mouse_pos)
        } else {
            None
        };

        match picked {
            Some((PATTERN_DROPDOWN, index)) => state = state.arm_pattern(index),
            Some(_) => {
                let rule = WolframCode::new(rules[dropdowns[RULE_DROPDOWN].selected()]).unwrap_or_default();
                let automaton = automaton_at(dropdowns[AUTOMATON_DROPDOWN].selected(), rule);
                let size = GRID_SIZES[dropdowns[SIZE_DROPDOWN].selected()].0;
                let (_, cols) = state.session.dimensions();
                if automaton != state.session.automaton() || size != cols {
                    match state.rebuild(automaton, size, size) {
                        Ok(()) => dropdowns[PATTERN_DROPDOWN].set_items(pattern_names(automaton)),
                        Err(err) => log::warn!("Could not switch automaton: {err}"),
                    }
                }
            }
            None => {}
        }

        // clicks that land on a menu do not fall through to the buttons or grid
        let menu_active = menu_was_open || dropdowns.iter().any(Dropdown::is_open);
        let (rows, cols) = state.session.dimensions();
        let layout = GridLayout::fit(0.0, 0.0, ui::grid_area_width(), ui::grid_area_height(), rows, cols);

        if !menu_active {
            state = input::process_button_clicks(state, &buttons, mouse_pos);
            state = input::handle_grid_mouse(state, &layout, mouse_pos);
        }
        state = input::process_keyboard_input(state, &mut space_repeat);
        state = state.tick(get_frame_time());

        clear_background(BLACK);
        let hovered = layout.screen_to_cell(mouse_pos.0, mouse_pos.1);
        rendering::draw_grid(&state, &layout, hovered);
        rendering::draw_pattern_preview(&state, &layout, hovered);
        if state.help_visible {
            rendering::draw_help(ui::grid_area_width());
        }
        rendering::draw_controls(&state, &buttons, &dropdowns, mouse_pos);

        next_frame().await;
    }
}
