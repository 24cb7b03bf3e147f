use kanban_board_ui::{logging, App, BoardConfig};

fn main() {
    console_error_panic_hook::set_once();
    logging::init(&BoardConfig::from_build_env().log_level);
    leptos::mount::mount_to_body(App);
}
