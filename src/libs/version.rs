use log::info;
use std::fs;

pub fn get_app_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

pub fn get_build_version() -> String {
    let filepath = "/etc/recommender_build";
    match fs::read_to_string(filepath) {
        Ok(val) => val.trim().to_string(),
        Err(_e) => "__NO_VERSION_AVAILABLE__".to_string(),
    }
}

pub fn print_version() {
    let app_version = get_app_version();
    let build_version = get_build_version();

    info!("App: {app_version}");
    info!("Build: {build_version}");
}
