const COMMANDS: &[&str] = &["pick_images", "pick_image"];

fn main() {
    tauri_plugin::Builder::new(COMMANDS).build();
}
