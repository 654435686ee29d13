/// Log a debug message if debug mode is enabled
pub fn log(debug_mode: bool, message: String) {
    if debug_mode {
        println!("[DEBUG] {}", message);
    }
}
