/// `WL_KB&WL_M`, `KB&M`, ... from the keyboard/mouse field and the box contents.
pub fn keyboard_mouse_token(keyboard_mouse: &str, in_the_box: &str) -> Option<String> {
    let text = format!("{keyboard_mouse} {in_the_box}").to_lowercase();

    let keyboard = if text.contains("wireless keyboard") {
        Some("WL_KB")
    } else if text.contains("keyboard") {
        Some("KB")
    } else {
        None
    };
    let mouse = if text.contains("wireless mouse") {
        Some("WL_M")
    } else if text.contains("mouse") {
        Some("M")
    } else {
        None
    };

    let tags: Vec<&str> = [keyboard, mouse].into_iter().flatten().collect();
    (!tags.is_empty()).then(|| tags.join("&"))
}
