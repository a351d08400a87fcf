pub fn screen_title() -> &'static str {
    "Home"
}
